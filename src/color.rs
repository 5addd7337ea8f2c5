use serde::{Deserialize, Serialize};

use crate::error::{EditorError, EditorResult};

/// An 8-bit RGBA color, matching the channel layout of the pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::opaque(255, 255, 255);
    pub const BLACK: Color = Color::opaque(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// A fully opaque color (alpha = 255)
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a `#RGB` or `#RRGGBB` hex string into an opaque color.
    ///
    /// The 4-character form duplicates each nibble (`#fff` is white);
    /// the 7-character form parses byte pairs directly. Anything else
    /// is rejected rather than silently defaulted.
    pub fn from_hex(hex: &str) -> EditorResult<Self> {
        let invalid = || EditorError::InvalidColor(hex.to_owned());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.is_ascii() {
            return Err(invalid());
        }

        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                // Each nibble doubled: 0xF -> 0xFF
                let nibble = |s: &str| byte(s).map(|v| v * 17);
                Ok(Self::opaque(
                    nibble(&digits[0..1])?,
                    nibble(&digits[1..2])?,
                    nibble(&digits[2..3])?,
                ))
            }
            6 => Ok(Self::opaque(
                byte(&digits[0..2])?,
                byte(&digits[2..4])?,
                byte(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Format as `#rrggbb` (alpha dropped, mirrors `from_hex`)
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// True when every channel of `other` differs from `self` by at most
    /// `tolerance`. This is the similarity measure used by the flood fill.
    pub fn within_tolerance(self, other: Color, tolerance: u8) -> bool {
        self.r.abs_diff(other.r) <= tolerance
            && self.g.abs_diff(other.g) <= tolerance
            && self.b.abs_diff(other.b) <= tolerance
            && self.a.abs_diff(other.a) <= tolerance
    }
}

impl From<Color> for egui::Color32 {
    fn from(c: Color) -> Self {
        egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
    }
}

impl From<egui::Color32> for Color {
    fn from(c: egui::Color32) -> Self {
        let [r, g, b, a] = c.to_srgba_unmultiplied();
        Self { r, g, b, a }
    }
}
