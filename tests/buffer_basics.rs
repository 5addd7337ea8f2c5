use coloring_book::{Color, EditorError, PixelBuffer};

#[test]
fn test_new_buffer_is_white() {
    let buffer = PixelBuffer::new(4, 3);
    assert_eq!(buffer.width(), 4);
    assert_eq!(buffer.height(), 3);
    assert_eq!(buffer.pixels().len(), 4 * 3 * 4);
    assert!(buffer.pixels().iter().all(|&b| b == 255));
}

#[test]
fn test_get_set_roundtrip() {
    let mut buffer = PixelBuffer::new(8, 8);
    let teal = Color::opaque(0, 128, 128);
    buffer.set(3, 5, teal).unwrap();
    assert_eq!(buffer.get(3, 5).unwrap(), teal);
    assert_eq!(buffer.get(3, 4).unwrap(), Color::WHITE);
}

#[test]
fn test_out_of_bounds_access_fails() {
    let mut buffer = PixelBuffer::new(8, 8);
    for (x, y) in [(-1, 0), (0, -1), (8, 0), (0, 8), (100, 100)] {
        assert!(matches!(
            buffer.get(x, y),
            Err(EditorError::OutOfBounds { .. })
        ));
        assert!(matches!(
            buffer.set(x, y, Color::BLACK),
            Err(EditorError::OutOfBounds { .. })
        ));
    }
}

#[test]
fn test_clear_fills_every_pixel() {
    let mut buffer = PixelBuffer::new(5, 5);
    let orange = Color::opaque(255, 165, 0);
    buffer.clear(orange);
    for y in 0..5 {
        for x in 0..5 {
            assert_eq!(buffer.get(x, y).unwrap(), orange);
        }
    }
}

#[test]
fn test_version_tracks_mutation() {
    let mut buffer = PixelBuffer::new(4, 4);
    let before = buffer.version();
    buffer.set(0, 0, Color::BLACK).unwrap();
    assert!(buffer.version() > before);

    let unchanged = buffer.version();
    let _ = buffer.get(0, 0).unwrap();
    assert_eq!(buffer.version(), unchanged);
}

#[test]
fn test_hex_expansion() {
    assert_eq!(Color::from_hex("#fff").unwrap(), Color::new(255, 255, 255, 255));
    assert_eq!(Color::from_hex("#336699").unwrap(), Color::new(51, 102, 153, 255));
    assert_eq!(Color::from_hex("#FF6B6B").unwrap(), Color::opaque(0xff, 0x6b, 0x6b));
    assert_eq!(Color::from_hex("#a3f").unwrap(), Color::opaque(0xaa, 0x33, 0xff));
}

#[test]
fn test_malformed_hex_is_rejected() {
    for bad in ["", "#", "fff", "#ff", "#ffff", "#fffff", "#1234567", "#zzz", "#33669g"] {
        assert!(
            matches!(Color::from_hex(bad), Err(EditorError::InvalidColor(_))),
            "expected {bad:?} to be rejected"
        );
    }
}

#[test]
fn test_hex_roundtrip() {
    let color = Color::opaque(0x12, 0xab, 0xef);
    assert_eq!(Color::from_hex(&color.to_hex()).unwrap(), color);
}

#[test]
fn test_export_png_decodes_back() {
    let mut buffer = PixelBuffer::new(6, 4);
    buffer.set(2, 1, Color::opaque(255, 0, 0)).unwrap();

    let png = buffer.export_png().unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.width(), 6);
    assert_eq!(decoded.height(), 4);
    assert_eq!(decoded.get_pixel(2, 1).0, [255, 0, 0, 255]);
    assert_eq!(decoded.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn test_background_scales_to_fit_and_centers() {
    // A solid blue 4x2 source into an 8x8 buffer: scaled to 8x4 and
    // centered vertically, white bands above and below
    let blue = image::Rgba([0u8, 0, 255, 255]);
    let source = image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(4, 2, blue));

    let mut buffer = PixelBuffer::new(8, 8);
    buffer.load_background(&source);

    let blue = Color::opaque(0, 0, 255);
    for x in 0..8 {
        assert_eq!(buffer.get(x, 0).unwrap(), Color::WHITE);
        assert_eq!(buffer.get(x, 7).unwrap(), Color::WHITE);
        // Resampling a constant image stays within a rounding step
        assert!(buffer.get(x, 4).unwrap().within_tolerance(blue, 1));
    }
}

#[test]
fn test_failed_decode_leaves_nothing_behind() {
    let result = coloring_book::loader::decode_background("garbage.png", b"not an image");
    assert!(matches!(result, Err(EditorError::ImageLoad(_))));
}
