use coloring_book::fill::{DEFAULT_PIXELS_PER_STEP, DEFAULT_TOLERANCE};
use coloring_book::{Color, EditorError, FillJob, PixelBuffer};

const RED: Color = Color::opaque(255, 0, 0);
const BLUE: Color = Color::opaque(0, 0, 255);

fn run_to_completion(job: &mut FillJob, buffer: &mut PixelBuffer) -> usize {
    let mut advances = 0;
    while !job.advance(buffer) {
        advances += 1;
        assert!(advances <= buffer.pixels().len(), "fill never completed");
    }
    advances + 1
}

#[test]
fn test_full_fill_completes_in_one_advance() {
    // 100 pixels < 450 pixels per step, so one advance must suffice
    let mut buffer = PixelBuffer::new(10, 10);
    let mut job = FillJob::start(
        &buffer,
        0,
        0,
        RED,
        DEFAULT_TOLERANCE,
        DEFAULT_PIXELS_PER_STEP,
    )
    .unwrap();

    assert!(job.advance(&mut buffer));
    assert!(job.is_done());
    assert_eq!(job.pixels_painted(), 100);
    for y in 0..10 {
        for x in 0..10 {
            assert_eq!(buffer.get(x, y).unwrap(), RED);
        }
    }
}

#[test]
fn test_seed_matching_fill_color_is_noop() {
    let mut buffer = PixelBuffer::new(10, 10);
    buffer.clear(RED);
    let snapshot = buffer.pixels().to_vec();

    let mut job = FillJob::start_default(&buffer, 5, 5, RED).unwrap();
    assert!(job.is_done());
    assert!(job.advance(&mut buffer));
    assert_eq!(job.pixels_painted(), 0);
    assert_eq!(buffer.pixels(), snapshot.as_slice());
}

#[test]
fn test_seed_within_bootstrap_threshold_is_noop() {
    // Every channel within < 10 of the fill color counts as a match
    let mut buffer = PixelBuffer::new(4, 4);
    buffer.clear(Color::opaque(250, 5, 9));

    let job = FillJob::start_default(&buffer, 0, 0, RED).unwrap();
    assert!(job.is_done());
}

#[test]
fn test_fill_is_idempotent() {
    let mut buffer = PixelBuffer::new(10, 10);
    let mut job = FillJob::start_default(&buffer, 3, 3, BLUE).unwrap();
    run_to_completion(&mut job, &mut buffer);
    let after_first = buffer.pixels().to_vec();

    // Second fill with the same seed and color is a no-op
    let mut job = FillJob::start_default(&buffer, 3, 3, BLUE).unwrap();
    run_to_completion(&mut job, &mut buffer);
    assert_eq!(job.pixels_painted(), 0);
    assert_eq!(buffer.pixels(), after_first.as_slice());
}

#[test]
fn test_fill_does_not_leak_across_black_line() {
    // Two white halves split by a 1px black vertical line at x = 5;
    // black differs from white by 255 > tolerance 50
    let mut buffer = PixelBuffer::new(10, 10);
    for y in 0..10 {
        buffer.set(5, y, Color::BLACK).unwrap();
    }

    let mut job = FillJob::start(&buffer, 0, 0, BLUE, 50, DEFAULT_PIXELS_PER_STEP).unwrap();
    run_to_completion(&mut job, &mut buffer);

    for y in 0..10 {
        for x in 0..5 {
            assert_eq!(buffer.get(x, y).unwrap(), BLUE, "left half at ({x}, {y})");
        }
        assert_eq!(buffer.get(5, y).unwrap(), Color::BLACK, "barrier at y={y}");
        for x in 6..10 {
            assert_eq!(
                buffer.get(x, y).unwrap(),
                Color::WHITE,
                "right half at ({x}, {y})"
            );
        }
    }
}

#[test]
fn test_fill_respects_tolerance_against_seed_color() {
    // A horizontal gray ramp: column x has value x * 17. Tolerance is
    // always measured against the seed's original color, so the fill
    // from x = 0 must stop at the first column whose value exceeds it.
    for tolerance in [0u8, 16, 50, 200, 255] {
        let mut buffer = PixelBuffer::new(16, 16);
        for y in 0..16 {
            for x in 0..16 {
                let v = (x * 17) as u8;
                buffer.set(x, y, Color::opaque(v, v, v)).unwrap();
            }
        }
        let original = buffer.pixels().to_vec();

        let mut job =
            FillJob::start(&buffer, 0, 0, RED, tolerance, DEFAULT_PIXELS_PER_STEP).unwrap();
        run_to_completion(&mut job, &mut buffer);

        for y in 0..16i32 {
            for x in 0..16i32 {
                let offset = (y as usize * 16 + x as usize) * 4;
                let before = Color::new(
                    original[offset],
                    original[offset + 1],
                    original[offset + 2],
                    original[offset + 3],
                );
                let painted = buffer.get(x, y).unwrap() == RED;
                let qualifies = before.within_tolerance(Color::BLACK, tolerance);
                assert_eq!(
                    painted, qualifies,
                    "tolerance {tolerance}, pixel ({x}, {y})"
                );
            }
        }
    }
}

#[test]
fn test_fill_visits_each_pixel_at_most_once() {
    let mut buffer = PixelBuffer::new(32, 32);
    let mut job = FillJob::start(&buffer, 16, 16, RED, 255, DEFAULT_PIXELS_PER_STEP).unwrap();
    run_to_completion(&mut job, &mut buffer);
    assert_eq!(job.pixels_painted(), 32 * 32);
}

#[test]
fn test_fill_chunks_across_advances() {
    // 100 pixels at 30 per step: 3 partial advances plus a final one
    let mut buffer = PixelBuffer::new(10, 10);
    let mut job = FillJob::start(&buffer, 0, 0, RED, 50, 30).unwrap();

    assert!(!job.advance(&mut buffer));
    assert!(!job.advance(&mut buffer));
    assert!(!job.advance(&mut buffer));
    assert!(job.advance(&mut buffer));
    assert_eq!(job.pixels_painted(), 100);
}

#[test]
fn test_out_of_bounds_seed_is_rejected_before_mutation() {
    let buffer = PixelBuffer::new(10, 10);
    let snapshot = buffer.pixels().to_vec();

    for (x, y) in [(-1, 0), (0, -1), (10, 0), (0, 10)] {
        let result = FillJob::start_default(&buffer, x, y, RED);
        assert!(matches!(result, Err(EditorError::OutOfBounds { .. })));
    }
    assert_eq!(buffer.pixels(), snapshot.as_slice());
}
