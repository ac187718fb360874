use super::*;
use crate::geometry::Rectangle;
use crate::image::{Pixel, PixelBuffer};
use crate::segments::IntegerSegment;
use super::detector::inner_span;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Uniform frame with a textured picture: neighbours in a row differ in red,
/// neighbours in a column differ in green, so the picture has no flat runs.
fn framed(width: usize, height: usize, inner: (usize, usize, usize, usize), frame: Pixel) -> PixelBuffer {
    let (ix, iy, iw, ih) = inner;
    let data = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                if (ix..ix + iw).contains(&x) && (iy..iy + ih).contains(&y) {
                    Pixel::rgb(x as u8, y as u8, 128)
                } else {
                    frame
                }
            })
        })
        .collect();
    PixelBuffer::from_pixels(width, height, data).unwrap()
}

#[test]
fn derivative_keeps_first_value_and_wraps() {
    let stripe = [Pixel::rgb(0, 0, 1), Pixel::BLACK, Pixel::BLACK, Pixel::rgb(0, 1, 0)];
    let d = derivative(&stripe);
    assert_eq!(d[0], 1 << 24);
    // 0 - 2^24 wraps around instead of going negative.
    assert_eq!(d[1], 0u32.wrapping_sub(1 << 24));
    assert_eq!(d[1], 4_278_190_080);
    assert_eq!(d[2], 0);
    assert_eq!(d[3], 1 << 16);
}

#[test]
fn derivative_of_visually_close_colors_can_be_huge() {
    // One step in blue and one step in red are both "almost black", yet the
    // packed difference lands in the upper half of the u32 range.
    let d = derivative(&[Pixel::rgb(0, 0, 1), Pixel::rgb(1, 0, 0)]);
    assert!(d[1] > u32::MAX / 2, "d={}", d[1]);
}

#[test]
fn finds_picture_in_reference_layout() {
    init();
    // 64x48 capture, 12px frame left/right, 10px top/bottom.
    let img = framed(64, 48, (12, 10, 40, 28), Pixel::WHITE);

    let stripe = img.horizontal_stripe(24);
    let d = derivative(&stripe);
    assert_eq!(d[11], 0);
    assert!(d[12] > 0);

    let bounds = BoundsDetector::default().detect(&img);
    assert_eq!(bounds, Some(Rectangle::new(12.0, 10.0, 40.0, 28.0)));
}

#[test]
fn frame_color_and_width_do_not_matter() {
    init();
    let detector = BoundsDetector::new(BoundsParams::default());
    let cases = [
        (200, 120, (20, 15, 150, 90), Pixel::BLACK),
        (200, 120, (9, 9, 170, 100), Pixel::rgb(40, 40, 40)),
        (160, 160, (40, 10, 60, 140), Pixel::rgb(250, 251, 252)),
    ];
    for (w, h, inner, frame) in cases {
        let img = framed(w, h, inner, frame);
        let r = detector.detect(&img).unwrap_or_else(|| panic!("no bounds for {inner:?}"));
        let (ix, iy, iw, ih) = inner;
        assert!((r.x - ix as f64).abs() <= 1.0, "{r:?} vs {inner:?}");
        assert!((r.y - iy as f64).abs() <= 1.0, "{r:?} vs {inner:?}");
        assert!((r.width - iw as f64).abs() <= 1.0, "{r:?} vs {inner:?}");
        assert!((r.height - ih as f64).abs() <= 1.0, "{r:?} vs {inner:?}");
    }
}

#[test]
fn uniform_capture_has_no_picture() {
    init();
    let img = PixelBuffer::filled(100, 80, Pixel::rgb(30, 30, 30));
    let report = BoundsDetector::default().detect_with_report(&img);
    assert_eq!(report.horizontal_segments.len(), 1);
    assert!(report.horizontal_gap.is_none());
    assert!(report.bounds.is_none());
    assert!(!report.found());
}

#[test]
fn frame_thinner_than_min_run_is_not_background() {
    let img = framed(64, 48, (4, 10, 56, 28), Pixel::WHITE);
    assert!(BoundsDetector::default().detect(&img).is_none());
}

#[test]
fn flat_picture_is_indistinguishable_from_frame() {
    // A solid block produces its own zero run between the two frame runs, so
    // the widest gap collapses to a single transition pixel.
    let mut data = vec![Pixel::WHITE; 64 * 48];
    for y in 10..38 {
        for x in 12..52 {
            data[y * 64 + x] = Pixel::rgb(200, 0, 0);
        }
    }
    let img = PixelBuffer::from_pixels(64, 48, data).unwrap();
    let report = BoundsDetector::default().detect_with_report(&img);
    assert_eq!(report.horizontal_segments.len(), 3);
    assert!(report.bounds.is_none());
}

#[test]
fn report_lists_sampled_stripes() {
    let img = framed(64, 48, (12, 10, 40, 28), Pixel::WHITE);
    let report = BoundsDetector::default().detect_with_report(&img);
    assert_eq!(report.sampled_rows, vec![24, 12, 20, 28]);
    assert_eq!(report.sampled_columns, vec![32, 16, 24, 32, 40]);
    assert_eq!(report.horizontal_gap.map(|g| (g.start, g.end)), Some((11, 53)));
    assert_eq!(report.vertical_gap.map(|g| (g.start, g.end)), Some((9, 39)));
    assert_eq!(report.timing.stages.len(), 2);
    assert!(report.timing.stage_ms("rows").is_some() && report.timing.stage_ms("columns").is_some());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["bounds"]["width"], 40.0);
}

#[test]
fn params_deserialize_with_defaults() {
    let p: BoundsParams = serde_json::from_str(r#"{ "min_segment_len": 4 }"#).unwrap();
    assert_eq!(p.min_segment_len, 4);
    assert_eq!(p.sample_from, 0.25);
    assert_eq!(p.sample_to, 0.75);
    assert!(p.sample_positions(0).is_empty());
}

#[test]
fn non_background_bounds_is_tight() {
    let mut data = vec![Pixel::WHITE; 30 * 20];
    data[3 * 30 + 5] = Pixel::BLACK;
    data[15 * 30 + 22] = Pixel::rgb(254, 255, 255);
    let img = PixelBuffer::from_pixels(30, 20, data).unwrap();
    assert_eq!(
        find_non_background_bounds(&img, Pixel::WHITE),
        Some(Rectangle::new(5.0, 3.0, 18.0, 13.0))
    );
    let blank = PixelBuffer::filled(30, 20, Pixel::WHITE);
    assert_eq!(find_non_background_bounds(&blank, Pixel::WHITE), None);
}

#[test]
fn collapsed_gap_is_not_a_picture() {
    assert_eq!(inner_span(IntegerSegment::new(29, 31)), None);
    assert_eq!(inner_span(IntegerSegment::new(29, 30)), None);
    assert_eq!(inner_span(IntegerSegment::new(29, 32)), Some((30.0, 1.0)));

    // Two flat halves meeting at x = 30: the only gap is the step itself.
    let data = (0..48)
        .flat_map(|_| (0..64).map(|x| if x < 30 { Pixel::rgb(10, 10, 10) } else { Pixel::rgb(200, 0, 0) }))
        .collect();
    let img = PixelBuffer::from_pixels(64, 48, data).unwrap();
    let report = BoundsDetector::default().detect_with_report(&img);
    assert_eq!(report.horizontal_gap, Some(IntegerSegment::new(29, 31)));
    assert_eq!(report.bounds, None);
}
