//! Naming of common picture aspect ratios.

/// Landscape ratios and their conventional labels.
const COMMON_RATIOS: [(f64, &str); 18] = [
    (1.0, "1:1"),
    (6.0 / 5.0, "6:5"),
    (5.0 / 4.0, "5:4"),
    (4.0 / 3.0, "4:3"),
    (11.0 / 8.0, "11:8"),
    (std::f64::consts::SQRT_2, "1.41:1"),
    (1.43, "1.43:1"),
    (3.0 / 2.0, "3:2"),
    (16.0 / 10.0, "16:10"),
    (1.618, "16.18:10"),
    (5.0 / 3.0, "5:3"),
    (16.0 / 9.0, "16:9"),
    (1.85, "1.85:1"),
    (2.0, "2:1"),
    (2.35, "2.35:1"),
    (2.39, "2.39:1"),
    (2.414, "2.414:1"),
    (2.76, "2.76:1"),
];

const TOLERANCE: f64 = 0.01;

/// Label of the common ratio nearest to `ratio` (width / height), if closer
/// than 0.01. Portrait ratios are matched by their inverse and the label is
/// swapped, e.g. `9:16`.
pub fn describe_aspect_ratio(ratio: f64) -> Option<String> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return None;
    }
    let portrait = ratio < 1.0;
    let landscape = if portrait { 1.0 / ratio } else { ratio };

    let (value, label) = COMMON_RATIOS.iter().min_by(|a, b| {
        (a.0 - landscape)
            .abs()
            .total_cmp(&(b.0 - landscape).abs())
    })?;
    if (value - landscape).abs() >= TOLERANCE {
        return None;
    }

    if portrait {
        let (w, h) = label.split_once(':')?;
        Some(format!("{h}:{w}"))
    } else {
        Some((*label).to_owned())
    }
}

/// Caption text `W×H`, followed by ` (label)` for a common ratio.
pub fn format_image_size(width: u32, height: u32) -> String {
    let label = if height > 0 {
        describe_aspect_ratio(f64::from(width) / f64::from(height))
    } else {
        None
    };
    match label {
        Some(label) => format!("{width}\u{00D7}{height} ({label})"),
        None => format!("{width}\u{00D7}{height}"),
    }
}
