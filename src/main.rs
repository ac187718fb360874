use screen_grid::aspect::format_image_size;
use screen_grid::{BoundsDetector, GridRequest, GridType, Pixel, PixelBuffer};

fn main() {
    // Demo stub: a 640x480 capture with a textured 512x288 picture in a flat frame.
    let (w, h) = (640usize, 480usize);
    let (ix, iy, iw, ih) = (64usize, 96usize, 512usize, 288usize);
    let data = (0..h)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .map(|(x, y)| {
            if (ix..ix + iw).contains(&x) && (iy..iy + ih).contains(&y) {
                Pixel::rgb(x as u8, y as u8, 128)
            } else {
                Pixel::rgb(45, 45, 48)
            }
        })
        .collect();
    let image = match PixelBuffer::from_pixels(w, h, data) {
        Ok(image) => image,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let report = BoundsDetector::default().detect_with_report(&image);
    let Some(bounds) = report.bounds else {
        println!("found=false latency_ms={:.3}", report.timing.total_ms);
        return;
    };
    println!(
        "found=true bounds={} latency_ms={:.3}",
        format_image_size(bounds.width as u32, bounds.height as u32),
        report.timing.total_ms
    );

    match GridRequest::new(GridType::GoldenSpiralZoomed, bounds.width, bounds.height).lines() {
        Ok(lines) => println!("golden spiral: {} segments", lines.len()),
        Err(err) => eprintln!("Error: {err}"),
    }
}
