use screen_grid::image::{Pixel, PixelBuffer};

pub const CHROME: Pixel = Pixel::rgb(30, 30, 30);
pub const CANVAS: Pixel = Pixel::rgb(60, 60, 60);

/// Picture pixel whose row and column neighbours always differ.
pub fn textured(x: usize, y: usize) -> Pixel {
    Pixel::rgb(x as u8, y as u8, 200)
}

/// `width x height` capture: uniform `frame` around a textured picture at
/// `inner = (x, y, w, h)`.
pub fn framed_picture(
    width: usize,
    height: usize,
    inner: (usize, usize, usize, usize),
    frame: Pixel,
) -> PixelBuffer {
    let (ix, iy, iw, ih) = inner;
    let mut data = vec![frame; width * height];
    for y in iy..iy + ih {
        for x in ix..ix + iw {
            data[y * width + x] = textured(x, y);
        }
    }
    PixelBuffer::from_pixels(width, height, data).expect("valid synthetic image")
}

/// Small distinctive bitmap; the pixel at `canvas_at` carries the canvas color.
pub fn decoration(w: usize, h: usize, seed: u8, canvas_at: (usize, usize)) -> PixelBuffer {
    let data = (0..h)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .map(|(x, y)| {
            if (x, y) == canvas_at {
                CANVAS
            } else {
                Pixel::rgb(seed, 40 + 20 * x as u8, 40 + 30 * y as u8)
            }
        })
        .collect();
    PixelBuffer::from_pixels(w, h, data).expect("valid decoration")
}

pub fn stamp(data: &mut [Pixel], width: usize, fragment: &PixelBuffer, at: (usize, usize)) {
    for y in 0..fragment.height() {
        for x in 0..fragment.width() {
            data[(at.1 + y) * width + at.0 + x] = fragment.get(x, y);
        }
    }
}

/// 400x300 renderer window: dark chrome, canvas (40,30)-(359,269) with the
/// corner decorations touching it, picture (80,60)-(319,239).
pub fn renderer_window(top_left: &PixelBuffer, bottom_right: &PixelBuffer) -> PixelBuffer {
    let (w, h) = (400, 300);
    let mut data = vec![CHROME; w * h];
    for y in 30..=269 {
        for x in 40..=359 {
            data[y * w + x] = if (80..320).contains(&x) && (60..240).contains(&y) {
                textured(x, y)
            } else {
                CANVAS
            };
        }
    }
    stamp(
        &mut data,
        w,
        top_left,
        (40 + 1 - top_left.width(), 30 + 1 - top_left.height()),
    );
    stamp(&mut data, w, bottom_right, (359, 269));
    PixelBuffer::from_pixels(w, h, data).expect("valid renderer window")
}
