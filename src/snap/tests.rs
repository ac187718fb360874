use super::*;
use crate::image::Pixel;
use crate::error::ScreenGridError;
use crate::template::{Corner, CornerMatcher};
use std::collections::HashMap;
use std::sync::Arc;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct FakeDesktop {
    windows: Vec<NativeWindowState>,
    apps: HashMap<u64, KnownApp>,
}

impl FakeDesktop {
    fn new(windows: Vec<(NativeWindowState, KnownApp)>) -> Self {
        let apps = windows.iter().map(|(w, app)| (w.handle, *app)).collect();
        Self {
            windows: windows.into_iter().map(|(w, _)| w).collect(),
            apps,
        }
    }
}

impl WindowEnumerator for FakeDesktop {
    fn windows_top_most_first(&self) -> Vec<NativeWindowState> {
        self.windows.clone()
    }

    fn app_of(&self, handle: u64) -> KnownApp {
        self.apps.get(&handle).copied().unwrap_or_default()
    }

    fn window_origin(&self, handle: u64) -> Point {
        Point::new(handle as f64 * 100.0, 10.0)
    }
}

#[derive(Default)]
struct FakeCapture {
    images: HashMap<u64, PixelBuffer>,
}

impl CaptureSource for FakeCapture {
    fn capture(&self, handle: u64) -> Result<PixelBuffer> {
        self.images
            .get(&handle)
            .cloned()
            .ok_or_else(|| ScreenGridError::Capture(format!("no window {handle}")))
    }
}

/// `width x height` window of `frame` color with a textured picture.
fn framed(width: usize, height: usize, inner: (usize, usize, usize, usize), frame: Pixel) -> PixelBuffer {
    let (ix, iy, iw, ih) = inner;
    let mut data = vec![frame; width * height];
    for y in iy..iy + ih {
        for x in ix..ix + iw {
            data[y * width + x] = Pixel::rgb(x as u8, y as u8, 128);
        }
    }
    PixelBuffer::from_pixels(width, height, data).unwrap()
}

fn window(handle: u64, class_name: &str) -> NativeWindowState {
    NativeWindowState::new(handle, class_name, 400, 300)
}

#[test]
fn snaps_to_framed_picture_of_front_window() {
    init();
    let desktop = FakeDesktop::new(vec![
        (window(2, "PaintDotNet.MainForm"), KnownApp::PaintDotNet),
        (window(3, "Notepad"), KnownApp::Unknown),
    ]);
    let mut capture = FakeCapture::default();
    capture
        .images
        .insert(2, framed(400, 300, (50, 40, 300, 200), Pixel::rgb(60, 60, 60)));

    let loc = Snapper::new(desktop, capture).snap().unwrap().unwrap();
    assert_eq!(loc.image_bounds, Rectangle::new(50.0, 40.0, 300.0, 200.0));
    assert_eq!(loc.offset, Point::new(200.0, 10.0));
    assert_eq!(loc.screen_bounds(), Rectangle::new(250.0, 50.0, 300.0, 200.0));
}

#[test]
fn photo_viewer_uses_white_background_scan() {
    init();
    let mut data = vec![Pixel::WHITE; 300 * 200];
    for y in 20..120 {
        for x in 30..230 {
            data[y * 300 + x] = Pixel::rgb(10, 120, 200);
        }
    }
    let desktop = FakeDesktop::new(vec![(
        NativeWindowState::new(1, crate::apps::PHOTO_VIEWER_CLASS_NAME, 300, 200),
        KnownApp::Unknown,
    )]);
    let mut capture = FakeCapture::default();
    capture
        .images
        .insert(1, PixelBuffer::from_pixels(300, 200, data).unwrap());

    let loc = Snapper::new(desktop, capture).snap().unwrap().unwrap();
    assert_eq!(loc.image_bounds, Rectangle::new(30.0, 20.0, 200.0, 100.0));
}

#[test]
fn filtered_windows_are_skipped() {
    let desktop = FakeDesktop::new(vec![
        (window(1, "HwndWrapper[ScreenGrid;;0]"), KnownApp::Unknown),
        (window(2, "Shell_TrayWnd"), KnownApp::Unknown),
        (window(3, "IrfanView"), KnownApp::IrfanView),
    ]);
    let mut capture = FakeCapture::default();
    capture
        .images
        .insert(3, framed(400, 300, (20, 20, 360, 260), Pixel::BLACK));

    let loc = Snapper::new(desktop, capture).snap().unwrap().unwrap();
    assert_eq!(loc.offset.x, 300.0);
}

#[test]
fn no_windows_and_capture_errors() {
    let empty = Snapper::new(FakeDesktop::new(Vec::new()), FakeCapture::default());
    assert!(empty.snap().unwrap().is_none());

    let missing = Snapper::new(
        FakeDesktop::new(vec![(window(5, "Notepad"), KnownApp::Unknown)]),
        FakeCapture::default(),
    );
    assert!(matches!(missing.snap(), Err(ScreenGridError::Capture(_))));
}

#[test]
fn small_pictures_are_rejected() {
    init();
    let desktop = FakeDesktop::new(vec![(window(1, "Notepad"), KnownApp::Unknown)]);
    let mut capture = FakeCapture::default();
    capture
        .images
        .insert(1, framed(400, 300, (100, 100, 150, 120), Pixel::WHITE));
    let snapper = Snapper::new(desktop, capture);
    // Exactly 150 wide is not enough.
    assert!(snapper.snap().unwrap().is_none());

    let relaxed = snapper.with_params(SnapParams {
        min_width: 100.0,
        min_height: 50.0,
    });
    assert!(relaxed.snap().unwrap().is_some());
}

struct FixedCorner(Corner);

impl CornerMatcher for FixedCorner {
    fn name(&self) -> &str {
        "fixed"
    }

    fn find(&self, _image: &PixelBuffer) -> Option<Corner> {
        Some(self.0)
    }
}

/// Renderer window: grey chrome, flat dark canvas, textured picture.
fn renderer_window() -> PixelBuffer {
    let canvas = framed(400, 300, (60, 50, 280, 180), Pixel::rgb(40, 40, 40));
    let chrome = Pixel::rgb(80, 80, 80);
    let data = (0..300)
        .flat_map(|y| (0..400).map(move |x| (x, y)))
        .map(|(x, y)| {
            if (20..380).contains(&x) && (15..285).contains(&y) {
                canvas.get(x, y)
            } else {
                chrome
            }
        })
        .collect();
    PixelBuffer::from_pixels(400, 300, data).unwrap()
}

#[test]
fn renderer_uses_corner_templates() {
    init();
    let desktop = FakeDesktop::new(vec![(window(4, "JUCE_158f853ded5"), KnownApp::OctaneRender)]);
    let mut capture = FakeCapture::default();
    capture.images.insert(4, renderer_window());

    let matcher = TemplateMatcher::new()
        .with_top_left(FixedCorner(Corner::new(20, 15)))
        .with_bottom_right(FixedCorner(Corner::new(379, 284)));
    let loc = Snapper::new(desktop, capture)
        .with_matcher(matcher)
        .snap()
        .unwrap()
        .unwrap();
    assert_eq!(loc.image_bounds, Rectangle::new(60.0, 50.0, 280.0, 180.0));
}

#[test]
fn renderer_without_templates_falls_back_to_inner_bounds() {
    let desktop = FakeDesktop::new(vec![(window(4, "JUCE_158f853ded5"), KnownApp::OctaneRender)]);
    let mut capture = FakeCapture::default();
    capture
        .images
        .insert(4, framed(400, 300, (60, 50, 280, 180), Pixel::rgb(40, 40, 40)));
    let loc = Snapper::new(desktop, capture).snap().unwrap().unwrap();
    assert_eq!(loc.image_bounds, Rectangle::new(60.0, 50.0, 280.0, 180.0));
}

#[test]
fn detached_panels_of_the_front_app_are_ignored() {
    let desktop = FakeDesktop::new(vec![
        (NativeWindowState::new(1, "JUCE", 217, 363), KnownApp::OctaneRender),
        (NativeWindowState::new(2, "JUCE", 400, 300), KnownApp::OctaneRender),
    ]);
    let mut capture = FakeCapture::default();
    capture
        .images
        .insert(2, framed(400, 300, (60, 50, 280, 180), Pixel::BLACK));
    let loc = Snapper::new(desktop, capture).snap().unwrap().unwrap();
    assert_eq!(loc.offset.x, 200.0);
}

#[test]
fn overlay_placement_wraps_picture_with_header_and_border() {
    let loc = GridTargetLocation {
        image_bounds: Rectangle::new(50.0, 40.0, 300.0, 200.0),
        offset: Point::new(200.0, 10.0),
    };
    let p = OverlayPlacement::from_location(&loc, 24.0);
    assert_eq!(
        p,
        OverlayPlacement {
            left: 249.0,
            top: 25.0,
            width: 302.0,
            height: 226.0,
        }
    );
}

#[test]
fn latest_ticket_wins() {
    let scheduler = Arc::new(SnapScheduler::new());
    let first = scheduler.issue();
    let second = scheduler.issue();
    assert!(second > first);
    assert!(!scheduler.is_current(first));
    assert_eq!(scheduler.complete(first, "stale"), None);
    assert_eq!(scheduler.complete(second, "fresh"), Some("fresh"));

    let worker = {
        let scheduler = Arc::clone(&scheduler);
        std::thread::spawn(move || scheduler.issue())
    };
    let third = worker.join().unwrap();
    assert!(!scheduler.is_current(second));
    assert!(scheduler.is_current(third));
}
