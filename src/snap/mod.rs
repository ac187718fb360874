//! Snapping the overlay to the picture shown by the front-most application.
//!
//! The OS side is abstracted behind two traits: [`WindowEnumerator`] lists
//! top-level windows in z-order and [`CaptureSource`] grabs a window's pixels.
//! [`Snapper`] picks the window, runs the detection strategy of the owning
//! application and returns the picture bounds in window coordinates together
//! with the window's screen origin.
//!
//! Captures can be slow. A UI that fires several snap requests keeps only the
//! latest one alive with [`SnapScheduler`].

use crate::apps::{
    is_candidate_window, select_main_window, DetectionStrategy, KnownApp, NativeWindowState,
};
use crate::bounds::{find_non_background_bounds, BoundsDetector};
use crate::error::Result;
use crate::geometry::{Point, Rectangle};
use crate::image::PixelBuffer;
use crate::template::TemplateMatcher;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Top-level window listing.
pub trait WindowEnumerator {
    /// Visible, non-minimized windows, top-most first.
    fn windows_top_most_first(&self) -> Vec<NativeWindowState>;
    /// Application owning the window.
    fn app_of(&self, handle: u64) -> KnownApp;
    /// Screen position of the window's top-left corner.
    fn window_origin(&self, handle: u64) -> Point;
}

/// Pixel capture of a window's client area.
pub trait CaptureSource {
    fn capture(&self, handle: u64) -> Result<PixelBuffer>;
}

impl<T: WindowEnumerator + ?Sized> WindowEnumerator for &T {
    fn windows_top_most_first(&self) -> Vec<NativeWindowState> {
        (**self).windows_top_most_first()
    }

    fn app_of(&self, handle: u64) -> KnownApp {
        (**self).app_of(handle)
    }

    fn window_origin(&self, handle: u64) -> Point {
        (**self).window_origin(handle)
    }
}

impl<T: CaptureSource + ?Sized> CaptureSource for &T {
    fn capture(&self, handle: u64) -> Result<PixelBuffer> {
        (**self).capture(handle)
    }
}

/// Acceptance thresholds for a detected picture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapParams {
    /// Detected width must be strictly larger.
    pub min_width: f64,
    /// Detected height must be strictly larger.
    pub min_height: f64,
}

impl Default for SnapParams {
    fn default() -> Self {
        Self {
            min_width: 150.0,
            min_height: 50.0,
        }
    }
}

impl SnapParams {
    pub fn accepts(&self, bounds: &Rectangle) -> bool {
        bounds.width > self.min_width && bounds.height > self.min_height
    }
}

/// Picture found inside a window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridTargetLocation {
    /// Picture bounds relative to the window.
    pub image_bounds: Rectangle,
    /// Screen position of the window.
    pub offset: Point,
}

impl GridTargetLocation {
    /// Picture bounds in screen coordinates.
    pub fn screen_bounds(&self) -> Rectangle {
        self.image_bounds.offset_by(self.offset)
    }
}

/// Outer frame of the overlay window that puts its grid area exactly over a
/// detected picture.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayPlacement {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl OverlayPlacement {
    /// One-pixel border around the grid area.
    pub const BORDER: f64 = 1.0;

    /// `header_height` is the overlay's title strip above the grid area.
    pub fn from_location(location: &GridTargetLocation, header_height: f64) -> Self {
        let b = &location.image_bounds;
        let o = location.offset;
        Self {
            left: b.x + o.x - Self::BORDER,
            top: b.y + o.y - header_height - Self::BORDER,
            width: b.width + 2.0 * Self::BORDER,
            height: b.height + header_height + 2.0 * Self::BORDER,
        }
    }
}

/// Window selection plus per-application picture detection.
pub struct Snapper<E, C> {
    windows: E,
    capture: C,
    detector: BoundsDetector,
    matcher: TemplateMatcher,
    params: SnapParams,
}

impl<E: WindowEnumerator, C: CaptureSource> Snapper<E, C> {
    pub fn new(windows: E, capture: C) -> Self {
        Self {
            windows,
            capture,
            detector: BoundsDetector::default(),
            matcher: TemplateMatcher::new(),
            params: SnapParams::default(),
        }
    }

    pub fn with_detector(mut self, detector: BoundsDetector) -> Self {
        self.detector = detector;
        self
    }

    pub fn with_matcher(mut self, matcher: TemplateMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn with_params(mut self, params: SnapParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &SnapParams {
        &self.params
    }

    /// Locate the picture in the front-most application window.
    ///
    /// `Ok(None)` means nothing suitable was found; capture failures are
    /// errors.
    pub fn snap(&self) -> Result<Option<GridTargetLocation>> {
        let windows: Vec<NativeWindowState> = self
            .windows
            .windows_top_most_first()
            .into_iter()
            .filter(|w| is_candidate_window(&w.class_name))
            .collect();
        let Some(top) = windows.first() else {
            debug!("Snapper::snap no candidate windows");
            return Ok(None);
        };

        let (target, app) = if KnownApp::from_window_class(&top.class_name) == KnownApp::PhotoViewer {
            (top, KnownApp::PhotoViewer)
        } else {
            let target = select_main_window(&windows, &top.class_name).unwrap_or(top);
            (target, self.windows.app_of(target.handle))
        };
        debug!("Snapper::snap target {target} app={app:?}");

        let image = self.capture.capture(target.handle)?;
        let Some(bounds) = self.detect(app, &image) else {
            info!("Snapper::snap no picture found in {target}");
            return Ok(None);
        };

        if !self.params.accepts(&bounds) {
            warn!(
                "Snapper::snap rejected {}x{} picture (min {}x{})",
                bounds.width, bounds.height, self.params.min_width, self.params.min_height
            );
            return Ok(None);
        }

        Ok(Some(GridTargetLocation {
            image_bounds: bounds,
            offset: self.windows.window_origin(target.handle),
        }))
    }

    fn detect(&self, app: KnownApp, image: &PixelBuffer) -> Option<Rectangle> {
        match app.detection_strategy() {
            DetectionStrategy::Templates if !self.matcher.is_empty() => {
                self.matcher.find_rendered_image_borders(image)
            }
            DetectionStrategy::Templates => {
                debug!("Snapper::detect no templates loaded, using inner bounds");
                self.detector.detect(image)
            }
            DetectionStrategy::InnerBounds => self.detector.detect(image),
            DetectionStrategy::PlainBackground(bg) => find_non_background_bounds(image, bg),
        }
    }
}

/// Identifies one snap request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SnapTicket(u64);

impl SnapTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Latest-request-wins bookkeeping for concurrent snap requests.
#[derive(Debug, Default)]
pub struct SnapScheduler {
    latest: AtomicU64,
}

impl SnapScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request; every earlier ticket becomes stale.
    pub fn issue(&self) -> SnapTicket {
        SnapTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, ticket: SnapTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Hand back `result` if `ticket` is still the latest request.
    pub fn complete<T>(&self, ticket: SnapTicket, result: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(result)
        } else {
            warn!(
                "SnapScheduler::complete dropping stale result #{} (latest #{})",
                ticket.0,
                self.latest.load(Ordering::Acquire)
            );
            None
        }
    }
}

#[cfg(test)]
mod tests;
