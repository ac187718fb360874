//! Top-level window records and the choice of which window to snap to.
//!
//! Everything here is pure: an OS layer lists windows (see
//! [`crate::snap::WindowEnumerator`]) and these functions decide.

use crate::image::Pixel;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;

/// Snapshot of one top-level window.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeWindowState {
    pub handle: u64,
    pub class_name: String,
    #[serde(default)]
    pub caption: String,
    pub width: u32,
    pub height: u32,
}

impl NativeWindowState {
    pub fn new(handle: u64, class_name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            handle,
            class_name: class_name.into(),
            caption: String::new(),
            width,
            height,
        }
    }

    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl fmt::Display for NativeWindowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:08X}] {} '{}' {}x{}",
            self.handle, self.class_name, self.caption, self.width, self.height
        )
    }
}

/// Main window of an application that may have detached panels sharing its
/// window class.
///
/// The candidate is the largest window of `class_name` (first in z-order on
/// ties). It is returned only if it belongs to the uninterrupted run of
/// `class_name` windows at the top of `windows` (top-most first); any other
/// window above it means the application is not in front.
pub fn select_main_window<'a>(windows: &'a [NativeWindowState], class_name: &str) -> Option<&'a NativeWindowState> {
    let largest = windows
        .iter()
        .filter(|w| w.class_name == class_name)
        .min_by_key(|w| Reverse(w.area()))?;

    windows
        .iter()
        .take_while(|w| w.class_name == class_name)
        .find(|w| w.handle == largest.handle)
}

/// Class names always offered for snapping.
pub const WINDOW_CLASS_WHITE_LIST: [&str; 5] = [
    PHOTO_VIEWER_CLASS_NAME,
    "IEFrame",
    "Chrome_WidgetWin_1",
    "MozillaWindowClass",
    "TLister",
];

/// Class names never offered for snapping.
pub const WINDOW_CLASS_BLACK_LIST: [&str; 3] = ["Shell_TrayWnd", "Button", "Alternate Owner"];

/// Class name fragments never offered for snapping (the overlay itself, shell hosts).
pub const WINDOW_CLASS_PARTIAL_BLACK_LIST: [&str; 2] = ["ScreenGrid", "HwndWrapper"];

pub const PHOTO_VIEWER_CLASS_NAME: &str = "Photo_Lightweight_Viewer";

/// Whether a visible, non-minimized window of this class may be snapped to.
pub fn is_candidate_window(class_name: &str) -> bool {
    if WINDOW_CLASS_WHITE_LIST.contains(&class_name) {
        return true;
    }
    !(WINDOW_CLASS_BLACK_LIST.contains(&class_name)
        || WINDOW_CLASS_PARTIAL_BLACK_LIST
            .iter()
            .any(|part| class_name.contains(part)))
}

/// Applications with dedicated picture detection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownApp {
    #[default]
    Unknown,
    OctaneRender,
    PaintDotNet,
    IrfanView,
    PhotoViewer,
}

/// How the picture is located inside a captured window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectionStrategy {
    /// Canvas corner templates, see [`crate::template::TemplateMatcher`].
    Templates,
    /// Uniform frame around the picture, see [`crate::bounds::BoundsDetector`].
    InnerBounds,
    /// Picture on a flat canvas of the given color.
    PlainBackground(Pixel),
}

impl KnownApp {
    pub const ALL: [KnownApp; 5] = [
        KnownApp::Unknown,
        KnownApp::OctaneRender,
        KnownApp::PaintDotNet,
        KnownApp::IrfanView,
        KnownApp::PhotoViewer,
    ];

    /// Executable name without extension, where the app is found by process.
    pub fn process_name(self) -> Option<&'static str> {
        match self {
            KnownApp::OctaneRender => Some("octane"),
            KnownApp::PaintDotNet => Some("PaintDotNet"),
            KnownApp::IrfanView => Some("i_view64"),
            KnownApp::Unknown | KnownApp::PhotoViewer => None,
        }
    }

    /// Window class name, where the app is found by class.
    pub fn main_window_class(self) -> Option<&'static str> {
        match self {
            KnownApp::PhotoViewer => Some(PHOTO_VIEWER_CLASS_NAME),
            _ => None,
        }
    }

    /// Case-insensitive lookup by executable name.
    pub fn from_process_name(name: &str) -> KnownApp {
        Self::ALL
            .into_iter()
            .find(|app| app.process_name().is_some_and(|p| p.eq_ignore_ascii_case(name)))
            .unwrap_or(KnownApp::Unknown)
    }

    pub fn from_window_class(class_name: &str) -> KnownApp {
        Self::ALL
            .into_iter()
            .find(|app| app.main_window_class() == Some(class_name))
            .unwrap_or(KnownApp::Unknown)
    }

    pub fn detection_strategy(self) -> DetectionStrategy {
        match self {
            KnownApp::OctaneRender => DetectionStrategy::Templates,
            KnownApp::PhotoViewer => DetectionStrategy::PlainBackground(Pixel::WHITE),
            KnownApp::Unknown | KnownApp::PaintDotNet | KnownApp::IrfanView => {
                DetectionStrategy::InnerBounds
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JUCE: &str = "JUCE_158f853ded5";

    fn window(handle: u64, class_name: &str, width: u32, height: u32) -> NativeWindowState {
        NativeWindowState::new(handle, class_name, width, height)
    }

    #[test]
    fn picks_largest_window_of_a_front_application() {
        let list = [
            window(0x000E0780, JUCE, 217, 363),
            window(0x00050786, JUCE, 1032, 795),
            window(0x0003053A, "ToDoListFrame", 1205, 814),
            window(0x000703D6, "MozillaWindowClass", 936, 742),
            window(0x000602F4, "Internet Explorer_Hidden", 0, 0),
        ];
        let main = select_main_window(&list, JUCE).unwrap();
        assert_eq!(main.width, 1032);
        assert_eq!(main.handle, 0x00050786);
    }

    #[test]
    fn application_behind_another_window_is_not_selected() {
        let list = [
            window(0x000703D6, "MozillaWindowClass", 936, 742),
            window(0x000E0780, JUCE, 217, 363),
            window(0x00050786, JUCE, 1032, 795),
            window(0x0003053A, "ToDoListFrame", 1205, 814),
            window(0x000602F4, "Internet Explorer_Hidden", 0, 0),
        ];
        assert!(select_main_window(&list, JUCE).is_none());
    }

    #[test]
    fn largest_window_must_be_in_the_top_run() {
        let list = [
            window(1, JUCE, 200, 200),
            window(2, "Other", 100, 100),
            window(3, JUCE, 900, 700),
        ];
        assert!(select_main_window(&list, JUCE).is_none());
        assert!(select_main_window(&list, "Missing").is_none());
        assert!(select_main_window(&[], JUCE).is_none());
    }

    #[test]
    fn equal_areas_keep_z_order() {
        let list = [window(7, JUCE, 100, 50), window(8, JUCE, 50, 100)];
        assert_eq!(select_main_window(&list, JUCE).map(|w| w.handle), Some(7));
    }

    #[test]
    fn class_filters() {
        assert!(is_candidate_window("Chrome_WidgetWin_1"));
        assert!(is_candidate_window(PHOTO_VIEWER_CLASS_NAME));
        assert!(is_candidate_window("Notepad"));
        assert!(!is_candidate_window("Shell_TrayWnd"));
        assert!(!is_candidate_window("HwndWrapper[ScreenGrid;;1234]"));
        assert!(!is_candidate_window("ScreenGridOverlay"));
    }

    #[test]
    fn known_apps_and_strategies() {
        assert_eq!(KnownApp::from_process_name("Octane"), KnownApp::OctaneRender);
        assert_eq!(KnownApp::from_process_name("i_view64"), KnownApp::IrfanView);
        assert_eq!(KnownApp::from_process_name("explorer"), KnownApp::Unknown);
        assert_eq!(
            KnownApp::from_window_class(PHOTO_VIEWER_CLASS_NAME),
            KnownApp::PhotoViewer
        );
        assert_eq!(KnownApp::OctaneRender.detection_strategy(), DetectionStrategy::Templates);
        assert_eq!(
            KnownApp::PhotoViewer.detection_strategy(),
            DetectionStrategy::PlainBackground(Pixel::WHITE)
        );
        assert_eq!(KnownApp::PaintDotNet.detection_strategy(), DetectionStrategy::InnerBounds);
    }

    #[test]
    fn display_matches_debug_listing_format() {
        let mut w = window(0xE0780, JUCE, 217, 363);
        w.caption = "Octane".into();
        assert_eq!(w.to_string(), "[000E0780] JUCE_158f853ded5 'Octane' 217x363");
    }
}
