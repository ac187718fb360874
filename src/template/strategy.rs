use super::corner::{Corner, CornerTemplate};
use super::scan::{first_match_backward, first_match_forward};
use crate::image::PixelBuffer;

/// One way of locating a canvas corner. Matchers are tried in priority order
/// and the first success wins.
pub trait CornerMatcher: Send + Sync {
    fn name(&self) -> &str;
    fn find(&self, image: &PixelBuffer) -> Option<Corner>;
}

/// Finds the canvas' top-left corner from a template whose bottom-right
/// pixel sits on that corner.
#[derive(Clone, Debug)]
pub struct TopLeftTemplate(pub CornerTemplate);

impl CornerMatcher for TopLeftTemplate {
    fn name(&self) -> &str {
        self.0.name()
    }

    /// Inner corner `(x + tw - 1, y + th - 1)` of the first match.
    fn find(&self, image: &PixelBuffer) -> Option<Corner> {
        let t = &self.0;
        first_match_forward(image, t.image())
            .map(|(x, y)| Corner::new(x + t.width() - 1, y + t.height() - 1))
    }
}

/// Finds the canvas' bottom-right corner from a template whose top-left
/// pixel sits on that corner.
#[derive(Clone, Debug)]
pub struct BottomRightTemplate(pub CornerTemplate);

impl CornerMatcher for BottomRightTemplate {
    fn name(&self) -> &str {
        self.0.name()
    }

    /// Origin `(x, y)` of the first match from the right.
    fn find(&self, image: &PixelBuffer) -> Option<Corner> {
        first_match_backward(image, self.0.image()).map(|(x, y)| Corner::new(x, y))
    }
}
