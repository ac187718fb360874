use super::corner::{Corner, CornerTemplate};
use super::inner::{find_inner_bottom_right, find_inner_top_left};
use super::set::TemplateSet;
use super::strategy::{BottomRightTemplate, CornerMatcher, TopLeftTemplate};
use crate::diagnostics::{elapsed_ms, CornerMatch, TemplateReport, TimingBreakdown};
use crate::geometry::Rectangle;
use crate::image::PixelBuffer;
use log::debug;
use std::time::Instant;

/// Ordered corner strategies for one renderer skin.
#[derive(Default)]
pub struct TemplateMatcher {
    top_left: Vec<Box<dyn CornerMatcher>>,
    bottom_right: Vec<Box<dyn CornerMatcher>>,
}

impl std::fmt::Debug for TemplateMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = |list: &[Box<dyn CornerMatcher>]| -> Vec<String> {
            list.iter().map(|m| m.name().to_owned()).collect()
        };
        f.debug_struct("TemplateMatcher")
            .field("top_left", &names(&self.top_left))
            .field("bottom_right", &names(&self.bottom_right))
            .finish()
    }
}

impl TemplateMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Template-based strategies in the order the set lists them.
    pub fn from_set(set: TemplateSet) -> Self {
        let mut matcher = Self::new();
        for t in set.top_left {
            matcher = matcher.with_top_left(TopLeftTemplate(t));
        }
        for t in set.bottom_right {
            matcher = matcher.with_bottom_right(BottomRightTemplate(t));
        }
        matcher
    }

    pub fn with_top_left(mut self, strategy: impl CornerMatcher + 'static) -> Self {
        self.top_left.push(Box::new(strategy));
        self
    }

    pub fn with_bottom_right(mut self, strategy: impl CornerMatcher + 'static) -> Self {
        self.bottom_right.push(Box::new(strategy));
        self
    }

    pub fn with_top_left_template(self, template: CornerTemplate) -> Self {
        self.with_top_left(TopLeftTemplate(template))
    }

    pub fn with_bottom_right_template(self, template: CornerTemplate) -> Self {
        self.with_bottom_right(BottomRightTemplate(template))
    }

    pub fn is_empty(&self) -> bool {
        self.top_left.is_empty() || self.bottom_right.is_empty()
    }

    pub fn find_top_left_corner(&self, image: &PixelBuffer) -> Option<Corner> {
        first_success(&self.top_left, image).map(|m| m.1)
    }

    pub fn find_bottom_right_corner(&self, image: &PixelBuffer) -> Option<Corner> {
        first_success(&self.bottom_right, image).map(|m| m.1)
    }

    /// Picture rectangle inside the renderer's canvas, corners inclusive.
    pub fn find_rendered_image_borders(&self, image: &PixelBuffer) -> Option<Rectangle> {
        self.find_rendered_image_borders_with_report(image).bounds
    }

    pub fn find_rendered_image_borders_with_report(&self, image: &PixelBuffer) -> TemplateReport {
        let total_start = Instant::now();
        let mut report = TemplateReport::default();
        let mut timing = TimingBreakdown::default();

        let top_left = timing.measure("top_left_corner", || first_success(&self.top_left, image));
        let bottom_right =
            timing.measure("bottom_right_corner", || first_success(&self.bottom_right, image));
        report.top_left = top_left.map(|(name, corner)| CornerMatch {
            template: name.to_owned(),
            corner,
        });
        report.bottom_right = bottom_right.map(|(name, corner)| CornerMatch {
            template: name.to_owned(),
            corner,
        });

        if let (Some((_, tl)), Some((_, br))) = (top_left, bottom_right) {
            if tl.is_interior() && br.is_interior() && tl.x < br.x && tl.y < br.y {
                let start = Instant::now();
                report.inner_top_left = find_inner_top_left(image, tl, br);
                report.inner_bottom_right = find_inner_bottom_right(image, tl, br);
                timing.push("inner_corners", elapsed_ms(start));

                report.bounds = match (report.inner_top_left, report.inner_bottom_right) {
                    (Some(a), Some(b)) if a.x > 0 && b.x >= a.x && b.y >= a.y => Some(Rectangle::new(
                        a.x as f64,
                        a.y as f64,
                        (b.x - a.x + 1) as f64,
                        (b.y - a.y + 1) as f64,
                    )),
                    _ => None,
                };
            }
        }

        debug!(
            "TemplateMatcher::find_rendered_image_borders tl={:?} br={:?} inner=({:?}, {:?}) -> {:?}",
            report.top_left.as_ref().map(|m| (&m.template, m.corner)),
            report.bottom_right.as_ref().map(|m| (&m.template, m.corner)),
            report.inner_top_left,
            report.inner_bottom_right,
            report.bounds
        );

        timing.total_ms = elapsed_ms(total_start);
        report.timing = timing;
        report
    }
}

fn first_success<'a>(
    strategies: &'a [Box<dyn CornerMatcher>],
    image: &PixelBuffer,
) -> Option<(&'a str, Corner)> {
    strategies
        .iter()
        .find_map(|s| s.find(image).map(|c| (s.name(), c)))
}
