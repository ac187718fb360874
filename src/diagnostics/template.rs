use super::timing::TimingBreakdown;
use crate::geometry::Rectangle;
use crate::template::Corner;
use serde::Serialize;

/// Which template located a corner, and where.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerMatch {
    pub template: String,
    pub corner: Corner,
}

/// Trace of one `TemplateMatcher::find_rendered_image_borders_with_report` run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_left: Option<CornerMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_right: Option<CornerMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_top_left: Option<Corner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_bottom_right: Option<Corner>,
    pub bounds: Option<Rectangle>,
    pub timing: TimingBreakdown,
}
