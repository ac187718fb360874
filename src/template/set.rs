use super::corner::CornerTemplate;
use crate::config::TemplatePaths;
use crate::error::Result;
use log::debug;

/// Corner bitmaps of one renderer skin, in priority order.
#[derive(Clone, Debug, Default)]
pub struct TemplateSet {
    pub top_left: Vec<CornerTemplate>,
    pub bottom_right: Vec<CornerTemplate>,
}

impl TemplateSet {
    /// Load every configured bitmap. Any unreadable file fails the whole set.
    pub fn load(paths: &TemplatePaths) -> Result<Self> {
        let top_left = paths
            .top_left
            .iter()
            .map(|p| CornerTemplate::load(p))
            .collect::<Result<Vec<_>>>()?;
        let bottom_right = paths
            .bottom_right
            .iter()
            .map(|p| CornerTemplate::load(p))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            "TemplateSet::load top_left={} bottom_right={}",
            top_left.len(),
            bottom_right.len()
        );
        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.top_left.is_empty() || self.bottom_right.is_empty()
    }
}
