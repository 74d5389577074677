use std::fmt;
use std::sync::Arc;

use crate::models::{Graphic, RichText};

/// One homepage callout. Clones share the underlying title, description and graphic.
#[derive(Debug, Clone)]
pub struct FeatureEntry {
    title: Arc<str>,
    description: Arc<RichText>,
    graphic: Arc<dyn Graphic>,
}

impl FeatureEntry {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<RichText>,
        graphic: Arc<dyn Graphic>,
    ) -> Self {
        Self {
            title: Arc::from(title.into()),
            description: Arc::new(description.into()),
            graphic,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &RichText {
        &self.description
    }

    pub fn graphic(&self) -> &dyn Graphic {
        self.graphic.as_ref()
    }
}

/// Sibling key of a rendered feature, derived from its registry position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeatureKey(usize);

impl FeatureKey {
    pub const fn new(position: usize) -> Self {
        Self(position)
    }

    pub const fn position(self) -> usize {
        self.0
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "feature-{}", self.0)
    }
}
