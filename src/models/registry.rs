use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::common::RegistryError;
use crate::models::{BitmapImage, ColumnSpan, FeatureEntry, FeatureKey};

static HOMEPAGE: LazyLock<FeatureRegistry> = LazyLock::new(|| {
    FeatureRegistry::new([
        FeatureEntry::new(
            "Theme Logic",
            "Documentation covering Partify theme codes works — including VIN and \
             license plate flows, paint code validation, and variant selection across \
             aftermarket, CAPA, and OEM parts.",
            Arc::new(
                BitmapImage::new("/img/undraw_docusaurus_mountain.svg")
                    .with_alt("Mountain landscape"),
            ),
        ),
        FeatureEntry::new(
            "Shopify Theme Architecture",
            "A clear breakdown of our Shopify Liquid theme structure, data flow \
             between Liquid and JavaScript, and how critical components like \
             add-to-cart, modals, and fitment checks are wired together.",
            Arc::new(
                BitmapImage::new("/img/undraw_docusaurus_tree.svg")
                    .with_alt("Tree with branching structure"),
            ),
        ),
        FeatureEntry::new(
            "Powered by Partify",
            "Hard-earned knowledge documenting Shopify quirks, third-party app \
             integrations, known failure modes, and the edge cases unique to selling \
             custom painted auto body parts at scale.",
            Arc::new(
                BitmapImage::new("/img/undraw_docusaurus_react.svg")
                    .with_alt("Dinosaur mascot working on a component"),
            ),
        ),
    ])
});

/// Ordered, immutable list of features. Order is display order, left to right.
#[derive(Debug, Clone)]
pub struct FeatureRegistry {
    entries: Arc<[FeatureEntry]>,
}

impl FeatureRegistry {
    pub fn new(entries: impl IntoIterator<Item = FeatureEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            entries: Arc::new([]),
        }
    }

    /// The features shown on the documentation homepage.
    pub fn homepage() -> &'static FeatureRegistry {
        &HOMEPAGE
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&FeatureEntry> {
        self.entries.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeatureEntry> {
        self.entries.iter()
    }

    pub fn keyed(&self) -> impl Iterator<Item = (FeatureKey, &FeatureEntry)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (FeatureKey::new(position), entry))
    }

    pub fn column_span(&self) -> ColumnSpan {
        ColumnSpan::for_count(self.len())
    }

    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut seen = HashSet::with_capacity(self.len());

        for (index, entry) in self.entries.iter().enumerate() {
            if entry.title().trim().is_empty() {
                return Err(RegistryError::EmptyTitle { index });
            }
            if entry.description().is_blank() {
                return Err(RegistryError::EmptyDescription { index });
            }
            if !seen.insert(entry.title()) {
                return Err(RegistryError::DuplicateTitle {
                    title: entry.title().to_owned(),
                });
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a FeatureRegistry {
    type Item = &'a FeatureEntry;
    type IntoIter = std::slice::Iter<'a, FeatureEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
