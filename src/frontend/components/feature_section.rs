use leptos::prelude::*;

use crate::frontend::components::{FEATURE_GRAPHIC_CLASS, Feature};
use crate::models::{FeatureEntry, FeatureKey, FeatureRegistry};

/// Class hooks supplied by the section stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionStyles {
    pub section: String,
    pub graphic: String,
}

impl Default for SectionStyles {
    fn default() -> Self {
        Self {
            section: "features".to_owned(),
            graphic: FEATURE_GRAPHIC_CLASS.to_owned(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FeatureSectionConfig {
    pub registry: FeatureRegistry,
    pub styles: SectionStyles,
}

impl FeatureSectionConfig {
    pub fn new(registry: FeatureRegistry) -> Self {
        Self {
            registry,
            styles: SectionStyles::default(),
        }
    }

    pub fn with_styles(mut self, styles: SectionStyles) -> Self {
        self.styles = styles;
        self
    }
}

impl Default for FeatureSectionConfig {
    fn default() -> Self {
        Self::new(FeatureRegistry::homepage().clone())
    }
}

/// Lays out every feature of the registry in one responsive row.
#[component]
pub fn FeatureSection(#[prop(optional)] config: Option<FeatureSectionConfig>) -> impl IntoView {
    let FeatureSectionConfig { registry, styles } = config.unwrap_or_default();
    let span = registry.column_span();
    let graphic_class = styles.graphic;
    let features: Vec<(FeatureKey, FeatureEntry)> = registry
        .keyed()
        .map(|(key, entry)| (key, entry.clone()))
        .collect();

    view! {
        <section class=styles.section>
            <div class="container">
                <div class="row">
                    <For
                        each=move || features.clone()
                        key=|(key, _)| *key
                        children=move |(_, entry)| {
                            view! {
                                <Feature entry=entry span=span graphic_class=graphic_class.clone()/>
                            }
                        }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn HomepageFeatures() -> impl IntoView {
    view! { <FeatureSection config=FeatureSectionConfig::default()/> }
}

/// Renders the section to an HTML string inside a fresh reactive owner.
pub fn render_section_html(config: FeatureSectionConfig) -> String {
    let html = Owner::new().with(|| view! { <FeatureSection config=config/> }.to_html());
    tracing::debug!(bytes = html.len(), "Rendered feature section");
    html
}
