pub mod components;

use leptos::prelude::*;

pub use components::{
    FeatureSection, FeatureSectionConfig, HomepageFeatures, render_section_html,
};

/// HTML shell for SSR. `hydrate()` mounts [`HomepageFeatures`] onto its body,
/// so the body holds the homepage section and nothing else.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href="/style/homepage_features.css"/>
                <HydrationScripts options/>
            </head>
            <body>
                <HomepageFeatures/>
            </body>
        </html>
    }
}

/// Renders the complete hydratable page for the homepage registry.
pub fn render_page_html(options: LeptosOptions) -> String {
    Owner::new().with(|| shell(options).to_html())
}
