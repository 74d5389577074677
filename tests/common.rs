#![allow(dead_code)]

use std::sync::Arc;

use partify_docs::frontend::{FeatureSectionConfig, render_section_html};
use partify_docs::models::*;

pub const PARTIFY_TITLES: [&str; 3] = [
    "Theme Logic",
    "Shopify Theme Architecture",
    "Powered by Partify",
];

pub fn get_feature(title: &str) -> FeatureEntry {
    let slug = title.to_lowercase().replace(' ', "-");
    FeatureEntry::new(
        title,
        format!("About {title}."),
        Arc::new(BitmapImage::new(format!("/img/{slug}.svg"))),
    )
}

pub fn get_registry(titles: &[&str]) -> FeatureRegistry {
    FeatureRegistry::new(titles.iter().map(|title| get_feature(title)))
}

pub fn render(registry: FeatureRegistry) -> String {
    render_section_html(FeatureSectionConfig::new(registry))
}

pub fn count_blocks(html: &str) -> usize {
    html.matches(r#"class="col col--"#).count()
}

/// Byte offsets of each title's heading, in the order the titles are given.
pub fn heading_positions(html: &str, titles: &[&str]) -> Vec<usize> {
    titles
        .iter()
        .map(|title| {
            html.find(&format!(">{title}</h3>"))
                .unwrap_or_else(|| panic!("heading {title:?} missing from {html}"))
        })
        .collect()
}

pub fn permutations<'a>(items: &[&'a str]) -> Vec<Vec<&'a str>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }

    let mut result = Vec::new();
    for (i, first) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, first);
            result.push(tail);
        }
    }
    result
}
