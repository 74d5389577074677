use std::io::Write;

use anyhow::Context;

use partify_docs::common::{init_logger, registry_from_env};
use partify_docs::frontend::{FeatureSectionConfig, render_section_html};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logger();

    let registry = registry_from_env().context("Failed to load the feature registry")?;
    tracing::info!(features = registry.len(), "Rendering homepage features");

    let html = render_section_html(FeatureSectionConfig::new(registry));

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.write_all(b"\n")?;

    Ok(())
}
