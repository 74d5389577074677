//! Loading a feature registry from a TOML file.
//!
//! ```toml
//! [[features]]
//! title = "Theme Logic"
//! description = { text = "Documentation covering Partify theme codes." }
//! graphic = { kind = "bitmap", src = "/img/undraw_docusaurus_mountain.svg" }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::common::ConfigError;
use crate::models::{ColumnSpan, FeatureEntry, FeatureRegistry, GraphicSource, RichText};

/// Environment variable naming a registry file to use instead of the built-in one.
pub const FEATURES_FILE_ENV: &str = "FEATURES_FILE";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryFile {
    #[serde(default)]
    pub features: Vec<FeatureSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureSpec {
    pub title: String,
    pub description: RichText,
    pub graphic: GraphicSource,
}

impl From<FeatureSpec> for FeatureEntry {
    fn from(spec: FeatureSpec) -> Self {
        FeatureEntry::new(spec.title, spec.description, spec.graphic.into_graphic())
    }
}

pub fn parse_registry(content: &str) -> Result<FeatureRegistry, ConfigError> {
    let file: RegistryFile = toml::from_str(content)?;
    let registry = FeatureRegistry::new(file.features.into_iter().map(FeatureEntry::from));
    registry.validate()?;

    if !ColumnSpan::is_balanced(registry.len()) {
        tracing::warn!(
            features = registry.len(),
            "Feature count does not divide the 12 column grid evenly"
        );
    }
    tracing::debug!(features = registry.len(), "Loaded feature registry");

    Ok(registry)
}

pub fn load_registry(path: impl AsRef<Path>) -> Result<FeatureRegistry, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_registry(&content)
}

/// Reads the registry named by [`FEATURES_FILE_ENV`], falling back to
/// [`FeatureRegistry::homepage`] when the variable is unset or empty.
pub fn registry_from_env() -> Result<FeatureRegistry, ConfigError> {
    match std::env::var_os(FEATURES_FILE_ENV) {
        Some(path) if !path.is_empty() => load_registry(path),
        _ => {
            tracing::debug!("{FEATURES_FILE_ENV} not set, using the homepage registry");
            Ok(FeatureRegistry::homepage().clone())
        }
    }
}
