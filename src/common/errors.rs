use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Feature at position {index} has an empty title")]
    EmptyTitle { index: usize },

    #[error("Feature at position {index} has an empty description")]
    EmptyDescription { index: usize },

    #[error("Feature title {title:?} is used more than once")]
    DuplicateTitle { title: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read feature registry {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse feature registry: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid feature registry: {0}")]
    Invalid(#[from] RegistryError),
}
