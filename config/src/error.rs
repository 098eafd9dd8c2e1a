use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not locate the gimnasio home directory: {0}")]
    HomeNotFound(#[source] std::io::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid override `{0}`: expected key=value")]
    InvalidOverride(String),

    #[error("invalid configuration: {0}")]
    Invalid(#[source] toml::de::Error),
}
