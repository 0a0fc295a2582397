use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse prompt file {path}: {source}")]
    YamlParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Failed to serialize prompts: {source}")]
    YamlSerialize {
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("{0}")]
    Message(String),
}

impl AppError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    pub fn yaml(path: impl AsRef<Path>, source: serde_yaml::Error) -> Self {
        Self::YamlParse {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}
