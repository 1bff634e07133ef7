// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

use super::DestinationError;

/// Errors that can occur while loading configuration or building a logger
/// from it.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML for the expected schema.
    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file is not valid TOML for the expected schema.
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension does not name a supported format.
    #[error("Unsupported config format '{extension}', expected yaml, yml or toml")]
    UnsupportedExtension { extension: String },

    /// A configured destination could not be constructed.
    #[error("Failed to build destination: {0}")]
    Destination(#[from] DestinationError),
}
