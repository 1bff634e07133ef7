// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A configuration file was read and parsed.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use loghive::observability::messages::config::ConfigLoaded;
///
/// let msg = ConfigLoaded {
///     path: "logging.yaml",
///     identifier: "💸",
///     destination_count: 2,
///     context_count: 3,
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Loaded logging config 'logging.yaml' for '💸': 2 destinations, 3 contexts"
/// );
/// ```
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub identifier: &'a str,
    pub destination_count: usize,
    pub context_count: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded logging config '{}' for '{}': {} destinations, {} contexts",
            self.path, self.identifier, self.destination_count, self.context_count
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            identifier = self.identifier,
            destination_count = self.destination_count,
            context_count = self.context_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config_loaded",
            span_name = name,
            path = self.path,
            identifier = self.identifier,
        )
    }
}
