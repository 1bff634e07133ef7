// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::{Config, DestinationConfig, DestinationKind};
use crate::destinations::{ConsoleDestination, MemoryDestination, TracingDestination};
use crate::engine::Logger;
use crate::errors::ConfigError;
use crate::model::Identification;
use crate::traits::Destination;

/// Builds a ready-to-use [`Logger`] from configuration.
///
/// Each entry in `destinations` becomes its own registered destination.
/// These are independent of the sinks toggled through
/// [`Logger::set_console`] and [`Logger::set_tracing`].
///
/// # Examples
///
/// ```
/// use loghive::config::{Config, LoggerBuilder};
///
/// let config: Config = serde_yaml::from_str(r#"
/// identifier: "💸"
/// destinations:
///   - type: memory
///   - type: tracing
///     min_level: error
/// "#).unwrap();
///
/// let logger = LoggerBuilder::from_config(&config).unwrap();
/// assert_eq!(logger.count_destinations(), 2);
/// ```
pub struct LoggerBuilder;

impl LoggerBuilder {
    pub fn from_config(cfg: &Config) -> Result<Logger, ConfigError> {
        let logger = Logger::new(cfg.identification());
        for entry in &cfg.destinations {
            logger.add_destination(Self::build_destination(entry, logger.identification())?);
        }
        Ok(logger)
    }

    /// Creates one destination from its config entry.
    pub fn build_destination(
        entry: &DestinationConfig,
        identification: &Identification,
    ) -> Result<Arc<dyn Destination>, ConfigError> {
        let identification = identification.clone();
        let destination: Arc<dyn Destination> = match entry.kind {
            DestinationKind::Console => {
                Arc::new(ConsoleDestination::new(identification, entry.min_level)?)
            }
            DestinationKind::Tracing => {
                Arc::new(TracingDestination::new(identification, entry.min_level)?)
            }
            DestinationKind::Memory => {
                Arc::new(MemoryDestination::new(identification, entry.min_level)?)
            }
        };

        entry.apply(&mut destination.core().settings_mut());
        Ok(destination)
    }
}
