// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::{DestinationCore, DestinationSettings};
use crate::config::consts::TRACING_FORMAT;
use crate::errors::DestinationError;
use crate::model::{Identification, Level, LevelTable, LogEvent};
use crate::traits::Destination;

/// Forwards rendered lines to the platform logging facility via `tracing`.
///
/// Each line becomes one `tracing` event under the `loghive` target with
/// `subsystem` (the bundle identifier) and `category` (the context key)
/// fields, so whatever subscriber the host installs decides where it ends
/// up: journald, syslog, a file, stderr.
///
/// | loghive | tracing |
/// |---------|---------|
/// | verbose | TRACE   |
/// | debug   | DEBUG   |
/// | info    | INFO    |
/// | warning | WARN    |
/// | error   | ERROR   |
pub struct TracingDestination {
    core: DestinationCore,
}

impl TracingDestination {
    pub fn new(identification: Identification, min_level: Level) -> Result<Self, DestinationError> {
        let mut settings = DestinationSettings::new(min_level);
        settings.level_colors = LevelTable::emoji_colors();
        settings.set_format(TRACING_FORMAT);

        Ok(Self {
            core: DestinationCore::with_settings("tracing", identification, settings)?,
        })
    }
}

impl Destination for TracingDestination {
    fn core(&self) -> &DestinationCore {
        &self.core
    }

    fn emit(&self, line: &str, event: &LogEvent) {
        let subsystem = self.core.identification().bundle_identifier.as_str();
        let category = event.context.key();

        match event.level {
            Level::Verbose => tracing::trace!(target: "loghive", subsystem, category, "{}", line),
            Level::Debug => tracing::debug!(target: "loghive", subsystem, category, "{}", line),
            Level::Info => tracing::info!(target: "loghive", subsystem, category, "{}", line),
            Level::Warning => tracing::warn!(target: "loghive", subsystem, category, "{}", line),
            Level::Error => tracing::error!(target: "loghive", subsystem, category, "{}", line),
        }
    }

    fn name(&self) -> &'static str {
        "tracing"
    }
}
