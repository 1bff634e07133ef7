// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::{self, Write};

use super::{DestinationCore, DestinationSettings};
use crate::errors::DestinationError;
use crate::model::{Identification, Level, LevelTable, LogEvent};
use crate::traits::Destination;

/// Prints rendered lines to standard output.
///
/// Level colors default to colored circle markers so levels stand out in
/// terminals and IDE consoles without ANSI support.
pub struct ConsoleDestination {
    core: DestinationCore,
}

impl ConsoleDestination {
    pub fn new(identification: Identification, min_level: Level) -> Result<Self, DestinationError> {
        let mut settings = DestinationSettings::new(min_level);
        settings.level_colors = LevelTable::emoji_colors();

        Ok(Self {
            core: DestinationCore::with_settings("console", identification, settings)?,
        })
    }
}

impl Destination for ConsoleDestination {
    fn core(&self) -> &DestinationCore {
        &self.core
    }

    fn emit(&self, line: &str, _event: &LogEvent) {
        // Write failures are dropped.
        let _ = writeln!(io::stdout().lock(), "{}", line);
    }

    fn name(&self) -> &'static str {
        "console"
    }
}
