// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::{Mutex, PoisonError};

use super::DestinationCore;
use crate::errors::DestinationError;
use crate::model::{Identification, Level, LogEvent};
use crate::traits::Destination;

/// Keeps every rendered line in memory, in emission order.
///
/// Useful for tests and for hosts that want to show recent output in their
/// own UI.
pub struct MemoryDestination {
    core: DestinationCore,
    lines: Mutex<Vec<String>>,
}

impl MemoryDestination {
    pub fn new(identification: Identification, min_level: Level) -> Result<Self, DestinationError> {
        Ok(Self {
            core: DestinationCore::new("memory", identification, min_level)?,
            lines: Mutex::new(Vec::new()),
        })
    }

    /// Waits for queued output, then returns a copy of every line so far.
    pub fn lines(&self) -> Vec<String> {
        self.core.queue().flush();
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Waits for queued output, then drains the stored lines.
    pub fn take_lines(&self) -> Vec<String> {
        self.core.queue().flush();
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Destination for MemoryDestination {
    fn core(&self) -> &DestinationCore {
        &self.core
    }

    fn emit(&self, line: &str, _event: &LogEvent) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
