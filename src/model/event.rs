// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use crate::model::{Context, Level};

static PROCESS_START: OnceLock<Instant> = OnceLock::new();

/// Pins the instant `$U` counts from. Idempotent.
pub fn mark_process_start() -> Instant {
    *PROCESS_START.get_or_init(Instant::now)
}

/// Time elapsed since the first logger or destination was built.
pub fn process_uptime() -> Duration {
    mark_process_start().elapsed()
}

/// Who is logging: a module name and the bundle it ships in.
///
/// `identifier` is what `$i` renders; `bundle_identifier` becomes the
/// subsystem of the tracing bridge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Identification {
    pub identifier: String,
    pub bundle_identifier: String,
}

impl Identification {
    pub fn new(identifier: impl Into<String>, bundle_identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            bundle_identifier: bundle_identifier.into(),
        }
    }
}

/// Source position of a log call, normally filled in by the logging macros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub function: &'static str,
    pub line: u32,
}

impl Location {
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }
}

/// One resolved log call as handed to every accepting destination.
///
/// The message has already been evaluated; destinations share it read-only.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub level: Level,
    pub message: Arc<str>,
    pub context: Context,
    pub file: &'static str,
    /// Calling function with its parameter list replaced by `()`.
    pub function: String,
    pub line: u32,
    /// Empty on the main thread.
    pub thread: String,
    pub timestamp: DateTime<Utc>,
    /// Process uptime at the moment of the call, rendered by `$U`.
    pub uptime: Duration,
}

impl LogEvent {
    /// File name with its extension, e.g. `funnel.rs`.
    pub fn file_name(&self) -> &str {
        file_name_of(self.file)
    }

    /// File name up to its first dot, e.g. `funnel`.
    pub fn file_stem(&self) -> &str {
        let name = self.file_name();
        name.split('.').next().unwrap_or(name)
    }
}

fn file_name_of(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
