// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Values that flow through a log call: level, context, location and the
//! resolved event.

mod context;
mod event;
mod level;

pub use context::Context;
pub use event::{mark_process_start, process_uptime, Identification, Location, LogEvent};
pub use level::{Level, LevelTable, ParseLevelError};
