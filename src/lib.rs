// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

#[macro_use]
mod macros;

pub mod config;       // config loading + logger builder
pub mod destinations; // built-in sinks
pub mod engine;       // dispatch core + serial queues
pub mod errors;       // error handling
pub mod format;       // format pattern interpreter
pub mod model;        // levels, contexts, events
pub mod observability;
pub mod traits;       // destination capability

pub use engine::Logger;
pub use model::{Context, Identification, Level, Location};
pub use traits::Destination;
