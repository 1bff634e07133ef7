// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for building loggers and destinations.
//!
//! Logging calls themselves never fail; errors only arise while wiring a
//! logger up (spawning a destination's queue worker, reading configuration).

mod config;
mod destination;

pub use config::ConfigError;
pub use destination::DestinationError;
