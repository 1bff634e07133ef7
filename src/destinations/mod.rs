// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Destination state shared by every sink, and the built-in sinks.
//!
//! * `console` - standard output
//! * `tracing_bridge` - the platform logging facility through `tracing`
//! * `channel` - a remote viewer fed through a tokio channel
//! * `memory` - in-memory capture

mod base;
mod channel;
mod console;
mod memory;
mod tracing_bridge;

pub use base::{DestinationCore, DestinationId, DestinationSettings};
pub use channel::{ChannelDestination, RemoteRecord};
pub use console::ConsoleDestination;
pub use memory::MemoryDestination;
pub use tracing_bridge::TracingDestination;
