// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Diagnostics about the logging engine itself.
//!
//! loghive reports its own lifecycle (destinations joining and leaving,
//! queue workers starting and stopping, sinks that panic) through
//! `tracing`, never through its own destinations. Message types follow a
//! struct-based pattern with a `Display` implementation so the wording lives
//! in one place:
//!
//! * `messages::destination` - destination set membership changes
//! * `messages::queue` - serial queue worker lifecycle and task failures
//! * `messages::config` - configuration loading
//!
//! # Usage
//!
//! ```rust
//! use loghive::observability::messages::destination::DestinationAdded;
//! use loghive::observability::messages::StructuredLog;
//!
//! DestinationAdded {
//!     destination: "console",
//!     destination_id: 1,
//!     destination_count: 1,
//! }
//! .log();
//! ```

pub mod messages;
