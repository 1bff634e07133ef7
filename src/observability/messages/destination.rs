// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for destination set membership.
//!
//! This module contains message types for logging events related to:
//! * A destination joining a logger
//! * A destination leaving a logger
//! * A logger dropping all of its destinations

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A destination was registered with a logger.
///
/// # Log Level
/// `debug!` - Configuration change
///
/// # Example
/// ```
/// use loghive::observability::messages::destination::DestinationAdded;
///
/// let msg = DestinationAdded {
///     destination: "console",
///     destination_id: 3,
///     destination_count: 2,
/// };
///
/// assert_eq!(msg.to_string(), "Destination 'console' #3 added: 2 destinations registered");
/// ```
pub struct DestinationAdded<'a> {
    pub destination: &'a str,
    pub destination_id: u64,
    pub destination_count: usize,
}

impl Display for DestinationAdded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Destination '{}' #{} added: {} destinations registered",
            self.destination, self.destination_id, self.destination_count
        )
    }
}

impl StructuredLog for DestinationAdded<'_> {
    fn log(&self) {
        tracing::debug!(
            destination = self.destination,
            destination_id = self.destination_id,
            destination_count = self.destination_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "destination_added",
            span_name = name,
            destination = self.destination,
            destination_id = self.destination_id,
        )
    }
}

/// A destination was removed from a logger.
///
/// # Log Level
/// `debug!` - Configuration change
pub struct DestinationRemoved<'a> {
    pub destination: &'a str,
    pub destination_id: u64,
    pub destination_count: usize,
}

impl Display for DestinationRemoved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Destination '{}' #{} removed: {} destinations registered",
            self.destination, self.destination_id, self.destination_count
        )
    }
}

impl StructuredLog for DestinationRemoved<'_> {
    fn log(&self) {
        tracing::debug!(
            destination = self.destination,
            destination_id = self.destination_id,
            destination_count = self.destination_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "destination_removed",
            span_name = name,
            destination = self.destination,
            destination_id = self.destination_id,
        )
    }
}

/// Every destination was removed from a logger.
///
/// # Log Level
/// `debug!` - Configuration change
pub struct DestinationsCleared<'a> {
    pub logger: &'a str,
    pub removed_count: usize,
}

impl Display for DestinationsCleared<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Logger '{}' cleared {} destinations",
            self.logger, self.removed_count
        )
    }
}

impl StructuredLog for DestinationsCleared<'_> {
    fn log(&self) {
        tracing::debug!(
            logger = self.logger,
            removed_count = self.removed_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "destinations_cleared",
            span_name = name,
            logger = self.logger,
            removed_count = self.removed_count,
        )
    }
}
