// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors that can occur while constructing a destination.
#[derive(Error, Debug)]
pub enum DestinationError {
    /// The destination's serial queue worker thread could not be started.
    ///
    /// A destination without a queue cannot deliver anything, so this is
    /// reported at construction instead of on the first log call.
    #[error("Failed to start queue worker '{label}': {source}")]
    QueueSpawn {
        label: String,
        #[source]
        source: std::io::Error,
    },
}
