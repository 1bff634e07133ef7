// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for the engine's own structured logging.
//!
//! Each message type implements `Display` for the human readable text and
//! [`StructuredLog`] to emit it through `tracing` at its level with its
//! fields attached.
//!
//! * `destination` - destination set membership changes
//! * `queue` - serial queue worker lifecycle and task failures
//! * `config` - configuration loading

use tracing::Span;

pub mod config;
pub mod destination;
pub mod queue;

/// A diagnostic message that knows its own level and fields.
pub trait StructuredLog {
    /// Emits the message as a `tracing` event.
    fn log(&self);

    /// Opens a span carrying the message fields.
    fn span(&self, name: &str) -> Span;
}

/// Runs `f` with a plain-text subscriber installed on this thread and
/// returns everything it wrote, span context included.
#[cfg(test)]
pub(crate) fn capture_logs<F: FnOnce()>(f: F) -> String {
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let buffer = Buffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}
