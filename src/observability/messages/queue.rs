// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for serial queue workers.
//!
//! This module contains message types for logging events related to:
//! * Worker thread startup and shutdown
//! * Sink tasks that panic while rendering or emitting
//! * Submissions to a queue whose worker is gone

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A queue worker thread started.
///
/// # Log Level
/// `trace!` - Internal lifecycle
///
/// # Example
/// ```
/// use loghive::observability::messages::queue::QueueWorkerStarted;
///
/// let msg = QueueWorkerStarted { queue: "console-1" };
/// assert_eq!(msg.to_string(), "Queue 'console-1' worker started");
/// ```
pub struct QueueWorkerStarted<'a> {
    pub queue: &'a str,
}

impl Display for QueueWorkerStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Queue '{}' worker started", self.queue)
    }
}

impl StructuredLog for QueueWorkerStarted<'_> {
    fn log(&self) {
        tracing::trace!(queue = self.queue, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!("queue_worker", span_name = name, queue = self.queue)
    }
}

/// A queue worker drained its channel and exited.
///
/// # Log Level
/// `trace!` - Internal lifecycle
pub struct QueueWorkerStopped<'a> {
    pub queue: &'a str,
    pub tasks_run: u64,
}

impl Display for QueueWorkerStopped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Queue '{}' worker stopped after {} tasks",
            self.queue, self.tasks_run
        )
    }
}

impl StructuredLog for QueueWorkerStopped<'_> {
    fn log(&self) {
        tracing::trace!(queue = self.queue, tasks_run = self.tasks_run, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "queue_worker_stopped",
            span_name = name,
            queue = self.queue,
            tasks_run = self.tasks_run,
        )
    }
}

/// A task panicked on a queue. The worker keeps running.
///
/// # Log Level
/// `error!` - A sink is misbehaving
pub struct SinkTaskPanicked<'a> {
    pub queue: &'a str,
    pub reason: &'a str,
}

impl Display for SinkTaskPanicked<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Task on queue '{}' panicked: {}", self.queue, self.reason)
    }
}

impl StructuredLog for SinkTaskPanicked<'_> {
    fn log(&self) {
        tracing::error!(queue = self.queue, reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "sink_task_panicked",
            span_name = name,
            queue = self.queue,
            reason = self.reason,
        )
    }
}

/// A task could not be submitted because the worker is gone.
///
/// # Log Level
/// `warn!` - Output is being lost
pub struct QueueUnavailable<'a> {
    pub queue: &'a str,
}

impl Display for QueueUnavailable<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Queue '{}' is not accepting tasks, line dropped", self.queue)
    }
}

impl StructuredLog for QueueUnavailable<'_> {
    fn log(&self) {
        tracing::warn!(queue = self.queue, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("queue_unavailable", span_name = name, queue = self.queue)
    }
}
