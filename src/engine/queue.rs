// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Serial execution queue owned by each destination.
//!
//! A `SerialQueue` is one dedicated worker thread draining an ordered
//! channel of tasks. Tasks run one at a time in submission order, so two
//! threads logging to the same destination never interleave inside a
//! rendered line.
//!
//! ```text
//! caller A ──submit_async──┐
//!                          ├──► [ t1 | t2 | t3 ] ──► worker thread ──► sink
//! caller B ──submit_sync───┘                             │
//!     ▲                                                  │
//!     └──────────────── done signal ◄────────────────────┘
//! ```
//!
//! The worker survives panicking tasks: each task runs under
//! `catch_unwind` and a panic is reported through `tracing`. Dropping the
//! queue closes the channel; the worker finishes what is already queued and
//! exits.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::thread::{self, ThreadId};

use crate::config::consts::WORKER_THREAD_PREFIX;
use crate::errors::DestinationError;
use crate::observability::messages::queue::*;
use crate::observability::messages::StructuredLog;

type Task = Box<dyn FnOnce() + Send + 'static>;

pub struct SerialQueue {
    label: String,
    sender: mpsc::Sender<Task>,
    worker: ThreadId,
}

impl SerialQueue {
    /// Spawns the worker thread, named `loghive-<label>`.
    pub fn new(label: impl Into<String>) -> Result<Self, DestinationError> {
        let label = label.into();
        let (sender, receiver) = mpsc::channel::<Task>();

        let worker_label = label.clone();
        let handle = thread::Builder::new()
            .name(format!("{}{}", WORKER_THREAD_PREFIX, label))
            .spawn(move || run_worker(&worker_label, receiver))
            .map_err(|source| DestinationError::QueueSpawn {
                label: label.clone(),
                source,
            })?;

        // The worker is detached; it exits once every sender is gone.
        let worker = handle.thread().id();

        Ok(Self {
            label,
            sender,
            worker,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// True when called from this queue's worker thread.
    pub fn is_current(&self) -> bool {
        thread::current().id() == self.worker
    }

    /// Runs `task` on the worker or inline, blocking only when `synchronously`.
    pub fn execute<F>(&self, synchronously: bool, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if synchronously {
            self.submit_sync(task);
        } else {
            self.submit_async(task);
        }
    }

    /// Queues `task` and returns immediately.
    pub fn submit_async<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.sender.send(Box::new(task)).is_err() {
            self.report_unavailable();
        }
    }

    /// Queues `task` and blocks until it has run.
    ///
    /// Called from the worker itself, the task runs inline; waiting on our
    /// own queue would never return.
    pub fn submit_sync<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.is_current() {
            run_task(&self.label, Box::new(task));
            return;
        }

        let (done_tx, done_rx) = mpsc::sync_channel::<()>(1);
        let wrapped = move || {
            task();
            let _ = done_tx.send(());
        };

        if self.sender.send(Box::new(wrapped)).is_err() {
            self.report_unavailable();
            return;
        }

        // A panicking task drops `done_tx` while unwinding, which also wakes us.
        let _ = done_rx.recv();
    }

    /// Blocks until every task submitted before this call has run.
    pub fn flush(&self) {
        self.submit_sync(|| {});
    }

    fn report_unavailable(&self) {
        let msg = QueueUnavailable { queue: &self.label };
        let span = msg.span("queue_submit");
        let _guard = span.enter();
        msg.log();
    }
}

impl std::fmt::Debug for SerialQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialQueue")
            .field("label", &self.label)
            .field("worker", &self.worker)
            .finish()
    }
}

fn run_worker(label: &str, receiver: mpsc::Receiver<Task>) {
    let start_msg = QueueWorkerStarted { queue: label };

    let span = start_msg.span("queue_worker");
    let _guard = span.enter();
    start_msg.log();

    let mut tasks_run: u64 = 0;
    while let Ok(task) = receiver.recv() {
        run_task(label, task);
        tasks_run += 1;
    }

    let stop_msg = QueueWorkerStopped {
        queue: label,
        tasks_run,
    };
    let stop_span = stop_msg.span("queue_worker_drained");
    let _stop_guard = stop_span.enter();
    stop_msg.log();
}

fn run_task(label: &str, task: Task) {
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(task)) {
        let msg = SinkTaskPanicked {
            queue: label,
            reason: panic_reason(payload.as_ref()),
        };
        let span = msg.span("sink_task");
        let _guard = span.enter();
        msg.log();
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> &str {
    if let Some(reason) = payload.downcast_ref::<&'static str>() {
        reason
    } else if let Some(reason) = payload.downcast_ref::<String>() {
        reason.as_str()
    } else {
        "unknown panic payload"
    }
}
