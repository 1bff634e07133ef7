// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Dispatch core: one logger fanning calls out to its destinations.
//!
//! # Execution Flow
//!
//! 1. **Context gate**: a disabled context returns before anything else,
//!    so its message closure never runs.
//! 2. **Resolve**: the message closure runs exactly once and the text is
//!    shared read-only by every destination.
//! 3. **Capture**: calling thread label, display function name, timestamp
//!    and uptime, all taken on the calling thread.
//! 4. **Fan-out**: each registered destination that accepts the level gets
//!    a render-and-emit task on its own serial queue, synchronously or not
//!    according to that destination's setting.
//!
//! The destination set sits behind a lock. Dispatch takes a snapshot and
//! releases the lock before submitting work, so destinations may be added
//! or removed concurrently, and a sink that logs from `emit` cannot
//! deadlock the set.

use chrono::Utc;
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tokio::sync::mpsc::UnboundedReceiver;

use super::caller::{strip_params, thread_label};
use crate::destinations::{
    ChannelDestination, ConsoleDestination, DestinationId, RemoteRecord, TracingDestination,
};
use crate::errors::DestinationError;
use crate::model::{
    mark_process_start, process_uptime, Context, Identification, Level, Location, LogEvent,
};
use crate::observability::messages::destination::*;
use crate::observability::messages::StructuredLog;
use crate::traits::Destination;

/// Multi-destination logger.
///
/// Create one per module (or one per application) and share it by
/// reference or `Arc`. Destinations can be added and removed at any time.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use loghive::destinations::MemoryDestination;
/// use loghive::engine::Logger;
/// use loghive::model::{Context, Level};
/// use loghive::traits::Destination;
/// use loghive::log_error;
///
/// let logger = Logger::with_identifier("💸", "com.bunny.payment");
///
/// let memory = MemoryDestination::new(logger.identification().clone(), Level::Warning).unwrap();
/// let memory = Arc::new(memory);
/// memory.core().set_format("$L: $M");
/// assert!(logger.add_destination(memory.clone()));
///
/// let checkout = Context::custom("Payment 💸", true);
/// log_error!(logger, checkout, "card {} declined", 42);
/// logger.info(|| "not shown", &checkout, loghive::location!());
///
/// assert_eq!(memory.lines(), vec!["ERROR: card 42 declined"]);
/// ```
pub struct Logger {
    identification: Identification,
    destinations: RwLock<HashMap<DestinationId, Arc<dyn Destination>>>,
    console: Mutex<Option<Arc<ConsoleDestination>>>,
    tracing: Mutex<Option<Arc<TracingDestination>>>,
    channel: Mutex<Option<Arc<ChannelDestination>>>,
}

impl Logger {
    pub fn new(identification: Identification) -> Self {
        mark_process_start();
        Self {
            identification,
            destinations: RwLock::new(HashMap::new()),
            console: Mutex::new(None),
            tracing: Mutex::new(None),
            channel: Mutex::new(None),
        }
    }

    pub fn with_identifier(
        identifier: impl Into<String>,
        bundle_identifier: impl Into<String>,
    ) -> Self {
        Self::new(Identification::new(identifier, bundle_identifier))
    }

    pub fn identification(&self) -> &Identification {
        &self.identification
    }

    // ------------------------------------------------------------------
    // Logging calls
    // ------------------------------------------------------------------

    /// Something generally unimportant (lowest priority).
    pub fn verbose<M, F>(&self, message: F, context: &Context, location: Location)
    where
        F: FnOnce() -> M,
        M: Display,
    {
        self.custom(Level::Verbose, message, context, location);
    }

    /// Something that helps during debugging.
    pub fn debug<M, F>(&self, message: F, context: &Context, location: Location)
    where
        F: FnOnce() -> M,
        M: Display,
    {
        self.custom(Level::Debug, message, context, location);
    }

    /// Something worth knowing that is not an issue.
    pub fn info<M, F>(&self, message: F, context: &Context, location: Location)
    where
        F: FnOnce() -> M,
        M: Display,
    {
        self.custom(Level::Info, message, context, location);
    }

    /// Something that may cause trouble soon.
    pub fn warning<M, F>(&self, message: F, context: &Context, location: Location)
    where
        F: FnOnce() -> M,
        M: Display,
    {
        self.custom(Level::Warning, message, context, location);
    }

    /// Something that will keep you awake at night (highest priority).
    pub fn error<M, F>(&self, message: F, context: &Context, location: Location)
    where
        F: FnOnce() -> M,
        M: Display,
    {
        self.custom(Level::Error, message, context, location);
    }

    /// Logs at an explicit level. The leveled calls delegate here.
    pub fn custom<M, F>(&self, level: Level, message: F, context: &Context, location: Location)
    where
        F: FnOnce() -> M,
        M: Display,
    {
        if !context.is_enabled() {
            return;
        }

        let event = Arc::new(LogEvent {
            level,
            message: Arc::from(message().to_string()),
            context: context.clone(),
            file: location.file,
            function: strip_params(location.function),
            line: location.line,
            thread: thread_label(),
            timestamp: Utc::now(),
            uptime: process_uptime(),
        });

        for destination in self.destinations() {
            if !destination.should_accept(level) {
                continue;
            }

            let synchronously = !destination.core().is_asynchronous();
            let task_destination = Arc::clone(&destination);
            let task_event = Arc::clone(&event);

            destination.core().queue().execute(synchronously, move || {
                let line = task_destination.render(&task_event);
                task_destination.emit(&line, &task_event);
            });
        }
    }

    // ------------------------------------------------------------------
    // Destination set
    // ------------------------------------------------------------------

    /// Registers `destination`. Returns false if that instance is already
    /// registered.
    pub fn add_destination(&self, destination: Arc<dyn Destination>) -> bool {
        let mut destinations = self.write_destinations();
        let id = destination.id();
        if destinations.contains_key(&id) {
            return false;
        }

        let name = destination.name();
        destinations.insert(id, destination);

        let msg = DestinationAdded {
            destination: name,
            destination_id: id.get(),
            destination_count: destinations.len(),
        };
        let span = msg.span("add_destination");
        let _guard = span.enter();
        msg.log();
        true
    }

    /// Unregisters the destination with `id`. Returns false if it was not
    /// registered.
    pub fn remove_destination(&self, id: &DestinationId) -> bool {
        let mut destinations = self.write_destinations();
        let Some(removed) = destinations.remove(id) else {
            return false;
        };

        let msg = DestinationRemoved {
            destination: removed.name(),
            destination_id: id.get(),
            destination_count: destinations.len(),
        };
        let span = msg.span("remove_destination");
        let _guard = span.enter();
        msg.log();
        true
    }

    /// Unregisters every destination.
    pub fn remove_all_destinations(&self) {
        let mut destinations = self.write_destinations();
        let removed_count = destinations.len();
        destinations.clear();

        let msg = DestinationsCleared {
            logger: &self.identification.identifier,
            removed_count,
        };
        let span = msg.span("remove_all_destinations");
        let _guard = span.enter();
        msg.log();
    }

    pub fn count_destinations(&self) -> usize {
        self.read_destinations().len()
    }

    pub fn contains_destination(&self, id: &DestinationId) -> bool {
        self.read_destinations().contains_key(id)
    }

    /// Snapshot of the registered destinations, in no particular order.
    pub fn destinations(&self) -> Vec<Arc<dyn Destination>> {
        self.read_destinations().values().cloned().collect()
    }

    /// Blocks until every registered destination has emitted everything
    /// queued so far.
    pub fn flush(&self) {
        for destination in self.destinations() {
            destination.core().queue().flush();
        }
    }

    fn read_destinations(
        &self,
    ) -> std::sync::RwLockReadGuard<'_, HashMap<DestinationId, Arc<dyn Destination>>> {
        self.destinations.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_destinations(
        &self,
    ) -> std::sync::RwLockWriteGuard<'_, HashMap<DestinationId, Arc<dyn Destination>>> {
        self.destinations.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ------------------------------------------------------------------
    // Built-in destinations
    // ------------------------------------------------------------------

    /// Turns the console destination on or off and sets its minimum level.
    ///
    /// The console destination is created on first use and reused after.
    pub fn set_console(&self, enabled: bool, level: Level) -> Result<(), DestinationError> {
        let console = builtin(&self.console, || {
            ConsoleDestination::new(self.identification.clone(), level)
        })?;
        self.toggle(console, enabled, level);
        Ok(())
    }

    /// Turns the tracing bridge on or off and sets its minimum level.
    pub fn set_tracing(&self, enabled: bool, level: Level) -> Result<(), DestinationError> {
        let tracing = builtin(&self.tracing, || {
            TracingDestination::new(self.identification.clone(), level)
        })?;
        self.toggle(tracing, enabled, level);
        Ok(())
    }

    /// Turns the remote viewer bridge on or off and sets its minimum level.
    ///
    /// The first call creates the bridge and returns the receiving end of
    /// its channel; later calls return `None`.
    pub fn set_channel(
        &self,
        enabled: bool,
        level: Level,
    ) -> Result<Option<UnboundedReceiver<RemoteRecord>>, DestinationError> {
        let (channel, receiver) = {
            let mut slot = self.channel.lock().unwrap_or_else(PoisonError::into_inner);
            match slot.as_ref() {
                Some(existing) => (Arc::clone(existing), None),
                None => {
                    let (destination, receiver) =
                        ChannelDestination::new(self.identification.clone(), level)?;
                    let destination = Arc::new(destination);
                    *slot = Some(Arc::clone(&destination));
                    (destination, Some(receiver))
                }
            }
        };
        self.toggle(channel, enabled, level);
        Ok(receiver)
    }

    fn toggle(&self, destination: Arc<dyn Destination>, enabled: bool, level: Level) {
        destination.core().set_min_level(level);
        if enabled {
            self.add_destination(destination);
        } else {
            self.remove_destination(&destination.id());
        }
    }
}

fn builtin<D, F>(slot: &Mutex<Option<Arc<D>>>, build: F) -> Result<Arc<D>, DestinationError>
where
    F: FnOnce() -> Result<D, DestinationError>,
{
    let mut slot = slot.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(existing) = slot.as_ref() {
        return Ok(Arc::clone(existing));
    }

    let created = Arc::new(build()?);
    *slot = Some(Arc::clone(&created));
    Ok(created)
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let destinations = self.read_destinations();
        f.debug_struct("Logger")
            .field("identifier", &self.identification.identifier)
            .field("bundle_identifier", &self.identification.bundle_identifier)
            .field("destination_count", &destinations.len())
            .field(
                "destinations",
                &destinations
                    .values()
                    .map(|d| format!("{}{}", d.name(), d.id()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
