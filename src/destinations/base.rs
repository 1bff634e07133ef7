// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::consts::DEFAULT_FORMAT;
use crate::engine::queue::SerialQueue;
use crate::errors::DestinationError;
use crate::format::{Pattern, RenderContext};
use crate::model::{mark_process_start, Identification, Level, LevelTable, LogEvent};

static NEXT_DESTINATION_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one destination instance.
///
/// Every constructed destination gets a fresh id, so two destinations with
/// identical settings are still distinct members of a logger's set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DestinationId(u64);

impl DestinationId {
    fn next() -> Self {
        Self(NEXT_DESTINATION_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Mutable configuration of a destination.
#[derive(Debug, Clone)]
pub struct DestinationSettings {
    /// Events strictly below this level are never rendered.
    pub min_level: Level,
    pattern: Pattern,
    /// Word rendered by `$L`, per level.
    pub level_words: LevelTable<String>,
    /// Color rendered by `$C`, per level. Empty by default.
    pub level_colors: LevelTable<String>,
    /// Emitted by `$C` before the level color.
    pub color_escape: String,
    /// Emitted by `$c`.
    pub color_reset: String,
    /// Fire-and-forget when true, caller waits for emission when false.
    pub asynchronous: bool,
}

impl DestinationSettings {
    pub fn new(min_level: Level) -> Self {
        Self {
            min_level,
            pattern: Pattern::compile(DEFAULT_FORMAT),
            level_words: LevelTable::default_words(),
            level_colors: LevelTable::default(),
            color_escape: String::new(),
            color_reset: String::new(),
            asynchronous: true,
        }
    }

    pub fn format(&self) -> &str {
        self.pattern.source()
    }

    /// Replaces the output pattern. Any text is accepted.
    pub fn set_format(&mut self, format: &str) {
        self.pattern = Pattern::compile(format);
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

impl Default for DestinationSettings {
    fn default() -> Self {
        Self::new(Level::Verbose)
    }
}

/// State shared by every destination: identity, settings and the serial
/// queue its output runs on.
///
/// The queue is created here and never replaced, which is what makes
/// per-destination output ordered.
pub struct DestinationCore {
    id: DestinationId,
    identification: Identification,
    settings: RwLock<DestinationSettings>,
    queue: SerialQueue,
}

impl DestinationCore {
    /// Builds the core and starts its queue worker.
    ///
    /// `kind` names the sink in the worker thread name, e.g.
    /// `loghive-console-4`.
    pub fn new(
        kind: &str,
        identification: Identification,
        min_level: Level,
    ) -> Result<Self, DestinationError> {
        Self::with_settings(kind, identification, DestinationSettings::new(min_level))
    }

    pub fn with_settings(
        kind: &str,
        identification: Identification,
        settings: DestinationSettings,
    ) -> Result<Self, DestinationError> {
        mark_process_start();
        let id = DestinationId::next();
        let queue = SerialQueue::new(format!("{}-{}", kind, id.get()))?;

        Ok(Self {
            id,
            identification,
            settings: RwLock::new(settings),
            queue,
        })
    }

    pub fn id(&self) -> DestinationId {
        self.id
    }

    pub fn identification(&self) -> &Identification {
        &self.identification
    }

    pub fn queue(&self) -> &SerialQueue {
        &self.queue
    }

    /// Read access to the settings. Recovers from a poisoned lock.
    pub fn settings(&self) -> RwLockReadGuard<'_, DestinationSettings> {
        self.settings.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access to the settings. Recovers from a poisoned lock.
    pub fn settings_mut(&self) -> RwLockWriteGuard<'_, DestinationSettings> {
        self.settings.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn should_accept(&self, level: Level) -> bool {
        level >= self.settings().min_level
    }

    pub fn render(&self, event: &LogEvent) -> String {
        let settings = self.settings();
        let ctx = RenderContext {
            event,
            identifier: &self.identification.identifier,
            level_words: &settings.level_words,
            level_colors: &settings.level_colors,
            color_escape: &settings.color_escape,
            color_reset: &settings.color_reset,
        };
        settings.pattern().render(&ctx)
    }

    pub fn min_level(&self) -> Level {
        self.settings().min_level
    }

    pub fn set_min_level(&self, level: Level) {
        self.settings_mut().min_level = level;
    }

    pub fn format(&self) -> String {
        self.settings().format().to_string()
    }

    pub fn set_format(&self, format: &str) {
        self.settings_mut().set_format(format);
    }

    pub fn set_level_word(&self, level: Level, word: impl Into<String>) {
        self.settings_mut().level_words.set(level, word.into());
    }

    pub fn set_level_color(&self, level: Level, color: impl Into<String>) {
        self.settings_mut().level_colors.set(level, color.into());
    }

    pub fn set_color_escape(&self, escape: impl Into<String>) {
        self.settings_mut().color_escape = escape.into();
    }

    pub fn set_color_reset(&self, reset: impl Into<String>) {
        self.settings_mut().color_reset = reset.into();
    }

    pub fn is_asynchronous(&self) -> bool {
        self.settings().asynchronous
    }

    pub fn set_asynchronous(&self, asynchronous: bool) {
        self.settings_mut().asynchronous = asynchronous;
    }
}

impl fmt::Debug for DestinationCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let settings = self.settings();
        f.debug_struct("DestinationCore")
            .field("id", &self.id)
            .field("identifier", &self.identification.identifier)
            .field("min_level", &settings.min_level)
            .field("format", &settings.format())
            .field("asynchronous", &settings.asynchronous)
            .field("queue", &self.queue.label())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Context;
    use chrono::Utc;
    use std::sync::Arc;

    fn core(min_level: Level) -> DestinationCore {
        DestinationCore::new("test", Identification::new("💸", "com.bunny.payment"), min_level)
            .unwrap()
    }

    fn event(level: Level, message: &str) -> LogEvent {
        LogEvent {
            level,
            message: Arc::from(message),
            context: Context::app(),
            file: "src/lib.rs",
            function: "run()".to_string(),
            line: 1,
            thread: String::new(),
            timestamp: Utc::now(),
            uptime: std::time::Duration::ZERO,
        }
    }

    #[test]
    fn test_ids_are_unique_for_identical_settings() {
        let a = core(Level::Info);
        let b = core(Level::Info);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_min_level_boundary_is_inclusive() {
        for (i, min) in Level::ALL.iter().enumerate() {
            let core = core(*min);
            for below in &Level::ALL[..i] {
                assert!(!core.should_accept(*below), "{} < {}", below, min);
            }
            for at_or_above in &Level::ALL[i..] {
                assert!(core.should_accept(*at_or_above), "{} >= {}", at_or_above, min);
            }
        }
    }

    #[test]
    fn test_default_settings() {
        let core = core(Level::Verbose);
        assert_eq!(core.min_level(), Level::Verbose);
        assert_eq!(core.format(), DEFAULT_FORMAT);
        assert!(core.is_asynchronous());
    }

    #[test]
    fn test_render_uses_own_settings() {
        let core = core(Level::Verbose);
        core.set_format("$C$i $L$c: $M");
        core.set_level_word(Level::Error, "ERR");
        core.set_level_color(Level::Error, "31m");
        core.set_color_escape("\u{1b}[");
        core.set_color_reset("\u{1b}[0m");

        assert_eq!(
            core.render(&event(Level::Error, "boom")),
            "\u{1b}[31m💸 ERR\u{1b}[0m: boom"
        );
    }

    #[test]
    fn test_queue_label_includes_kind_and_id() {
        let core = core(Level::Verbose);
        assert_eq!(core.queue().label(), format!("test-{}", core.id().get()));
    }
}
