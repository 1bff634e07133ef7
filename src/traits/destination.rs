// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::destinations::{DestinationCore, DestinationId};
use crate::model::{Level, LogEvent};

/// A configured sink that filters by level and renders and emits log lines
/// on its own serial queue.
///
/// Implementors embed a [`DestinationCore`] holding the shared settings and
/// queue, and supply only the side effect in [`emit`](Destination::emit).
/// Filtering and rendering come from the core.
pub trait Destination: Send + Sync {
    fn core(&self) -> &DestinationCore;

    /// Delivers one rendered line. Runs on this destination's queue.
    fn emit(&self, line: &str, event: &LogEvent);

    fn name(&self) -> &'static str;

    fn id(&self) -> DestinationId {
        self.core().id()
    }

    /// `level >= min_level`. The only per-destination filter.
    fn should_accept(&self, level: Level) -> bool {
        self.core().should_accept(level)
    }

    /// Applies this destination's format pattern to `event`.
    fn render(&self, event: &LogEvent) -> String {
        self.core().render(event)
    }
}
