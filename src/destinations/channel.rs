// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use tokio::sync::mpsc;

use super::DestinationCore;
use crate::errors::DestinationError;
use crate::model::{Identification, Level, LogEvent};
use crate::traits::Destination;

/// One log line as handed to a remote viewer.
///
/// The viewer gets both the rendered line and the raw fields so it can do
/// its own filtering by domain (the context key) and level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRecord {
    pub domain: String,
    pub level: Level,
    pub message: String,
    pub file: String,
    pub function: String,
    pub line: u32,
    pub line_text: String,
}

/// Bridges log lines to a remote log viewer through a tokio channel.
///
/// The destination only feeds the channel; the task that owns the receiver
/// is responsible for getting records to the viewer. Once the receiver is
/// dropped, records are discarded.
pub struct ChannelDestination {
    core: DestinationCore,
    sender: mpsc::UnboundedSender<RemoteRecord>,
}

impl ChannelDestination {
    pub fn new(
        identification: Identification,
        min_level: Level,
    ) -> Result<(Self, mpsc::UnboundedReceiver<RemoteRecord>), DestinationError> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let destination = Self {
            core: DestinationCore::new("channel", identification, min_level)?,
            sender,
        };
        Ok((destination, receiver))
    }
}

impl Destination for ChannelDestination {
    fn core(&self) -> &DestinationCore {
        &self.core
    }

    fn emit(&self, line: &str, event: &LogEvent) {
        let record = RemoteRecord {
            domain: event.context.key().to_string(),
            level: event.level,
            message: event.message.to_string(),
            file: event.file.to_string(),
            function: event.function.clone(),
            line: event.line,
            line_text: line.to_string(),
        };
        let _ = self.sender.send(record);
    }

    fn name(&self) -> &'static str {
        "channel"
    }
}
