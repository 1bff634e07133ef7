// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Local, TimeZone};
use std::fmt::{Display, Write};
use std::time::Duration;

use super::padding::pad;
use super::pattern::{DatePattern, Directive, Pattern};
use crate::model::{LevelTable, LogEvent};

/// Everything a pattern can refer to while rendering one event.
pub struct RenderContext<'a> {
    pub event: &'a LogEvent,
    pub identifier: &'a str,
    pub level_words: &'a LevelTable<String>,
    pub level_colors: &'a LevelTable<String>,
    pub color_escape: &'a str,
    pub color_reset: &'a str,
}

impl Pattern {
    /// Renders the pattern for one event and trims trailing whitespace.
    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        let event = ctx.event;
        let mut text = String::new();

        for segment in self.segments() {
            let field = match &segment.directive {
                Directive::Passthrough => None,
                Directive::Identifier => Some(ctx.identifier.to_string()),
                Directive::Level => Some(ctx.level_words.get(event.level).clone()),
                Directive::Message => Some(event.message.to_string()),
                Directive::Thread => Some(event.thread.clone()),
                Directive::FileStem => Some(event.file_stem().to_string()),
                Directive::FileName => Some(event.file_name().to_string()),
                Directive::Function => Some(event.function.clone()),
                Directive::Line => Some(event.line.to_string()),
                Directive::LocalDate(date) => {
                    Some(format_date(&event.timestamp.with_timezone(&Local), date))
                }
                Directive::UtcDate(date) => Some(format_date(&event.timestamp, date)),
                Directive::Uptime => Some(format_uptime(event.uptime)),
                Directive::Context => Some(event.context.key().to_string()),
                Directive::ColorStart => {
                    text.push_str(ctx.color_escape);
                    text.push_str(ctx.level_colors.get(event.level));
                    None
                }
                Directive::ColorReset => {
                    text.push_str(ctx.color_reset);
                    None
                }
                Directive::Literal(phrase) => {
                    text.push_str(phrase);
                    None
                }
            };

            if let Some(field) = field {
                text.push_str(&pad(&field, segment.padding));
            }
            text.push_str(&segment.trailing);
        }

        text.truncate(text.trim_end().len());
        text
    }
}

fn format_date<Tz>(timestamp: &DateTime<Tz>, date: &DatePattern) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if !date.valid {
        return date.strftime.clone();
    }

    let mut out = String::new();
    match write!(out, "{}", timestamp.format(&date.strftime)) {
        Ok(()) => out,
        Err(_) => date.strftime.clone(),
    }
}

/// `HH:MM:SS.mmm`; hours keep counting past 24.
pub fn format_uptime(uptime: Duration) -> String {
    let total_secs = uptime.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let seconds = total_secs % 60;
    let millis = uptime.subsec_millis();

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}
