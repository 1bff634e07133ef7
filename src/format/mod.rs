// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Format pattern interpreter used by every destination to turn an event
//! into a line of text.

mod padding;
mod pattern;
mod render;

pub use padding::{pad, parse_padding};
pub use pattern::{DatePattern, Directive, Pattern, Segment, DELIMITER};
pub use render::{format_uptime, RenderContext};
