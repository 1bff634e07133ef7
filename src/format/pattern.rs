// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Compilation of format patterns into directive segments.
//!
//! A pattern is plain text in which `$` introduces a directive. The
//! character after the `$` (and after an optional signed width such as
//! `-10`) selects the field; the rest of the phrase up to the next `$` is
//! literal text appended after the field.
//!
//! ```text
//! "$D%H:%M:%S$d $C$L$c $N.$F:$l - $M"
//!   |           |  | |  |  |  |    message
//!   |           |  | |  |  |  line number
//!   |           |  | |  |  function
//!   |           |  | |  file name without extension
//!   |           |  | color reset
//!   |           |  level word
//!   |           color start
//!   local time formatted with the strftime pattern up to `$d`
//! ```
//!
//! Compilation never fails. Unknown directives keep their phrase as
//! literal text so a mistyped pattern still produces readable output.

use chrono::format::{Item, StrftimeItems};

use super::padding::parse_padding;

/// Marks the start of a directive.
pub const DELIMITER: char = '$';

/// Field selected by one directive character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `I`, `d`, `z`: nothing rendered, trailing text kept
    Passthrough,
    /// `i`
    Identifier,
    /// `L`
    Level,
    /// `M`
    Message,
    /// `T`
    Thread,
    /// `N`
    FileStem,
    /// `n`
    FileName,
    /// `F`
    Function,
    /// `l`
    Line,
    /// `D`, trailing text is the strftime pattern
    LocalDate(DatePattern),
    /// `Z`, trailing text is the strftime pattern
    UtcDate(DatePattern),
    /// `U`
    Uptime,
    /// `C`
    ColorStart,
    /// `c`
    ColorReset,
    /// `X`
    Context,
    /// Anything else. Holds the whole phrase, rendered verbatim.
    Literal(String),
}

/// A strftime pattern checked once at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    pub strftime: String,
    pub valid: bool,
}

impl DatePattern {
    fn new(strftime: &str) -> Self {
        let valid = !StrftimeItems::new(strftime).any(|item| matches!(item, Item::Error));
        Self {
            strftime: strftime.to_string(),
            valid,
        }
    }
}

/// One `$`-delimited phrase of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub directive: Directive,
    pub padding: i32,
    /// Literal text following the directive character. Empty for dates,
    /// whose trailing text is consumed as the date pattern.
    pub trailing: String,
}

/// A compiled format pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Compiles `source` into segments.
    ///
    /// The source is prefixed with `$I` so text before the first `$` is
    /// never mistaken for a directive.
    ///
    /// # Example
    /// ```
    /// use loghive::format::{Directive, Pattern};
    ///
    /// let pattern = Pattern::compile("$-10L|$M");
    /// let directives: Vec<&Directive> = pattern.segments().iter().map(|s| &s.directive).collect();
    ///
    /// assert_eq!(
    ///     directives,
    ///     vec![&Directive::Passthrough, &Directive::Level, &Directive::Message]
    /// );
    /// assert_eq!(pattern.segments()[1].padding, -10);
    /// ```
    pub fn compile(source: &str) -> Self {
        let prefixed = format!("{}I{}", DELIMITER, source);
        let segments = prefixed
            .split(DELIMITER)
            .filter(|phrase| !phrase.is_empty())
            .map(compile_phrase)
            .collect();

        Self {
            source: source.to_string(),
            segments,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

fn compile_phrase(phrase: &str) -> Segment {
    let (padding, offset) = parse_padding(phrase);
    let rest = &phrase[offset..];

    let mut chars = rest.chars();
    let Some(directive_char) = chars.next() else {
        return literal(phrase);
    };
    let trailing = chars.as_str();

    let directive = match directive_char {
        'I' | 'd' | 'z' => Directive::Passthrough,
        'i' => Directive::Identifier,
        'L' => Directive::Level,
        'M' => Directive::Message,
        'T' => Directive::Thread,
        'N' => Directive::FileStem,
        'n' => Directive::FileName,
        'F' => Directive::Function,
        'l' => Directive::Line,
        'D' => {
            return Segment {
                directive: Directive::LocalDate(DatePattern::new(trailing)),
                padding,
                trailing: String::new(),
            }
        }
        'Z' => {
            return Segment {
                directive: Directive::UtcDate(DatePattern::new(trailing)),
                padding,
                trailing: String::new(),
            }
        }
        'U' => Directive::Uptime,
        'C' => Directive::ColorStart,
        'c' => Directive::ColorReset,
        'X' => Directive::Context,
        _ => return literal(phrase),
    };

    Segment {
        directive,
        padding,
        trailing: trailing.to_string(),
    }
}

fn literal(phrase: &str) -> Segment {
    Segment {
        directive: Directive::Literal(phrase.to_string()),
        padding: 0,
        trailing: String::new(),
    }
}
