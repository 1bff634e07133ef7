// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Severity of a log call, ordered from least to most important.
///
/// Comparisons follow severity: `Verbose < Debug < Info < Warning < Error`.
/// A destination accepts every level at or above its minimum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// Something generally unimportant (lowest priority)
    #[default]
    Verbose,
    /// Something that helps during debugging
    Debug,
    /// Something worth knowing that is not an issue
    Info,
    /// Something that may cause trouble soon
    Warning,
    /// Something that will keep you awake at night (highest priority)
    Error,
}

impl Level {
    /// Every level, lowest severity first.
    pub const ALL: [Level; 5] = [
        Level::Verbose,
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Verbose => "verbose",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown log level: '{0}'")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbose" => Ok(Level::Verbose),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// One value per level.
///
/// Destinations keep two of these: the word rendered by `$L` and the color
/// rendered by `$C`. Either can be overridden level by level.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct LevelTable<T> {
    pub verbose: T,
    pub debug: T,
    pub info: T,
    pub warning: T,
    pub error: T,
}

impl<T> LevelTable<T> {
    pub fn get(&self, level: Level) -> &T {
        match level {
            Level::Verbose => &self.verbose,
            Level::Debug => &self.debug,
            Level::Info => &self.info,
            Level::Warning => &self.warning,
            Level::Error => &self.error,
        }
    }

    pub fn set(&mut self, level: Level, value: T) {
        match level {
            Level::Verbose => self.verbose = value,
            Level::Debug => self.debug = value,
            Level::Info => self.info = value,
            Level::Warning => self.warning = value,
            Level::Error => self.error = value,
        }
    }
}

impl LevelTable<String> {
    /// `VERBOSE`, `DEBUG`, `INFO`, `WARNING`, `ERROR`
    pub fn default_words() -> Self {
        Self {
            verbose: "VERBOSE".to_string(),
            debug: "DEBUG".to_string(),
            info: "INFO".to_string(),
            warning: "WARNING".to_string(),
            error: "ERROR".to_string(),
        }
    }

    /// Colored circle markers used by the console and tracing sinks.
    pub fn emoji_colors() -> Self {
        Self {
            verbose: "⚪️ ".to_string(),
            debug: "☑️ ".to_string(),
            info: "🔵 ".to_string(),
            warning: "🔶 ".to_string(),
            error: "🔴 ".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered_by_severity() {
        for (i, low) in Level::ALL.iter().enumerate() {
            for high in &Level::ALL[i + 1..] {
                assert!(low < high, "{} should be below {}", low, high);
            }
        }
    }

    #[test]
    fn test_default_level_accepts_everything() {
        assert_eq!(Level::default(), Level::Verbose);
        assert!(Level::ALL.iter().all(|level| *level >= Level::default()));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!(" Error ".parse::<Level>().unwrap(), Level::Error);
        let err = "loud".parse::<Level>().unwrap_err();
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_level_table_get_and_set() {
        let mut words = LevelTable::default_words();
        assert_eq!(words.get(Level::Warning), "WARNING");

        words.set(Level::Warning, "WARN".to_string());
        assert_eq!(words.get(Level::Warning), "WARN");
        assert_eq!(words.get(Level::Error), "ERROR");
    }

    #[test]
    fn test_default_colors_are_empty() {
        let colors: LevelTable<String> = LevelTable::default();
        for level in Level::ALL {
            assert!(colors.get(level).is_empty());
        }
    }
}
