// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::destinations::DestinationSettings;
use crate::errors::ConfigError;
use crate::model::{Context, Identification, Level};
use crate::observability::messages::config::ConfigLoaded;
use crate::observability::messages::StructuredLog;

/// Logger configuration, usually loaded from a YAML file.
///
/// # Example
/// ```yaml
/// identifier: "💸"
/// bundle_identifier: com.bunny.payment
/// contexts:
///   - name: "Payment 💸"
///   - name: "CB 💳"
///     enabled: false
/// destinations:
///   - type: console
///     min_level: info
///   - type: tracing
///     min_level: warning
///     format: "$L $M"
///     asynchronously: false
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    pub identifier: String,
    #[serde(default)]
    pub bundle_identifier: String,
    #[serde(default)]
    pub contexts: Vec<ContextConfig>,
    #[serde(default)]
    pub destinations: Vec<DestinationConfig>,
}

impl Config {
    pub fn identification(&self) -> Identification {
        Identification::new(self.identifier.clone(), self.bundle_identifier.clone())
    }

    /// Context named `name`, disabled only if the config says so.
    pub fn context(&self, name: &str) -> Context {
        let enabled = self
            .contexts
            .iter()
            .find(|ctx| ctx.name == name)
            .map_or(true, |ctx| ctx.enabled);
        Context::custom(name, enabled)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ContextConfig {
    pub name: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

/// Sink kinds that can be declared in configuration.
///
/// The channel bridge is absent: its receiver has to be wired up in code.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DestinationKind {
    Console,
    Tracing,
    Memory,
}

/// One destination entry. Everything but `type` is optional; unset fields
/// keep the sink's own defaults.
#[derive(Debug, Deserialize, Clone)]
pub struct DestinationConfig {
    #[serde(rename = "type")]
    pub kind: DestinationKind,
    #[serde(default)]
    pub min_level: Level,
    pub format: Option<String>,
    pub asynchronously: Option<bool>,
    #[serde(default)]
    pub level_words: LevelOverrides,
    #[serde(default)]
    pub level_colors: LevelOverrides,
    pub color_escape: Option<String>,
    pub color_reset: Option<String>,
}

impl DestinationConfig {
    /// Applies every field that is set onto `settings`.
    pub fn apply(&self, settings: &mut DestinationSettings) {
        settings.min_level = self.min_level;
        if let Some(format) = &self.format {
            settings.set_format(format);
        }
        if let Some(asynchronously) = self.asynchronously {
            settings.asynchronous = asynchronously;
        }
        for (level, word) in self.level_words.iter() {
            settings.level_words.set(level, word.to_string());
        }
        for (level, color) in self.level_colors.iter() {
            settings.level_colors.set(level, color.to_string());
        }
        if let Some(escape) = &self.color_escape {
            settings.color_escape = escape.clone();
        }
        if let Some(reset) = &self.color_reset {
            settings.color_reset = reset.clone();
        }
    }
}

/// Per-level replacements for level words or colors.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct LevelOverrides {
    pub verbose: Option<String>,
    pub debug: Option<String>,
    pub info: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
}

impl LevelOverrides {
    /// The overrides that are set, lowest level first.
    pub fn iter(&self) -> impl Iterator<Item = (Level, &str)> {
        [
            (Level::Verbose, &self.verbose),
            (Level::Debug, &self.debug),
            (Level::Info, &self.info),
            (Level::Warning, &self.warning),
            (Level::Error, &self.error),
        ]
        .into_iter()
        .filter_map(|(level, value)| value.as_deref().map(|v| (level, v)))
    }
}

/// Loads a config from `path`, choosing the parser by file extension.
///
/// `.yaml` and `.yml` are parsed as YAML, `.toml` as TOML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config: Config = match extension.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&content)?,
        "toml" => toml::from_str(&content)?,
        _ => return Err(ConfigError::UnsupportedExtension { extension }),
    };

    let display_path = path.display().to_string();
    let msg = ConfigLoaded {
        path: &display_path,
        identifier: &config.identifier,
        destination_count: config.destinations.len(),
        context_count: config.contexts.len(),
    };
    let span = msg.span("load_config");
    let _guard = span.enter();
    msg.log();

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_yaml_config() {
        let file = write_config(
            ".yaml",
            r#"
identifier: "💸"
bundle_identifier: com.bunny.payment
contexts:
  - name: "Payment 💸"
  - name: "CB 💳"
    enabled: false
destinations:
  - type: console
    min_level: info
  - type: memory
    min_level: warning
    format: "$L $M"
    asynchronously: false
    level_words:
      warning: WARN
"#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.identifier, "💸");
        assert_eq!(config.bundle_identifier, "com.bunny.payment");
        assert_eq!(config.contexts.len(), 2);
        assert!(config.contexts[0].enabled);
        assert!(!config.contexts[1].enabled);

        assert_eq!(config.destinations.len(), 2);
        assert_eq!(config.destinations[0].kind, DestinationKind::Console);
        assert_eq!(config.destinations[0].min_level, Level::Info);
        assert_eq!(config.destinations[0].format, None);
        assert_eq!(config.destinations[1].kind, DestinationKind::Memory);
        assert_eq!(config.destinations[1].asynchronously, Some(false));
        assert_eq!(config.destinations[1].level_words.warning.as_deref(), Some("WARN"));
    }

    #[test]
    fn test_bundled_demo_config() {
        let config = load_config("configs/payment-funnel.yaml").unwrap();
        assert_eq!(config.identifier, "💸");
        assert_eq!(config.destinations.len(), 3);
        assert!(!config.context("CB 💳").is_enabled());
        assert!(config.context("Paypal 💰").is_enabled());

        let detailed = &config.destinations[1];
        assert_eq!(detailed.asynchronously, Some(false));
        assert_eq!(detailed.color_escape.as_deref(), Some("\u{1b}["));
        assert_eq!(detailed.level_colors.iter().count(), 2);
    }

    #[test]
    fn test_load_toml_config() {
        let file = write_config(
            ".toml",
            r#"
identifier = "💸"

[[destinations]]
type = "tracing"
min_level = "error"
color_escape = "\u001b[38;5;"
"#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.bundle_identifier, "");
        assert!(config.contexts.is_empty());
        assert_eq!(config.destinations[0].kind, DestinationKind::Tracing);
        assert_eq!(config.destinations[0].min_level, Level::Error);
        assert_eq!(config.destinations[0].color_escape.as_deref(), Some("\u{1b}[38;5;"));
    }

    #[test]
    fn test_load_is_reported_inside_its_span() {
        let file = write_config(".yaml", "identifier: traced\n");

        let output = crate::observability::messages::capture_logs(|| {
            load_config(file.path()).unwrap();
        });

        assert!(output.contains("config_loaded{"), "{}", output);
        assert!(output.contains("span_name=\"load_config\""), "{}", output);
        assert!(output.contains("Loaded logging config"), "{}", output);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_config(".json", "{}");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnsupportedExtension { ref extension } if extension == "json"
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/nonexistent/logging.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_unknown_destination_type() {
        let file = write_config(
            ".yml",
            "identifier: x\ndestinations:\n  - type: carrier_pigeon\n",
        );
        assert!(matches!(load_config(file.path()), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_context_lookup() {
        let config: Config = serde_yaml::from_str(
            "identifier: x\ncontexts:\n  - name: muted\n    enabled: false\n",
        )
        .unwrap();

        assert!(!config.context("muted").is_enabled());
        assert!(config.context("unlisted").is_enabled());
        assert_eq!(config.context("muted").key(), "muted");
    }

    #[test]
    fn test_apply_keeps_unset_fields() {
        let entry: DestinationConfig = serde_yaml::from_str(
            concat!(
                "type: memory\nmin_level: debug\n",
                "level_colors:\n  error: '196m'\n",
                "color_reset: \"\\e[0m\"\n",
            ),
        )
        .unwrap();

        let mut settings = DestinationSettings::new(Level::Verbose);
        let default_format = settings.format().to_string();
        entry.apply(&mut settings);

        assert_eq!(settings.min_level, Level::Debug);
        assert_eq!(settings.format(), default_format);
        assert!(settings.asynchronous);
        assert_eq!(settings.level_colors.get(Level::Error), "196m");
        assert_eq!(settings.level_colors.get(Level::Info), "");
        assert_eq!(settings.level_words.get(Level::Info), "INFO");
        assert_eq!(settings.color_reset, "\u{1b}[0m");
    }
}
