//! Configuration for help sessions.
//!
//! The configuration controls rendering (mode and rule width), the shell
//! prompt, and the topic loaded when none is named on the command line.
//! It lives in an optional `atelier.json` next to the student's exercises;
//! a missing file means defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use atelier_content::Topic;
use atelier_render::{PlainRenderer, RenderMode};

use crate::error::{Result, SessionError};

/// The default config file name.
const CONFIG_FILE_NAME: &str = "atelier.json";

/// Default prompt shown in the interactive shell.
fn default_prompt() -> String {
    "atelier> ".to_string()
}

/// Default width of the horizontal rules in plain output.
const fn default_rule_width() -> usize {
    PlainRenderer::DEFAULT_RULE_WIDTH
}

/// Main configuration for a help session.
///
/// All fields have sensible defaults so an empty `atelier.json` (or none
/// at all) yields a working session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// How help output is rendered.
    #[serde(default)]
    pub render_mode: RenderMode,

    /// Topic loaded when none is named on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_topic: Option<Topic>,

    /// Prompt shown in the interactive shell.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Width of the horizontal rules in plain output.
    #[serde(default = "default_rule_width")]
    pub rule_width: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            render_mode: RenderMode::default(),
            default_topic: None,
            prompt: default_prompt(),
            rule_width: default_rule_width(),
        }
    }
}

impl SessionConfig {
    /// Loads configuration from the current working directory.
    ///
    /// Looks for `atelier.json` in the current directory. If found, loads and
    /// validates the configuration. If not found, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but contains invalid JSON.
    pub fn load() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            SessionError::config_parse(
                "<current directory>",
                format!("cannot determine current directory: {e}"),
            )
        })?;
        Self::load_from_dir(&current_dir)
    }

    /// Loads configuration from a specific directory.
    ///
    /// Looks for `atelier.json` in the given directory. If found, loads and
    /// validates the configuration. If not found, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but contains invalid JSON.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        Self::load_from_file(&config_path)
    }

    /// Loads configuration from a specific file path.
    ///
    /// If the file does not exist, returns default configuration.
    /// If the file exists but contains invalid JSON, returns an error.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::ConfigParseError` if the file exists but contains
    /// invalid JSON or invalid enum values.
    ///
    /// Returns `SessionError::ConfigValidationError` if the configuration values
    /// are invalid (e.g., an empty prompt or a rule width too narrow to read).
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = Self::default();
                config.validate()?;
                return Ok(config);
            }
            Err(e) => {
                return Err(SessionError::config_parse(
                    path,
                    format!("failed to read file: {e}"),
                ));
            }
        };

        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| SessionError::config_parse(path, e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values.
    ///
    /// Checks that all fields have usable values:
    /// - `prompt` must not be empty
    /// - `rule_width` must be at least 10
    ///
    /// # Errors
    ///
    /// Returns `SessionError::ConfigValidationError` if any validation check fails.
    pub fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(SessionError::config_validation(
                "prompt must not be empty",
                "Provide a prompt string in your atelier.json (the default is 'atelier> ')",
            ));
        }

        if self.rule_width < 10 {
            return Err(SessionError::config_validation(
                "ruleWidth must be at least 10",
                "Set ruleWidth to 10 or more in your atelier.json",
            ));
        }

        Ok(())
    }
}
