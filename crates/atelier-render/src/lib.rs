//! Terminal rendering for Atelier exercise help.
//!
//! This crate turns [`HelpRecord`]s into user-facing text. Two renderers
//! implement the same [`Renderer`] contract:
//!
//! - [`RichRenderer`] - collapsible-style panels with semantic colors, for
//!   interactive terminals
//! - [`PlainRenderer`] - rule-delimited monochrome blocks, for pipes, logs,
//!   and dumb terminals
//!
//! Which one a session gets is decided once, when the helper is built, from
//! a [`RenderMode`] and (for [`RenderMode::Auto`]) a single environment
//! probe. Rendering itself never fails: unknown identifiers become visible
//! notices, not errors.
//!
//! # Example
//!
//! ```rust
//! use atelier_content::{Registry, Topic};
//! use atelier_render::{build_renderer, Renderer};
//!
//! let renderer = build_renderer(false, 50);
//! let registry = Registry::for_topic(Topic::Docker);
//!
//! let record = registry.lookup("5.1.1").unwrap();
//! let text = renderer.help(Topic::Docker, record);
//! assert!(text.contains("AIDE 5.1.1 - DOCKER"));
//! ```

mod plain;
mod probe;
mod rich;
pub mod style;

pub use plain::PlainRenderer;
pub use probe::interactive_surface_available;
pub use rich::RichRenderer;

use std::str::FromStr;

use atelier_content::{HelpRecord, Topic};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when resolving a render mode from user input.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The requested mode name is not recognized.
    #[error("invalid render mode '{name}': expected one of 'auto', 'rich', 'plain'\n\nSuggestion: pass --render auto|rich|plain or set renderMode in atelier.json")]
    UnknownMode {
        /// The name that failed to resolve.
        name: String,
    },
}

/// How a session chooses between the two renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Probe the environment once and pick rich or plain (default).
    #[default]
    Auto,
    /// Always render panels and colors.
    Rich,
    /// Always render monochrome blocks.
    Plain,
}

impl RenderMode {
    /// Parses a string into a `RenderMode`, case-insensitively.
    fn from_str_case_insensitive(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "rich" => Some(Self::Rich),
            "plain" => Some(Self::Plain),
            _ => None,
        }
    }

    /// Resolves the mode to a concrete rich-or-plain decision.
    ///
    /// [`RenderMode::Auto`] consults the environment probe; the explicit
    /// modes ignore it. This is the only place the probe is consulted, so
    /// callers that store the result get a decision that holds for the
    /// lifetime of their session.
    #[must_use]
    pub fn wants_rich(self) -> bool {
        match self {
            Self::Rich => true,
            Self::Plain => false,
            Self::Auto => probe::interactive_surface_available(),
        }
    }
}

impl FromStr for RenderMode {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_case_insensitive(s).ok_or_else(|| RenderError::UnknownMode {
            name: s.to_string(),
        })
    }
}

impl<'de> Deserialize<'de> for RenderMode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str_case_insensitive(&s).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid render mode '{s}': expected one of 'auto', 'rich', 'plain'"
            ))
        })
    }
}

impl Serialize for RenderMode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let s = match self {
            Self::Auto => "auto",
            Self::Rich => "rich",
            Self::Plain => "plain",
        };
        serializer.serialize_str(s)
    }
}

/// Rendering contract shared by the rich and plain backends.
///
/// Every method returns the finished text, trailing newline included, and
/// never fails. Missing content is reported through [`not_found`] and
/// [`template_not_found`] rather than through errors, so presentation code
/// can stay infallible.
///
/// [`not_found`]: Renderer::not_found
/// [`template_not_found`]: Renderer::template_not_found
pub trait Renderer: Send + Sync {
    /// Renders a full help entry: hint, explanation, and solution.
    fn help(&self, topic: Topic, record: &HelpRecord) -> String;

    /// Renders the notice for an identifier with no help entry.
    ///
    /// The notice names the identifier and lists the identifiers that do
    /// exist for the topic.
    fn not_found(&self, topic: Topic, identifier: &str, available: &[&str]) -> String;

    /// Renders a celebratory banner wrapping `message` in the topic emblem.
    fn banner(&self, topic: Topic, message: &str) -> String;

    /// Renders a standalone hint.
    fn hint(&self, topic: Topic, text: &str) -> String;

    /// Renders a standalone solution, optionally with an explanation.
    fn solution(&self, topic: Topic, code: &str, explanation: Option<&str>) -> String;

    /// Renders a blank exercise scaffold ready to be copied.
    fn template(&self, topic: Topic, identifier: &str, body: &str) -> String;

    /// Renders the notice for an identifier with no scaffold.
    fn template_not_found(&self, topic: Topic, identifier: &str, available: &[&str]) -> String;

    /// Renders the topic overview: known identifiers and scaffolds.
    fn overview(&self, topic: Topic, identifiers: &[&str], templates: &[&str]) -> String;
}

/// Builds the renderer matching an already-resolved rich-or-plain decision.
///
/// `rule_width` controls the horizontal rules of the plain renderer and is
/// ignored by the rich one.
#[must_use]
pub fn build_renderer(rich: bool, rule_width: usize) -> Box<dyn Renderer> {
    if rich {
        Box::new(RichRenderer::new())
    } else {
        Box::new(PlainRenderer::new(rule_width))
    }
}
