//! Atelier exercise content
//!
//! This crate holds the static help content for the Atelier course: seven
//! topics, each mapping dotted exercise identifiers (`"3.2.1"`) to a
//! [`HelpRecord`] with a hint, a worked solution, and an explanation.
//!
//! # Types
//!
//! - [`Topic`] - The seven course chapters and their display metadata
//! - [`HelpRecord`] - One exercise's pedagogical payload
//! - [`Registry`] - Immutable identifier → record map for one topic
//! - [`Catalog`] - Serializable index of every topic's identifiers
//!
//! # Example
//!
//! ```rust
//! use atelier_content::{Registry, Topic};
//!
//! let registry = Registry::for_topic(Topic::Docker);
//! let record = registry.lookup("5.1.1");
//! assert!(record.is_some());
//! assert!(registry.lookup("9.9.9").is_none());
//! ```

mod api;
mod basics;
mod catalog;
mod docker;
mod etl;
mod mongo;
mod pandas;
mod registry;
mod sqlite;
mod topic;

pub use catalog::{Catalog, CatalogTopic};
pub use registry::Registry;
pub use topic::Topic;

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur when resolving topics or exporting the catalog.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The requested topic name does not match any course chapter.
    #[error("Unknown topic '{name}'\n\nSuggestion: valid topics are python, pandas, etl, sqlite, docker, mongo, api")]
    UnknownTopic {
        /// The name that failed to resolve.
        name: String,
    },

    /// Failed to serialize the catalog to JSON.
    #[error("failed to serialize catalog: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failed to write the catalog to disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;

impl ContentError {
    /// Creates a new `UnknownTopic` error.
    #[must_use]
    pub fn unknown_topic(name: impl Into<String>) -> Self {
        Self::UnknownTopic { name: name.into() }
    }
}

// ============================================================================
// Help Records
// ============================================================================

/// One exercise's pedagogical payload.
///
/// Records are created once, at compile time, from the literal tables in the
/// per-topic modules and are immutable thereafter. Every field is non-empty
/// for any identifier present in a [`Registry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpRecord {
    /// Dotted numeric exercise key, e.g. `"3.2.1"`.
    pub identifier: &'static str,
    /// Short nudge toward the right approach.
    pub hint: &'static str,
    /// Worked solution, usually multi-line code.
    pub solution: &'static str,
    /// Why the solution works.
    pub explanation: &'static str,
}
