//! Machine-readable catalog of every registry.
//!
//! This module provides [`Catalog`] for exporting the full content inventory
//! to JSON, either compact or pretty-printed. The catalog lists every topic
//! with its identifiers and scaffold availability, so external tooling can
//! discover what help exists without linking against this crate.
//!
//! # Example
//!
//! ```rust
//! use atelier_content::Catalog;
//!
//! let catalog = Catalog::collect();
//! let json = catalog.to_json_pretty().unwrap();
//!
//! assert!(json.contains("generatedAt"));
//! assert!(json.contains("docker"));
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{Registry, Result, Topic};

/// Snapshot of the entire content inventory, ready for serialization.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// When this snapshot was taken.
    pub generated_at: DateTime<Utc>,
    /// One entry per topic, in chapter order.
    pub topics: Vec<CatalogTopic>,
}

/// Inventory entry for a single topic.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogTopic {
    /// Canonical topic name, as accepted on the command line.
    pub topic: Topic,
    /// Display title.
    pub title: &'static str,
    /// Emblem shown in banners and headers.
    pub emblem: &'static str,
    /// Chapter number prefixing every identifier.
    pub chapter: u8,
    /// All known exercise identifiers, ascending.
    pub sections: Vec<&'static str>,
    /// Identifiers that ship a blank scaffold, ascending.
    pub templates: Vec<&'static str>,
}

impl Catalog {
    /// Collects the current inventory across all topics.
    #[must_use]
    pub fn collect() -> Self {
        Self::collect_at(Utc::now())
    }

    /// Collects the inventory with an explicit timestamp.
    #[must_use]
    pub fn collect_at(generated_at: DateTime<Utc>) -> Self {
        let topics = Topic::ALL
            .iter()
            .map(|&topic| {
                let registry = Registry::for_topic(topic);
                CatalogTopic {
                    topic,
                    title: topic.title(),
                    emblem: topic.emblem(),
                    chapter: topic.chapter(),
                    sections: registry.identifiers(),
                    templates: registry.template_identifiers(),
                }
            })
            .collect();

        Self {
            generated_at,
            topics,
        }
    }

    /// Generates compact JSON output (single line, no extra whitespace).
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Serialization`](crate::ContentError::Serialization)
    /// if JSON serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Generates pretty-printed JSON output with 2-space indentation.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Serialization`](crate::ContentError::Serialization)
    /// if JSON serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the catalog to a file, creating or overwriting it.
    ///
    /// Parent directories must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Serialization`](crate::ContentError::Serialization)
    /// if JSON serialization fails, or
    /// [`ContentError::Io`](crate::ContentError::Io) if the file cannot be
    /// created or written.
    pub fn write_to_file(&self, path: &Path, pretty: bool) -> Result<()> {
        let json = if pretty {
            self.to_json_pretty()?
        } else {
            self.to_json()?
        };

        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample_catalog() -> Catalog {
        let timestamp = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        Catalog::collect_at(timestamp)
    }

    #[test]
    fn test_catalog_covers_all_topics() {
        let catalog = sample_catalog();

        assert_eq!(catalog.topics.len(), Topic::ALL.len());
        for (entry, &topic) in catalog.topics.iter().zip(Topic::ALL.iter()) {
            assert_eq!(entry.topic, topic);
            assert_eq!(entry.chapter, topic.chapter());
            assert!(!entry.sections.is_empty());
        }
    }

    #[test]
    fn test_compact_json_is_single_line() {
        let catalog = sample_catalog();
        let json = catalog.to_json().unwrap();

        assert!(!json.contains('\n'));
        assert!(json.contains(r#""topic":"python""#));
        assert!(json.contains(r#""chapter":5"#));
    }

    #[test]
    fn test_pretty_json_contains_expected_fields() {
        let catalog = sample_catalog();
        let json = catalog.to_json_pretty().unwrap();

        assert!(json.contains('\n'));
        assert!(json.contains("\"generatedAt\""));
        assert!(json.contains("\"2026-03-14T09:30:00Z\""));
        assert!(json.contains("\"mongo\""));
        assert!(json.contains("\"6.1.1\""));
        assert!(json.contains("\"templates\""));
    }

    #[test]
    fn test_only_pandas_lists_templates() {
        let catalog = sample_catalog();

        for entry in &catalog.topics {
            if entry.topic == Topic::Pandas {
                assert_eq!(entry.templates.len(), 6);
            } else {
                assert!(entry.templates.is_empty());
            }
        }
    }

    #[test]
    fn test_write_to_file() {
        let catalog = sample_catalog();
        let dir = std::env::temp_dir();
        let path = dir.join("atelier-catalog-test.json");

        catalog.write_to_file(&path, true).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"generatedAt\""));

        std::fs::remove_file(&path).unwrap();
    }
}
