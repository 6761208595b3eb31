//! Immutable per-topic content registries.

use std::collections::BTreeMap;

use crate::{api, basics, docker, etl, mongo, pandas, sqlite, HelpRecord, Topic};

/// Topics without blank exercise scaffolds share this empty table.
const NO_TEMPLATES: &[(&str, &str)] = &[];

/// Immutable mapping from exercise identifier to [`HelpRecord`] for one
/// topic, plus the topic's (possibly empty) blank-scaffold table.
///
/// A registry is populated once, from the topic's literal content table,
/// and never mutated afterwards. Unknown identifiers are an expected
/// user-facing condition: [`lookup`](Self::lookup) answers with `None`,
/// never an error.
#[derive(Debug, Clone)]
pub struct Registry {
    topic: Topic,
    records: BTreeMap<&'static str, HelpRecord>,
    templates: BTreeMap<&'static str, &'static str>,
}

impl Registry {
    /// Builds the registry for one topic from its literal content table.
    #[must_use]
    pub fn for_topic(topic: Topic) -> Self {
        let (records, templates): (&[HelpRecord], &[(&str, &str)]) = match topic {
            Topic::Python => (basics::RECORDS, NO_TEMPLATES),
            Topic::Pandas => (pandas::RECORDS, pandas::TEMPLATES),
            Topic::Etl => (etl::RECORDS, NO_TEMPLATES),
            Topic::Sqlite => (sqlite::RECORDS, NO_TEMPLATES),
            Topic::Docker => (docker::RECORDS, NO_TEMPLATES),
            Topic::Mongo => (mongo::RECORDS, NO_TEMPLATES),
            Topic::Api => (api::RECORDS, NO_TEMPLATES),
        };

        Self {
            topic,
            records: records.iter().map(|r| (r.identifier, *r)).collect(),
            templates: templates.iter().copied().collect(),
        }
    }

    /// The topic this registry serves.
    #[must_use]
    pub const fn topic(&self) -> Topic {
        self.topic
    }

    /// Looks up the record for an identifier.
    ///
    /// The match is exact and case-sensitive. Returns `None` for unknown
    /// identifiers.
    #[must_use]
    pub fn lookup(&self, identifier: &str) -> Option<&HelpRecord> {
        self.records.get(identifier)
    }

    /// Blank exercise scaffold for the identifier, if the topic ships one.
    #[must_use]
    pub fn template(&self, identifier: &str) -> Option<&'static str> {
        self.templates.get(identifier).copied()
    }

    /// All known identifiers, in ascending order.
    #[must_use]
    pub fn identifiers(&self) -> Vec<&'static str> {
        self.records.keys().copied().collect()
    }

    /// Identifiers that ship a blank scaffold, in ascending order.
    #[must_use]
    pub fn template_identifiers(&self) -> Vec<&'static str> {
        self.templates.keys().copied().collect()
    }

    /// Number of help records in this registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the registry holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_record_counts() {
        let counts = [
            (Topic::Python, 12),
            (Topic::Pandas, 6),
            (Topic::Etl, 6),
            (Topic::Sqlite, 7),
            (Topic::Docker, 6),
            (Topic::Mongo, 6),
            (Topic::Api, 8),
        ];

        for (topic, expected) in counts {
            let registry = Registry::for_topic(topic);
            assert_eq!(registry.len(), expected, "count mismatch for {topic}");
            assert!(!registry.is_empty());
        }
    }

    #[test]
    fn test_all_records_are_complete() {
        for topic in Topic::ALL {
            let registry = Registry::for_topic(topic);
            for identifier in registry.identifiers() {
                let record = registry.lookup(identifier).unwrap();
                assert_eq!(record.identifier, identifier);
                assert!(!record.hint.is_empty(), "{topic} {identifier}: empty hint");
                assert!(
                    !record.solution.is_empty(),
                    "{topic} {identifier}: empty solution"
                );
                assert!(
                    !record.explanation.is_empty(),
                    "{topic} {identifier}: empty explanation"
                );
            }
        }
    }

    #[test]
    fn test_identifiers_match_chapter() {
        for topic in Topic::ALL {
            let registry = Registry::for_topic(topic);
            let prefix = format!("{}.", topic.chapter());
            for identifier in registry.identifiers() {
                assert!(
                    identifier.starts_with(&prefix),
                    "{identifier} does not belong to chapter {}",
                    topic.chapter()
                );
            }
        }
    }

    #[test]
    fn test_lookup_is_exact_and_case_sensitive() {
        let registry = Registry::for_topic(Topic::Docker);
        assert!(registry.lookup("5.1.1").is_some());
        assert!(registry.lookup("5.1.1 ").is_none());
        assert!(registry.lookup("5.9.9").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn test_identifiers_are_sorted() {
        for topic in Topic::ALL {
            let registry = Registry::for_topic(topic);
            let identifiers = registry.identifiers();
            let mut sorted = identifiers.clone();
            sorted.sort_unstable();
            assert_eq!(identifiers, sorted);
        }
    }

    #[test]
    fn test_templates_only_for_pandas() {
        for topic in Topic::ALL {
            let registry = Registry::for_topic(topic);
            if topic == Topic::Pandas {
                assert_eq!(registry.template_identifiers().len(), 6);
                assert!(registry.template("2.1.1").is_some());
            } else {
                assert!(registry.template_identifiers().is_empty());
            }
        }
    }

    #[test]
    fn test_pandas_templates_cover_known_records() {
        let registry = Registry::for_topic(Topic::Pandas);
        for identifier in registry.template_identifiers() {
            assert!(
                registry.lookup(identifier).is_some(),
                "template {identifier} has no matching record"
            );
        }
    }
}
