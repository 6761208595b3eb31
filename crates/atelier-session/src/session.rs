//! Session state: which helpers are loaded, and the load protocol.

use std::collections::BTreeMap;

use tracing::{debug, info};

use atelier_content::Topic;

use crate::config::SessionConfig;
use crate::helper::Helper;

/// What a call to [`Session::load`] did.
///
/// The protocol is guarded by default: loading a topic that is already
/// loaded keeps the existing helper untouched and reports so. Passing
/// `force` replaces the helper with a fresh instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The topic was not loaded before; a helper was built.
    Loaded,
    /// The topic was already loaded; nothing changed.
    AlreadyLoaded,
    /// The topic was already loaded and `force` replaced its helper.
    Reloaded,
}

impl LoadOutcome {
    /// The status line announcing this outcome for `topic`.
    #[must_use]
    pub fn status_line(self, topic: Topic) -> String {
        match self {
            Self::Loaded => format!(
                "{} Système d'aide {} chargé !\n✨ {}",
                topic.emblem(),
                topic.title(),
                topic.ready_line()
            ),
            Self::AlreadyLoaded => {
                format!("✅ Le système d'aide {} est déjà chargé.", topic.title())
            }
            Self::Reloaded => format!("🔄 Système d'aide {} rechargé !", topic.title()),
        }
    }

    /// `true` when the call built a new helper instance.
    #[must_use]
    pub const fn built_new_instance(self) -> bool {
        matches!(self, Self::Loaded | Self::Reloaded)
    }
}

/// A help session owning the loaded helpers.
///
/// The session is an explicit object handed around by the caller. Helpers
/// are keyed by topic; each topic holds at most one helper at a time.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    helpers: BTreeMap<Topic, Helper>,
    next_generation: u64,
}

impl Session {
    /// Creates a session with the given configuration.
    #[must_use]
    pub const fn new(config: SessionConfig) -> Self {
        Self {
            config,
            helpers: BTreeMap::new(),
            next_generation: 0,
        }
    }

    /// Creates a session with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(SessionConfig::default())
    }

    /// The configuration this session was built with.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Loads the helper for `topic`.
    ///
    /// Without `force`, a repeat load of an already-loaded topic is a no-op
    /// and reports [`LoadOutcome::AlreadyLoaded`]. With `force`, the
    /// existing helper is dropped and a fresh instance takes its place.
    pub fn load(&mut self, topic: Topic, force: bool) -> LoadOutcome {
        let already_loaded = self.helpers.contains_key(&topic);
        if already_loaded && !force {
            debug!(topic = %topic, "Helper already loaded; keeping existing instance");
            return LoadOutcome::AlreadyLoaded;
        }

        self.next_generation += 1;
        let helper = Helper::new(topic, &self.config, self.next_generation);
        self.helpers.insert(topic, helper);

        if already_loaded {
            info!(topic = %topic, generation = self.next_generation, "Helper reloaded");
            LoadOutcome::Reloaded
        } else {
            info!(topic = %topic, generation = self.next_generation, "Helper loaded");
            LoadOutcome::Loaded
        }
    }

    /// The loaded helper for `topic`, if any.
    #[must_use]
    pub fn get(&self, topic: Topic) -> Option<&Helper> {
        self.helpers.get(&topic)
    }

    /// The helper for `topic`, loading it first when missing.
    ///
    /// Equivalent to a guarded [`Session::load`] followed by [`Session::get`].
    pub fn get_or_load(&mut self, topic: Topic) -> &Helper {
        self.load(topic, false);
        // load always leaves the topic present in the map
        &self.helpers[&topic]
    }

    /// Topics with a loaded helper, in chapter order.
    #[must_use]
    pub fn loaded_topics(&self) -> Vec<Topic> {
        self.helpers.keys().copied().collect()
    }

    /// Number of loaded helpers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    /// `true` when no helper is loaded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use atelier_render::RenderMode;

    use super::*;

    fn plain_session() -> Session {
        Session::new(SessionConfig {
            render_mode: RenderMode::Plain,
            ..Default::default()
        })
    }

    #[test]
    fn test_first_load_builds_helper() {
        let mut session = plain_session();

        let outcome = session.load(Topic::Docker, false);
        assert_eq!(outcome, LoadOutcome::Loaded);
        assert!(session.get(Topic::Docker).is_some());
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_guarded_repeat_load_is_noop() {
        let mut session = plain_session();
        session.load(Topic::Docker, false);
        let generation = session.get(Topic::Docker).unwrap().generation();

        let outcome = session.load(Topic::Docker, false);
        assert_eq!(outcome, LoadOutcome::AlreadyLoaded);
        // Same instance survived
        assert_eq!(
            session.get(Topic::Docker).unwrap().generation(),
            generation
        );
    }

    #[test]
    fn test_forced_load_replaces_instance() {
        let mut session = plain_session();
        session.load(Topic::Docker, false);
        let generation = session.get(Topic::Docker).unwrap().generation();

        let outcome = session.load(Topic::Docker, true);
        assert_eq!(outcome, LoadOutcome::Reloaded);
        assert!(session.get(Topic::Docker).unwrap().generation() > generation);
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_force_on_unloaded_topic_is_plain_load() {
        let mut session = plain_session();

        let outcome = session.load(Topic::Mongo, true);
        assert_eq!(outcome, LoadOutcome::Loaded);
    }

    #[test]
    fn test_two_forced_loads_bind_two_instances() {
        let mut session = plain_session();
        session.load(Topic::Sqlite, false);

        session.load(Topic::Sqlite, true);
        let first = session.get(Topic::Sqlite).unwrap().generation();
        session.load(Topic::Sqlite, true);
        let second = session.get(Topic::Sqlite).unwrap().generation();

        assert!(second > first);
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_status_lines() {
        let loaded = LoadOutcome::Loaded.status_line(Topic::Sqlite);
        assert!(loaded.contains("Système d'aide SQLite chargé !"));
        assert!(loaded.contains("✨"));

        let already = LoadOutcome::AlreadyLoaded.status_line(Topic::Sqlite);
        assert!(already.contains("déjà chargé"));

        let reloaded = LoadOutcome::Reloaded.status_line(Topic::Sqlite);
        assert!(reloaded.contains("rechargé"));
    }

    #[test]
    fn test_get_or_load_loads_once() {
        let mut session = plain_session();

        let generation = session.get_or_load(Topic::Etl).generation();
        assert_eq!(session.get_or_load(Topic::Etl).generation(), generation);
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_loaded_topics_in_chapter_order() {
        let mut session = plain_session();
        session.load(Topic::Api, false);
        session.load(Topic::Python, false);
        session.load(Topic::Docker, false);

        assert_eq!(
            session.loaded_topics(),
            vec![Topic::Python, Topic::Docker, Topic::Api]
        );
    }

    #[test]
    fn test_each_topic_keeps_own_helper() {
        let mut session = plain_session();
        session.load(Topic::Python, false);
        session.load(Topic::Pandas, false);

        session.load(Topic::Pandas, true);

        // Reloading pandas leaves python untouched
        assert_eq!(session.get(Topic::Python).unwrap().generation(), 1);
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn test_empty_session() {
        let session = plain_session();
        assert!(session.is_empty());
        assert!(session.loaded_topics().is_empty());
        assert!(session.get(Topic::Python).is_none());
    }
}
