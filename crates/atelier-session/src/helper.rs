//! A loaded helper for one course topic.

use chrono::{DateTime, Utc};
use tracing::debug;

use atelier_content::{Registry, Topic};
use atelier_render::{build_renderer, Renderer};

use crate::config::SessionConfig;

/// A ready-to-use helper bound to one topic.
///
/// Construction does all the environment-sensitive work exactly once: the
/// render mode is resolved (probing the terminal when the mode is `Auto`)
/// and the matching renderer is picked. Every later call renders through
/// that same backend, so a session never flips styles mid-run.
///
/// All rendering methods return the finished text instead of printing, and
/// none of them fail: an unknown identifier yields a visible notice naming
/// it, not an error.
pub struct Helper {
    topic: Topic,
    registry: Registry,
    renderer: Box<dyn Renderer>,
    interactive: bool,
    generation: u64,
    loaded_at: DateTime<Utc>,
}

impl Helper {
    /// Builds a helper for `topic` using the session configuration.
    ///
    /// `generation` distinguishes instances of the same topic across
    /// forced reloads.
    pub(crate) fn new(topic: Topic, config: &SessionConfig, generation: u64) -> Self {
        let interactive = config.render_mode.wants_rich();
        let renderer = build_renderer(interactive, config.rule_width);
        debug!(topic = %topic, interactive, generation, "Built helper");

        Self {
            topic,
            registry: Registry::for_topic(topic),
            renderer,
            interactive,
            generation,
            loaded_at: Utc::now(),
        }
    }

    /// The topic this helper serves.
    #[must_use]
    pub const fn topic(&self) -> Topic {
        self.topic
    }

    /// Whether the rich renderer was selected at construction.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Instance counter assigned at load time.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// When this helper instance was built.
    #[must_use]
    pub const fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Number of exercise sections this helper knows.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.registry.len()
    }

    /// Renders the full help (hint, explanation, solution) for one step.
    ///
    /// Unknown identifiers render a not-found notice listing the available
    /// sections.
    #[must_use]
    pub fn present(&self, identifier: &str) -> String {
        match self.registry.lookup(identifier) {
            Some(record) => self.renderer.help(self.topic, record),
            None => {
                debug!(topic = %self.topic, identifier, "No help entry for identifier");
                self.renderer
                    .not_found(self.topic, identifier, &self.registry.identifiers())
            }
        }
    }

    /// Renders a styled hint around the caller's text.
    #[must_use]
    pub fn hint(&self, text: &str) -> String {
        self.renderer.hint(self.topic, text)
    }

    /// Renders a styled solution block around the caller's code.
    #[must_use]
    pub fn solution(&self, code: &str, explanation: Option<&str>) -> String {
        self.renderer.solution(self.topic, code, explanation)
    }

    /// Renders the blank scaffold for one step, where the topic has one.
    #[must_use]
    pub fn template(&self, identifier: &str) -> String {
        match self.registry.template(identifier) {
            Some(body) => self.renderer.template(self.topic, identifier, body),
            None => self.renderer.template_not_found(
                self.topic,
                identifier,
                &self.registry.template_identifiers(),
            ),
        }
    }

    /// Renders the topic overview: available sections and templates.
    #[must_use]
    pub fn overview(&self) -> String {
        self.renderer.overview(
            self.topic,
            &self.registry.identifiers(),
            &self.registry.template_identifiers(),
        )
    }

    /// Renders a styled congratulation banner.
    #[must_use]
    pub fn success(&self, message: &str) -> String {
        self.renderer.banner(self.topic, message)
    }
}

impl std::fmt::Debug for Helper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Helper")
            .field("topic", &self.topic)
            .field("interactive", &self.interactive)
            .field("generation", &self.generation)
            .field("loaded_at", &self.loaded_at)
            .finish_non_exhaustive()
    }
}
