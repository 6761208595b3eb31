//! End-to-end session tests for the Atelier toolkit
//!
//! These tests drive the full load protocol (guarded loads, forced
//! reloads, status lines) and the help surface of loaded helpers,
//! exactly as the CLI and shell use them.

use std::io::Write;

use atelier_content::Topic;
use atelier_render::RenderMode;
use atelier_session::{LoadOutcome, Session, SessionConfig};

/// A session configured for deterministic plain output.
fn plain_session() -> Session {
    Session::new(SessionConfig {
        render_mode: RenderMode::Plain,
        ..Default::default()
    })
}

/// Tests the guarded-default load protocol end to end.
#[test]
fn test_load_protocol_guarded_then_forced() {
    let mut session = plain_session();

    assert_eq!(session.load(Topic::Python, false), LoadOutcome::Loaded);
    assert_eq!(
        session.load(Topic::Python, false),
        LoadOutcome::AlreadyLoaded
    );
    assert_eq!(session.load(Topic::Python, true), LoadOutcome::Reloaded);
    assert_eq!(session.len(), 1);
}

/// Tests that a guarded repeat keeps the same helper instance.
#[test]
fn test_guarded_repeat_keeps_instance() {
    let mut session = plain_session();
    session.load(Topic::Docker, false);
    let before = session.get(Topic::Docker).expect("helper loaded");
    let generation = before.generation();
    let loaded_at = before.loaded_at();

    session.load(Topic::Docker, false);
    let after = session.get(Topic::Docker).expect("helper still loaded");

    assert_eq!(after.generation(), generation);
    assert_eq!(after.loaded_at(), loaded_at);
}

/// Tests that a forced load replaces the helper with a fresh instance.
#[test]
fn test_forced_load_builds_new_instance() {
    let mut session = plain_session();
    session.load(Topic::Docker, false);
    let generation = session.get(Topic::Docker).expect("helper loaded").generation();

    let outcome = session.load(Topic::Docker, true);

    assert_eq!(outcome, LoadOutcome::Reloaded);
    assert!(outcome.built_new_instance());
    let reloaded = session.get(Topic::Docker).expect("helper reloaded");
    assert!(reloaded.generation() > generation);
}

/// Tests the French status lines of the load protocol.
#[test]
fn test_load_status_lines() {
    let loaded = LoadOutcome::Loaded.status_line(Topic::Docker);
    assert!(loaded.contains("🐳 Système d'aide Docker chargé !"));
    assert!(loaded.contains("✨ Prêt pour la conteneurisation !"));

    let already = LoadOutcome::AlreadyLoaded.status_line(Topic::Docker);
    assert_eq!(already, "✅ Le système d'aide Docker est déjà chargé.");

    let reloaded = LoadOutcome::Reloaded.status_line(Topic::Docker);
    assert_eq!(reloaded, "🔄 Système d'aide Docker rechargé !");
}

/// Tests that an unknown identifier renders a notice instead of failing.
#[test]
fn test_unknown_identifier_flow() {
    let mut session = plain_session();
    let helper = session.get_or_load(Topic::Sqlite);

    let text = helper.present("9.9.9");

    assert!(text.contains("❌ Aide non trouvée pour l'étape 9.9.9"));
    assert!(text.contains("📚 Sections disponibles:"));
    assert!(text.contains("4.1.1"));
    // The notice never leaks content fields
    assert!(!text.contains("CONSEIL"));
    assert!(!text.contains("SOLUTION"));
    assert!(!text.contains("EXPLICATION"));
}

/// Tests that rendering help mutates nothing: repeat calls are identical.
#[test]
fn test_present_is_idempotent() {
    let mut session = plain_session();
    let helper = session.get_or_load(Topic::Pandas);

    assert_eq!(helper.present("2.1.1"), helper.present("2.1.1"));
    assert_eq!(helper.present("9.9.9"), helper.present("9.9.9"));
}

/// Tests that each loaded topic keeps its own independent helper.
#[test]
fn test_topics_are_independent() {
    let mut session = plain_session();
    session.load(Topic::Python, false);
    session.load(Topic::Mongo, false);

    session.load(Topic::Mongo, true);

    let python = session.get(Topic::Python).expect("python loaded");
    let mongo = session.get(Topic::Mongo).expect("mongo loaded");
    assert_eq!(python.generation(), 1);
    assert!(mongo.generation() > python.generation());
    assert_eq!(
        session.loaded_topics(),
        vec![Topic::Python, Topic::Mongo]
    );
}

/// Tests a full help round through a session loaded from configuration.
#[test]
fn test_session_from_config_file() {
    let temp_dir = std::env::temp_dir().join("test_atelier_session_config");
    std::fs::create_dir_all(&temp_dir).expect("create temp dir");
    let config_path = temp_dir.join("atelier.json");

    let json = r#"{
        "renderMode": "plain",
        "defaultTopic": "etl",
        "prompt": "exo> "
    }"#;
    let mut file = std::fs::File::create(&config_path).expect("create config");
    file.write_all(json.as_bytes()).expect("write config");

    let config = SessionConfig::load_from_dir(&temp_dir).expect("load config");
    assert_eq!(config.prompt, "exo> ");
    let default_topic = config.default_topic.expect("default topic set");

    let mut session = Session::new(config);
    let helper = session.get_or_load(default_topic);
    let text = helper.present("3.2.1");

    assert!(text.contains("AIDE 3.2.1 - ETL"));
    assert!(text.contains("💡 CONSEIL:"));

    std::fs::remove_file(&config_path).ok();
    std::fs::remove_dir(&temp_dir).ok();
}

/// Tests that the plain renderer is selected regardless of the terminal.
#[test]
fn test_plain_mode_ignores_environment() {
    let mut session = plain_session();
    let helper = session.get_or_load(Topic::Api);

    assert!(!helper.is_interactive());
    // Plain output has rules, never panel markers
    let text = helper.present("7.1.1");
    assert!(text.contains(&"=".repeat(50)));
    assert!(!text.contains('▸'));
}

/// Tests that rich mode flows through the session into panel output.
#[test]
fn test_rich_mode_flows_into_panels() {
    let mut session = Session::new(SessionConfig {
        render_mode: RenderMode::Rich,
        ..Default::default()
    });
    let helper = session.get_or_load(Topic::Api);

    assert!(helper.is_interactive());
    assert!(helper.present("7.1.1").contains('▸'));
}
