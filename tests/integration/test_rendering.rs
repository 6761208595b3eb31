//! Rendering integration tests for the Atelier toolkit
//!
//! These tests check the pedagogical ordering of help output (hint before
//! solution), the registry wiring of every chapter, and the JSON catalog
//! export.

use atelier_content::{Catalog, Registry, Topic};
use atelier_render::RenderMode;
use atelier_session::{Session, SessionConfig};

fn session_with(mode: RenderMode) -> Session {
    Session::new(SessionConfig {
        render_mode: mode,
        ..Default::default()
    })
}

/// Tests that plain help keeps the guided order: hint, explanation, solution.
#[test]
fn test_plain_help_order_is_hint_explanation_solution() {
    let mut session = session_with(RenderMode::Plain);
    let text = session.get_or_load(Topic::Python).present("1.1.1");

    let hint = text.find("💡 CONSEIL:").expect("hint marker present");
    let explanation = text
        .find("📖 EXPLICATION:")
        .expect("explanation marker present");
    let solution = text.find("🔍 SOLUTION:").expect("solution marker present");

    assert!(hint < explanation, "hint must come before the explanation");
    assert!(
        explanation < solution,
        "explanation must come before the solution"
    );
}

/// Tests that rich help keeps the hint panel above the solution panel.
#[test]
fn test_rich_help_panel_order() {
    let mut session = session_with(RenderMode::Rich);
    let text = session.get_or_load(Topic::Python).present("1.1.1");

    let hint = text.find("Conseil Python").expect("hint panel present");
    let solution = text.find("Solution Python").expect("solution panel present");
    let explanation = text.find("Explication :").expect("explanation present");

    assert!(hint < solution, "hint panel must come first");
    assert!(
        solution < explanation,
        "explanation belongs to the solution panel"
    );
}

/// Tests the congratulation banner in both render modes.
#[test]
fn test_success_banner_both_modes() {
    let message = "Chapitre 5 terminé !";

    let mut plain = session_with(RenderMode::Plain);
    let text = plain.get_or_load(Topic::Docker).success(message);
    assert_eq!(text, "✅ 🐳 Chapitre 5 terminé ! 🐳\n");

    let mut rich = session_with(RenderMode::Rich);
    let text = rich.get_or_load(Topic::Docker).success(message);
    assert!(text.contains("🐳 Chapitre 5 terminé ! 🐳"));
}

/// Tests that every chapter renders help for every one of its sections.
#[test]
fn test_every_section_of_every_chapter_renders() {
    let mut session = session_with(RenderMode::Plain);

    for topic in Topic::ALL {
        let identifiers = Registry::for_topic(topic).identifiers();
        assert!(
            !identifiers.is_empty(),
            "chapter {} has no sections",
            topic.chapter()
        );

        let helper = session.get_or_load(topic);
        for identifier in identifiers {
            let text = helper.present(identifier);
            assert!(
                text.contains(&format!("AIDE {identifier}")),
                "help for {topic} {identifier} misses its header"
            );
            assert!(
                !text.contains("Aide non trouvée"),
                "registered identifier {topic} {identifier} rendered as missing"
            );
        }
    }
}

/// Tests the total number of help sections across the course.
#[test]
fn test_course_section_totals() {
    let total: usize = Topic::ALL
        .iter()
        .map(|&topic| Registry::for_topic(topic).len())
        .sum();
    assert_eq!(total, 51);
}

/// Tests template rendering for the one chapter that ships templates.
#[test]
fn test_templates_only_in_pandas_chapter() {
    let mut session = session_with(RenderMode::Plain);

    let pandas = session.get_or_load(Topic::Pandas);
    let text = pandas.template("2.1.1");
    assert!(text.contains("📋 Code vierge pour l'étape 2.1.1"));
    assert!(text.contains("ÉTAPE 2.1.1"));

    let sqlite = session.get_or_load(Topic::Sqlite);
    let text = sqlite.template("4.1.1");
    assert!(text.contains("❌ Template non trouvé pour l'étape 4.1.1"));
    assert!(text.contains("📋 Aucun template disponible pour ce chapitre"));
}

/// Tests the JSON catalog export end to end.
#[test]
fn test_catalog_export_shape() {
    let catalog = Catalog::collect();
    let json = catalog.to_json_pretty().expect("catalog serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

    assert!(value.get("generatedAt").is_some(), "camelCase timestamp key");

    let topics = value
        .get("topics")
        .and_then(serde_json::Value::as_array)
        .expect("topics array");
    assert_eq!(topics.len(), 7);

    let python = &topics[0];
    assert_eq!(python.get("topic"), Some(&serde_json::json!("python")));
    assert_eq!(python.get("chapter"), Some(&serde_json::json!(1)));
    assert_eq!(
        python
            .get("sections")
            .and_then(serde_json::Value::as_array)
            .expect("sections array")
            .len(),
        12
    );

    let pandas = &topics[1];
    assert_eq!(
        pandas
            .get("templates")
            .and_then(serde_json::Value::as_array)
            .expect("templates array")
            .len(),
        6
    );
}

/// Tests that overviews list sections in ascending order.
#[test]
fn test_overview_lists_sections_in_order() {
    let mut session = session_with(RenderMode::Plain);
    let text = session.get_or_load(Topic::Mongo).overview();

    let first = text.find("6.1.1").expect("first section listed");
    let last = text.find("6.3.2").expect("last section listed");
    assert!(first < last);
}
