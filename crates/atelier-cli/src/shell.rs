//! Interactive help shell.
//!
//! Reads commands line by line: a bare step identifier shows help for the
//! current chapter, French keywords switch chapters or list sections.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use regex::Regex;

use atelier_content::{Registry, Topic};
use atelier_render::style::SemanticStyle;
use atelier_session::Session;

/// Shell commands, shown by `aide`.
const HELP_TEXT: &str = "\
Commandes disponibles :
  <numéro>          aide complète pour une étape (ex: 3.2.1)
  modele <numéro>   code vierge pour une étape (chapitre Pandas)
  sections          sections du chapitre courant
  sujets            liste des chapitres du cours
  charger <sujet>   charge un autre chapitre (ex: charger docker)
  forcer <sujet>    recharge un chapitre déjà chargé
  statut            systèmes d'aide chargés
  bravo <message>   bannière de félicitations
  aide              cette liste
  quitter           quitte le shell
";

/// Farewell printed when the shell exits.
const GOODBYE: &str = "👋 Bonne continuation dans le cours !";

/// What the loop should do after handling one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellOutcome {
    /// Keep reading lines.
    Continue,
    /// Leave the shell.
    Exit,
}

/// Runs the interactive shell until `quitter` or end of input.
pub fn run(session: &mut Session, topic: Option<&str>) -> anyhow::Result<()> {
    let mut current = match topic {
        Some(name) => Topic::from_str(name)?,
        None => session.config().default_topic.unwrap_or(Topic::Python),
    };

    let outcome = session.load(current, false);
    println!("{}", outcome.status_line(current));
    println!(
        "{}",
        "Tapez 'aide' pour la liste des commandes, 'quitter' pour sortir.".info()
    );

    let prompt = session.config().prompt.clone();
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            // End of input (Ctrl-D)
            println!();
            println!("{GOODBYE}");
            break;
        }

        let (outcome, output) = handle_line(session, &mut current, &line);
        print!("{output}");
        if outcome == ShellOutcome::Exit {
            break;
        }
    }

    Ok(())
}

/// Handles one input line and returns what to print.
fn handle_line(session: &mut Session, current: &mut Topic, line: &str) -> (ShellOutcome, String) {
    let line = line.trim();
    if line.is_empty() {
        return (ShellOutcome::Continue, String::new());
    }

    if is_identifier(line) {
        return (
            ShellOutcome::Continue,
            session.get_or_load(*current).present(line),
        );
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "quitter" | "exit" => (ShellOutcome::Exit, format!("{GOODBYE}\n")),
        "aide" | "help" => (ShellOutcome::Continue, HELP_TEXT.to_string()),
        "sections" => (
            ShellOutcome::Continue,
            session.get_or_load(*current).overview(),
        ),
        "sujets" => (ShellOutcome::Continue, topics_listing()),
        "statut" => (ShellOutcome::Continue, status_listing(session)),
        "bravo" if !rest.is_empty() => (
            ShellOutcome::Continue,
            session.get_or_load(*current).success(rest),
        ),
        "modele" | "modèle" if !rest.is_empty() => (
            ShellOutcome::Continue,
            session.get_or_load(*current).template(rest),
        ),
        "charger" if !rest.is_empty() => (
            ShellOutcome::Continue,
            switch_topic(session, current, rest, false),
        ),
        "forcer" if !rest.is_empty() => (
            ShellOutcome::Continue,
            switch_topic(session, current, rest, true),
        ),
        _ => (
            ShellOutcome::Continue,
            format!("Commande inconnue : '{line}'. Tapez 'aide' pour la liste des commandes.\n"),
        ),
    }
}

/// Loads `name` and makes it the current chapter when it resolves.
fn switch_topic(session: &mut Session, current: &mut Topic, name: &str, force: bool) -> String {
    match Topic::from_str(name) {
        Ok(topic) => {
            let outcome = session.load(topic, force);
            *current = topic;
            format!("{}\n", outcome.status_line(topic))
        }
        Err(e) => format!("{e}\n"),
    }
}

/// Lists the course chapters with their section counts.
fn topics_listing() -> String {
    let mut output = String::from("Chapitres du cours :\n");
    for topic in Topic::ALL {
        let registry = Registry::for_topic(topic);
        let _ = writeln!(
            output,
            "  {}. {} {} - {} sections",
            topic.chapter(),
            topic.emblem(),
            topic.title(),
            registry.len()
        );
    }
    output
}

/// Lists the loaded helpers with their load times.
fn status_listing(session: &Session) -> String {
    if session.is_empty() {
        return "Aucun système d'aide chargé.\n".to_string();
    }

    let mut output = String::from("Systèmes d'aide chargés :\n");
    for topic in session.loaded_topics() {
        if let Some(helper) = session.get(topic) {
            let _ = writeln!(
                output,
                "  {} {} (génération {}, chargé à {})",
                topic.emblem(),
                topic.title(),
                helper.generation(),
                helper.loaded_at().format("%H:%M:%S")
            );
        }
    }
    output
}

/// Matches step identifiers like `3.2.1`.
fn is_identifier(line: &str) -> bool {
    // Pattern explanation:
    // - `[0-9]+` - chapter number
    // - `(\.[0-9]+)+` - one or more dotted section parts
    let Ok(re) = Regex::new(r"^[0-9]+(\.[0-9]+)+$") else {
        return false;
    };
    re.is_match(line)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use atelier_render::RenderMode;
    use atelier_session::SessionConfig;

    use super::*;

    fn plain_session() -> Session {
        Session::new(SessionConfig {
            render_mode: RenderMode::Plain,
            ..Default::default()
        })
    }

    #[test]
    fn test_identifier_shows_help_for_current_topic() {
        let mut session = plain_session();
        let mut current = Topic::Docker;

        let (outcome, output) = handle_line(&mut session, &mut current, "5.1.1\n");
        assert_eq!(outcome, ShellOutcome::Continue);
        assert!(output.contains("AIDE 5.1.1 - DOCKER"));
    }

    #[test]
    fn test_unknown_identifier_renders_notice() {
        let mut session = plain_session();
        let mut current = Topic::Docker;

        let (_, output) = handle_line(&mut session, &mut current, "9.9.9");
        assert!(output.contains("Aide non trouvée pour l'étape 9.9.9"));
    }

    #[test]
    fn test_charger_switches_topic() {
        let mut session = plain_session();
        let mut current = Topic::Python;

        let (_, output) = handle_line(&mut session, &mut current, "charger docker");
        assert!(output.contains("Système d'aide Docker chargé !"));
        assert_eq!(current, Topic::Docker);

        let (_, output) = handle_line(&mut session, &mut current, "5.1.1");
        assert!(output.contains("AIDE 5.1.1 - DOCKER"));
    }

    #[test]
    fn test_charger_repeat_reports_already_loaded() {
        let mut session = plain_session();
        let mut current = Topic::Python;

        handle_line(&mut session, &mut current, "charger docker");
        let (_, output) = handle_line(&mut session, &mut current, "charger docker");
        assert!(output.contains("déjà chargé"));
    }

    #[test]
    fn test_forcer_reloads() {
        let mut session = plain_session();
        let mut current = Topic::Python;

        handle_line(&mut session, &mut current, "charger docker");
        let (_, output) = handle_line(&mut session, &mut current, "forcer docker");
        assert!(output.contains("rechargé"));
    }

    #[test]
    fn test_unknown_topic_keeps_current() {
        let mut session = plain_session();
        let mut current = Topic::Python;

        let (_, output) = handle_line(&mut session, &mut current, "charger fusee");
        assert!(output.contains("Unknown topic 'fusee'"));
        assert_eq!(current, Topic::Python);
    }

    #[test]
    fn test_quitter_exits_with_farewell() {
        let mut session = plain_session();
        let mut current = Topic::Python;

        let (outcome, output) = handle_line(&mut session, &mut current, "quitter");
        assert_eq!(outcome, ShellOutcome::Exit);
        assert!(output.contains(GOODBYE));
    }

    #[test]
    fn test_aide_shows_command_list() {
        let mut session = plain_session();
        let mut current = Topic::Python;

        let (_, output) = handle_line(&mut session, &mut current, "aide");
        assert!(output.contains("Commandes disponibles"));
        assert!(output.contains("charger <sujet>"));
    }

    #[test]
    fn test_sections_lists_current_chapter() {
        let mut session = plain_session();
        let mut current = Topic::Mongo;

        let (_, output) = handle_line(&mut session, &mut current, "sections");
        assert!(output.contains("AIDE MONGODB"));
        assert!(output.contains("6.1.1"));
    }

    #[test]
    fn test_modele_uses_current_topic() {
        let mut session = plain_session();
        let mut current = Topic::Pandas;

        let (_, output) = handle_line(&mut session, &mut current, "modele 2.1.1");
        assert!(output.contains("Code vierge pour l'étape 2.1.1"));
    }

    #[test]
    fn test_blank_line_is_ignored() {
        let mut session = plain_session();
        let mut current = Topic::Python;

        let (outcome, output) = handle_line(&mut session, &mut current, "   \n");
        assert_eq!(outcome, ShellOutcome::Continue);
        assert!(output.is_empty());
    }

    #[test]
    fn test_unknown_command_gets_hint() {
        let mut session = plain_session();
        let mut current = Topic::Python;

        let (_, output) = handle_line(&mut session, &mut current, "blabla");
        assert!(output.contains("Commande inconnue : 'blabla'"));
    }

    #[test]
    fn test_sujets_lists_chapters() {
        let mut session = plain_session();
        let mut current = Topic::Python;

        let (_, output) = handle_line(&mut session, &mut current, "sujets");
        assert!(output.contains("Chapitres du cours"));
        assert!(output.contains("1. 🐍 Python"));
        assert!(output.contains("7. 🌐 API"));
    }

    #[test]
    fn test_statut_tracks_loaded_helpers() {
        let mut session = plain_session();
        let mut current = Topic::Python;

        let (_, output) = handle_line(&mut session, &mut current, "statut");
        assert_eq!(output, "Aucun système d'aide chargé.\n");

        handle_line(&mut session, &mut current, "charger docker");
        let (_, output) = handle_line(&mut session, &mut current, "statut");
        assert!(output.contains("Systèmes d'aide chargés"));
        assert!(output.contains("🐳 Docker (génération"));
    }

    #[test]
    fn test_bravo_renders_banner() {
        let mut session = plain_session();
        let mut current = Topic::Python;

        let (_, output) = handle_line(&mut session, &mut current, "bravo Bien joué !");
        assert!(output.contains("🐍 Bien joué ! 🐍"));
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("3.2.1"));
        assert!(is_identifier("10.20"));
        assert!(!is_identifier("3"));
        assert!(!is_identifier("a.b.c"));
        assert!(!is_identifier("3..1"));
        assert!(!is_identifier("charger"));
    }
}
