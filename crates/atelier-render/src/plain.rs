//! Monochrome block renderer for non-interactive surfaces.

use std::fmt::Write;

use atelier_content::{HelpRecord, Topic};

use crate::Renderer;

/// Renders help as rule-delimited text blocks with no styling.
///
/// This is the fallback surface for pipes, CI logs, and dumb terminals.
/// Content is laid out in reading order: hint, then explanation, then
/// solution, each introduced by an uppercase marker.
#[derive(Debug, Clone, Copy)]
pub struct PlainRenderer {
    rule_width: usize,
}

impl PlainRenderer {
    /// Default width of the horizontal rules.
    pub const DEFAULT_RULE_WIDTH: usize = 50;

    /// Creates a plain renderer with the given rule width.
    #[must_use]
    pub const fn new(rule_width: usize) -> Self {
        Self { rule_width }
    }

    fn major_rule(&self) -> String {
        "=".repeat(self.rule_width)
    }

    fn minor_rule(&self) -> String {
        "-".repeat(self.rule_width * 3 / 5)
    }
}

impl Default for PlainRenderer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RULE_WIDTH)
    }
}

impl Renderer for PlainRenderer {
    fn help(&self, topic: Topic, record: &HelpRecord) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            "{} AIDE {} - {}",
            topic.emblem(),
            record.identifier,
            topic.title().to_uppercase()
        );
        let _ = writeln!(output, "{}", self.major_rule());
        let _ = writeln!(output, "💡 CONSEIL: {}", record.hint);
        let _ = writeln!(output);
        let _ = writeln!(output, "📖 EXPLICATION: {}", record.explanation);
        let _ = writeln!(output);
        let _ = writeln!(output, "🔍 SOLUTION:");
        let _ = writeln!(output, "{}", self.minor_rule());
        let _ = writeln!(output, "{}", record.solution);
        let _ = writeln!(output, "{}", self.major_rule());

        output
    }

    fn not_found(&self, _topic: Topic, identifier: &str, available: &[&str]) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "❌ Aide non trouvée pour l'étape {identifier}");
        let _ = writeln!(output, "📚 Sections disponibles: {}", available.join(", "));

        output
    }

    fn banner(&self, topic: Topic, message: &str) -> String {
        let emblem = topic.emblem();
        format!("✅ {emblem} {message} {emblem}\n")
    }

    fn hint(&self, _topic: Topic, text: &str) -> String {
        format!("💡 Conseil: {text}\n")
    }

    fn solution(&self, _topic: Topic, code: &str, explanation: Option<&str>) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "🔍 Solution:");
        if let Some(explanation) = explanation {
            let _ = writeln!(output, "📖 Explication: {explanation}");
        }
        let _ = writeln!(output, "{code}");

        output
    }

    fn template(&self, _topic: Topic, identifier: &str, body: &str) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "📋 Code vierge pour l'étape {identifier} :");
        let _ = writeln!(output, "{}", self.major_rule());
        let _ = writeln!(output, "{body}");
        let _ = writeln!(output, "{}", self.major_rule());
        let _ = writeln!(
            output,
            "💡 Copiez-collez ce code dans la cellule d'exercice pour recommencer à zéro !"
        );

        output
    }

    fn template_not_found(&self, _topic: Topic, identifier: &str, available: &[&str]) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "❌ Template non trouvé pour l'étape {identifier}");
        if available.is_empty() {
            let _ = writeln!(output, "📋 Aucun template disponible pour ce chapitre");
        } else {
            let _ = writeln!(output, "📋 Templates disponibles: {}", available.join(", "));
        }

        output
    }

    fn overview(&self, topic: Topic, identifiers: &[&str], templates: &[&str]) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            "{} AIDE {}",
            topic.emblem(),
            topic.title().to_uppercase()
        );
        let _ = writeln!(output, "{}", self.major_rule());
        let _ = writeln!(output, "📚 Sections disponibles: {}", identifiers.join(", "));
        if !templates.is_empty() {
            let _ = writeln!(output, "📋 Templates disponibles: {}", templates.join(", "));
        }
        if let Some(first) = identifiers.first() {
            let _ = writeln!(
                output,
                "💡 Demandez une étape précise, par exemple : {first}"
            );
        }
        let _ = writeln!(output, "{}", self.major_rule());

        output
    }
}
