//! Panelled color renderer for interactive terminals.

use std::fmt::Write;

use atelier_content::{HelpRecord, Topic};

use crate::style::SemanticStyle;
use crate::Renderer;

/// Renders help as disclosure-style panels with semantic colors.
///
/// Each panel opens with a `▸` header naming the topic; the body sits
/// indented underneath. A full help entry is two panels: the hint first,
/// then the solution panel carrying the explanation above the code, so a
/// reader can stop at the hint without seeing the answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RichRenderer;

impl RichRenderer {
    /// Creates a rich renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn hint_panel(topic: Topic, text: &str) -> String {
        let mut output = String::new();

        let header = format!("▸ 💡 Conseil {}", topic.title());
        let _ = writeln!(output, "{}", header.warning());
        let _ = writeln!(output, "{}", indent(text));

        output
    }

    fn solution_panel(topic: Topic, code: &str, explanation: Option<&str>) -> String {
        let mut output = String::new();

        let header = format!("▸ 🔍 Solution {}", topic.title());
        let _ = writeln!(output, "{}", header.success());
        if let Some(explanation) = explanation {
            let lead = format!("{} Explication :", topic.emblem());
            let _ = writeln!(output, "  {} {explanation}", lead.header());
            let _ = writeln!(output);
        }
        let _ = writeln!(output, "{}", indent(code));

        output
    }
}

impl Renderer for RichRenderer {
    fn help(&self, topic: Topic, record: &HelpRecord) -> String {
        let mut output = String::new();

        let _ = write!(output, "{}", Self::hint_panel(topic, record.hint));
        let _ = writeln!(output);
        let _ = write!(
            output,
            "{}",
            Self::solution_panel(topic, record.solution, Some(record.explanation))
        );

        output
    }

    fn not_found(&self, _topic: Topic, identifier: &str, available: &[&str]) -> String {
        let mut output = String::new();

        let notice = format!("❌ Aide non trouvée pour l'étape {identifier}");
        let _ = writeln!(output, "{}", notice.error());
        let sections = format!("📚 Sections disponibles: {}", available.join(", "));
        let _ = writeln!(output, "{}", sections.muted());

        output
    }

    fn banner(&self, topic: Topic, message: &str) -> String {
        let emblem = topic.emblem();
        format!("{}\n", format!("{emblem} {message} {emblem}").success())
    }

    fn hint(&self, topic: Topic, text: &str) -> String {
        Self::hint_panel(topic, text)
    }

    fn solution(&self, topic: Topic, code: &str, explanation: Option<&str>) -> String {
        Self::solution_panel(topic, code, explanation)
    }

    fn template(&self, _topic: Topic, identifier: &str, body: &str) -> String {
        let mut output = String::new();

        let header = format!("▸ 📋 Code vierge pour l'étape {identifier}");
        let _ = writeln!(output, "{}", header.header());
        let _ = writeln!(output, "{}", indent(body));
        let _ = writeln!(output);
        let tip = "💡 Copiez-collez ce code dans la cellule d'exercice pour recommencer à zéro !";
        let _ = writeln!(output, "{}", tip.muted());

        output
    }

    fn template_not_found(&self, _topic: Topic, identifier: &str, available: &[&str]) -> String {
        let mut output = String::new();

        let notice = format!("❌ Template non trouvé pour l'étape {identifier}");
        let _ = writeln!(output, "{}", notice.error());
        if available.is_empty() {
            let none = "📋 Aucun template disponible pour ce chapitre";
            let _ = writeln!(output, "{}", none.muted());
        } else {
            let templates = format!("📋 Templates disponibles: {}", available.join(", "));
            let _ = writeln!(output, "{}", templates.muted());
        }

        output
    }

    fn overview(&self, topic: Topic, identifiers: &[&str], templates: &[&str]) -> String {
        let mut output = String::new();

        let header = format!("▸ {} Aide {}", topic.emblem(), topic.title());
        let _ = writeln!(output, "{}", header.header());
        let _ = writeln!(output, "  📚 Sections disponibles: {}", identifiers.join(", "));
        if !templates.is_empty() {
            let _ = writeln!(
                output,
                "  📋 Templates disponibles: {}",
                templates.join(", ")
            );
        }
        if let Some(first) = identifiers.first() {
            let usage = format!("💡 Demandez une étape précise, par exemple : {first}");
            let _ = writeln!(output, "  {}", usage.muted());
        }

        output
    }
}

/// Indents every non-empty line by two spaces.
fn indent(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("  {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
