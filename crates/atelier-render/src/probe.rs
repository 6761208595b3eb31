//! Output surface detection.

use std::io::IsTerminal;

/// Probes whether stdout can carry panelled, colored output.
///
/// True when stdout is a terminal, `NO_COLOR` is unset (or empty), and
/// `TERM` is not `dumb`. Consulted once per session; any uncertainty
/// degrades to plain output, so this never fails.
#[must_use]
pub fn interactive_surface_available() -> bool {
    let is_tty = std::io::stdout().is_terminal();
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let term_dumb = std::env::var("TERM").is_ok_and(|t| t == "dumb");
    decide(is_tty, no_color, term_dumb)
}

/// Pure decision over the three probe inputs.
pub(crate) const fn decide(is_tty: bool, no_color: bool, term_dumb: bool) -> bool {
    is_tty && !no_color && !term_dumb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_terminal_is_rich() {
        assert!(decide(true, false, false));
    }

    #[test]
    fn test_pipe_is_plain() {
        assert!(!decide(false, false, false));
    }

    #[test]
    fn test_no_color_forces_plain() {
        assert!(!decide(true, true, false));
    }

    #[test]
    fn test_dumb_terminal_forces_plain() {
        assert!(!decide(true, false, true));
    }
}
