//! Render reporting on stderr.
//!
//! Stdout carries the HTML page when no output file is given, so every
//! status line goes to stderr.

use std::path::Path;

use console::{Style, Term};

/// Status reporter for the render command.
pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
        }
    }

    /// Report a page written to `path` (green).
    pub(crate) fn rendered(&self, path: &Path, components: &[String]) {
        self.line(&self.green, &rendered_message(path, components));
    }

    /// Report non-fatal render diagnostics (yellow), one per line.
    pub(crate) fn render_warnings(&self, warnings: &[String]) {
        if warnings.is_empty() {
            return;
        }
        self.line(&self.yellow, &warning_header(warnings.len()));
        for warning in warnings {
            self.line(&self.yellow, &format!("  {warning}"));
        }
    }

    /// Report a failed command (red).
    pub(crate) fn failure(&self, err: &dyn std::error::Error) {
        self.line(&self.red, &format!("Error: {err}"));
    }

    fn line(&self, style: &Style, msg: &str) {
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }
}

fn rendered_message(path: &Path, components: &[String]) -> String {
    if components.is_empty() {
        format!("Rendered {}", path.display())
    } else {
        format!(
            "Rendered {} (components: {})",
            path.display(),
            components.join(", ")
        )
    }
}

fn warning_header(count: usize) -> String {
    if count == 1 {
        "1 warning:".to_owned()
    } else {
        format!("{count} warnings:")
    }
}
