//! Output formatting

use clap::ValueEnum;
use console::{style, Term};
use pocket_calc::core::{Operator, Snapshot};
use pocket_calc::view::operation_label;
use serde::{Deserialize, Serialize};

/// Output format for `press`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Display after one press
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    /// Token pressed
    pub token: String,
    /// Display text afterwards
    pub display: String,
    /// Highlighted operator afterwards
    pub active_operator: Option<Operator>,
}

impl TraceStep {
    /// Records the snapshot produced by `token`
    #[must_use]
    pub fn new(token: &str, snapshot: &Snapshot) -> Self {
        Self {
            token: token.to_string(),
            display: snapshot.display.clone(),
            active_operator: snapshot.active_operator,
        }
    }
}

/// Result of a `press` run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressReport {
    /// Final display text
    pub display: String,
    /// Operator still pending at the end
    pub active_operator: Option<Operator>,
    /// Whether the run ended on the error screen
    pub error: bool,
    /// Per-press trace, present with `--trace`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<TraceStep>,
    /// Completed operations, oldest first, present with `--tape`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tape: Vec<String>,
}

impl PressReport {
    /// Renders the report in `format`
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }

    fn render_text(&self) -> String {
        let mut lines: Vec<String> = self
            .steps
            .iter()
            .map(|step| {
                format!(
                    "{} {:>20}  {}",
                    style(format!("{:<4}", step.token)).cyan(),
                    step.display,
                    style(operation_label(step.active_operator)).dim()
                )
            })
            .collect();

        if self.steps.is_empty() {
            let display = if self.error {
                style(&self.display).red().bold()
            } else {
                style(&self.display).bold()
            };
            lines.push(display.to_string());
        }

        if !self.tape.is_empty() {
            lines.push(style("Tape:").underlined().to_string());
            lines.extend(self.tape.iter().map(|entry| format!("  {entry}")));
        }

        lines.join("\n")
    }
}

/// Writes results to stdout and notices to stderr
#[derive(Debug)]
pub struct Printer {
    out: Term,
    err: Term,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Printer {
    /// Create a new printer
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            quiet,
        }
    }

    /// Print a result; always shown
    pub fn result(&self, text: &str) -> std::io::Result<()> {
        self.out.write_line(text)
    }

    /// Print an informational notice
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        let _ = self
            .err
            .write_line(&format!("{} {message}", style("ℹ").blue().bold()));
    }
}
