//! Press command handler

use pocket_calc::core::{CalcResult, Calculator, Command, Settings};
use tracing::info;

use crate::commands::PressArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{PressReport, TraceStep};

/// Runs `tokens` on a cleared calculator.
///
/// Every token is decoded before the first one is applied, so an unknown
/// token fails the whole run without partial output.
pub fn run_press(
    settings: Settings,
    tokens: &[String],
    trace: bool,
    tape: bool,
) -> CliResult<PressReport> {
    let commands = tokens
        .iter()
        .map(|token| token.parse::<Command>())
        .collect::<CalcResult<Vec<_>>>()?;

    let mut calc = Calculator::with_settings(settings);
    let mut steps = Vec::new();
    for (token, command) in tokens.iter().zip(commands) {
        let snapshot = calc.handle(command)?;
        if trace {
            steps.push(TraceStep::new(token, &snapshot));
        }
    }

    let snapshot = calc.snapshot();
    let precision = calc.settings().precision;
    let tape = if tape {
        calc.tape().iter().map(|entry| entry.display(precision)).collect()
    } else {
        Vec::new()
    };

    info!(presses = tokens.len(), display = %snapshot.display, "press run finished");

    Ok(PressReport {
        display: snapshot.display,
        active_operator: snapshot.active_operator,
        error: snapshot.error,
        steps,
        tape,
    })
}

/// Execute the press command and return the rendered output
pub fn execute_press(config: &CliConfig, args: &PressArgs) -> CliResult<String> {
    let report = run_press(config.settings.clone(), &args.tokens, args.trace, args.tape)?;
    Ok(report.render(args.format)?)
}
