//! Pocket Calculator CLI
//!
//! ## Usage
//!
//! ```bash
//! pocket-calc press 7 + 3 =          # Prints 10
//! pocket-calc press --trace 5 % =    # One line per press
//! pocket-calc tui                    # Mouse-driven terminal calculator
//! pocket-calc --config calc.yaml config
//! ```

use clap::Parser;
use pocket_calc_cli::{
    handlers, load_settings, logging, Cli, CliConfig, CliResult, ColorChoice, Commands, Printer,
    Verbosity,
};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    logging::init(verbosity, cli.log_format);

    let config = build_config(&cli, verbosity)?;
    console::set_colors_enabled(config.color.should_color());
    console::set_colors_enabled_stderr(config.color.should_color());
    debug!(?config, "effective configuration");

    let printer = Printer::new(config.verbosity.is_quiet());

    match cli.command {
        Commands::Press(args) => {
            let output = handlers::execute_press(&config, &args)?;
            printer.result(&output)?;
        }
        Commands::Tui => {
            let display = handlers::execute_tui(&config)?;
            printer.info(&format!("Final display: {display}"));
        }
        Commands::Config => {
            let yaml = handlers::execute_config(&config)?;
            printer.result(yaml.trim_end())?;
        }
    }

    Ok(())
}

fn build_config(cli: &Cli, verbosity: Verbosity) -> CliResult<CliConfig> {
    let color: ColorChoice = cli.color.into();
    let settings = match &cli.config {
        Some(path) => load_settings(path)?,
        None => pocket_calc::core::Settings::default(),
    };

    Ok(CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_settings(settings))
}
