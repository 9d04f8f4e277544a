//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::logging::LogFormat;
use crate::output::OutputFormat;

/// Pocket calculator: press buttons from the command line or in a terminal
#[derive(Parser, Debug)]
#[command(name = "pocket-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Calculator settings file (YAML)
    #[arg(long, value_name = "FILE", env = "POCKET_CALC_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log line format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press buttons starting from a cleared calculator
    Press(PressArgs),

    /// Run the interactive terminal calculator
    Tui,

    /// Show the effective configuration
    Config,
}

/// Arguments for the press command
#[derive(Args, Debug, Clone)]
pub struct PressArgs {
    /// Button tokens: 0-9 . + - * / % = +/- del C
    #[arg(required = true, value_name = "TOKEN")]
    pub tokens: Vec<String>,

    /// Print the display after every press
    #[arg(long)]
    pub trace: bool,

    /// Print the completed operations
    #[arg(long)]
    pub tape: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_press_command() {
            let cli = Cli::parse_from(["pocket-calc", "press", "7", "+", "3", "="]);
            if let Commands::Press(args) = cli.command {
                assert_eq!(args.tokens, vec!["7", "+", "3", "="]);
                assert!(!args.trace);
                assert_eq!(args.format, OutputFormat::Text);
            } else {
                panic!("expected Press command");
            }
        }

        #[test]
        fn test_parse_press_minus_and_sign_tokens() {
            let cli = Cli::parse_from(["pocket-calc", "press", "9", "-", "+/-", "del", "C"]);
            if let Commands::Press(args) = cli.command {
                assert_eq!(args.tokens, vec!["9", "-", "+/-", "del", "C"]);
            } else {
                panic!("expected Press command");
            }
        }

        #[test]
        fn test_parse_press_flags() {
            let cli = Cli::parse_from([
                "pocket-calc", "press", "--trace", "--tape", "--format", "json", "1",
            ]);
            if let Commands::Press(args) = cli.command {
                assert!(args.trace);
                assert!(args.tape);
                assert_eq!(args.format, OutputFormat::Json);
            } else {
                panic!("expected Press command");
            }
        }

        #[test]
        fn test_press_requires_tokens() {
            assert!(Cli::try_parse_from(["pocket-calc", "press"]).is_err());
        }

        #[test]
        fn test_parse_tui_command() {
            let cli = Cli::parse_from(["pocket-calc", "tui"]);
            assert!(matches!(cli.command, Commands::Tui));
        }

        #[test]
        fn test_parse_config_command() {
            let cli = Cli::parse_from(["pocket-calc", "--config", "calc.yaml", "config"]);
            assert!(matches!(cli.command, Commands::Config));
            assert_eq!(cli.config, Some(PathBuf::from("calc.yaml")));
        }

        #[test]
        fn test_global_verbose_flag() {
            let cli = Cli::parse_from(["pocket-calc", "-vv", "config"]);
            assert_eq!(cli.verbose, 2);
        }

        #[test]
        fn test_global_quiet_flag() {
            let cli = Cli::parse_from(["pocket-calc", "config", "-q"]);
            assert!(cli.quiet);
        }

        #[test]
        fn test_global_color_flag() {
            let cli = Cli::parse_from(["pocket-calc", "--color", "never", "config"]);
            assert!(matches!(cli.color, ColorArg::Never));
        }

        #[test]
        fn test_log_format_flag() {
            let cli = Cli::parse_from(["pocket-calc", "--log-format", "json", "config"]);
            assert_eq!(cli.log_format, LogFormat::Json);
        }
    }

    mod format_tests {
        use super::*;

        #[test]
        fn test_color_arg_conversion() {
            use crate::config::ColorChoice;

            let auto: ColorChoice = ColorArg::Auto.into();
            assert_eq!(auto, ColorChoice::Auto);

            let always: ColorChoice = ColorArg::Always.into();
            assert_eq!(always, ColorChoice::Always);

            let never: ColorChoice = ColorArg::Never.into();
            assert_eq!(never, ColorChoice::Never);
        }

        #[test]
        fn test_cli_debug_assert() {
            use clap::CommandFactory;
            Cli::command().debug_assert();
        }
    }
}
