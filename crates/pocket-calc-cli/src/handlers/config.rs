//! Config command handler

use crate::config::CliConfig;
use crate::error::CliResult;

/// Execute the config command: the effective configuration as YAML
pub fn execute_config(config: &CliConfig) -> CliResult<String> {
    config.to_yaml()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{ColorChoice, Verbosity};
    use pocket_calc::core::Settings;

    #[test]
    fn test_execute_config_defaults() {
        let yaml = execute_config(&CliConfig::default()).unwrap();
        assert!(yaml.contains("settings:"));
        assert!(yaml.contains("tape_capacity: 100"));
    }

    #[test]
    fn test_execute_config_reflects_flags() {
        let config = CliConfig::new()
            .with_verbosity(Verbosity::Debug)
            .with_color(ColorChoice::Never)
            .with_settings(Settings::new().with_precision(3));
        let yaml = execute_config(&config).unwrap();
        assert!(yaml.contains("verbosity: debug"));
        assert!(yaml.contains("color: never"));
        assert!(yaml.contains("precision: 3"));
    }
}
