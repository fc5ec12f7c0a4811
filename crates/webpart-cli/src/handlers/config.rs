//! Config command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::ConfigArgs;
use std::fmt::Write as _;

/// Execute the config command
pub fn execute_config(config: &CliConfig, args: &ConfigArgs) -> CliResult<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", format_config(config));
    }
    Ok(())
}

/// Human-readable configuration listing
#[must_use]
pub fn format_config(config: &CliConfig) -> String {
    let mut out = String::from("Current configuration:\n");
    let _ = writeln!(out, "  Verbosity: {:?}", config.verbosity);
    let _ = writeln!(out, "  Color: {:?}", config.color);
    let _ = writeln!(out, "  Strictness: {}", config.strictness);
    let _ = writeln!(out, "  Output dir: {}", config.output_dir);
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use webpart_gen::Strictness;

    #[test]
    fn test_format_config_defaults() {
        let text = format_config(&CliConfig::default());
        assert!(text.contains("Verbosity: Normal"));
        assert!(text.contains("Color: Auto"));
        assert!(text.contains("Strictness: strict"));
        assert!(text.contains("Output dir: ."));
    }

    #[test]
    fn test_format_config_lenient() {
        let config = CliConfig::new().with_strictness(Strictness::Lenient);
        assert!(format_config(&config).contains("Strictness: lenient"));
    }

    #[test]
    fn test_execute_config_json() {
        let config = CliConfig::default();
        execute_config(&config, &ConfigArgs { json: true }).unwrap();
        execute_config(&config, &ConfigArgs { json: false }).unwrap();
    }
}
