//! Tokens command handler

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Reporter;
use crate::TokensArgs;
use std::path::Path;
use webpart_gen::scan_tokens;

/// Execute the tokens command
pub fn execute_tokens(config: &CliConfig, args: &TokensArgs) -> CliResult<()> {
    let template = read_template(&args.template)?;
    let tokens = scan_tokens(&template)?;

    if tokens.is_empty() {
        Reporter::new(config.color.should_color(), config.verbosity.is_quiet())
            .info(&format!("No tokens in {}", args.template.display()));
    }
    for token in tokens {
        println!("{token}");
    }
    Ok(())
}

/// Read a template file
pub fn read_template(path: &Path) -> CliResult<String> {
    tracing::debug!(path = %path.display(), "reading template");
    std::fs::read_to_string(path).map_err(|err| CliError::read_template(path, err))
}
