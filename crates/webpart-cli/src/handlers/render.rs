//! Render command handler

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::handlers::tokens::read_template;
use crate::output::Reporter;
use crate::RenderArgs;
use webpart_gen::{substitute, Substitutions};

/// Execute the render command
pub fn execute_render(config: &CliConfig, args: &RenderArgs) -> CliResult<()> {
    let template = read_template(&args.template)?;
    let values = substitutions(&args.values)?;
    let output = substitute(&template, &values, config.strictness)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &output)?;
            Reporter::new(config.color.should_color(), config.verbosity.is_quiet())
                .success(&format!("Wrote {}", path.display()));
        }
        None => print!("{output}"),
    }
    Ok(())
}

/// Build the mapping from `--set` pairs. A key may only be given once.
pub fn substitutions(pairs: &[(String, String)]) -> CliResult<Substitutions> {
    let mut values = Substitutions::new();
    for (key, value) in pairs {
        if values.insert(key.as_str(), value.as_str()).is_some() {
            return Err(CliError::invalid_argument(format!(
                "'{key}' is set more than once"
            )));
        }
    }
    Ok(values)
}
