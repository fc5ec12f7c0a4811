//! New command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::Reporter;
use crate::NewArgs;
use std::path::PathBuf;
use webpart_gen::module_names::current_year;
use webpart_gen::{ModuleNames, Scaffold};

/// Execute the new command
pub fn execute_new(config: &CliConfig, args: &NewArgs) -> CliResult<()> {
    let names = module_names(args)?;
    let file = Scaffold::new()
        .with_strictness(config.strictness)
        .render(&names)?;
    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());

    if args.dry_run {
        reporter.info(&format!("Would write {}", file.relative_path.display()));
        print!("{}", file.contents);
        return Ok(());
    }

    let out_dir = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output_dir));
    let outcome = Scaffold::write(&file, &out_dir, args.force)?;
    reporter.success(&format!(
        "{outcome} {}",
        out_dir.join(&file.relative_path).display()
    ));
    Ok(())
}

/// Resolve the four reserved values, defaulting from the module name
pub fn module_names(args: &NewArgs) -> CliResult<ModuleNames> {
    let name = args.module_name.as_str();
    let names = ModuleNames::new(
        name,
        args.lowercase_name
            .clone()
            .unwrap_or_else(|| name.to_ascii_lowercase()),
        args.dir_name.clone().unwrap_or_else(|| name.to_string()),
        args.year.clone().unwrap_or_else(current_year),
    )?;
    Ok(names)
}
