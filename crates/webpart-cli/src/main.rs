//! webpart CLI: scaffold lazy web part page objects
//!
//! ## Usage
//!
//! ```bash
//! webpart new Issues                          # components/Issues/issues_web_part.rs
//! webpart new Issues --dir-name issues -o ui  # custom directory and output root
//! webpart render page.tmpl --set NAME=Ada     # substitute any template
//! webpart tokens page.tmpl                    # list the tokens it needs
//! ```

use clap::Parser;
use std::process::ExitCode;
use webpart_cli::{
    handlers, logging, Cli, CliConfig, CliResult, ColorChoice, Commands, Verbosity,
};
use webpart_gen::Strictness;

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
    let config = build_config(&cli);
    console::set_colors_enabled_stderr(config.color.should_color());
    logging::init(&config);
    tracing::debug!(?config, "starting");

    match cli.command {
        Commands::New(args) => handlers::execute_new(&config, &args),
        Commands::Render(args) => handlers::execute_render(&config, &args),
        Commands::Tokens(args) => handlers::execute_tokens(&config, &args),
        Commands::Config(args) => handlers::execute_config(&config, &args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.clone().into();
    let strictness = if cli.lenient {
        Strictness::Lenient
    } else {
        Strictness::Strict
    };

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_strictness(strictness)
}
