//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// webpart: scaffold lazy web part page objects
#[derive(Parser, Debug)]
#[command(name = "webpart")]
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

    /// Warn about unused values instead of failing
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a web part component for a module
    New(NewArgs),

    /// Substitute @@TOKEN@@ placeholders in a template file
    Render(RenderArgs),

    /// List the tokens a template uses
    Tokens(TokensArgs),

    /// Show configuration
    Config(ConfigArgs),
}

/// Arguments for the new command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Module name, e.g. `Issues` (also the web part title)
    pub module_name: String,

    /// Lowercase module name (default: module name lowercased)
    #[arg(long)]
    pub lowercase_name: Option<String>,

    /// Directory under `components/` (default: module name)
    #[arg(long)]
    pub dir_name: Option<String>,

    /// Copyright year (default: current year)
    #[arg(long)]
    pub year: Option<String>,

    /// Output directory
    #[arg(short, long, env = "WEBPART_OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Overwrite files that were edited or not generated by webpart
    #[arg(short, long)]
    pub force: bool,

    /// Print the component instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Template file
    pub template: PathBuf,

    /// Token value (repeatable)
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub values: Vec<(String, String)>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the tokens command
#[derive(Parser, Debug)]
pub struct TokensArgs {
    /// Template file
    pub template: PathBuf,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
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

/// Parse a `KEY=VALUE` pair; the value may itself contain `=`
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))
}
