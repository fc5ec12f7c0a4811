//! webpart CLI library
//!
//! Command-line front end for `webpart-gen`: scaffolds web part components,
//! renders arbitrary `@@TOKEN@@` templates and lists their tokens.

#![warn(missing_docs)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{
    parse_key_value, Cli, ColorArg, Commands, ConfigArgs, NewArgs, RenderArgs, TokensArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::Reporter;
