//! Command handlers - one module per subcommand

pub mod config;
pub mod new;
pub mod render;
pub mod tokens;

pub use config::execute_config;
pub use new::{execute_new, module_names};
pub use render::{execute_render, substitutions};
pub use tokens::{execute_tokens, read_template};
