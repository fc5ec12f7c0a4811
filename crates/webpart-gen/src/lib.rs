//! Webpart Gen: placeholder substitution and component scaffolding.
//!
//! Generates lazy web part components for `webpart` from a template carrying
//! `@@TOKEN@@` placeholders.
//!
//! # Example
//!
//! ```rust
//! use webpart_gen::prelude::*;
//!
//! let values = Substitutions::new().with("NAME", "Ada").with("YEAR", "2024");
//! let text = substitute("Hello @@NAME@@, year @@YEAR@@", &values, Strictness::Strict)?;
//! assert_eq!(text, "Hello Ada, year 2024");
//!
//! let names = ModuleNames::new("Demo", "demo", "Demo", "2024")?;
//! let file = Scaffold::new().render(&names)?;
//! assert_eq!(file.relative_path.to_str(), Some("components/Demo/demo_web_part.rs"));
//! # Ok::<(), webpart_gen::GenError>(())
//! ```
//!
//! Generated files are written with a `<file>.manifest.json` next to them
//! (see [`manifest`]) so regeneration never clobbers hand edits.

#![warn(missing_docs)]

pub mod error;
pub mod manifest;
pub mod module_names;
pub mod scaffold;
pub mod substitute;

pub use error::{GenError, GenResult};
pub use manifest::{FileManifest, GenerationMetadata};
pub use module_names::ModuleNames;
pub use scaffold::{GeneratedFile, Scaffold, WriteOutcome};
pub use substitute::{scan_tokens, substitute, Strictness, Substitutions};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{GenError, GenResult};
    pub use crate::manifest::{FileManifest, GenerationMetadata};
    pub use crate::module_names::ModuleNames;
    pub use crate::scaffold::{GeneratedFile, Scaffold, WriteOutcome};
    pub use crate::substitute::{scan_tokens, substitute, Strictness, Substitutions};
}
