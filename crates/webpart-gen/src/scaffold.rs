//! Component scaffolding.
//!
//! Renders the embedded web part template (and its destination path) for a
//! set of [`ModuleNames`], then writes it under an output directory together
//! with a generation manifest.

use crate::error::{GenError, GenResult};
use crate::manifest::{self, FileManifest, GenerationMetadata};
use crate::module_names::{ModuleNames, MODULE_DIR_NAME, MODULE_LOWERCASE_NAME};
use crate::substitute::{substitute, Strictness, Substitutions};
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

/// Template for a lazy web part component
pub const WEB_PART_TEMPLATE: &str = include_str!("../templates/web_part.rs.tmpl");

/// Destination of a rendered component, relative to the output directory
pub const PATH_TEMPLATE: &str =
    "components/@@MODULE_DIR_NAME@@/@@MODULE_LOWERCASE_NAME@@_web_part.rs";

/// A rendered file, not yet written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output directory
    pub relative_path: PathBuf,
    /// Substituted file contents
    pub contents: String,
    /// Provenance recorded in the manifest
    pub metadata: GenerationMetadata,
}

/// What [`Scaffold::write`] did to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Target did not exist
    Created,
    /// Target was unmodified generator output and was replaced
    Regenerated,
    /// Target was replaced because `force` was set
    Overwritten,
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Regenerated => write!(f, "regenerated"),
            Self::Overwritten => write!(f, "overwritten"),
        }
    }
}

/// Renders and writes component scaffolds
#[derive(Debug, Clone)]
pub struct Scaffold {
    template: Cow<'static, str>,
    strictness: Strictness,
}

impl Default for Scaffold {
    fn default() -> Self {
        Self {
            template: Cow::Borrowed(WEB_PART_TEMPLATE),
            strictness: Strictness::Strict,
        }
    }
}

impl Scaffold {
    /// Scaffold using the embedded web part template
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different file template
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Cow::Owned(template.into());
        self
    }

    /// Set how reserved values the template never uses are treated
    #[must_use]
    pub const fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// File template in use
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Render the component and its destination path.
    ///
    /// # Errors
    ///
    /// Any substitution error; the embedded template always resolves.
    pub fn render(&self, names: &ModuleNames) -> GenResult<GeneratedFile> {
        let values = names.to_substitutions();
        let contents = substitute(&self.template, &values, self.strictness)?;

        let path_values = Substitutions::new()
            .with(MODULE_DIR_NAME, names.dir_name())
            .with(MODULE_LOWERCASE_NAME, names.lowercase_name());
        let relative_path = PathBuf::from(substitute(
            PATH_TEMPLATE,
            &path_values,
            Strictness::Strict,
        )?);

        tracing::debug!(
            module = names.module_name(),
            path = %relative_path.display(),
            "rendered web part"
        );

        Ok(GeneratedFile {
            relative_path,
            contents,
            metadata: GenerationMetadata::now(
                input_hash(&self.template, &values)?,
                regenerate_command(names),
            ),
        })
    }

    /// Write `file` under `out_dir`, with its manifest.
    ///
    /// An existing target is only replaced when it is unmodified generator
    /// output or when `force` is set.
    ///
    /// # Errors
    ///
    /// [`GenError::WouldOverwrite`] for a foreign or edited target without
    /// `force`, or any IO error.
    pub fn write(file: &GeneratedFile, out_dir: &Path, force: bool) -> GenResult<WriteOutcome> {
        let path = out_dir.join(&file.relative_path);

        let outcome = if !path.exists() {
            WriteOutcome::Created
        } else if force {
            WriteOutcome::Overwritten
        } else {
            match FileManifest::verify(&path) {
                Ok(_) => WriteOutcome::Regenerated,
                Err(GenError::HashMismatch { .. } | GenError::ManifestError { .. }) => {
                    return Err(GenError::WouldOverwrite {
                        path: path.display().to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let _ = manifest::write_with_manifest(&path, &file.contents, file.metadata.clone())?;
        tracing::info!(path = %path.display(), %outcome, "wrote web part");

        Ok(outcome)
    }
}

fn input_hash(template: &str, values: &Substitutions) -> GenResult<String> {
    let mut hasher = blake3::Hasher::new();
    let _ = hasher.update(template.as_bytes());
    let _ = hasher.update(&serde_json::to_vec(values)?);
    Ok(hasher.finalize().to_hex().to_string())
}

fn regenerate_command(names: &ModuleNames) -> String {
    format!(
        "webpart new {} --lowercase-name {} --dir-name {} --year {}",
        names.module_name(),
        names.lowercase_name(),
        names.dir_name(),
        names.year()
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::substitute::scan_tokens;
    use tempfile::TempDir;

    fn demo() -> ModuleNames {
        ModuleNames::new("Demo", "demo", "Demo", "2024").unwrap()
    }

    mod render_tests {
        use super::*;

        #[test]
        fn test_embedded_template_uses_reserved_tokens_only() {
            let mut tokens = scan_tokens(WEB_PART_TEMPLATE).unwrap();
            tokens.sort();
            assert_eq!(
                tokens,
                vec![
                    "CURRENT_YEAR",
                    "MODULE_DIR_NAME",
                    "MODULE_LOWERCASE_NAME",
                    "MODULE_NAME"
                ]
            );
        }

        #[test]
        fn test_render_path() {
            let names = ModuleNames::new("Issues", "issues", "issues-ui", "2024").unwrap();
            let file = Scaffold::new().render(&names).unwrap();
            assert_eq!(
                file.relative_path,
                PathBuf::from("components/issues-ui/issues_web_part.rs")
            );
        }

        #[test]
        fn test_render_contents() {
            let file = Scaffold::new().render(&demo()).unwrap();
            assert!(file.contents.contains("pub struct DemoWebPart<'d, D: Driver + ?Sized>"));
            assert!(file.contents.contains("pub const MODULE: &str = \"demo\";"));
            assert!(file.contents.starts_with("// Copyright (c) 2024 The Demo module authors"));
            assert!(!file.contents.contains("@@"));
        }

        #[test]
        fn test_render_metadata() {
            let file = Scaffold::new().render(&demo()).unwrap();
            assert_eq!(
                file.metadata.regenerate_cmd,
                "webpart new Demo --lowercase-name demo --dir-name Demo --year 2024"
            );
            let again = Scaffold::new().render(&demo()).unwrap();
            assert_eq!(file.metadata.input_hash, again.metadata.input_hash);

            let other = ModuleNames::new("Demo", "demo", "Demo", "2025").unwrap();
            let changed = Scaffold::new().render(&other).unwrap();
            assert_ne!(file.metadata.input_hash, changed.metadata.input_hash);
        }

        #[test]
        fn test_custom_template_strictness() {
            let scaffold = Scaffold::new().with_template("struct @@MODULE_NAME@@;");
            let err = scaffold.render(&demo()).unwrap_err();
            assert!(matches!(err, GenError::UnknownToken { .. }));

            let file = scaffold
                .with_strictness(Strictness::Lenient)
                .render(&demo())
                .unwrap();
            assert_eq!(file.contents, "struct Demo;");
        }
    }

    mod write_tests {
        use super::*;

        #[test]
        fn test_write_creates_directories_and_manifest() {
            let dir = TempDir::new().unwrap();
            let file = Scaffold::new().render(&demo()).unwrap();

            let outcome = Scaffold::write(&file, dir.path(), false).unwrap();
            assert_eq!(outcome, WriteOutcome::Created);

            let path = dir.path().join("components/Demo/demo_web_part.rs");
            assert_eq!(std::fs::read_to_string(&path).unwrap(), file.contents);
            let manifest = FileManifest::verify(&path).unwrap();
            assert_eq!(manifest.generation, file.metadata);
        }

        #[test]
        fn test_unmodified_output_is_regenerated() {
            let dir = TempDir::new().unwrap();
            let file = Scaffold::new().render(&demo()).unwrap();
            let _ = Scaffold::write(&file, dir.path(), false).unwrap();

            let outcome = Scaffold::write(&file, dir.path(), false).unwrap();
            assert_eq!(outcome, WriteOutcome::Regenerated);
        }

        #[test]
        fn test_edited_output_is_protected() {
            let dir = TempDir::new().unwrap();
            let file = Scaffold::new().render(&demo()).unwrap();
            let _ = Scaffold::write(&file, dir.path(), false).unwrap();

            let path = dir.path().join(&file.relative_path);
            std::fs::write(&path, "// hand edited\n").unwrap();

            let err = Scaffold::write(&file, dir.path(), false).unwrap_err();
            assert!(matches!(err, GenError::WouldOverwrite { .. }));
            assert_eq!(std::fs::read_to_string(&path).unwrap(), "// hand edited\n");

            let outcome = Scaffold::write(&file, dir.path(), true).unwrap();
            assert_eq!(outcome, WriteOutcome::Overwritten);
            assert_eq!(std::fs::read_to_string(&path).unwrap(), file.contents);
        }

        #[test]
        fn test_foreign_file_is_protected() {
            let dir = TempDir::new().unwrap();
            let file = Scaffold::new().render(&demo()).unwrap();
            let path = dir.path().join(&file.relative_path);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, "mine").unwrap();

            let err = Scaffold::write(&file, dir.path(), false).unwrap_err();
            assert!(matches!(err, GenError::WouldOverwrite { .. }));
        }

        #[test]
        fn test_non_utf8_target_is_protected() {
            let dir = TempDir::new().unwrap();
            let file = Scaffold::new().render(&demo()).unwrap();
            let _ = Scaffold::write(&file, dir.path(), false).unwrap();

            let path = dir.path().join(&file.relative_path);
            std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

            let err = Scaffold::write(&file, dir.path(), false).unwrap_err();
            assert!(matches!(err, GenError::WouldOverwrite { .. }));
            assert_eq!(std::fs::read(&path).unwrap(), vec![0xff, 0xfe, 0x00]);
        }
    }
}
