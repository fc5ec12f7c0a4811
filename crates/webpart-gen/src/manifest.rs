//! Generation manifests.
//!
//! Every generated file is written next to `<filename>.manifest.json`, which
//! records the blake3 hash of what was written. A file that still matches
//! its manifest is generator-owned and may be regenerated in place; a file
//! that does not has been edited by hand.

use crate::error::{GenError, GenResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How and from what a file was generated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    /// Tool that generated the file
    pub tool: String,
    /// Tool version
    pub version: String,
    /// Blake3 hash of the template and values
    pub input_hash: String,
    /// RFC 3339 timestamp
    pub timestamp: String,
    /// Command to regenerate
    pub regenerate_cmd: String,
}

impl GenerationMetadata {
    /// Metadata stamped with this crate's name, version and the current time
    #[must_use]
    pub fn now(input_hash: impl Into<String>, regenerate_cmd: impl Into<String>) -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            input_hash: input_hash.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            regenerate_cmd: regenerate_cmd.into(),
        }
    }
}

/// Manifest for a generated file.
///
/// Stored alongside generated files as `<filename>.manifest.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileManifest {
    /// Version of manifest format
    pub manifest_version: u32,
    /// Path to generated file (relative)
    pub output_path: String,
    /// Blake3 hash of generated file contents
    pub output_hash: String,
    /// Generation metadata
    pub generation: GenerationMetadata,
}

impl FileManifest {
    /// Current manifest format version.
    pub const VERSION: u32 = 1;

    /// Create a new manifest.
    #[must_use]
    pub fn new(
        output_path: impl Into<String>,
        output_hash: impl Into<String>,
        generation: GenerationMetadata,
    ) -> Self {
        Self {
            manifest_version: Self::VERSION,
            output_path: output_path.into(),
            output_hash: output_hash.into(),
            generation,
        }
    }

    /// Get the manifest file path for a generated file.
    #[must_use]
    pub fn manifest_path(generated_path: &Path) -> PathBuf {
        let mut filename = generated_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        filename.push_str(".manifest.json");
        generated_path.with_file_name(filename)
    }

    /// Write manifest to file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be written.
    pub fn write(&self, path: &Path) -> GenResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Read manifest from file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed.
    pub fn read(path: &Path) -> GenResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let manifest: Self = serde_json::from_str(&json)?;
        Ok(manifest)
    }

    /// Verify a generated file still matches its manifest.
    ///
    /// # Errors
    ///
    /// - [`GenError::ManifestError`] if the manifest is missing or unreadable
    /// - [`GenError::HashMismatch`] if the file was modified
    /// - [`GenError::Io`] if the file itself cannot be read
    pub fn verify(generated_path: &Path) -> GenResult<Self> {
        let manifest_path = Self::manifest_path(generated_path);

        let manifest = Self::read(&manifest_path).map_err(|err| GenError::ManifestError {
            path: generated_path.display().to_string(),
            reason: format!("cannot read {}: {err}", manifest_path.display()),
        })?;

        let contents = std::fs::read(generated_path)?;
        let actual_hash = hash_bytes(&contents);

        if actual_hash != manifest.output_hash {
            return Err(GenError::HashMismatch {
                path: generated_path.display().to_string(),
                expected: manifest.output_hash,
                actual: actual_hash,
            });
        }

        Ok(manifest)
    }
}

/// Compute Blake3 hash of file contents.
#[must_use]
pub fn hash_contents(contents: &str) -> String {
    hash_bytes(contents.as_bytes())
}

/// Compute Blake3 hash of raw bytes; a file need not be UTF-8 to be checked.
#[must_use]
pub fn hash_bytes(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

/// Write a generated file and its manifest.
///
/// # Errors
///
/// Returns error if either file cannot be written.
pub fn write_with_manifest(
    path: &Path,
    contents: &str,
    metadata: GenerationMetadata,
) -> GenResult<FileManifest> {
    let hash = hash_contents(contents);
    std::fs::write(path, contents)?;

    let manifest = FileManifest::new(
        path.file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default(),
        hash,
        metadata,
    );
    manifest.write(&FileManifest::manifest_path(path))?;
    tracing::debug!(path = %path.display(), hash = %manifest.output_hash, "wrote manifest");

    Ok(manifest)
}
