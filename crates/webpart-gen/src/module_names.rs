//! The four reserved values every scaffold is generated from.

use crate::error::{GenError, GenResult};
use crate::substitute::Substitutions;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Token for the component's type-name prefix and web part title
pub const MODULE_NAME: &str = "MODULE_NAME";
/// Token for the lowercase module name
pub const MODULE_LOWERCASE_NAME: &str = "MODULE_LOWERCASE_NAME";
/// Token for the directory the component lives in
pub const MODULE_DIR_NAME: &str = "MODULE_DIR_NAME";
/// Token for the copyright year
pub const CURRENT_YEAR: &str = "CURRENT_YEAR";

/// All reserved tokens
pub const RESERVED_TOKENS: [&str; 4] =
    [MODULE_NAME, MODULE_LOWERCASE_NAME, MODULE_DIR_NAME, CURRENT_YEAR];

/// Validated values for the reserved tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleNames {
    module_name: String,
    lowercase_name: String,
    dir_name: String,
    year: String,
}

impl ModuleNames {
    /// Validate and bundle all four values.
    ///
    /// # Errors
    ///
    /// [`GenError::InvalidValue`] naming the first token whose value is
    /// rejected.
    pub fn new(
        module_name: impl Into<String>,
        lowercase_name: impl Into<String>,
        dir_name: impl Into<String>,
        year: impl Into<String>,
    ) -> GenResult<Self> {
        let names = Self {
            module_name: module_name.into(),
            lowercase_name: lowercase_name.into(),
            dir_name: dir_name.into(),
            year: year.into(),
        };
        validate_module_name(&names.module_name)?;
        validate_lowercase_name(&names.lowercase_name)?;
        validate_dir_name(&names.dir_name)?;
        validate_year(&names.year)?;
        Ok(names)
    }

    /// Derive the other three values from the module name: lowercased name,
    /// the module name as directory, and this year.
    ///
    /// # Errors
    ///
    /// [`GenError::InvalidValue`] if `module_name` (or its lowercase form)
    /// is rejected.
    pub fn from_module_name(module_name: &str) -> GenResult<Self> {
        Self::new(
            module_name,
            module_name.to_ascii_lowercase(),
            module_name,
            current_year(),
        )
    }

    /// Module (and web part title) name
    #[must_use]
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Lowercase module name
    #[must_use]
    pub fn lowercase_name(&self) -> &str {
        &self.lowercase_name
    }

    /// Directory name
    #[must_use]
    pub fn dir_name(&self) -> &str {
        &self.dir_name
    }

    /// Copyright year
    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Mapping for [`crate::substitute`]
    #[must_use]
    pub fn to_substitutions(&self) -> Substitutions {
        Substitutions::new()
            .with(MODULE_NAME, self.module_name.as_str())
            .with(MODULE_LOWERCASE_NAME, self.lowercase_name.as_str())
            .with(MODULE_DIR_NAME, self.dir_name.as_str())
            .with(CURRENT_YEAR, self.year.as_str())
    }
}

/// Four-digit local year
#[must_use]
pub fn current_year() -> String {
    format!("{:04}", chrono::Local::now().year())
}

fn validate_module_name(value: &str) -> GenResult<()> {
    let Some(first) = value.chars().next() else {
        return Err(GenError::invalid_value(MODULE_NAME, "must not be empty"));
    };
    if !first.is_ascii_uppercase() {
        return Err(GenError::invalid_value(
            MODULE_NAME,
            format!("'{value}' must start with an uppercase ASCII letter"),
        ));
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(GenError::invalid_value(
            MODULE_NAME,
            format!("'{value}' may only contain ASCII letters, digits and '_'"),
        ));
    }
    Ok(())
}

fn validate_lowercase_name(value: &str) -> GenResult<()> {
    let mut chars = value.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(GenError::invalid_value(
            MODULE_LOWERCASE_NAME,
            format!("'{value}' must match [a-z][a-z0-9_]*"),
        ))
    }
}

fn validate_dir_name(value: &str) -> GenResult<()> {
    if value.is_empty() || value == "." || value == ".." {
        return Err(GenError::invalid_value(
            MODULE_DIR_NAME,
            format!("'{value}' is not a directory name"),
        ));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        return Err(GenError::invalid_value(
            MODULE_DIR_NAME,
            format!("'{value}' must be a single path segment of [A-Za-z0-9_.-]"),
        ));
    }
    Ok(())
}

fn validate_year(value: &str) -> GenResult<()> {
    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(GenError::invalid_value(
            CURRENT_YEAR,
            format!("'{value}' must be four digits"),
        ))
    }
}
