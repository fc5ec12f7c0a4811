//! Literal `@@TOKEN@@` substitution.
//!
//! One pass over the template: every token is swapped for its value and the
//! inserted text is never expanded. There are no conditionals, loops or
//! escapes. A template either comes out with zero tokens left, including any
//! that values form with their neighbours, or the call fails and nothing is
//! returned.

use crate::error::{GenError, GenResult};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::OnceLock;

/// Token syntax: `@@` + `[A-Z_]+` + `@@`
pub const TOKEN_PATTERN: &str = "@@([A-Z_]+)@@";

static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> GenResult<&'static Regex> {
    if let Some(regex) = TOKEN_REGEX.get() {
        return Ok(regex);
    }
    let regex = Regex::new(TOKEN_PATTERN)?;
    Ok(TOKEN_REGEX.get_or_init(|| regex))
}

/// Whether `name` is a valid token name (`[A-Z_]+`)
#[must_use]
pub fn is_token_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_uppercase() || b == b'_')
}

/// How unused mapping keys are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Unused keys are an error
    #[default]
    Strict,
    /// Unused keys are logged and ignored
    Lenient,
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

/// Token name to replacement text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitutions {
    values: BTreeMap<String, String>,
}

impl Substitutions {
    /// Empty mapping
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a value (builder form)
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace a value, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    /// Value for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the mapping is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check every key is a token name and no value contains token syntax.
    ///
    /// # Errors
    ///
    /// [`GenError::InvalidTokenName`] or [`GenError::TokenInValue`] for the
    /// first offending entry (in key order).
    pub fn validate(&self) -> GenResult<()> {
        let regex = token_regex()?;
        for (key, value) in &self.values {
            if !is_token_name(key) {
                return Err(GenError::InvalidTokenName { name: key.clone() });
            }
            if regex.is_match(value) {
                return Err(GenError::TokenInValue { key: key.clone() });
            }
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Substitutions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Distinct token names used by `template`, in first-occurrence order.
///
/// # Errors
///
/// Only if the token pattern fails to compile.
pub fn scan_tokens(template: &str) -> GenResult<Vec<String>> {
    let mut seen = BTreeSet::new();
    let mut tokens = Vec::new();
    for caps in token_regex()?.captures_iter(template) {
        let name = &caps[1];
        if seen.insert(name.to_string()) {
            tokens.push(name.to_string());
        }
    }
    Ok(tokens)
}

/// Replace every `@@TOKEN@@` in `template` with its value.
///
/// # Errors
///
/// - [`GenError::InvalidTokenName`] / [`GenError::TokenInValue`] from
///   [`Substitutions::validate`]
/// - [`GenError::UnresolvedToken`] listing every token without a value, or
///   every token that inserted values formed with the surrounding text
/// - [`GenError::UnknownToken`] for unused keys, in [`Strictness::Strict`]
pub fn substitute(
    template: &str,
    values: &Substitutions,
    strictness: Strictness,
) -> GenResult<String> {
    values.validate()?;

    let regex = token_regex()?;
    let mut used = BTreeSet::new();
    let mut missing = BTreeSet::new();
    let output = regex.replace_all(template, |caps: &Captures<'_>| {
        let name = &caps[1];
        if let Some(value) = values.get(name) {
            let _ = used.insert(name.to_string());
            value.to_string()
        } else {
            let _ = missing.insert(name.to_string());
            caps[0].to_string()
        }
    });

    if !missing.is_empty() {
        return Err(GenError::UnresolvedToken {
            tokens: missing.into_iter().collect(),
        });
    }

    // Values may join with neighbouring text into a new token.
    let formed: BTreeSet<String> = regex
        .captures_iter(&output)
        .map(|caps| caps[1].to_string())
        .collect();
    if !formed.is_empty() {
        return Err(GenError::UnresolvedToken {
            tokens: formed.into_iter().collect(),
        });
    }

    let unknown: Vec<String> = values
        .keys()
        .filter(|key| !used.contains(*key))
        .map(str::to_string)
        .collect();
    if !unknown.is_empty() {
        match strictness {
            Strictness::Strict => return Err(GenError::UnknownToken { tokens: unknown }),
            Strictness::Lenient => {
                tracing::warn!(tokens = ?unknown, "ignoring values the template never uses");
            }
        }
    }

    tracing::trace!(replaced = used.len(), bytes = output.len(), "substituted template");
    Ok(output.into_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn greeting() -> Substitutions {
        Substitutions::new().with("NAME", "Ada").with("YEAR", "2024")
    }

    mod substitute_tests {
        use super::*;

        #[test]
        fn test_all_tokens_replaced() {
            let out = substitute("Hello @@NAME@@, year @@YEAR@@", &greeting(), Strictness::Strict)
                .unwrap();
            assert_eq!(out, "Hello Ada, year 2024");
        }

        #[test]
        fn test_repeated_token() {
            let values = Substitutions::new().with("X", "1");
            let out = substitute("@@X@@+@@X@@=@@X@@@@X@@", &values, Strictness::Strict).unwrap();
            assert_eq!(out, "1+1=11");
        }

        #[test]
        fn test_missing_token_lists_every_name() {
            let values = Substitutions::new().with("NAME", "Ada");
            let err = substitute(
                "@@ZED@@ Hello @@NAME@@, year @@YEAR@@ @@YEAR@@",
                &values,
                Strictness::Strict,
            )
            .unwrap_err();
            match err {
                GenError::UnresolvedToken { tokens } => assert_eq!(tokens, vec!["YEAR", "ZED"]),
                other => panic!("unexpected error: {other}"),
            }
        }

        #[test]
        fn test_no_tokens_is_identity() {
            let text = "plain text, @@ not a token @@ and @lower@";
            let out = substitute(text, &Substitutions::new(), Strictness::Strict).unwrap();
            assert_eq!(out, text);
        }

        #[test]
        fn test_case_sensitive() {
            let values = Substitutions::new().with("NAME", "Ada");
            let out = substitute("@@NAME@@ @@name@@", &values, Strictness::Strict).unwrap();
            assert_eq!(out, "Ada @@name@@");
        }

        #[test]
        fn test_values_inserted_verbatim() {
            let values = Substitutions::new().with("BODY", "  \"quoted\" \\ $1 ${x}\n");
            let out = substitute("[@@BODY@@]", &values, Strictness::Strict).unwrap();
            assert_eq!(out, "[  \"quoted\" \\ $1 ${x}\n]");
        }

        #[test]
        fn test_unknown_key_strict() {
            let values = greeting().with("EXTRA", "x");
            let err = substitute("@@NAME@@ @@YEAR@@", &values, Strictness::Strict).unwrap_err();
            match err {
                GenError::UnknownToken { tokens } => assert_eq!(tokens, vec!["EXTRA"]),
                other => panic!("unexpected error: {other}"),
            }
        }

        #[test]
        fn test_unknown_key_lenient() {
            let values = greeting().with("EXTRA", "x");
            let out = substitute("@@NAME@@ @@YEAR@@", &values, Strictness::Lenient).unwrap();
            assert_eq!(out, "Ada 2024");
        }

        #[test]
        fn test_missing_wins_over_unknown() {
            let values = Substitutions::new().with("EXTRA", "x");
            let err = substitute("@@NAME@@", &values, Strictness::Strict).unwrap_err();
            assert!(matches!(err, GenError::UnresolvedToken { .. }));
        }

        #[test]
        fn test_invalid_key_rejected() {
            let values = Substitutions::new().with("name", "x");
            let err = substitute("", &values, Strictness::Lenient).unwrap_err();
            assert!(matches!(err, GenError::InvalidTokenName { name } if name == "name"));
        }

        #[test]
        fn test_token_in_value_rejected() {
            let values = Substitutions::new()
                .with("A", "@@B@@")
                .with("B", "b");
            let err = substitute("@@A@@ @@B@@", &values, Strictness::Strict).unwrap_err();
            assert!(matches!(err, GenError::TokenInValue { key } if key == "A"));
        }

        #[test]
        fn test_value_joining_template_text_rejected() {
            let values = Substitutions::new().with("OPEN", "@@");
            let err = substitute("@@OPEN@@NAME@@", &values, Strictness::Strict).unwrap_err();
            match err {
                GenError::UnresolvedToken { tokens } => assert_eq!(tokens, vec!["NAME"]),
                other => panic!("unexpected error: {other}"),
            }
        }

        #[test]
        fn test_adjacent_values_joining_rejected() {
            let values = Substitutions::new().with("A", "@@X").with("B", "@@");
            let err = substitute("@@A@@@@B@@", &values, Strictness::Lenient).unwrap_err();
            match err {
                GenError::UnresolvedToken { tokens } => assert_eq!(tokens, vec!["X"]),
                other => panic!("unexpected error: {other}"),
            }
        }

        #[test]
        fn test_delimiter_in_value_without_token_is_kept() {
            let values = Substitutions::new().with("MARK", "@@");
            let out = substitute("a @@MARK@@ b", &values, Strictness::Strict).unwrap();
            assert_eq!(out, "a @@ b");
        }

        #[test]
        fn test_token_free_text_with_values() {
            let values = greeting();
            let text = "no placeholders here";
            let out = substitute(text, &values, Strictness::Lenient).unwrap();
            assert_eq!(out, text);

            let err = substitute(text, &values, Strictness::Strict).unwrap_err();
            match err {
                GenError::UnknownToken { tokens } => assert_eq!(tokens, vec!["NAME", "YEAR"]),
                other => panic!("unexpected error: {other}"),
            }
        }

        #[test]
        fn test_deterministic() {
            let template = "@@YEAR@@ @@NAME@@ @@YEAR@@";
            let first = substitute(template, &greeting(), Strictness::Strict).unwrap();
            let second = substitute(template, &greeting(), Strictness::Strict).unwrap();
            assert_eq!(first, second);
        }
    }

    mod scan_tests {
        use super::*;

        #[test]
        fn test_first_occurrence_order() {
            let tokens = scan_tokens("@@B@@ @@A@@ @@B@@ @@C_D@@").unwrap();
            assert_eq!(tokens, vec!["B", "A", "C_D"]);
        }

        #[test]
        fn test_ignores_non_tokens() {
            let tokens = scan_tokens("@@ @@ @@a@@ @@1@@ @ @").unwrap();
            assert!(tokens.is_empty());
        }

        #[test]
        fn test_is_token_name() {
            assert!(is_token_name("MODULE_NAME"));
            assert!(is_token_name("_"));
            assert!(!is_token_name(""));
            assert!(!is_token_name("Module"));
            assert!(!is_token_name("YEAR2"));
        }
    }

    mod substitutions_tests {
        use super::*;

        #[test]
        fn test_from_iter_and_keys_sorted() {
            let values: Substitutions = [("YEAR", "2024"), ("NAME", "Ada")].into_iter().collect();
            assert_eq!(values.keys().collect::<Vec<_>>(), vec!["NAME", "YEAR"]);
            assert_eq!(values.len(), 2);
        }

        #[test]
        fn test_insert_replaces() {
            let mut values = Substitutions::new();
            assert_eq!(values.insert("NAME", "a"), None);
            assert_eq!(values.insert("NAME", "b"), Some("a".to_string()));
            assert_eq!(values.get("NAME"), Some("b"));
        }

        #[test]
        fn test_strictness_default() {
            assert_eq!(Strictness::default(), Strictness::Strict);
            assert_eq!(Strictness::Lenient.to_string(), "lenient");
        }
    }

    proptest! {
        /// Output never contains a token when every token has a value.
        #[test]
        fn prop_no_residual_tokens(
            names in proptest::collection::btree_set("[A-Z_]{1,8}", 1..5),
            value in "[a-zA-Z0-9 ]{0,12}",
            filler in "[a-z .,]{0,10}",
        ) {
            let template: String = names
                .iter()
                .map(|name| format!("{filler}@@{name}@@"))
                .collect();
            let values: Substitutions = names.iter().map(|name| (name.clone(), value.clone())).collect();
            let out = substitute(&template, &values, Strictness::Strict).unwrap();
            prop_assert!(scan_tokens(&out).unwrap().is_empty());
        }

        /// Text without `@@` passes through unchanged.
        #[test]
        fn prop_literal_text_untouched(text in "[^@]{0,64}") {
            let out = substitute(&text, &Substitutions::new(), Strictness::Strict).unwrap();
            prop_assert_eq!(out, text);
        }

        /// Token-free text is untouched by any mapping in lenient mode and
        /// rejected for its unused keys in strict mode.
        #[test]
        fn prop_literal_text_untouched_by_mapping(
            text in "[^@]{0,64}",
            values in proptest::collection::btree_map("[A-Z_]{1,8}", "[a-z0-9 ]{0,8}", 1..4),
        ) {
            let values: Substitutions = values.into_iter().collect();
            let out = substitute(&text, &values, Strictness::Lenient).unwrap();
            prop_assert_eq!(&out, &text);

            let strict = substitute(&text, &values, Strictness::Strict);
            let is_unknown = matches!(strict, Err(GenError::UnknownToken { .. }));
            prop_assert!(is_unknown);
        }

        /// Output never holds a token, even when values carry delimiters
        /// and letters that can join with their neighbours.
        #[test]
        fn prop_joined_values_never_leave_tokens(
            pieces in proptest::collection::vec("(@|@@|[A-Z_]{1,3}|[a-z ]{1,3})", 0..6),
            values in proptest::collection::vec("(@|@@|@@[A-Z]{1,2}|[A-Z]{1,2}@@|[a-z]{0,2})", 1..4),
        ) {
            let mut template = String::new();
            let mut mapping = Substitutions::new();
            for (i, value) in values.iter().enumerate() {
                let key = format!("K{}", "_".repeat(i + 1));
                let _ = mapping.insert(key.as_str(), value.as_str());
                if let Some(piece) = pieces.get(i) {
                    template.push_str(piece);
                }
                template.push_str(&format!("@@{key}@@"));
            }
            if let Some(tail) = pieces.get(values.len()) {
                template.push_str(tail);
            }
            match substitute(&template, &mapping, Strictness::Lenient) {
                Ok(out) => {
                    prop_assert!(scan_tokens(&out).unwrap().is_empty(), "residual token in {:?}", out);
                }
                Err(GenError::UnresolvedToken { tokens }) => prop_assert!(!tokens.is_empty()),
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }

        /// Every missing token is reported.
        #[test]
        fn prop_missing_tokens_reported(
            names in proptest::collection::btree_set("[A-Z]{1,6}", 1..5),
        ) {
            let template: String = names.iter().map(|name| format!("<@@{name}@@>")).collect();
            let err = substitute(&template, &Substitutions::new(), Strictness::Strict).unwrap_err();
            match err {
                GenError::UnresolvedToken { tokens } => {
                    prop_assert_eq!(tokens, names.into_iter().collect::<Vec<_>>());
                }
                other => prop_assert!(false, "unexpected error: {}", other),
            }
        }
    }
}
