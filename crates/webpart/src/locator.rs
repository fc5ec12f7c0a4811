//! Locator abstraction for element selection.
//!
//! A locator only describes *how* to find an element. Finding it is the
//! driver's job, and remembering the result is the slot's job (see
//! [`crate::slot`]).
//!
//! ```
//! use webpart::Locator;
//!
//! let save = Locator::tag("button").with_text("Save");
//! assert_eq!(save.to_string(), "button:has-text(\"Save\")");
//! ```

use std::fmt;

/// Selector type for locating elements
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// CSS selector (e.g., "button.primary")
    Css(String),
    /// Test ID selector (data-testid attribute)
    TestId(String),
    /// Combined selector with text filter
    CssWithText {
        /// Base CSS selector
        css: String,
        /// Text content to match
        text: String,
    },
    /// A titled web part region on the page
    Region {
        /// Region title
        title: String,
    },
}

impl Selector {
    /// Create a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Create a test ID selector
    #[must_use]
    pub fn test_id(id: impl Into<String>) -> Self {
        Self::TestId(id.into())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(css) => write!(f, "{css}"),
            Self::TestId(id) => write!(f, "[data-testid={id:?}]"),
            Self::CssWithText { css, text } => write!(f, "{css}:has-text({text:?})"),
            Self::Region { title } => write!(f, "web part {title:?}"),
        }
    }
}

/// A description of how to find one element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    selector: Selector,
}

impl Locator {
    /// Create a new locator with a CSS selector
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self::from_selector(Selector::Css(selector.into()))
    }

    /// Locate by tag name (`input`, `button`, ...)
    #[must_use]
    pub fn tag(name: impl Into<String>) -> Self {
        Self::new(name)
    }

    /// Locate by `data-testid`
    #[must_use]
    pub fn test_id(id: impl Into<String>) -> Self {
        Self::from_selector(Selector::test_id(id))
    }

    /// Locate a titled web part region
    #[must_use]
    pub fn region(title: impl Into<String>) -> Self {
        Self::from_selector(Selector::Region {
            title: title.into(),
        })
    }

    /// Create a locator from a selector
    #[must_use]
    pub const fn from_selector(selector: Selector) -> Self {
        Self { selector }
    }

    /// Filter by text content
    ///
    /// Only CSS locators can carry a text filter; other selectors already
    /// pin a single element and are returned unchanged.
    #[must_use]
    pub fn with_text(self, text: impl Into<String>) -> Self {
        let selector = match self.selector {
            Selector::Css(css) => Selector::CssWithText {
                css,
                text: text.into(),
            },
            other => other,
        };
        Self { selector }
    }

    /// Get the selector
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.selector.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod selector_tests {
        use super::*;

        #[test]
        fn test_css_display() {
            assert_eq!(Selector::css("input.value").to_string(), "input.value");
        }

        #[test]
        fn test_test_id_display() {
            assert_eq!(
                Selector::test_id("save").to_string(),
                "[data-testid=\"save\"]"
            );
        }
    }

    mod locator_tests {
        use super::*;

        #[test]
        fn test_locator_new() {
            let locator = Locator::new("button");
            assert!(matches!(locator.selector(), Selector::Css(_)));
        }

        #[test]
        fn test_locator_with_text() {
            let locator = Locator::tag("button").with_text("Save");
            assert!(matches!(locator.selector(), Selector::CssWithText { .. }));
            assert_eq!(locator.to_string(), "button:has-text(\"Save\")");
        }

        #[test]
        fn test_with_text_keeps_non_css_selector() {
            let locator = Locator::test_id("save").with_text("Save");
            assert_eq!(locator, Locator::test_id("save"));
        }

        #[test]
        fn test_region_display() {
            assert_eq!(Locator::region("Wiki").to_string(), "web part \"Wiki\"");
        }

        #[test]
        fn test_equal_locators_hash_alike() {
            use std::collections::HashSet;

            let mut set = HashSet::new();
            let _ = set.insert(Locator::tag("input"));
            assert!(set.contains(&Locator::new("input")));
        }
    }
}
