//! Result and error types for web part components.

use thiserror::Error;

/// Result type for component and driver operations
pub type WebPartResult<T> = Result<T, WebPartError>;

/// Errors surfaced while using a web part on a live page.
///
/// Resolution errors carry enough identity (region title, occurrence index,
/// slot name, locator) to find the failing element without a debugger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebPartError {
    /// The root region could not be located on the page
    #[error("Web part '{region}' (occurrence {index}) not found on page")]
    RegionNotFound {
        /// Region title
        region: String,
        /// Requested occurrence index
        index: usize,
    },

    /// A named element could not be located inside a resolved region
    #[error("Element '{slot}' ({locator}) not found in web part '{region}' (occurrence {index})")]
    SlotNotFound {
        /// Region title
        region: String,
        /// Occurrence index of the region
        index: usize,
        /// Slot name
        slot: String,
        /// Locator used for the lookup
        locator: String,
    },

    /// A driver lookup matched nothing
    ///
    /// Drivers report this; components translate it into
    /// [`WebPartError::RegionNotFound`] or [`WebPartError::SlotNotFound`].
    #[error("No element matches {locator}")]
    ElementNotFound {
        /// Locator that matched nothing
        locator: String,
    },

    /// A cached handle no longer refers to a live element
    #[error("Stale element handle '{element}': the page changed since it was resolved")]
    StaleElement {
        /// Driver-assigned element id
        element: String,
    },

    /// Operation timed out
    #[error("Operation timed out after {ms}ms")]
    Timeout {
        /// Timeout in milliseconds
        ms: u64,
    },

    /// Any other driver failure
    #[error("Driver error: {message}")]
    Driver {
        /// Error message
        message: String,
    },
}

impl WebPartError {
    /// Create a driver error
    #[must_use]
    pub fn driver(message: impl Into<String>) -> Self {
        Self::Driver {
            message: message.into(),
        }
    }

    /// Whether the failure means "nothing matched"
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::RegionNotFound { .. } | Self::SlotNotFound { .. } | Self::ElementNotFound { .. }
        )
    }

    /// Whether the failure came from a handle invalidated by a page change
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        matches!(self, Self::StaleElement { .. })
    }
}
