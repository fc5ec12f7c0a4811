//! Navigation settling.
//!
//! A navigating action clicks, then blocks until the next page shows a
//! recognizable marker. The wait itself is delegated to
//! [`Driver::wait_for`]; this module only fixes *what* is waited for and
//! for how long.

use crate::driver::{Driver, ElementHandle};
use crate::locator::Locator;
use crate::page_object::PageObject;
use crate::result::WebPartResult;
use std::time::Duration;

/// Default timeout for navigation to settle (30 seconds)
pub const DEFAULT_NAVIGATION_TIMEOUT_MS: u64 = 30_000;

/// Options for navigation wait
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOptions {
    /// Element whose presence marks the new page as loaded
    pub marker: Locator,
    /// Timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            marker: Locator::tag("body"),
            timeout_ms: DEFAULT_NAVIGATION_TIMEOUT_MS,
        }
    }
}

impl NavigationOptions {
    /// Create new navigation options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the post-navigation marker
    #[must_use]
    pub fn with_marker(mut self, marker: Locator) -> Self {
        self.marker = marker;
        self
    }

    /// Set timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Get timeout as Duration
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Click `element`, then block until `options.marker` is present.
///
/// # Errors
///
/// Propagates the click failure unchanged, or [`crate::WebPartError::Timeout`]
/// (as reported by the driver) when the marker never shows up.
pub fn click_and_wait<D: Driver + ?Sized>(
    driver: &D,
    element: &ElementHandle,
    options: &NavigationOptions,
) -> WebPartResult<ElementHandle> {
    tracing::debug!(element = %element.id, marker = %options.marker, "clicking and waiting for navigation");
    driver.click(element)?;
    driver.wait_for(&options.marker, options.timeout())
}

/// Click `element`, wait for page `P` to load, and return it.
///
/// The wait uses [`PageObject::navigation_options`] of the target page.
///
/// # Errors
///
/// Same as [`click_and_wait`].
pub fn click_to<'d, P, D>(driver: &'d D, element: &ElementHandle) -> WebPartResult<P>
where
    D: Driver + ?Sized,
    P: PageObject<'d, D>,
{
    let _ = click_and_wait(driver, element, &P::navigation_options())?;
    tracing::debug!(page = P::page_name(), "navigation settled");
    Ok(P::from_driver(driver))
}
