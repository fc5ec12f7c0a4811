//! Page Object Model Support
//!
//! Navigating component methods return page objects rather than the
//! component itself: after navigation the region the component pointed at
//! may be gone, so the return type tells the caller the page changed.

use crate::driver::Driver;
use crate::locator::Locator;
use crate::navigation::{NavigationOptions, DEFAULT_NAVIGATION_TIMEOUT_MS};
use crate::result::WebPartResult;
use crate::web_part::WebPart;
use std::fmt;

/// A page-level object built once navigation has settled.
///
/// # Example
///
/// ```ignore
/// struct ProjectBegin<'d, D: Driver + ?Sized> {
///     driver: &'d D,
/// }
///
/// impl<'d, D: Driver + ?Sized> PageObject<'d, D> for ProjectBegin<'d, D> {
///     fn from_driver(driver: &'d D) -> Self {
///         Self { driver }
///     }
///
///     fn loaded_marker() -> Locator {
///         Locator::test_id("project-begin")
///     }
/// }
/// ```
pub trait PageObject<'d, D: Driver + ?Sized>: Sized {
    /// Wrap the driver once the page is ready
    fn from_driver(driver: &'d D) -> Self;

    /// Element whose presence means this page finished loading
    fn loaded_marker() -> Locator {
        Locator::tag("body")
    }

    /// How long to wait for [`PageObject::loaded_marker`] (in milliseconds)
    fn load_timeout_ms() -> u64 {
        DEFAULT_NAVIGATION_TIMEOUT_MS
    }

    /// Get the page name for logging/debugging
    fn page_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Navigation options that settle on this page
    fn navigation_options() -> NavigationOptions {
        NavigationOptions::new()
            .with_marker(Self::loaded_marker())
            .with_timeout(Self::load_timeout_ms())
    }
}

/// Generic page returned when no more specific page object applies
pub struct Page<'d, D: Driver + ?Sized> {
    driver: &'d D,
}

impl<'d, D: Driver + ?Sized> Page<'d, D> {
    /// Wrap a driver
    #[must_use]
    pub const fn new(driver: &'d D) -> Self {
        Self { driver }
    }

    /// Driver behind this page
    #[must_use]
    pub const fn driver(&self) -> &'d D {
        self.driver
    }

    /// URL the browser is on
    ///
    /// # Errors
    ///
    /// Returns the driver's error if the URL cannot be read.
    pub fn url(&self) -> WebPartResult<String> {
        self.driver.current_url()
    }

    /// Bind a fresh web part on this page
    #[must_use]
    pub fn web_part(&self, title: impl Into<String>, index: usize) -> WebPart<'d, D> {
        WebPart::new(self.driver, title, index)
    }
}

impl<'d, D: Driver + ?Sized> PageObject<'d, D> for Page<'d, D> {
    fn from_driver(driver: &'d D) -> Self {
        Self::new(driver)
    }
}

impl<D: Driver + ?Sized> fmt::Debug for Page<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page").finish_non_exhaustive()
    }
}
