//! Region-scoped components.
//!
//! A [`WebPart`] is one occurrence of a titled region on the page. It owns
//! the root slot for that region and resolves child slots relative to it.
//! Generated components hold a `WebPart` plus their own element cache and
//! compose over the [`ResolvableRegion`] capability.
//!
//! ```
//! use webpart::{Locator, MockDriver, MockRegion, ResolvableRegion, Slot, WebPart};
//!
//! let driver = MockDriver::new()
//!     .with_region(MockRegion::new("Notes").with_element(Locator::tag("input"), "input"));
//!
//! let mut notes = WebPart::new(&driver, "Notes", 0);
//! assert_eq!(driver.call_count("find_root"), 0);
//!
//! let mut input = Slot::new("input", Locator::tag("input"));
//! notes.resolve(&mut input)?;
//! notes.resolve(&mut input)?;
//! assert_eq!(driver.call_count("find_child"), 1);
//! # Ok::<(), webpart::WebPartError>(())
//! ```

use crate::driver::{Driver, ElementHandle};
use crate::locator::Locator;
use crate::result::{WebPartError, WebPartResult};
use crate::slot::Slot;
use std::fmt;

/// Identity of a component instance: region title plus occurrence index
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionId {
    /// Region title
    pub title: String,
    /// Zero-based occurrence of the title on the page
    pub index: usize,
}

impl RegionId {
    /// Create a region identity
    #[must_use]
    pub fn new(title: impl Into<String>, index: usize) -> Self {
        Self {
            title: title.into(),
            index,
        }
    }

    fn region_not_found(&self) -> WebPartError {
        WebPartError::RegionNotFound {
            region: self.title.clone(),
            index: self.index,
        }
    }

    fn slot_not_found(&self, slot: &Slot) -> WebPartError {
        WebPartError::SlotNotFound {
            region: self.title.clone(),
            index: self.index,
            slot: slot.name().to_string(),
            locator: slot.locator().to_string(),
        }
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.title, self.index)
    }
}

/// Capability shared by every region-scoped component
pub trait ResolvableRegion {
    /// Identity of this instance
    fn region_id(&self) -> &RegionId;

    /// Resolve (once) and return the root element of the region
    fn resolve_root(&mut self) -> WebPartResult<&ElementHandle>;

    /// Resolve (once) and return `slot`'s element inside the region
    fn resolve_child<'s>(&mut self, slot: &'s mut Slot) -> WebPartResult<&'s ElementHandle>;
}

/// One occurrence of a titled region, with a lazily resolved root.
///
/// Construction never touches the page. The root is looked up on the first
/// call that needs it and pinned afterwards; drop the instance (or call
/// [`WebPart::refreshed`]) once the page has changed underneath it.
pub struct WebPart<'d, D: Driver + ?Sized> {
    driver: &'d D,
    id: RegionId,
    root: Slot,
}

impl<'d, D: Driver + ?Sized> WebPart<'d, D> {
    /// Bind to the `index`-th region titled `title`
    #[must_use]
    pub fn new(driver: &'d D, title: impl Into<String>, index: usize) -> Self {
        let id = RegionId::new(title, index);
        let root = Slot::new("root", Locator::region(id.title.clone()));
        Self { driver, id, root }
    }

    /// Driver this instance talks to
    #[must_use]
    pub const fn driver(&self) -> &'d D {
        self.driver
    }

    /// Region title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.id.title
    }

    /// Occurrence index
    #[must_use]
    pub const fn index(&self) -> usize {
        self.id.index
    }

    /// Whether the root has been resolved
    #[must_use]
    pub const fn is_root_resolved(&self) -> bool {
        self.root.is_resolved()
    }

    /// A new instance for the same region with an empty cache
    #[must_use]
    pub fn refreshed(&self) -> Self {
        Self::new(self.driver, self.id.title.clone(), self.id.index)
    }

    /// Resolve (once) and return the root element of the region
    pub fn root(&mut self) -> WebPartResult<&ElementHandle> {
        let driver = self.driver;
        let id = &self.id;
        self.root.resolve_with(|_| {
            tracing::debug!(region = %id, "resolving web part root");
            driver.find_root(&id.title, id.index).map_err(|err| {
                if err.is_not_found() {
                    id.region_not_found()
                } else {
                    err
                }
            })
        })
    }

    /// Resolve (once) and return `slot`'s element inside the region.
    ///
    /// Resolves the root first if needed. A miss inside an already resolved
    /// root is reported as [`WebPartError::SlotNotFound`]; the root is not
    /// looked up again.
    pub fn resolve<'s>(&mut self, slot: &'s mut Slot) -> WebPartResult<&'s ElementHandle> {
        let driver = self.driver;
        let missing = self.id.slot_not_found(slot);
        let root = self.root()?;
        slot.resolve_with(|locator| {
            driver.find_child(root, locator).map_err(|err| {
                if err.is_not_found() {
                    missing
                } else {
                    err
                }
            })
        })
    }
}

impl<D: Driver + ?Sized> ResolvableRegion for WebPart<'_, D> {
    fn region_id(&self) -> &RegionId {
        &self.id
    }

    fn resolve_root(&mut self) -> WebPartResult<&ElementHandle> {
        self.root()
    }

    fn resolve_child<'s>(&mut self, slot: &'s mut Slot) -> WebPartResult<&'s ElementHandle> {
        self.resolve(slot)
    }
}

impl<D: Driver + ?Sized> fmt::Debug for WebPart<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebPart")
            .field("id", &self.id)
            .field("root", &self.root.state())
            .finish_non_exhaustive()
    }
}
