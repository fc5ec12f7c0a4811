//! Webpart: lazy, region-scoped page objects for browser end-to-end tests.
//!
//! A web part is one titled region of a page. Components built on
//! [`WebPart`] never touch the page when constructed; each element is looked
//! up the first time it is used and then pinned for the lifetime of the
//! component instance.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Generated component (FooWebPart)                            │
//! │    set_input(&mut self, ..) -> &mut Self     (stays on page) │
//! │    click_save(self)         -> Page          (navigates)     │
//! ├──────────────────────────────────────────────────────────────┤
//! │  WebPart (root slot) ──► Slot (child slots, cached once)     │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Driver trait ──► browser binding │ MockDriver (tests)       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Components are single-threaded by contract: caching needs `&mut self`
//! and nothing is synchronized. Separate instances share no state.

#![warn(missing_docs)]

mod driver;
mod locator;
mod navigation;
mod page_object;
mod result;
mod slot;
mod web_part;

pub use driver::{Driver, ElementHandle, MockDriver, MockRegion};
pub use locator::{Locator, Selector};
pub use navigation::{click_and_wait, click_to, NavigationOptions, DEFAULT_NAVIGATION_TIMEOUT_MS};
pub use page_object::{Page, PageObject};
pub use result::{WebPartError, WebPartResult};
pub use slot::{Slot, SlotState};
pub use web_part::{RegionId, ResolvableRegion, WebPart};

/// Everything a generated component needs
pub mod prelude {
    pub use super::{
        click_and_wait, click_to, Driver, ElementHandle, Locator, MockDriver, MockRegion,
        NavigationOptions, Page, PageObject, RegionId, ResolvableRegion, Selector, Slot,
        SlotState, WebPart, WebPartError, WebPartResult,
    };
}
