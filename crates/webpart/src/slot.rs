//! Lazily resolved element slots.
//!
//! A [`Slot`] pairs a name and a [`Locator`] with a single-write cache for
//! the element it resolves to. The first successful lookup fills the slot;
//! every later access returns the stored handle without touching the page.
//! A failed lookup stores nothing, so the next access tries again.

use crate::driver::ElementHandle;
use crate::locator::Locator;
use crate::result::WebPartResult;
use std::fmt;

/// Resolution state of a [`Slot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// Not looked up yet, or every lookup so far failed
    Unresolved,
    /// Looked up once; the handle is pinned for the slot's lifetime
    Resolved,
}

impl fmt::Display for SlotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unresolved => write!(f, "unresolved"),
            Self::Resolved => write!(f, "resolved"),
        }
    }
}

/// A named element locator with a memoized handle.
#[derive(Debug, Clone)]
pub struct Slot {
    name: String,
    locator: Locator,
    handle: Option<ElementHandle>,
}

impl Slot {
    /// Create an unresolved slot
    #[must_use]
    pub fn new(name: impl Into<String>, locator: Locator) -> Self {
        Self {
            name: name.into(),
            locator,
            handle: None,
        }
    }

    /// Slot name, used in error messages
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Locator used on first access
    #[must_use]
    pub const fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Current resolution state
    #[must_use]
    pub const fn state(&self) -> SlotState {
        if self.handle.is_some() {
            SlotState::Resolved
        } else {
            SlotState::Unresolved
        }
    }

    /// Whether the slot holds a handle
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.handle.is_some()
    }

    /// Cached handle, without resolving
    #[must_use]
    pub const fn handle(&self) -> Option<&ElementHandle> {
        self.handle.as_ref()
    }

    /// Return the cached handle, or run `lookup` once and cache its result.
    ///
    /// `lookup` runs only while the slot is unresolved. Its error is
    /// returned as is and leaves the slot unresolved.
    pub fn resolve_with<F>(&mut self, lookup: F) -> WebPartResult<&ElementHandle>
    where
        F: FnOnce(&Locator) -> WebPartResult<ElementHandle>,
    {
        let handle = match self.handle.take() {
            Some(handle) => {
                tracing::trace!(slot = %self.name, "element cache hit");
                handle
            }
            None => {
                let handle = lookup(&self.locator)?;
                tracing::debug!(slot = %self.name, element = %handle.id, "element resolved");
                handle
            }
        };
        Ok(self.handle.insert(handle))
    }
}
