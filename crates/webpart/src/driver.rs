//! Driver - Abstract Browser Automation Capability
//!
//! Components never talk to a browser directly. Everything they need from
//! the page goes through the [`Driver`] trait, so the same generated
//! component runs against a real browser binding or the in-memory
//! [`MockDriver`].
//!
//! # Contract
//!
//! Every method blocks until the browser answers. Waiting, polling and
//! timeouts are the driver's business; components never retry. Drivers
//! report lookup misses as [`WebPartError::ElementNotFound`] and dead handles
//! as [`WebPartError::StaleElement`].

use crate::locator::Locator;
use crate::result::{WebPartError, WebPartResult};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

/// Element handle for DOM interactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementHandle {
    /// Driver-assigned identifier for the element
    pub id: String,
    /// Element tag name
    pub tag_name: String,
    /// Element text content
    pub text_content: Option<String>,
}

impl ElementHandle {
    /// Create a new element handle
    #[must_use]
    pub fn new(id: impl Into<String>, tag_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag_name: tag_name.into(),
            text_content: None,
        }
    }

    /// Attach text content
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }
}

/// Abstract browser capability consumed by components.
///
/// The trait is object safe; components accept `&D` with `D: ?Sized`, so a
/// `&dyn Driver` works as well as a concrete driver.
pub trait Driver {
    /// Find the `index`-th web part titled `title` on the current page
    fn find_root(&self, title: &str, index: usize) -> WebPartResult<ElementHandle>;

    /// Find the element matching `locator` inside `root`
    fn find_child(&self, root: &ElementHandle, locator: &Locator) -> WebPartResult<ElementHandle>;

    /// Replace the value of an editable element
    fn set_value(&self, element: &ElementHandle, value: &str) -> WebPartResult<()>;

    /// Click an element
    fn click(&self, element: &ElementHandle) -> WebPartResult<()>;

    /// Block until an element matching `marker` is present on the page
    fn wait_for(&self, marker: &Locator, timeout: Duration) -> WebPartResult<ElementHandle>;

    /// Get current URL
    fn current_url(&self) -> WebPartResult<String>;
}

/// One web part on a [`MockDriver`] page
#[derive(Debug, Clone)]
pub struct MockRegion {
    title: String,
    elements: Vec<MockElement>,
}

#[derive(Debug, Clone)]
struct MockElement {
    locator: Locator,
    tag_name: String,
    navigates_to: Option<String>,
}

impl MockRegion {
    /// Create an empty region with a title
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            elements: Vec::new(),
        }
    }

    /// Add an element found by `locator`
    #[must_use]
    pub fn with_element(mut self, locator: Locator, tag_name: impl Into<String>) -> Self {
        self.elements.push(MockElement {
            locator,
            tag_name: tag_name.into(),
            navigates_to: None,
        });
        self
    }

    /// Add an element that loads `url` when clicked
    #[must_use]
    pub fn with_link(
        mut self,
        locator: Locator,
        tag_name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        self.elements.push(MockElement {
            locator,
            tag_name: tag_name.into(),
            navigates_to: Some(url.into()),
        });
        self
    }

    /// Region title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Clone, Copy)]
enum LiveTarget {
    Root { region: usize },
    Element { region: usize, element: usize },
    Marker,
}

/// In-memory page for unit testing components.
///
/// Records every call so tests can count lookups. Handles are tied to a
/// page generation: [`MockDriver::reload`] and navigating clicks start a new
/// generation, after which old handles report
/// [`WebPartError::StaleElement`].
#[derive(Debug)]
pub struct MockDriver {
    regions: RefCell<Vec<MockRegion>>,
    markers: RefCell<Vec<Locator>>,
    current_url: RefCell<String>,
    generation: Cell<u64>,
    live: RefCell<HashMap<String, LiveTarget>>,
    values: RefCell<HashMap<String, String>>,
    call_history: RefCell<Vec<String>>,
}

impl Default for MockDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDriver {
    /// Create new mock driver with an empty page containing `body`
    #[must_use]
    pub fn new() -> Self {
        Self {
            regions: RefCell::new(Vec::new()),
            markers: RefCell::new(vec![Locator::tag("body")]),
            current_url: RefCell::new(String::new()),
            generation: Cell::new(0),
            live: RefCell::new(HashMap::new()),
            values: RefCell::new(HashMap::new()),
            call_history: RefCell::new(Vec::new()),
        }
    }

    /// Add a region (builder form)
    #[must_use]
    pub fn with_region(self, region: MockRegion) -> Self {
        self.add_region(region);
        self
    }

    /// Set the starting URL (builder form)
    #[must_use]
    pub fn with_url(self, url: impl Into<String>) -> Self {
        *self.current_url.borrow_mut() = url.into();
        self
    }

    /// Render another region onto the page
    pub fn add_region(&self, region: MockRegion) {
        self.regions.borrow_mut().push(region);
    }

    /// Replace the page-load markers that [`Driver::wait_for`] recognises
    pub fn set_markers(&self, markers: Vec<Locator>) {
        *self.markers.borrow_mut() = markers;
    }

    /// Reload the page, invalidating every handle handed out so far
    pub fn reload(&self) {
        self.record("reload".to_string());
        self.next_generation();
    }

    /// Navigate to `url`, invalidating every handle handed out so far
    pub fn navigate(&self, url: &str) {
        self.record(format!("navigate:{url}"));
        *self.current_url.borrow_mut() = url.to_string();
        self.next_generation();
    }

    /// Get call history
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.call_history.borrow().clone()
    }

    /// Check if method was called
    #[must_use]
    pub fn was_called(&self, method: &str) -> bool {
        self.call_count(method) > 0
    }

    /// Number of recorded calls whose entry starts with `method`
    #[must_use]
    pub fn call_count(&self, method: &str) -> usize {
        self.call_history
            .borrow()
            .iter()
            .filter(|call| call.starts_with(method))
            .count()
    }

    /// Value last set on `element`, if it is still live
    #[must_use]
    pub fn value_of(&self, element: &ElementHandle) -> Option<String> {
        self.values.borrow().get(&element.id).cloned()
    }

    /// Value last set on the element at `locator` in the `index`-th region
    /// titled `title` on the current page
    #[must_use]
    pub fn value_at(&self, title: &str, index: usize, locator: &Locator) -> Option<String> {
        let id = Self::child_id(&self.root_id(title, index), locator);
        self.values.borrow().get(&id).cloned()
    }

    fn record(&self, call: String) {
        self.call_history.borrow_mut().push(call);
    }

    fn next_generation(&self) {
        self.generation.set(self.generation.get() + 1);
        self.live.borrow_mut().clear();
        self.values.borrow_mut().clear();
    }

    fn root_id(&self, title: &str, index: usize) -> String {
        format!("g{}:{title}[{index}]", self.generation.get())
    }

    fn child_id(root_id: &str, locator: &Locator) -> String {
        format!("{root_id}/{locator}")
    }

    fn live_target(&self, element: &ElementHandle) -> WebPartResult<LiveTarget> {
        self.live
            .borrow()
            .get(&element.id)
            .copied()
            .ok_or_else(|| WebPartError::StaleElement {
                element: element.id.clone(),
            })
    }
}

impl Driver for MockDriver {
    fn find_root(&self, title: &str, index: usize) -> WebPartResult<ElementHandle> {
        self.record(format!("find_root:{title}[{index}]"));

        let position = self
            .regions
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, region)| region.title == title)
            .nth(index)
            .map(|(position, _)| position)
            .ok_or_else(|| WebPartError::ElementNotFound {
                locator: Locator::region(title).to_string(),
            })?;

        let id = self.root_id(title, index);
        let _ = self
            .live
            .borrow_mut()
            .insert(id.clone(), LiveTarget::Root { region: position });
        Ok(ElementHandle::new(id, "div").with_text(title))
    }

    fn find_child(&self, root: &ElementHandle, locator: &Locator) -> WebPartResult<ElementHandle> {
        self.record(format!("find_child:{locator}"));

        let LiveTarget::Root { region } = self.live_target(root)? else {
            return Err(WebPartError::driver(format!(
                "'{}' is not a web part root",
                root.id
            )));
        };

        let regions = self.regions.borrow();
        let (element, found) = regions[region]
            .elements
            .iter()
            .enumerate()
            .find(|(_, candidate)| &candidate.locator == locator)
            .ok_or_else(|| WebPartError::ElementNotFound {
                locator: locator.to_string(),
            })?;

        let id = Self::child_id(&root.id, locator);
        let _ = self
            .live
            .borrow_mut()
            .insert(id.clone(), LiveTarget::Element { region, element });
        Ok(ElementHandle::new(id, found.tag_name.clone()))
    }

    fn set_value(&self, element: &ElementHandle, value: &str) -> WebPartResult<()> {
        self.record(format!("set_value:{}={value}", element.id));
        let _ = self.live_target(element)?;
        let _ = self
            .values
            .borrow_mut()
            .insert(element.id.clone(), value.to_string());
        Ok(())
    }

    fn click(&self, element: &ElementHandle) -> WebPartResult<()> {
        self.record(format!("click:{}", element.id));

        let destination = match self.live_target(element)? {
            LiveTarget::Element { region, element } => {
                self.regions.borrow()[region].elements[element]
                    .navigates_to
                    .clone()
            }
            LiveTarget::Root { .. } | LiveTarget::Marker => None,
        };

        if let Some(url) = destination {
            self.navigate(&url);
        }
        Ok(())
    }

    fn wait_for(&self, marker: &Locator, timeout: Duration) -> WebPartResult<ElementHandle> {
        self.record(format!("wait_for:{marker}"));

        if !self.markers.borrow().contains(marker) {
            return Err(WebPartError::Timeout {
                ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            });
        }

        let id = format!("g{}:{marker}", self.generation.get());
        let _ = self.live.borrow_mut().insert(id.clone(), LiveTarget::Marker);
        Ok(ElementHandle::new(id, "marker"))
    }

    fn current_url(&self) -> WebPartResult<String> {
        Ok(self.current_url.borrow().clone())
    }
}
