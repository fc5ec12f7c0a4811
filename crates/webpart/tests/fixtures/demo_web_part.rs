// Copyright (c) 2024 The Demo module authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Web part component for the `demo` module.
//!
//! Lives in `components/Demo`. The input and save button below
//! are placeholders: replace them with the elements the web part renders.

use webpart::prelude::*;

/// Module this component belongs to
pub const MODULE: &str = "demo";

/// The `Demo` web part.
///
/// Methods that stay on the page return `&mut Self`. Methods that navigate
/// consume the component and return a page object.
#[derive(Debug)]
pub struct DemoWebPart<'d, D: Driver + ?Sized> {
    part: WebPart<'d, D>,
    elements: ElementCache,
}

impl<'d, D: Driver + ?Sized> DemoWebPart<'d, D> {
    /// Web part title on the page
    pub const TITLE: &'static str = "Demo";

    /// The first `Demo` web part on the page
    pub fn new(driver: &'d D) -> Self {
        Self::nth(driver, 0)
    }

    /// The `index`-th `Demo` web part on the page
    pub fn nth(driver: &'d D, index: usize) -> Self {
        Self {
            part: WebPart::new(driver, Self::TITLE, index),
            elements: ElementCache::new(),
        }
    }

    /// Type `value` into the input
    pub fn set_input(&mut self, value: &str) -> WebPartResult<&mut Self> {
        let input = self.part.resolve(&mut self.elements.input)?;
        self.part.driver().set_value(input, value)?;
        Ok(self)
    }

    /// Click save and wait for the page it leads to
    pub fn click_save(mut self) -> WebPartResult<Page<'d, D>> {
        let button = self.part.resolve(&mut self.elements.button)?;
        click_to(self.part.driver(), button)
    }
}

impl<D: Driver + ?Sized> ResolvableRegion for DemoWebPart<'_, D> {
    fn region_id(&self) -> &RegionId {
        self.part.region_id()
    }

    fn resolve_root(&mut self) -> WebPartResult<&ElementHandle> {
        self.part.resolve_root()
    }

    fn resolve_child<'s>(&mut self, slot: &'s mut Slot) -> WebPartResult<&'s ElementHandle> {
        self.part.resolve_child(slot)
    }
}

#[derive(Debug)]
struct ElementCache {
    input: Slot,
    button: Slot,
}

impl ElementCache {
    fn new() -> Self {
        Self {
            input: Slot::new("input", Locator::tag("input")),
            button: Slot::new("button", Locator::tag("button").with_text("Save")),
        }
    }
}
