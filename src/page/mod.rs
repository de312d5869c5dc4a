//! Identity-addressed lookup of the surfaces and controls on a page.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::interaction::{MemorySelect, SharedControl};
use crate::render::{MemorySurface, SharedSurface};

/// Host page capability.
///
/// Lookups return `None` when the page does not contain the element; callers
/// treat that as "this chart or filter is not on this page".
pub trait Page {
    fn surface(&self, id: &str) -> Option<SharedSurface>;
    fn control(&self, id: &str) -> Option<SharedControl>;
}

/// Headless page holding `MemorySurface`s and `MemorySelect`s.
#[derive(Debug, Default)]
pub struct MemoryPage {
    surfaces: IndexMap<String, Rc<RefCell<MemorySurface>>>,
    selects: IndexMap<String, Rc<RefCell<MemorySelect>>>,
}

impl MemoryPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty surface, or returns the existing one with that id.
    pub fn add_surface(&mut self, id: &str) -> Rc<RefCell<MemorySurface>> {
        Rc::clone(
            self.surfaces
                .entry(id.to_owned())
                .or_insert_with(|| Rc::new(RefCell::new(MemorySurface::new(id)))),
        )
    }

    /// Adds `select` under `id`, replacing any control previously registered there.
    pub fn add_select(&mut self, id: &str, select: MemorySelect) -> Rc<RefCell<MemorySelect>> {
        let select = Rc::new(RefCell::new(select));
        self.selects.insert(id.to_owned(), Rc::clone(&select));
        select
    }

    #[must_use]
    pub fn memory_surface(&self, id: &str) -> Option<Rc<RefCell<MemorySurface>>> {
        self.surfaces.get(id).cloned()
    }

    #[must_use]
    pub fn memory_select(&self, id: &str) -> Option<Rc<RefCell<MemorySelect>>> {
        self.selects.get(id).cloned()
    }
}

impl Page for MemoryPage {
    fn surface(&self, id: &str) -> Option<SharedSurface> {
        self.surfaces
            .get(id)
            .map(|surface| Rc::clone(surface) as SharedSurface)
    }

    fn control(&self, id: &str) -> Option<SharedControl> {
        self.selects
            .get(id)
            .map(|select| Rc::clone(select) as SharedControl)
    }
}
