// File: crates/demo/src/page.rs
// Summary: In-memory host element for headless rendering; records the mounted view and its resize watchers.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use petal_core::host::{PointerHandler, ResizeHandler};
use petal_core::{Host, LogicalSize, ResizeEntry, ResizeWatch, SharedView};

type Watchers = Rc<RefCell<HashMap<u64, ResizeHandler>>>;

/// A fixed-size box carrying chart attributes, standing in for a page element.
pub struct PageHost {
    attributes: HashMap<String, String>,
    size: LogicalSize,
    dpr: Option<f64>,
    view: Option<SharedView>,
    watchers: Watchers,
    next_watch: u64,
}

impl PageHost {
    pub fn new(size: LogicalSize, dpr: Option<f64>) -> Self {
        Self {
            attributes: HashMap::new(),
            size,
            dpr,
            view: None,
            watchers: Rc::new(RefCell::new(HashMap::new())),
            next_watch: 0,
        }
    }

    pub fn view(&self) -> Option<SharedView> {
        self.view.clone()
    }

    /// Give the box a new size and notify watchers, as a layout pass would.
    pub fn relayout(&mut self, size: LogicalSize, dpr: Option<f64>) {
        self.size = size;
        self.dpr = dpr;
        let entry = ResizeEntry { size, device_pixel_ratio: dpr };
        for handler in self.watchers.borrow_mut().values_mut() {
            handler(&entry);
        }
    }
}

struct PageWatch {
    id: u64,
    watchers: Weak<RefCell<HashMap<u64, ResizeHandler>>>,
}

impl ResizeWatch for PageWatch {
    fn disconnect(&mut self) {
        if let Some(w) = self.watchers.upgrade() {
            w.borrow_mut().remove(&self.id);
        }
    }
}

impl Host for PageHost {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    fn layout_box(&self) -> LogicalSize {
        self.size
    }

    fn device_pixel_ratio(&self) -> Option<f64> {
        self.dpr
    }

    // Pointer input never arrives headlessly.
    fn mount(&mut self, view: SharedView, _on_pointer: PointerHandler) {
        self.view = Some(view);
    }

    fn observe_resize(&mut self, handler: ResizeHandler) -> Box<dyn ResizeWatch> {
        self.next_watch += 1;
        let id = self.next_watch;
        self.watchers.borrow_mut().insert(id, handler);
        Box::new(PageWatch { id, watchers: Rc::downgrade(&self.watchers) })
    }
}
