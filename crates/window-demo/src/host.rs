// File: crates/window-demo/src/host.rs
// Summary: A winit window as chart host: attributes in memory, layout box from the inner size, input forwarded.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use petal_core::host::{PointerHandler, ResizeHandler};
use petal_core::{Host, LogicalSize, PointerEvent, ResizeEntry, ResizeWatch, SharedView};
use winit::dpi::PhysicalSize;

type Watchers = Rc<RefCell<HashMap<u64, ResizeHandler>>>;

pub struct WindowHost {
    attributes: HashMap<String, String>,
    physical: PhysicalSize<u32>,
    scale_factor: f64,
    view: Option<SharedView>,
    pointer: Option<PointerHandler>,
    watchers: Watchers,
    next_watch: u64,
}

impl WindowHost {
    pub fn new(physical: PhysicalSize<u32>, scale_factor: f64) -> Self {
        Self {
            attributes: HashMap::new(),
            physical,
            scale_factor,
            view: None,
            pointer: None,
            watchers: Rc::new(RefCell::new(HashMap::new())),
            next_watch: 0,
        }
    }

    pub fn view(&self) -> Option<SharedView> {
        self.view.clone()
    }

    pub fn physical_size(&self) -> PhysicalSize<u32> {
        self.physical
    }

    /// Window resized or moved to a display with another scale factor.
    pub fn relayout(&mut self, physical: PhysicalSize<u32>, scale_factor: f64) {
        self.physical = physical;
        self.scale_factor = scale_factor;
        let entry = ResizeEntry { size: self.layout_box(), device_pixel_ratio: Some(scale_factor) };
        for handler in self.watchers.borrow_mut().values_mut() {
            handler(&entry);
        }
    }

    /// Forward a pointer event given in physical window coordinates.
    pub fn pointer_at(&mut self, x: f64, y: f64) {
        let event = PointerEvent::Move { x: x / self.scale_factor, y: y / self.scale_factor };
        if let Some(handler) = self.pointer.as_mut() {
            handler(event);
        }
    }

    pub fn pointer_left(&mut self) {
        if let Some(handler) = self.pointer.as_mut() {
            handler(PointerEvent::Leave);
        }
    }
}

struct WindowWatch {
    id: u64,
    watchers: Weak<RefCell<HashMap<u64, ResizeHandler>>>,
}

impl ResizeWatch for WindowWatch {
    fn disconnect(&mut self) {
        if let Some(w) = self.watchers.upgrade() {
            w.borrow_mut().remove(&self.id);
        }
    }
}

impl Host for WindowHost {
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
        let logical = self.physical.to_logical::<f64>(self.scale_factor);
        LogicalSize::new(logical.width, logical.height)
    }

    fn device_pixel_ratio(&self) -> Option<f64> {
        Some(self.scale_factor)
    }

    fn mount(&mut self, view: SharedView, on_pointer: PointerHandler) {
        self.view = Some(view);
        self.pointer = Some(on_pointer);
    }

    fn observe_resize(&mut self, handler: ResizeHandler) -> Box<dyn ResizeWatch> {
        self.next_watch += 1;
        let id = self.next_watch;
        self.watchers.borrow_mut().insert(id, handler);
        Box::new(WindowWatch { id, watchers: Rc::downgrade(&self.watchers) })
    }
}
