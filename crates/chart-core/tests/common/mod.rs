// File: crates/chart-core/tests/common/mod.rs
// Purpose: In-memory host element and document used by the lifecycle tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use petal_core::config::{ATTR_COLORS, ATTR_DATA, ATTR_KIND, ATTR_TITLE};
use petal_core::host::{PointerHandler, ResizeHandler};
use petal_core::{Document, Host, LogicalSize, PointerEvent, ResizeEntry, ResizeWatch, SharedView};

type Watchers = Rc<RefCell<HashMap<u64, ResizeHandler>>>;

pub struct FakeHost {
    attributes: HashMap<String, String>,
    size: LogicalSize,
    dpr: Option<f64>,
    content: Option<SharedView>,
    pointer: Option<PointerHandler>,
    watchers: Watchers,
    next_watch: u64,
}

impl FakeHost {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            attributes: HashMap::new(),
            size: LogicalSize::new(width, height),
            dpr: None,
            content: None,
            pointer: None,
            watchers: Rc::new(RefCell::new(HashMap::new())),
            next_watch: 0,
        }
    }

    pub fn with_dpr(mut self, dpr: f64) -> Self {
        self.dpr = Some(dpr);
        self
    }

    /// Declare a chart the way markup or a component wrapper would.
    pub fn declare(mut self, kind: &str, data: &str, colors: Option<&str>, title: Option<&str>) -> Self {
        self.set_attribute(ATTR_KIND, kind);
        self.set_attribute(ATTR_DATA, data);
        if let Some(c) = colors {
            self.set_attribute(ATTR_COLORS, c);
        }
        if let Some(t) = title {
            self.set_attribute(ATTR_TITLE, t);
        }
        self
    }

    pub fn view(&self) -> Option<SharedView> {
        self.content.clone()
    }

    pub fn watcher_count(&self) -> usize {
        self.watchers.borrow().len()
    }

    /// Change the layout box and notify every connected watch.
    pub fn resize_to(&mut self, width: f64, height: f64, dpr: Option<f64>) {
        self.size = LogicalSize::new(width, height);
        self.dpr = dpr;
        let entry = ResizeEntry { size: self.size, device_pixel_ratio: dpr };
        for handler in self.watchers.borrow_mut().values_mut() {
            handler(&entry);
        }
    }

    pub fn pointer(&mut self, event: PointerEvent) {
        if let Some(handler) = self.pointer.as_mut() {
            handler(event);
        }
    }
}

struct FakeWatch {
    id: u64,
    watchers: Weak<RefCell<HashMap<u64, ResizeHandler>>>,
}

impl ResizeWatch for FakeWatch {
    fn disconnect(&mut self) {
        if let Some(w) = self.watchers.upgrade() {
            w.borrow_mut().remove(&self.id);
        }
    }
}

impl Host for FakeHost {
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

    fn mount(&mut self, view: SharedView, on_pointer: PointerHandler) {
        self.content = Some(view);
        self.pointer = Some(on_pointer);
    }

    fn observe_resize(&mut self, handler: ResizeHandler) -> Box<dyn ResizeWatch> {
        self.next_watch += 1;
        let id = self.next_watch;
        self.watchers.borrow_mut().insert(id, handler);
        Box::new(FakeWatch { id, watchers: Rc::downgrade(&self.watchers) })
    }
}

/// Document holding hosts; insertions are reported to the registered watcher.
#[derive(Default)]
pub struct FakeDocument {
    pub hosts: Vec<FakeHost>,
    on_insert: Option<Box<dyn FnMut(&mut dyn Host)>>,
}

impl FakeDocument {
    pub fn insert(&mut self, mut host: FakeHost) {
        if let Some(cb) = self.on_insert.as_mut() {
            cb(&mut host);
        }
        self.hosts.push(host);
    }
}

impl Document for FakeDocument {
    fn declared_hosts(&mut self, visit: &mut dyn FnMut(&mut dyn Host)) {
        for host in self.hosts.iter_mut().filter(|h| h.attribute(ATTR_KIND).is_some()) {
            visit(host);
        }
    }

    fn watch_inserted(&mut self, on_insert: Box<dyn FnMut(&mut dyn Host)>) {
        self.on_insert = Some(on_insert);
    }
}
