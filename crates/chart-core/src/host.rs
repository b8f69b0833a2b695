// File: crates/chart-core/src/host.rs
// Summary: Host environment abstraction: attributes, layout box, content mounting, pointer and resize sources.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::LogicalSize;
use crate::view::ChartView;

/// A mounted chart, shared between the host and its event callbacks.
pub type SharedView = Rc<RefCell<ChartView>>;

/// Pointer input relative to the surface's top-left corner, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move { x: f64, y: f64 },
    Leave,
}

/// Resize notification delivered by a [`ResizeWatch`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeEntry {
    pub size: LogicalSize,
    pub device_pixel_ratio: Option<f64>,
}

pub type PointerHandler = Box<dyn FnMut(PointerEvent)>;
pub type ResizeHandler = Box<dyn FnMut(&ResizeEntry)>;

/// Subscription to a host's resize notifications.
pub trait ResizeWatch {
    /// Stop delivering notifications. Calling it again is harmless.
    fn disconnect(&mut self);
}

/// The element a chart is attached to.
///
/// Callbacks are invoked on the host's single event thread, one at a time.
pub trait Host {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&mut self, name: &str, value: &str);
    fn remove_attribute(&mut self, name: &str);

    /// Current layout box in logical pixels.
    fn layout_box(&self) -> LogicalSize;
    /// Device pixel ratio of the display the host is on, if known.
    fn device_pixel_ratio(&self) -> Option<f64>;

    /// Replace the host's content with `view` and route pointer input over it to `on_pointer`.
    fn mount(&mut self, view: SharedView, on_pointer: PointerHandler);
    /// Start delivering resize notifications of this host to `handler`.
    fn observe_resize(&mut self, handler: ResizeHandler) -> Box<dyn ResizeWatch>;
}
