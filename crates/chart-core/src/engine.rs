// File: crates/chart-core/src/engine.rs
// Summary: Chart lifecycle: attach a chart to a host element, keep its resize watch registered, detach it.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{Declaration, ATTR_HANDLE};
use crate::error::AttachError;
use crate::host::{Host, PointerEvent, ResizeEntry, SharedView};
use crate::registry::{Handle, Registry};
use crate::theme::Theme;
use crate::types::Margin;
use crate::view::ChartView;

/// Owns the registry of attached charts. Independent engines never share state.
#[derive(Default)]
pub struct ChartEngine {
    registry: Registry,
    margin: Margin,
    theme: Theme,
}

impl ChartEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Build a chart from the host's declared attributes and keep it in sync with the host's size.
    ///
    /// On error nothing is mounted or registered and the failure is logged. A host that is
    /// already attached is detached first, so it never holds more than one registration.
    pub fn attach(&mut self, host: &mut dyn Host) -> Result<Handle, AttachError> {
        let result = self.try_attach(host);
        if let Err(err) = &result {
            tracing::error!(error = %err, "error creating chart");
        }
        result
    }

    fn try_attach(&mut self, host: &mut dyn Host) -> Result<Handle, AttachError> {
        let options = Declaration::read(host).parse()?;
        let kind = options.kind;

        let mut view = ChartView::new(options, host.layout_box(), host.device_pixel_ratio(), self.margin, self.theme)?;
        view.render();
        let view: SharedView = Rc::new(RefCell::new(view));

        self.detach(host);

        let pointer_view = Rc::clone(&view);
        host.mount(
            Rc::clone(&view),
            Box::new(move |event: PointerEvent| match pointer_view.try_borrow_mut() {
                Ok(mut v) => v.handle_pointer(event),
                Err(_) => tracing::warn!(?event, "chart busy, pointer event dropped"),
            }),
        );

        let resize_view = Rc::clone(&view);
        let watch = host.observe_resize(Box::new(move |entry: &ResizeEntry| {
            let Ok(mut v) = resize_view.try_borrow_mut() else {
                tracing::warn!(?entry, "chart busy, resize dropped");
                return;
            };
            if let Err(err) = v.resize(entry) {
                tracing::error!(error = %err, "error resizing chart");
            }
        }));

        let handle = Handle::mint();
        self.registry.insert(handle, watch);
        host.set_attribute(ATTR_HANDLE, &handle.to_string());
        tracing::debug!(%handle, %kind, "chart attached");
        Ok(handle)
    }

    /// Stop the host's chart from reacting to resizes and forget it.
    ///
    /// Returns whether a registration was released. Detaching twice, or a host that was never
    /// attached, is a no-op.
    pub fn detach(&mut self, host: &mut dyn Host) -> bool {
        let Some(raw) = host.attribute(ATTR_HANDLE) else {
            return false;
        };
        let Ok(handle) = raw.parse::<Handle>() else {
            tracing::debug!(value = %raw, "ignoring unrecognized chart handle");
            return false;
        };
        if !self.registry.release(handle) {
            return false;
        }
        host.remove_attribute(ATTR_HANDLE);
        tracing::debug!(%handle, "chart detached");
        true
    }

    pub fn is_attached(&self, handle: Handle) -> bool {
        self.registry.contains(handle)
    }

    /// Number of attached charts.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}
