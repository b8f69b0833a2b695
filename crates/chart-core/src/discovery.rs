// File: crates/chart-core/src/discovery.rs
// Summary: Auto-discovery of declared charts through a host document capability.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ATTR_KIND;
use crate::engine::ChartEngine;
use crate::host::Host;

/// Collection of hosts able to report chart declarations, present and future.
pub trait Document {
    /// Visit every host that currently carries the chart kind attribute.
    fn declared_hosts(&mut self, visit: &mut dyn FnMut(&mut dyn Host));
    /// Report hosts inserted from now on, anywhere in the document.
    ///
    /// An insertion reported while an attach is still running is skipped with a warning.
    fn watch_inserted(&mut self, on_insert: Box<dyn FnMut(&mut dyn Host)>);
}

/// Attach every declared chart and keep attaching newly inserted ones.
///
/// Returns the number of charts attached right away. Failures are logged by
/// [`ChartEngine::attach`] and do not stop discovery.
pub fn bootstrap(engine: &Rc<RefCell<ChartEngine>>, document: &mut dyn Document) -> usize {
    let mut attached = 0;
    document.declared_hosts(&mut |host: &mut dyn Host| {
        if engine.borrow_mut().attach(host).is_ok() {
            attached += 1;
        }
    });
    tracing::debug!(attached, "declared charts attached");

    let engine = Rc::clone(engine);
    document.watch_inserted(Box::new(move |host: &mut dyn Host| {
        if host.attribute(ATTR_KIND).is_none() {
            return;
        }
        match engine.try_borrow_mut() {
            Ok(mut engine) => {
                let _ = engine.attach(host);
            }
            Err(_) => tracing::warn!("chart engine busy, inserted chart not attached"),
        }
    }));
    attached
}
