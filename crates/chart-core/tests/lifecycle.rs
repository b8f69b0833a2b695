// File: crates/chart-core/tests/lifecycle.rs
// Purpose: Attach/detach bookkeeping, resize-driven re-rendering and pointer tooltips through a fake host.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{FakeDocument, FakeHost};
use petal_core::config::ATTR_HANDLE;
use petal_core::{bootstrap, AttachError, ChartEngine, ConfigError, Handle, Host, LogicalSize, Margin, PointerEvent};

const DATA: &str = r#"[{"label":"A","value":10},{"label":"B","value":30}]"#;

#[test]
fn attach_mounts_surface_and_registers_once_for_every_kind() {
    for kind in ["line", "bar", "pie"] {
        let mut engine = ChartEngine::new();
        let mut host = FakeHost::new(200.0, 100.0).declare(kind, DATA, None, None);

        let handle = engine.attach(&mut host).expect("attach");

        assert!(host.view().is_some(), "{kind}: surface mounted");
        assert_eq!(engine.len(), 1);
        assert!(engine.is_attached(handle));
        assert_eq!(host.attribute(ATTR_HANDLE), Some(handle.to_string()));
        assert_eq!(host.watcher_count(), 1);
        assert_eq!(host.view().unwrap().borrow().render_count(), 1);
    }
}

#[test]
fn detach_releases_and_is_idempotent() {
    let mut engine = ChartEngine::new();
    let mut host = FakeHost::new(200.0, 100.0).declare("bar", DATA, Some(r##"["#000"]"##), None);
    let handle = engine.attach(&mut host).unwrap();

    assert!(engine.detach(&mut host));
    assert!(!engine.is_attached(handle));
    assert!(engine.is_empty());
    assert_eq!(host.watcher_count(), 0);

    assert!(!engine.detach(&mut host));
    let mut stranger = FakeHost::new(10.0, 10.0);
    assert!(!engine.detach(&mut stranger));
}

#[test]
fn invalid_kind_creates_nothing() {
    let mut engine = ChartEngine::new();
    let mut host = FakeHost::new(200.0, 100.0).declare("scatter", DATA, None, None);

    let err = engine.attach(&mut host).unwrap_err();

    assert!(matches!(err, AttachError::Config(ConfigError::InvalidKind { ref found }) if found == "scatter"));
    assert!(host.view().is_none());
    assert!(engine.is_empty());
    assert_eq!(host.attribute(ATTR_HANDLE), None);
    assert_eq!(host.watcher_count(), 0);
}

#[test]
fn malformed_payloads_are_parse_failures() {
    let mut engine = ChartEngine::new();
    let mut bad_data = FakeHost::new(200.0, 100.0).declare("line", "[{\"value\":", None, None);
    let mut bad_colors = FakeHost::new(200.0, 100.0).declare("line", DATA, Some("red"), None);

    assert!(matches!(engine.attach(&mut bad_data), Err(AttachError::Config(ConfigError::MalformedData(_)))));
    assert!(matches!(engine.attach(&mut bad_colors), Err(AttachError::Config(ConfigError::MalformedColors(_)))));
    assert!(engine.is_empty());
}

#[test]
fn degenerate_datasets_are_rejected() {
    let mut engine = ChartEngine::new();
    let mut empty = FakeHost::new(200.0, 100.0).declare("bar", "[]", None, None);
    let mut zero_pie = FakeHost::new(200.0, 100.0).declare("pie", r#"[{"value":0}]"#, None, None);

    assert!(matches!(engine.attach(&mut empty), Err(AttachError::Config(ConfigError::EmptyDataset { .. }))));
    assert!(matches!(engine.attach(&mut zero_pie), Err(AttachError::Config(ConfigError::NonPositiveTotal { .. }))));
    assert!(empty.view().is_none() && zero_pie.view().is_none());
}

#[test]
fn resize_rerenders_at_new_backing_resolution() {
    let mut engine = ChartEngine::new();
    let mut host = FakeHost::new(200.0, 100.0).declare("line", DATA, None, Some("Trend"));
    engine.attach(&mut host).unwrap();
    let view = host.view().unwrap();
    assert_eq!(view.borrow().surface().backing_size(), (200, 100));

    host.resize_to(400.0, 300.0, Some(2.0));

    let v = view.borrow();
    assert_eq!(v.surface().backing_size(), (800, 600));
    assert_eq!(v.surface().display_size().width, 400.0);
    assert_eq!(v.render_count(), 2);
    assert_eq!(engine.len(), 1);
}

#[test]
fn detached_chart_ignores_resizes() {
    let mut engine = ChartEngine::new();
    let mut host = FakeHost::new(200.0, 100.0).declare("pie", DATA, None, None);
    engine.attach(&mut host).unwrap();
    let view = host.view().unwrap();
    engine.detach(&mut host);

    host.resize_to(50.0, 50.0, None);

    assert_eq!(view.borrow().render_count(), 1);
    assert_eq!(view.borrow().surface().backing_size(), (200, 100));
}

#[test]
fn reattach_replaces_previous_registration() {
    let mut engine = ChartEngine::new();
    let mut host = FakeHost::new(200.0, 100.0).declare("bar", DATA, None, None);
    let first = engine.attach(&mut host).unwrap();
    let second = engine.attach(&mut host).unwrap();

    assert_ne!(first, second);
    assert!(!engine.is_attached(first));
    assert!(engine.is_attached(second));
    assert_eq!(engine.len(), 1);
    assert_eq!(host.watcher_count(), 1);
}

#[test]
fn failed_reattach_keeps_existing_chart() {
    let mut engine = ChartEngine::new();
    let mut host = FakeHost::new(200.0, 100.0).declare("bar", DATA, None, None);
    let handle = engine.attach(&mut host).unwrap();

    host.set_attribute(petal_core::config::ATTR_KIND, "radar");
    assert!(engine.attach(&mut host).is_err());

    assert!(engine.is_attached(handle));
    assert_eq!(host.attribute(ATTR_HANDLE), Some(handle.to_string()));
}

#[test]
fn pointer_moves_drive_tooltip() {
    let mut engine = ChartEngine::new();
    let mut host = FakeHost::new(600.0, 400.0).declare("bar", DATA, None, None);
    engine.attach(&mut host).unwrap();
    let view = host.view().unwrap();

    // Second bar spans x 310..526 and y 70..370 on a 600x400 box.
    host.pointer(PointerEvent::Move { x: 400.0, y: 300.0 });
    {
        let v = view.borrow();
        let t = v.tooltip();
        assert!(t.visible);
        assert_eq!(t.title, "B");
        assert_eq!(t.body, "Value: 30");
        assert_eq!((t.position.x, t.position.y), (410.0, 290.0));
    }

    host.pointer(PointerEvent::Move { x: 5.0, y: 5.0 });
    assert!(!view.borrow().tooltip().visible);

    host.pointer(PointerEvent::Move { x: 400.0, y: 300.0 });
    host.pointer(PointerEvent::Leave);
    assert!(!view.borrow().tooltip().visible);
}

#[test]
fn engines_do_not_share_registries() {
    let mut a = ChartEngine::new();
    let mut b = ChartEngine::new();
    let mut host_a = FakeHost::new(100.0, 100.0).declare("pie", DATA, None, None);
    let mut host_b = FakeHost::new(100.0, 100.0).declare("pie", DATA, None, None);
    let ha: Handle = a.attach(&mut host_a).unwrap();
    let hb: Handle = b.attach(&mut host_b).unwrap();

    assert_ne!(ha, hb);
    assert!(!b.detach(&mut host_a));
    assert!(a.is_attached(ha));
    assert_eq!((a.len(), b.len()), (1, 1));
}

#[test]
fn bootstrap_attaches_declared_and_inserted_hosts() {
    let engine = Rc::new(RefCell::new(ChartEngine::new()));
    let mut doc = FakeDocument::default();
    doc.hosts.push(FakeHost::new(100.0, 100.0).declare("line", DATA, None, None));
    doc.hosts.push(FakeHost::new(100.0, 100.0).declare("scatter", DATA, None, None));
    doc.hosts.push(FakeHost::new(100.0, 100.0));

    let attached = bootstrap(&engine, &mut doc);
    assert_eq!(attached, 1);
    assert_eq!(engine.borrow().len(), 1);

    doc.insert(FakeHost::new(100.0, 100.0).declare("bar", DATA, None, None));
    doc.insert(FakeHost::new(100.0, 100.0));
    assert_eq!(engine.borrow().len(), 2);
    assert!(doc.hosts[3].view().is_some());
    assert!(doc.hosts[4].view().is_none());
}

#[test]
fn attach_uses_host_pixel_ratio() {
    let mut engine = ChartEngine::new();
    let mut host = FakeHost::new(200.0, 100.0).with_dpr(2.0).declare("bar", DATA, None, None);
    engine.attach(&mut host).unwrap();
    let view = host.view().unwrap();
    let v = view.borrow();
    assert_eq!(v.surface().backing_size(), (400, 200));
    assert_eq!(v.surface().display_size().width, 200.0);
}

#[test]
fn composed_frame_includes_tooltip() {
    let mut engine = ChartEngine::new();
    let mut host = FakeHost::new(600.0, 400.0).declare("bar", DATA, None, None);
    engine.attach(&mut host).unwrap();
    let view = host.view().unwrap();

    let (plain, w, h, stride) = view.borrow_mut().compose_rgba8().unwrap();
    assert_eq!((w, h), (600, 400));

    host.pointer(PointerEvent::Move { x: 400.0, y: 300.0 });
    let (hovered, ..) = view.borrow_mut().compose_rgba8().unwrap();
    // Tooltip box starts at (410, 290), over the second bar.
    let at = |px: &[u8], x: usize, y: usize| px[y * stride + x * 4..y * stride + x * 4 + 4].to_vec();
    assert_ne!(at(&plain, 414, 294), at(&hovered, 414, 294));
}

#[test]
fn pointer_lookup_follows_resized_layout() {
    use petal_core::layout;

    let mut engine = ChartEngine::new();
    let mut host = FakeHost::new(600.0, 400.0).declare("bar", DATA, None, None);
    engine.attach(&mut host).unwrap();
    let view = host.view().unwrap();

    host.resize_to(300.0, 200.0, None);
    let data = view.borrow().options().data.clone();
    let bars = layout::bar(&data, LogicalSize::new(300.0, 200.0), &Margin::default()).bars;
    let b = bars[1];

    host.pointer(PointerEvent::Move { x: (b.left + b.right) / 2.0, y: (b.top + b.bottom) / 2.0 });
    assert!(view.borrow().tooltip().visible);
    assert_eq!(view.borrow().tooltip().title, "B");

    // Center of bar B before the resize.
    host.pointer(PointerEvent::Move { x: 418.0, y: 220.0 });
    assert!(!view.borrow().tooltip().visible);
}

#[test]
fn insertion_while_engine_busy_is_skipped() {
    let engine = Rc::new(RefCell::new(ChartEngine::new()));
    let mut doc = FakeDocument::default();
    bootstrap(&engine, &mut doc);

    {
        let _busy = engine.borrow_mut();
        doc.insert(FakeHost::new(100.0, 100.0).declare("bar", DATA, None, None));
    }
    assert!(doc.hosts[0].view().is_none());

    doc.insert(FakeHost::new(100.0, 100.0).declare("bar", DATA, None, None));
    assert_eq!(engine.borrow().len(), 1);
}
