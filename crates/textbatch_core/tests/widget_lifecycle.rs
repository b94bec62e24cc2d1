//! Widget registrations across attach/detach cycles of a host surface.

use textbatch_core::widgets::{OverlayCorner, RegisterOutcome, WidgetDiagnostic};
use textbatch_core::{Position, RenderSurface, WidgetData, WidgetLifecycleManager, WidgetPosition};

/// Surface that only keeps the ids currently projected on it.
#[derive(Default)]
struct IdSurface {
    ids: Vec<String>,
    replays: usize,
}

impl RenderSurface for IdSurface {
    fn replay(&mut self, widgets: &[WidgetData]) {
        self.replays += 1;
        self.ids = widgets.iter().map(|w| w.id.clone()).collect();
    }

    fn add_widget(&mut self, widget: &WidgetData) {
        assert!(!self.ids.contains(&widget.id), "duplicate projection");
        self.ids.push(widget.id.clone());
    }

    fn layout_widget(&mut self, widget: &WidgetData) {
        assert!(self.ids.contains(&widget.id), "layout of unknown widget");
    }

    fn remove_widget(&mut self, id: &str) {
        self.ids.retain(|existing| existing != id);
    }

    fn teardown(&mut self) {
        self.ids.clear();
    }
}

#[test]
fn registrations_made_while_detached_replay_on_every_attach() {
    let mut widgets: WidgetLifecycleManager<IdSurface> = WidgetLifecycleManager::new();
    widgets.register(WidgetData::content("a", Position::new(1, 1)));
    widgets.register(WidgetData::overlay("b", Some(OverlayCorner::BottomRight)));

    widgets.attach(IdSurface::default());
    assert_eq!(
        widgets.surface().map(|s| s.ids.clone()),
        Some(vec!["a".to_string(), "b".to_string()])
    );

    let old = widgets.detach().expect("attached surface");
    assert!(old.ids.is_empty());
    assert!(widgets.surface().is_none());

    widgets.attach(IdSurface::default());
    let surface = widgets.surface().expect("re-attached");
    assert_eq!(surface.ids, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(surface.replays, 1);
    assert_eq!(
        widgets.registry().get("b").map(|w| w.position.clone()),
        Some(WidgetPosition::overlay(OverlayCorner::BottomRight))
    );
}

#[test]
fn projected_set_tracks_registry_through_mixed_calls() {
    let mut widgets: WidgetLifecycleManager<IdSurface> = WidgetLifecycleManager::new();
    widgets.attach(IdSurface::default());

    widgets.register(WidgetData::overlay("x", None));
    widgets.register(WidgetData::overlay("y", None));
    assert_eq!(
        widgets.register(WidgetData::overlay("x", Some(OverlayCorner::TopCenter))),
        RegisterOutcome::Replaced
    );
    assert!(widgets.unregister("y"));
    assert!(!widgets.unregister("y"));
    assert!(!widgets.update_position("y", WidgetPosition::overlay(OverlayCorner::TopRight)));

    let registry_ids: Vec<String> = widgets.registry().iter().map(|w| w.id.clone()).collect();
    assert_eq!(widgets.surface().map(|s| s.ids.clone()), Some(registry_ids));
    assert_eq!(
        widgets.diagnostics(),
        &[WidgetDiagnostic::DuplicateWidget { id: "x".to_string() }]
    );
}
