//! Shared test-only helpers for textbatch_core.

use crate::widgets::{RenderSurface, WidgetData};

/// Surface call recorded by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SurfaceEvent {
    Replay(Vec<String>),
    Add(String),
    Layout(String),
    Remove(String),
    Teardown,
}

/// In-memory surface that records calls and mirrors projected widgets.
///
/// # Panics
/// Panics when a widget id would be projected twice or when a missing id is
/// laid out, since either means the manager broke its surface invariant.
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub(crate) projected: Vec<WidgetData>,
    pub(crate) events: Vec<SurfaceEvent>,
    pub(crate) torn_down: bool,
}

impl RecordingSurface {
    pub(crate) fn projected_ids(&self) -> Vec<&str> {
        self.projected.iter().map(|w| w.id.as_str()).collect()
    }

    pub(crate) fn projected(&self, id: &str) -> Option<&WidgetData> {
        self.projected.iter().find(|w| w.id == id)
    }

    fn project(&mut self, widget: &WidgetData) {
        assert!(
            self.projected(widget.id.as_str()).is_none(),
            "widget {} projected twice",
            widget.id
        );
        self.projected.push(widget.clone());
    }
}

impl RenderSurface for RecordingSurface {
    fn replay(&mut self, widgets: &[WidgetData]) {
        assert!(self.projected.is_empty(), "replay onto a used surface");
        self.events.push(SurfaceEvent::Replay(
            widgets.iter().map(|w| w.id.clone()).collect(),
        ));
        for widget in widgets {
            self.project(widget);
        }
    }

    fn add_widget(&mut self, widget: &WidgetData) {
        self.events.push(SurfaceEvent::Add(widget.id.clone()));
        self.project(widget);
    }

    fn layout_widget(&mut self, widget: &WidgetData) {
        self.events.push(SurfaceEvent::Layout(widget.id.clone()));
        let slot = self
            .projected
            .iter_mut()
            .find(|w| w.id == widget.id)
            .expect("layout of a widget that is not projected");
        *slot = widget.clone();
    }

    fn remove_widget(&mut self, id: &str) {
        self.events.push(SurfaceEvent::Remove(id.to_string()));
        self.projected.retain(|w| w.id != id);
    }

    fn teardown(&mut self) {
        self.events.push(SurfaceEvent::Teardown);
        self.projected.clear();
        self.torn_down = true;
    }
}
