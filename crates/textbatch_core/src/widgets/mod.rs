//! Content and overlay widget lifecycle across surface attach/detach.
//!
//! The manager owns a [`WidgetRegistry`] that outlives any surface. While a
//! surface is attached, the widgets projected on it mirror the registry
//! exactly, and each id is projected at most once.

mod registry;

pub use registry::WidgetRegistry;

use crate::range::Position;

/// Placement hint for a content widget relative to its anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentPreference {
    Exact,
    Above,
    Below,
}

/// Viewport corner an overlay widget is pinned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayCorner {
    TopRight,
    BottomRight,
    TopCenter,
}

/// Kind-specific widget position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetPosition {
    /// Anchored to a document position; `None` hides the widget.
    Content {
        position: Option<Position>,
        preference: Vec<ContentPreference>,
    },
    /// Pinned to a viewport corner; `None` leaves placement to the widget.
    Overlay { corner: Option<OverlayCorner> },
}

impl WidgetPosition {
    pub fn content(position: Position, preference: Vec<ContentPreference>) -> Self {
        Self::Content {
            position: Some(position),
            preference,
        }
    }

    pub fn overlay(corner: OverlayCorner) -> Self {
        Self::Overlay {
            corner: Some(corner),
        }
    }
}

/// Registry snapshot of one widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetData {
    pub id: String,
    pub position: WidgetPosition,
}

impl WidgetData {
    pub fn new(id: impl Into<String>, position: WidgetPosition) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }

    pub fn content(id: impl Into<String>, position: Position) -> Self {
        Self::new(
            id,
            WidgetPosition::content(position, vec![ContentPreference::Exact]),
        )
    }

    pub fn overlay(id: impl Into<String>, corner: Option<OverlayCorner>) -> Self {
        Self::new(id, WidgetPosition::Overlay { corner })
    }
}

/// Rendering surface widgets are projected onto.
pub trait RenderSurface {
    /// Project the full registry onto a freshly attached surface.
    fn replay(&mut self, widgets: &[WidgetData]);

    fn add_widget(&mut self, widget: &WidgetData);

    /// Re-layout a widget already projected on the surface.
    fn layout_widget(&mut self, widget: &WidgetData);

    fn remove_widget(&mut self, id: &str);

    /// Release surface resources on detach.
    fn teardown(&mut self);
}

/// Non-fatal registry events surfaced to callers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetDiagnostic {
    /// `register` overwrote an existing registration.
    DuplicateWidget { id: String },
}

/// Result of [`WidgetLifecycleManager::register`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    Inserted,
    Replaced,
}

/// Tracks widgets by id and keeps an attached surface in sync with them.
#[derive(Debug)]
pub struct WidgetLifecycleManager<S: RenderSurface> {
    registry: WidgetRegistry,
    surface: Option<S>,
    diagnostics: Vec<WidgetDiagnostic>,
}

impl<S: RenderSurface> Default for WidgetLifecycleManager<S> {
    fn default() -> Self {
        Self {
            registry: WidgetRegistry::default(),
            surface: None,
            diagnostics: Vec::new(),
        }
    }
}

impl<S: RenderSurface> WidgetLifecycleManager<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    /// Diagnostics recorded since the last [`Self::take_diagnostics`].
    pub fn diagnostics(&self) -> &[WidgetDiagnostic] {
        self.diagnostics.as_slice()
    }

    pub fn take_diagnostics(&mut self) -> Vec<WidgetDiagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Register `data`, overwriting any widget with the same id.
    ///
    /// While attached the widget is projected immediately; an overwritten
    /// widget has its old projection removed first.
    pub fn register(&mut self, data: WidgetData) -> RegisterOutcome {
        let replaced = self.registry.insert(data.clone()).is_some();
        if replaced {
            tracing::warn!("Overwriting a widget with the same id: {}", data.id);
            self.diagnostics.push(WidgetDiagnostic::DuplicateWidget {
                id: data.id.clone(),
            });
        }
        if let Some(surface) = self.surface.as_mut() {
            if replaced {
                surface.remove_widget(data.id.as_str());
            }
            surface.add_widget(&data);
        }
        if replaced {
            RegisterOutcome::Replaced
        } else {
            RegisterOutcome::Inserted
        }
    }

    /// Store a new position for `id`. Unknown ids are ignored.
    pub fn update_position(&mut self, id: &str, position: WidgetPosition) -> bool {
        let Some(updated) = self.registry.set_position(id, position) else {
            return false;
        };
        if let Some(surface) = self.surface.as_mut() {
            surface.layout_widget(updated);
        }
        true
    }

    /// Remove `id` from the registry and the surface. Unknown ids are ignored.
    pub fn unregister(&mut self, id: &str) -> bool {
        if self.registry.remove(id).is_none() {
            return false;
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.remove_widget(id);
        }
        true
    }

    /// Attach `surface`, replaying the whole registry onto it.
    ///
    /// A surface that was already attached is torn down and returned.
    pub fn attach(&mut self, mut surface: S) -> Option<S> {
        let previous = self.detach();
        surface.replay(self.registry.as_slice());
        tracing::debug!(widgets = self.registry.len(), "Attached render surface");
        self.surface = Some(surface);
        previous
    }

    /// Tear down and return the attached surface. Registrations are kept.
    pub fn detach(&mut self) -> Option<S> {
        let mut surface = self.surface.take()?;
        surface.teardown();
        tracing::debug!(widgets = self.registry.len(), "Detached render surface");
        Some(surface)
    }

    /// Detach and forget every registration.
    pub fn dispose(&mut self) -> Option<S> {
        let surface = self.detach();
        self.registry.clear();
        self.diagnostics.clear();
        surface
    }
}
