//! Insertion-ordered widget registry keyed by id.

use super::{WidgetData, WidgetPosition};

/// Last-known snapshot of every registered widget.
///
/// Iteration follows first-registration order. Overwriting an id keeps its
/// original slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetRegistry {
    entries: Vec<WidgetData>,
}

impl WidgetRegistry {
    fn index_of(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Insert or overwrite `data`, returning the replaced snapshot.
    pub fn insert(&mut self, data: WidgetData) -> Option<WidgetData> {
        match self.index_of(data.id.as_str()) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index], data)),
            None => {
                self.entries.push(data);
                None
            }
        }
    }

    /// Store a new position for `id`; `None` when the id is unknown.
    pub(super) fn set_position(
        &mut self,
        id: &str,
        position: WidgetPosition,
    ) -> Option<&WidgetData> {
        let index = self.index_of(id)?;
        let entry = &mut self.entries[index];
        entry.position = position;
        Some(entry)
    }

    pub fn remove(&mut self, id: &str) -> Option<WidgetData> {
        let index = self.index_of(id)?;
        Some(self.entries.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&WidgetData> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WidgetData> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[WidgetData] {
        self.entries.as_slice()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
