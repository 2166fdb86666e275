//! Change notifications for the remote rendering side.
//!
//! After every mutation the container sends one [`StateChange`] per derived
//! field whose value actually changed. Observers only ever see deltas; a
//! full snapshot is available separately through `TemplateBox::state`.

use std::fmt;
use std::sync::Mutex;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::registry::LayoutField;

/// Field named by a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StateField {
    /// A field of the layout descriptor.
    Layout(LayoutField),
    /// The container's visible child list.
    Children,
}

impl StateField {
    pub fn name(self) -> &'static str {
        match self {
            StateField::Layout(field) => field.name(),
            StateField::Children => "children",
        }
    }

    pub fn is_layout(self) -> bool {
        matches!(self, StateField::Layout(_))
    }
}

impl From<LayoutField> for StateField {
    fn from(field: LayoutField) -> Self {
        StateField::Layout(field)
    }
}

impl fmt::Display for StateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for StateField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A single field delta: the field's name and its new value (`null` when
/// the field was cleared).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateChange {
    pub field: StateField,
    pub value: Value,
}

impl StateChange {
    pub fn new(field: StateField, value: Value) -> Self {
        Self { field, value }
    }

    pub fn name(&self) -> &'static str {
        self.field.name()
    }
}

/// Receiver of change notifications.
pub trait StateObserver: Send + Sync {
    fn notify(&self, change: &StateChange);
}

/// Observer used when nobody is listening.
#[derive(Debug, Default)]
pub struct NullObserver;

impl StateObserver for NullObserver {
    fn notify(&self, _change: &StateChange) {}
}

/// Observer that keeps every notification it receives.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    changes: Mutex<Vec<StateChange>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changes(&self) -> Vec<StateChange> {
        self.changes
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Names of the notified fields, in notification order.
    pub fn names(&self) -> Vec<&'static str> {
        self.changes().iter().map(StateChange::name).collect()
    }

    /// Names of the notified layout fields only.
    pub fn layout_names(&self) -> Vec<&'static str> {
        self.changes()
            .iter()
            .filter(|change| change.field.is_layout())
            .map(StateChange::name)
            .collect()
    }

    pub fn take(&self) -> Vec<StateChange> {
        self.changes
            .lock()
            .map(|mut guard| std::mem::take(&mut *guard))
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.changes.lock() {
            guard.clear();
        }
    }
}

impl StateObserver for RecordingObserver {
    fn notify(&self, change: &StateChange) {
        if let Ok(mut guard) = self.changes.lock() {
            guard.push(change.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recording_observer_keeps_order() {
        let observer = RecordingObserver::new();
        observer.notify(&StateChange::new(
            LayoutField::GridTemplateAreas.into(),
            json!("\"a\""),
        ));
        observer.notify(&StateChange::new(StateField::Children, json!(["a"])));

        assert_eq!(observer.names(), vec!["grid_template_areas", "children"]);
        assert_eq!(observer.layout_names(), vec!["grid_template_areas"]);
        assert_eq!(observer.take().len(), 2);
        assert!(observer.changes().is_empty());
    }

    #[test]
    fn change_serializes_field_name() {
        let change = StateChange::new(LayoutField::GridTemplateRows.into(), Value::Null);
        let encoded = serde_json::to_value(&change).unwrap();
        assert_eq!(encoded, json!({ "field": "grid_template_rows", "value": null }));
    }
}
