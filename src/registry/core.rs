use std::collections::{BTreeMap, BTreeSet};

use blake3::Hash;
use serde::Serialize;

/// Fields of the layout descriptor.
///
/// Declaration order is the order changes are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutField {
    GridTemplateAreas,
    GridTemplateColumns,
    GridTemplateRows,
    GridGap,
    JustifyContent,
    AlignItems,
    Width,
    Height,
}

impl LayoutField {
    pub const ALL: [LayoutField; 8] = [
        LayoutField::GridTemplateAreas,
        LayoutField::GridTemplateColumns,
        LayoutField::GridTemplateRows,
        LayoutField::GridGap,
        LayoutField::JustifyContent,
        LayoutField::AlignItems,
        LayoutField::Width,
        LayoutField::Height,
    ];

    /// Identifier used on the synchronization channel.
    pub fn name(self) -> &'static str {
        match self {
            LayoutField::GridTemplateAreas => "grid_template_areas",
            LayoutField::GridTemplateColumns => "grid_template_columns",
            LayoutField::GridTemplateRows => "grid_template_rows",
            LayoutField::GridGap => "grid_gap",
            LayoutField::JustifyContent => "justify_content",
            LayoutField::AlignItems => "align_items",
            LayoutField::Width => "width",
            LayoutField::Height => "height",
        }
    }

    /// Whether the template computes this field (as opposed to passing it
    /// through from the caller).
    pub fn is_computed(self) -> bool {
        matches!(
            self,
            LayoutField::GridTemplateAreas
                | LayoutField::GridTemplateColumns
                | LayoutField::GridTemplateRows
        )
    }
}

#[derive(Debug, Clone, Default)]
struct FieldState {
    value: Option<String>,
    hash: Option<Hash>,
}

impl FieldState {
    /// Store `value` if its digest differs; reports whether it did.
    fn update(&mut self, value: Option<String>) -> bool {
        let new_hash = value.as_ref().map(|text| blake3::hash(text.as_bytes()));
        if self.hash == new_hash {
            return false;
        }
        self.value = value;
        self.hash = new_hash;
        true
    }
}

/// Mutable layout descriptor with per-field change tracking.
#[derive(Debug, Clone, Default)]
pub struct LayoutRecord {
    entries: BTreeMap<LayoutField, FieldState>,
    dirty: BTreeSet<LayoutField>,
}

impl LayoutRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, handy for preparing a descriptor up front.
    pub fn with(mut self, field: LayoutField, value: impl Into<String>) -> Self {
        self.set(field, Some(value.into()));
        self
    }

    pub fn get(&self, field: LayoutField) -> Option<&str> {
        self.entries
            .get(&field)
            .and_then(|state| state.value.as_deref())
    }

    /// Write a field. Returns `true` and marks the field dirty when the
    /// stored value actually changed.
    pub fn set(&mut self, field: LayoutField, value: Option<String>) -> bool {
        let changed = self.entries.entry(field).or_default().update(value);
        if changed {
            self.dirty.insert(field);
        }
        changed
    }

    /// Drain the fields changed since the last call, in field order.
    pub fn take_dirty(&mut self) -> Vec<LayoutField> {
        std::mem::take(&mut self.dirty).into_iter().collect()
    }

    pub fn grid_template_areas(&self) -> Option<&str> {
        self.get(LayoutField::GridTemplateAreas)
    }

    pub fn grid_template_columns(&self) -> Option<&str> {
        self.get(LayoutField::GridTemplateColumns)
    }

    pub fn grid_template_rows(&self) -> Option<&str> {
        self.get(LayoutField::GridTemplateRows)
    }

    pub fn grid_gap(&self) -> Option<&str> {
        self.get(LayoutField::GridGap)
    }

    pub fn justify_content(&self) -> Option<&str> {
        self.get(LayoutField::JustifyContent)
    }

    pub fn align_items(&self) -> Option<&str> {
        self.get(LayoutField::AlignItems)
    }

    pub fn width(&self) -> Option<&str> {
        self.get(LayoutField::Width)
    }

    pub fn height(&self) -> Option<&str> {
        self.get(LayoutField::Height)
    }

    /// Every field with its current value, keyed by field name.
    pub fn snapshot(&self) -> BTreeMap<&'static str, Option<String>> {
        LayoutField::ALL
            .iter()
            .map(|field| (field.name(), self.get(*field).map(str::to_string)))
            .collect()
    }
}
