use std::fmt;
use std::sync::Arc;

use serde_json::{Value, json};

use crate::area::{AreaMap, SlotName, SlotSet};
use crate::error::{Result, TemplateError};
use crate::logging::{LogLevel, METRICS_TARGET, MUTATION_TARGET, event_with_fields, json_kv};
use crate::metrics::MetricSnapshot;
use crate::observer::{NullObserver, StateChange, StateField, StateObserver};
use crate::registry::{LayoutField, LayoutRecord};
use crate::sizing::{Axis, PaneSize, normalize_tracks};
use crate::style::{AlignItems, JustifyContent, StyleProps, parse_keyword};
use crate::widget::Child;

use super::builder::TemplateBuilder;
use super::config::TemplateConfig;
use super::shape::{AppTemplate, Template, TwoByTwoTemplate};
use super::state::TemplateState;

/// Container arranging two-by-two slots.
pub type TwoByTwoLayout = TemplateBox<TwoByTwoTemplate>;

/// Container arranging header, footer, sidebars and center.
pub type AppLayout = TemplateBox<AppTemplate>;

/// A template container.
///
/// Owns the slot assignments, the merge flag, the template's sizing hints
/// and the style options. Every mutation validates its input first, then
/// recomputes the whole derived block (grid fields, visible children, area
/// tags) and notifies the observer once per field whose value changed. The
/// returned list names the same fields.
pub struct TemplateBox<T: Template> {
    template: T,
    slots: Vec<Option<Child>>,
    merge: bool,
    style: StyleProps,
    layout: LayoutRecord,
    children: Vec<Child>,
    areas: Vec<Option<&'static str>>,
    observer: Arc<dyn StateObserver>,
    config: TemplateConfig,
}

impl<T: Template> Default for TemplateBox<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Template> TemplateBox<T> {
    /// An empty container: no children, merging on, default sizing hints.
    pub fn new() -> Self {
        Self::from_parts(
            T::default(),
            vec![None; T::Slot::ALL.len()],
            true,
            StyleProps::default(),
            LayoutRecord::new(),
            Arc::new(NullObserver),
            TemplateConfig::default(),
        )
    }

    pub fn builder() -> TemplateBuilder<T> {
        TemplateBuilder::new()
    }

    /// Assemble a container and run the initial reconcile. Nothing is
    /// published for the initial state.
    pub(super) fn from_parts(
        template: T,
        slots: Vec<Option<Child>>,
        merge: bool,
        style: StyleProps,
        layout: LayoutRecord,
        observer: Arc<dyn StateObserver>,
        config: TemplateConfig,
    ) -> Self {
        let mut container = Self {
            template,
            slots,
            merge,
            style,
            layout,
            children: Vec::new(),
            areas: vec![None; T::Slot::ALL.len()],
            observer,
            config,
        };
        container.reconcile("init");
        container
    }

    pub fn template(&self) -> &T {
        &self.template
    }

    pub fn slot(&self, slot: T::Slot) -> Option<&Child> {
        self.slots[slot.index()].as_ref()
    }

    pub fn occupied(&self) -> SlotSet<T::Slot> {
        T::Slot::ALL
            .iter()
            .copied()
            .filter(|slot| self.slots[slot.index()].is_some())
            .collect()
    }

    pub fn set_slot(&mut self, slot: T::Slot, child: impl Into<Child>) -> Vec<StateField> {
        self.assign(slot, Some(child.into()))
    }

    pub fn clear_slot(&mut self, slot: T::Slot) -> Vec<StateField> {
        self.assign(slot, None)
    }

    /// Put `child` into `slot`, or empty the slot with `None`.
    pub fn assign(&mut self, slot: T::Slot, child: Option<Child>) -> Vec<StateField> {
        self.slots[slot.index()] = child;
        self.commit(slot.attr_name())
    }

    pub fn merge(&self) -> bool {
        self.merge
    }

    pub fn set_merge(&mut self, merge: bool) -> Vec<StateField> {
        self.merge = merge;
        self.commit("merge")
    }

    /// Replace the pane sizes of one axis. The whole list is validated
    /// before anything changes.
    pub fn set_pane_sizes<I, P>(&mut self, axis: Axis, sizes: I) -> Result<Vec<StateField>>
    where
        I: IntoIterator<Item = P>,
        P: Into<PaneSize>,
    {
        let tracks = normalize_tracks(axis, sizes).map_err(|err| self.reject(axis.property(), err))?;
        self.template
            .set_pane_sizes(axis, tracks)
            .map_err(|err| self.reject(axis.property(), err))?;
        Ok(self.commit(axis.property()))
    }

    pub fn grid_gap(&self) -> Option<&str> {
        self.style.grid_gap.as_deref()
    }

    pub fn set_grid_gap(&mut self, gap: Option<&str>) -> Vec<StateField> {
        self.style.grid_gap = gap.map(str::to_string);
        self.write_style(LayoutField::GridGap)
    }

    pub fn justify_content(&self) -> Option<JustifyContent> {
        self.style.justify_content
    }

    pub fn set_justify_content(&mut self, value: Option<&str>) -> Result<Vec<StateField>> {
        let parsed = value
            .map(parse_keyword)
            .transpose()
            .map_err(|err| self.reject("justify_content", err))?;
        self.style.justify_content = parsed;
        Ok(self.write_style(LayoutField::JustifyContent))
    }

    /// The keyword as the caller set it (`top`), not its translation.
    pub fn align_items(&self) -> Option<AlignItems> {
        self.style.align_items
    }

    pub fn set_align_items(&mut self, value: Option<&str>) -> Result<Vec<StateField>> {
        let parsed = value
            .map(parse_keyword)
            .transpose()
            .map_err(|err| self.reject("align_items", err))?;
        self.style.align_items = parsed;
        Ok(self.write_style(LayoutField::AlignItems))
    }

    pub fn width(&self) -> Option<&str> {
        self.style.width.as_deref()
    }

    pub fn set_width(&mut self, width: Option<&str>) -> Vec<StateField> {
        self.style.width = width.map(str::to_string);
        self.write_style(LayoutField::Width)
    }

    pub fn height(&self) -> Option<&str> {
        self.style.height.as_deref()
    }

    pub fn set_height(&mut self, height: Option<&str>) -> Vec<StateField> {
        self.style.height = height.map(str::to_string);
        self.write_style(LayoutField::Height)
    }

    pub fn layout(&self) -> &LayoutRecord {
        &self.layout
    }

    /// Visible children in the template's stable slot order.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn child_ids(&self) -> Vec<String> {
        self.children
            .iter()
            .map(|child| child.id().to_string())
            .collect()
    }

    /// Area the slot's child is placed in, `None` for empty slots.
    pub fn area_of(&self, slot: T::Slot) -> Option<&'static str> {
        self.areas[slot.index()]
    }

    /// The area map for the current inputs.
    pub fn area_map(&self) -> AreaMap<T::Slot> {
        self.template.area_map(self.occupied(), self.merge)
    }

    /// Recompute with unchanged inputs.
    pub fn refresh(&mut self) -> Vec<StateField> {
        self.commit("refresh")
    }

    pub fn set_observer(&mut self, observer: Arc<dyn StateObserver>) {
        self.observer = observer;
    }

    pub fn config(&self) -> &TemplateConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut TemplateConfig {
        &mut self.config
    }

    pub fn state(&self) -> TemplateState {
        TemplateState {
            template: T::NAME,
            merge: self.merge,
            slots: T::Slot::ALL
                .iter()
                .map(|slot| {
                    let id = self.slot(*slot).map(|child| child.id().to_string());
                    (slot.attr_name(), id)
                })
                .collect(),
            children: self.child_ids(),
            areas: T::Slot::ALL
                .iter()
                .filter_map(|slot| self.area_of(*slot).map(|area| (slot.attr_name(), area)))
                .collect(),
            layout: self.layout.snapshot(),
            style: self.style.clone(),
            pane_widths: pane_list(self.template.pane_sizes(Axis::Columns)),
            pane_heights: pane_list(self.template.pane_sizes(Axis::Rows)),
        }
    }

    pub fn metrics_snapshot(&self) -> Option<MetricSnapshot> {
        let metrics = self.config.metrics.as_ref()?;
        metrics.lock().ok().map(|guard| guard.snapshot())
    }

    /// Emit the current metrics snapshot through the configured logger.
    pub fn log_metrics(&self) {
        if let (Some(logger), Some(snapshot)) = (self.config.logger.as_ref(), self.metrics_snapshot())
        {
            let _ = logger.log_event(snapshot.to_log_event(METRICS_TARGET));
        }
    }

    fn write_style(&mut self, field: LayoutField) -> Vec<StateField> {
        self.layout.set(field, self.style.translated(field));
        self.commit(field.name())
    }

    fn commit(&mut self, cause: &str) -> Vec<StateField> {
        let changed = self.reconcile(cause);
        self.publish(&changed);
        changed
    }

    /// Rebuild the derived block from scratch and report which fields moved.
    fn reconcile(&mut self, cause: &str) -> Vec<StateField> {
        let map = self.area_map();
        let columns = map
            .columns
            .as_ref()
            .map(|tracks| tracks.to_css(self.template.pane_sizes(Axis::Columns)));
        let rows = map
            .rows
            .as_ref()
            .map(|tracks| tracks.to_css(self.template.pane_sizes(Axis::Rows)));

        self.layout
            .set(LayoutField::GridTemplateAreas, map.template_css());
        self.layout.set(LayoutField::GridTemplateColumns, columns);
        self.layout.set(LayoutField::GridTemplateRows, rows);

        let mut areas = vec![None; self.slots.len()];
        let mut children = Vec::with_capacity(map.placements.len());
        for placement in &map.placements {
            let index = placement.slot.index();
            if let Some(child) = &self.slots[index] {
                child.set_grid_area(Some(placement.area));
                children.push(child.clone());
                areas[index] = Some(placement.area);
            }
        }

        for old in &self.children {
            if !children.iter().any(|child| child.ptr_eq(old)) {
                old.set_grid_area(None);
            }
        }

        let children_changed = children.len() != self.children.len()
            || children
                .iter()
                .zip(&self.children)
                .any(|(new, old)| !new.ptr_eq(old));
        self.children = children;
        self.areas = areas;

        let mut changed: Vec<StateField> = self
            .layout
            .take_dirty()
            .into_iter()
            .map(StateField::Layout)
            .collect();
        if children_changed {
            changed.push(StateField::Children);
        }

        self.record_reconcile(changed.len());
        self.log_event(
            LogLevel::Debug,
            &self.config.log_target,
            "layout_reconciled",
            [
                json_kv("template", T::NAME),
                json_kv("cause", cause),
                json_kv("merge", self.merge),
                json_kv("children", json!(self.child_ids())),
                json_kv(
                    "changed",
                    json!(changed.iter().map(|field| field.name()).collect::<Vec<_>>()),
                ),
            ],
        );
        changed
    }

    fn publish(&self, changed: &[StateField]) {
        for field in changed {
            let change = StateChange::new(*field, self.field_value(*field));
            self.observer.notify(&change);
        }
    }

    fn field_value(&self, field: StateField) -> Value {
        match field {
            StateField::Layout(field) => json!(self.layout.get(field)),
            StateField::Children => json!(self.child_ids()),
        }
    }

    /// Account for a rejected mutation and hand the error back.
    fn reject(&self, property: &str, err: TemplateError) -> TemplateError {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_rejected();
            }
        }
        self.log_event(
            LogLevel::Warn,
            MUTATION_TARGET,
            "mutation_rejected",
            [
                json_kv("template", T::NAME),
                json_kv("property", property),
                json_kv("error", err.to_string()),
            ],
        );
        err
    }

    fn record_reconcile(&self, changed: usize) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_reconcile(changed);
            }
        }
    }

    fn log_event<I>(&self, level: LogLevel, target: &str, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        if let Some(logger) = self.config.logger.as_ref() {
            let event = event_with_fields(level, target, message, fields);
            let _ = logger.log_event(event);
        }
    }
}

impl TemplateBox<AppTemplate> {
    pub fn pane_widths(&self) -> &[String] {
        self.template.pane_sizes(Axis::Columns)
    }

    pub fn pane_heights(&self) -> &[String] {
        self.template.pane_sizes(Axis::Rows)
    }

    pub fn set_pane_widths<I, P>(&mut self, sizes: I) -> Result<Vec<StateField>>
    where
        I: IntoIterator<Item = P>,
        P: Into<PaneSize>,
    {
        self.set_pane_sizes(Axis::Columns, sizes)
    }

    pub fn set_pane_heights<I, P>(&mut self, sizes: I) -> Result<Vec<StateField>>
    where
        I: IntoIterator<Item = P>,
        P: Into<PaneSize>,
    {
        self.set_pane_sizes(Axis::Rows, sizes)
    }
}

impl<T: Template> fmt::Debug for TemplateBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateBox")
            .field("template", &self.template)
            .field("merge", &self.merge)
            .field("occupied", &self.occupied())
            .field("children", &self.children)
            .field("layout", &self.layout)
            .finish()
    }
}

fn pane_list(panes: &[String]) -> Option<Vec<String>> {
    if panes.is_empty() {
        None
    } else {
        Some(panes.to_vec())
    }
}
