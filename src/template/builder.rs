use std::marker::PhantomData;
use std::sync::Arc;

use crate::area::SlotName;
use crate::error::Result;
use crate::logging::{LogLevel, MUTATION_TARGET, event_with_fields, json_kv};
use crate::observer::{NullObserver, StateObserver};
use crate::registry::{LayoutField, LayoutRecord};
use crate::sizing::{Axis, PaneSize, normalize_tracks};
use crate::style::{StyleOptions, StyleProps, parse_keyword};
use crate::widget::Child;

use super::config::TemplateConfig;
use super::core::TemplateBox;
use super::shape::{AppTemplate, Template};

/// Collects the initial state of a template container.
///
/// Nothing is validated until [`TemplateBuilder::build`], which either
/// returns a fully reconciled container or the first error found.
pub struct TemplateBuilder<T: Template> {
    slots: Vec<Option<Child>>,
    merge: bool,
    layout: LayoutRecord,
    style: StyleOptions,
    panes: Vec<(Axis, Vec<PaneSize>)>,
    observer: Option<Arc<dyn StateObserver>>,
    config: TemplateConfig,
    _template: PhantomData<T>,
}

impl<T: Template> Default for TemplateBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Template> TemplateBuilder<T> {
    pub fn new() -> Self {
        Self {
            slots: vec![None; T::Slot::ALL.len()],
            merge: true,
            layout: LayoutRecord::new(),
            style: StyleOptions::default(),
            panes: Vec::new(),
            observer: None,
            config: TemplateConfig::default(),
            _template: PhantomData,
        }
    }

    pub fn slot(self, slot: T::Slot, child: impl Into<Child>) -> Self {
        self.maybe_slot(slot, Some(child.into()))
    }

    /// Set or explicitly empty a slot.
    pub fn maybe_slot(mut self, slot: T::Slot, child: Option<Child>) -> Self {
        self.slots[slot.index()] = child;
        self
    }

    pub fn merge(mut self, merge: bool) -> Self {
        self.merge = merge;
        self
    }

    /// Start from an existing descriptor. Style options given to the
    /// builder take precedence over its values; the values it keeps are
    /// validated like builder options.
    pub fn layout(mut self, layout: LayoutRecord) -> Self {
        self.layout = layout;
        self
    }

    pub fn grid_gap(mut self, gap: impl Into<String>) -> Self {
        self.style.grid_gap = Some(gap.into());
        self
    }

    pub fn justify_content(mut self, value: impl Into<String>) -> Self {
        self.style.justify_content = Some(value.into());
        self
    }

    pub fn align_items(mut self, value: impl Into<String>) -> Self {
        self.style.align_items = Some(value.into());
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.style.width = Some(width.into());
        self
    }

    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.style.height = Some(height.into());
        self
    }

    pub fn pane_sizes<I, P>(mut self, axis: Axis, sizes: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PaneSize>,
    {
        self.panes
            .push((axis, sizes.into_iter().map(Into::into).collect()));
        self
    }

    pub fn observer(mut self, observer: Arc<dyn StateObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn config(mut self, config: TemplateConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<TemplateBox<T>> {
        let (template, style) = match self.validate() {
            Ok(parts) => parts,
            Err(err) => {
                if let Some(metrics) = self.config.metrics.as_ref() {
                    if let Ok(mut guard) = metrics.lock() {
                        guard.record_rejected();
                    }
                }
                if let Some(logger) = self.config.logger.as_ref() {
                    let event = event_with_fields(
                        LogLevel::Warn,
                        MUTATION_TARGET,
                        "build_rejected",
                        [
                            json_kv("template", T::NAME),
                            json_kv("error", err.to_string()),
                        ],
                    );
                    let _ = logger.log_event(event);
                }
                return Err(err);
            }
        };

        let mut layout = self.layout;
        style.apply_to(&mut layout);
        let observer: Arc<dyn StateObserver> = match self.observer {
            Some(observer) => observer,
            None => Arc::new(NullObserver),
        };

        Ok(TemplateBox::from_parts(
            template,
            self.slots,
            self.merge,
            style,
            layout,
            observer,
            self.config,
        ))
    }

    /// Validate the options, falling back to the descriptor's own values
    /// for the ones left unset. Descriptor keywords go through the same
    /// parsing as builder options.
    fn validate(&self) -> Result<(T, StyleProps)> {
        let mut style = self.style.validate()?;
        if style.justify_content.is_none() {
            style.justify_content = self
                .layout
                .justify_content()
                .map(parse_keyword)
                .transpose()?;
        }
        if style.align_items.is_none() {
            style.align_items = self.layout.align_items().map(parse_keyword).transpose()?;
        }
        for (value, field) in [
            (&mut style.grid_gap, LayoutField::GridGap),
            (&mut style.width, LayoutField::Width),
            (&mut style.height, LayoutField::Height),
        ] {
            if value.is_none() {
                *value = self.layout.get(field).map(str::to_string);
            }
        }
        let mut template = T::default();
        for (axis, sizes) in &self.panes {
            let tracks = normalize_tracks(*axis, sizes.iter().cloned())?;
            template.set_pane_sizes(*axis, tracks)?;
        }
        Ok((template, style))
    }
}

impl TemplateBuilder<AppTemplate> {
    pub fn pane_widths<I, P>(self, sizes: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PaneSize>,
    {
        self.pane_sizes(Axis::Columns, sizes)
    }

    pub fn pane_heights<I, P>(self, sizes: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PaneSize>,
    {
        self.pane_sizes(Axis::Rows, sizes)
    }
}
