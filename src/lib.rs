//! Grid layout templates.
//!
//! Fixed arrangements of child widgets (a 2×2 grid and an application
//! layout with header, footer, sidebars and center) that derive CSS-grid
//! area strings and track sizes from which slots are occupied. Empty areas
//! are merged into their neighbours, and every change to the derived
//! layout is reported field by field to a [`StateObserver`].

pub mod area;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod observer;
pub mod registry;
pub mod sizing;
pub mod style;
pub mod template;
pub mod widget;

pub use area::{AppSlot, AreaMap, GridTemplate, Placement, SlotName, SlotSet, Tracks, TwoByTwoSlot};
pub use error::{Result, TemplateError};
pub use logging::{LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult};
pub use metrics::{MetricSnapshot, TemplateMetrics};
pub use observer::{NullObserver, RecordingObserver, StateChange, StateField, StateObserver};
pub use registry::{LayoutField, LayoutRecord};
pub use sizing::{Axis, PaneSize, normalize_tracks, size_to_css};
pub use style::{AlignItems, JustifyContent, Keyword, StyleOptions, StyleProps};
pub use template::{
    AppLayout, AppTemplate, Template, TemplateBox, TemplateBuilder, TemplateConfig,
    TemplateState, TwoByTwoLayout, TwoByTwoTemplate,
};
pub use widget::{Child, Displayable, WidgetHandle};
