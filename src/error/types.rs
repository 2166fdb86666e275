use thiserror::Error;

use crate::sizing::Axis;

/// Unified result type for the template crate.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Errors surfaced while validating template inputs.
///
/// All of them are raised before any state is touched, so a rejected call
/// leaves the container exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error(
        "invalid pane size `{value}`: expected a CSS length such as `10px`, `10fr` or `10%`, or a bare number (converted to `10fr`)"
    )]
    InvalidSize { value: String },
    #[error("expected {expected} pane sizes for {axis}, got {found}")]
    TrackCount {
        axis: Axis,
        expected: usize,
        found: usize,
    },
    #[error("invalid {property} value `{value}`")]
    InvalidKeyword {
        property: &'static str,
        value: String,
    },
    #[error("template `{template}` has no pane sizing hints")]
    UnsupportedHint { template: &'static str },
}
