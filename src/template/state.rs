use std::collections::BTreeMap;

use serde::Serialize;

use crate::style::StyleProps;

/// Serializable snapshot of a container, suitable for handing to the
/// rendering side in one piece.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateState {
    pub template: &'static str,
    pub merge: bool,
    /// Slot attribute name to the id of its child.
    pub slots: BTreeMap<&'static str, Option<String>>,
    /// Visible children in slot order.
    pub children: Vec<String>,
    /// Grid area of every visible slot.
    pub areas: BTreeMap<&'static str, &'static str>,
    pub layout: BTreeMap<&'static str, Option<String>>,
    pub style: StyleProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pane_widths: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pane_heights: Option<Vec<String>>,
}

impl TemplateState {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
