//! Pass-through style options shared by every template.
//!
//! Options never feed the area map; they are validated, translated (the
//! `align_items` aliases `top`/`bottom`) and written into the layout
//! descriptor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TemplateError};
use crate::registry::{LayoutField, LayoutRecord};

/// A closed set of CSS keywords accepted for one property.
pub trait Keyword: Copy + 'static {
    /// Property name used in error reports.
    const PROPERTY: &'static str;

    const ALL: &'static [Self];

    /// The keyword as the caller writes it.
    fn keyword(self) -> &'static str;

    /// The value written into the layout descriptor.
    fn css_value(self) -> &'static str {
        self.keyword()
    }
}

/// Parse a keyword, ignoring ASCII case.
pub fn parse_keyword<K: Keyword>(value: &str) -> Result<K> {
    let needle = value.trim();
    K::ALL
        .iter()
        .copied()
        .find(|candidate| candidate.keyword().eq_ignore_ascii_case(needle))
        .ok_or_else(|| TemplateError::InvalidKeyword {
            property: K::PROPERTY,
            value: value.to_string(),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    Top,
    Bottom,
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
    Stretch,
}

impl Keyword for AlignItems {
    const PROPERTY: &'static str = "align_items";

    const ALL: &'static [Self] = &[
        AlignItems::Top,
        AlignItems::Bottom,
        AlignItems::FlexStart,
        AlignItems::FlexEnd,
        AlignItems::Center,
        AlignItems::Baseline,
        AlignItems::Stretch,
    ];

    fn keyword(self) -> &'static str {
        match self {
            AlignItems::Top => "top",
            AlignItems::Bottom => "bottom",
            AlignItems::FlexStart => "flex-start",
            AlignItems::FlexEnd => "flex-end",
            AlignItems::Center => "center",
            AlignItems::Baseline => "baseline",
            AlignItems::Stretch => "stretch",
        }
    }

    fn css_value(self) -> &'static str {
        match self {
            AlignItems::Top => "flex-start",
            AlignItems::Bottom => "flex-end",
            other => other.keyword(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
}

impl Keyword for JustifyContent {
    const PROPERTY: &'static str = "justify_content";

    const ALL: &'static [Self] = &[
        JustifyContent::FlexStart,
        JustifyContent::FlexEnd,
        JustifyContent::Center,
        JustifyContent::SpaceBetween,
        JustifyContent::SpaceAround,
    ];

    fn keyword(self) -> &'static str {
        match self {
            JustifyContent::FlexStart => "flex-start",
            JustifyContent::FlexEnd => "flex-end",
            JustifyContent::Center => "center",
            JustifyContent::SpaceBetween => "space-between",
            JustifyContent::SpaceAround => "space-around",
        }
    }
}

macro_rules! keyword_traits {
    ($($ty:ty),*) => {$(
        impl FromStr for $ty {
            type Err = TemplateError;

            fn from_str(value: &str) -> Result<Self> {
                parse_keyword(value)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.keyword())
            }
        }
    )*};
}

keyword_traits!(AlignItems, JustifyContent);

/// Raw, unvalidated style options as handed to a builder.
#[derive(Debug, Clone, Default)]
pub struct StyleOptions {
    pub grid_gap: Option<String>,
    pub justify_content: Option<String>,
    pub align_items: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

impl StyleOptions {
    pub fn validate(&self) -> Result<StyleProps> {
        Ok(StyleProps {
            grid_gap: self.grid_gap.clone(),
            justify_content: self
                .justify_content
                .as_deref()
                .map(parse_keyword)
                .transpose()?,
            align_items: self.align_items.as_deref().map(parse_keyword).transpose()?,
            width: self.width.clone(),
            height: self.height.clone(),
        })
    }
}

/// Validated style options, holding the caller-facing values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleProps {
    pub grid_gap: Option<String>,
    pub justify_content: Option<JustifyContent>,
    pub align_items: Option<AlignItems>,
    pub width: Option<String>,
    pub height: Option<String>,
}

impl StyleProps {
    /// Descriptor value for a pass-through field, aliases translated.
    pub fn translated(&self, field: LayoutField) -> Option<String> {
        match field {
            LayoutField::GridGap => self.grid_gap.clone(),
            LayoutField::JustifyContent => self.justify_content.map(|v| v.css_value().to_string()),
            LayoutField::AlignItems => self.align_items.map(|v| v.css_value().to_string()),
            LayoutField::Width => self.width.clone(),
            LayoutField::Height => self.height.clone(),
            _ => None,
        }
    }

    /// Copy every option that is set into `layout`, leaving the descriptor's
    /// own values in place for the unset ones.
    pub fn apply_to(&self, layout: &mut LayoutRecord) {
        for field in LayoutField::ALL.iter().filter(|field| !field.is_computed()) {
            if let Some(value) = self.translated(*field) {
                layout.set(*field, Some(value));
            }
        }
    }
}
