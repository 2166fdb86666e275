//! Pane sizing hints and their CSS normalization.
//!
//! A pane size is either a number (a fraction, rendered as `"<n>fr"`) or a
//! string. Strings that already carry a recognized CSS unit pass through
//! untouched, bare numeric strings gain an `fr` suffix, everything else is
//! rejected.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TemplateError};

/// Number of tracks along each axis of a three-pane template.
pub const PANE_TRACKS: usize = 3;

/// Default column sizes of the app template.
pub const DEFAULT_PANE_WIDTHS: [&str; PANE_TRACKS] = ["1fr", "2fr", "1fr"];

/// Default row sizes of the app template.
pub const DEFAULT_PANE_HEIGHTS: [&str; PANE_TRACKS] = ["1fr", "3fr", "1fr"];

/// Unit suffixes accepted verbatim. `rem` precedes `em` so the longer suffix
/// wins when both match.
pub const CSS_UNITS: &[&str] = &["px", "fr", "%", "rem", "em", "vw", "vh"];

/// Grid axis a list of pane sizes applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Columns,
    Rows,
}

impl Axis {
    /// Name of the container property holding this axis' hints.
    pub fn property(self) -> &'static str {
        match self {
            Axis::Columns => "pane_widths",
            Axis::Rows => "pane_heights",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.property())
    }
}

/// A single pane sizing hint as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaneSize {
    Number(f64),
    Text(String),
}

impl From<f64> for PaneSize {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for PaneSize {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for PaneSize {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for PaneSize {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u16> for PaneSize {
    fn from(value: u16) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for PaneSize {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PaneSize {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for PaneSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaneSize::Number(value) => write!(f, "{value}"),
            PaneSize::Text(text) => f.write_str(text),
        }
    }
}

/// Translate one pane size into a CSS track size.
pub fn size_to_css(size: &PaneSize) -> Result<String> {
    match size {
        // `-0.0` compares equal to zero; `+ 0.0` drops its sign.
        PaneSize::Number(value) if value.is_finite() && *value >= 0.0 => {
            Ok(format!("{}fr", *value + 0.0))
        }
        PaneSize::Number(_) => Err(invalid(size)),
        PaneSize::Text(text) => {
            let text = text.trim();
            let has_unit = CSS_UNITS
                .iter()
                .find_map(|unit| text.strip_suffix(unit))
                .is_some_and(is_plain_number);
            if has_unit {
                Ok(text.to_string())
            } else if is_plain_number(text) {
                Ok(format!("{text}fr"))
            } else {
                Err(invalid(size))
            }
        }
    }
}

/// Validate and normalize a full set of pane sizes for one axis.
///
/// The count is checked before any entry, and nothing is returned unless
/// every entry is valid.
pub fn normalize_tracks<I, P>(axis: Axis, sizes: I) -> Result<[String; PANE_TRACKS]>
where
    I: IntoIterator<Item = P>,
    P: Into<PaneSize>,
{
    let sizes: Vec<PaneSize> = sizes.into_iter().map(Into::into).collect();
    if sizes.len() != PANE_TRACKS {
        return Err(TemplateError::TrackCount {
            axis,
            expected: PANE_TRACKS,
            found: sizes.len(),
        });
    }

    let mut tracks: [String; PANE_TRACKS] = Default::default();
    for (slot, size) in tracks.iter_mut().zip(&sizes) {
        *slot = size_to_css(size)?;
    }
    Ok(tracks)
}

/// Default tracks for an axis of the app template.
pub fn default_tracks(axis: Axis) -> [String; PANE_TRACKS] {
    let source = match axis {
        Axis::Columns => DEFAULT_PANE_WIDTHS,
        Axis::Rows => DEFAULT_PANE_HEIGHTS,
    };
    source.map(str::to_string)
}

fn is_plain_number(text: &str) -> bool {
    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    match text.split_once('.') {
        Some((whole, fraction)) => !whole.is_empty() && digits(whole) && digits(fraction),
        None => !text.is_empty() && digits(text),
    }
}

fn invalid(size: &PaneSize) -> TemplateError {
    TemplateError::InvalidSize {
        value: size.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn css(size: impl Into<PaneSize>) -> Result<String> {
        size_to_css(&size.into())
    }

    #[test]
    fn units_pass_through() {
        assert_eq!(css("100px").unwrap(), "100px");
        assert_eq!(css("1fr").unwrap(), "1fr");
        assert_eq!(css("2.5fr").unwrap(), "2.5fr");
        assert_eq!(css("30%").unwrap(), "30%");
        assert_eq!(css("1.5rem").unwrap(), "1.5rem");
        assert_eq!(css("2em").unwrap(), "2em");
    }

    #[test]
    fn bare_numbers_become_fractions() {
        assert_eq!(css(20).unwrap(), "20fr");
        assert_eq!(css("2.5").unwrap(), "2.5fr");
        assert_eq!(css(2.5).unwrap(), "2.5fr");
        assert_eq!(css(0).unwrap(), "0fr");
        assert_eq!(css(-0.0).unwrap(), "0fr");
    }

    #[test]
    fn trailing_dot_is_a_whole_number() {
        assert_eq!(css("1.").unwrap(), "1.fr");
        assert_eq!(css("1.fr").unwrap(), "1.fr");
        assert_eq!(css("12.px").unwrap(), "12.px");
        assert!(css(".5").is_err());
        assert!(css(".").is_err());
    }

    #[test]
    fn malformed_sizes_are_rejected() {
        for bad in ["1fx", "", "px", "-1px", "auto", "1.2.3fr", "fr1"] {
            let err = css(bad).unwrap_err();
            assert!(matches!(err, TemplateError::InvalidSize { .. }), "{bad}");
        }
        assert!(css(-1).is_err());
        assert!(css(f64::NAN).is_err());
        assert!(css(f64::INFINITY).is_err());
    }

    #[test]
    fn track_count_is_checked_first() {
        let err = normalize_tracks(Axis::Columns, ["1fx", "1fx", "1fx", "1fx"]).unwrap_err();
        assert_eq!(
            err,
            TemplateError::TrackCount {
                axis: Axis::Columns,
                expected: 3,
                found: 4
            }
        );

        let err = normalize_tracks(Axis::Rows, ["1fx", "1fx"]).unwrap_err();
        assert!(matches!(err, TemplateError::TrackCount { found: 2, .. }));
    }

    #[test]
    fn mixed_tracks_normalize() {
        let tracks = normalize_tracks(
            Axis::Rows,
            vec![PaneSize::from("3fr"), "100px".into(), 20.into()],
        )
        .unwrap();
        assert_eq!(tracks, ["3fr", "100px", "20fr"]);
        assert_eq!(normalize_tracks(Axis::Columns, [3, 3, 1]).unwrap(), ["3fr", "3fr", "1fr"]);
    }

    #[test]
    fn defaults_match_app_template() {
        assert_eq!(default_tracks(Axis::Columns), ["1fr", "2fr", "1fr"]);
        assert_eq!(default_tracks(Axis::Rows), ["1fr", "3fr", "1fr"]);
    }
}
