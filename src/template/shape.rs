use std::fmt;

use crate::area::{AppSlot, AreaMap, SlotName, SlotSet, TwoByTwoSlot, app, two_by_two};
use crate::error::{Result, TemplateError};
use crate::sizing::{Axis, PANE_TRACKS, default_tracks};

/// A template shape: its slot set, its area map builder and any sizing
/// hints the builder's tracks refer to.
pub trait Template: fmt::Debug + Default + Send + Sync + 'static {
    type Slot: SlotName;

    /// Name used in logs and state snapshots.
    const NAME: &'static str;

    fn area_map(&self, occupied: SlotSet<Self::Slot>, merge: bool) -> AreaMap<Self::Slot>;

    /// Normalized pane sizes for `axis`; empty for shapes without panes.
    fn pane_sizes(&self, _axis: Axis) -> &[String] {
        &[]
    }

    /// Replace the pane sizes of `axis` with already normalized tracks.
    fn set_pane_sizes(&mut self, _axis: Axis, _tracks: [String; PANE_TRACKS]) -> Result<()> {
        Err(TemplateError::UnsupportedHint {
            template: Self::NAME,
        })
    }
}

/// The 2×2 grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TwoByTwoTemplate;

impl Template for TwoByTwoTemplate {
    type Slot = TwoByTwoSlot;

    const NAME: &'static str = "two_by_two";

    fn area_map(&self, occupied: SlotSet<TwoByTwoSlot>, merge: bool) -> AreaMap<TwoByTwoSlot> {
        two_by_two::build(occupied, merge)
    }
}

/// Header, footer, two sidebars and a center, with per-pane sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppTemplate {
    pane_widths: [String; PANE_TRACKS],
    pane_heights: [String; PANE_TRACKS],
}

impl Default for AppTemplate {
    fn default() -> Self {
        Self {
            pane_widths: default_tracks(Axis::Columns),
            pane_heights: default_tracks(Axis::Rows),
        }
    }
}

impl Template for AppTemplate {
    type Slot = AppSlot;

    const NAME: &'static str = "app";

    fn area_map(&self, occupied: SlotSet<AppSlot>, merge: bool) -> AreaMap<AppSlot> {
        app::build(occupied, merge)
    }

    fn pane_sizes(&self, axis: Axis) -> &[String] {
        match axis {
            Axis::Columns => &self.pane_widths,
            Axis::Rows => &self.pane_heights,
        }
    }

    fn set_pane_sizes(&mut self, axis: Axis, tracks: [String; PANE_TRACKS]) -> Result<()> {
        match axis {
            Axis::Columns => self.pane_widths = tracks,
            Axis::Rows => self.pane_heights = tracks,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_two_has_no_panes() {
        let mut template = TwoByTwoTemplate;
        assert!(template.pane_sizes(Axis::Columns).is_empty());
        let err = template
            .set_pane_sizes(Axis::Rows, default_tracks(Axis::Rows))
            .unwrap_err();
        assert_eq!(
            err,
            TemplateError::UnsupportedHint {
                template: "two_by_two"
            }
        );
    }

    #[test]
    fn app_panes_default_and_replace() {
        let mut template = AppTemplate::default();
        assert_eq!(template.pane_sizes(Axis::Columns), ["1fr", "2fr", "1fr"]);
        assert_eq!(template.pane_sizes(Axis::Rows), ["1fr", "3fr", "1fr"]);

        template
            .set_pane_sizes(
                Axis::Columns,
                ["3fr".to_string(), "3fr".to_string(), "1fr".to_string()],
            )
            .unwrap();
        assert_eq!(template.pane_sizes(Axis::Columns), ["3fr", "3fr", "1fr"]);
        assert_eq!(template.pane_sizes(Axis::Rows), ["1fr", "3fr", "1fr"]);
    }
}
