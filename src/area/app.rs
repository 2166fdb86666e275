//! Area map builder for the five-region app template.
//!
//! The canonical grid is three rows by three columns: the header and footer
//! span the full width, the middle row holds the sidebars around the
//! center. With merging enabled, absent rows are dropped, an absent center
//! drops its column and absent sidebars are covered by their neighbour.

use super::core::{AreaMap, GridTemplate, SlotName, SlotSet, Tracks, placements};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppSlot {
    Header,
    LeftSidebar,
    Center,
    RightSidebar,
    Footer,
}

impl SlotName for AppSlot {
    const ALL: &'static [Self] = &[
        AppSlot::Header,
        AppSlot::LeftSidebar,
        AppSlot::Center,
        AppSlot::RightSidebar,
        AppSlot::Footer,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn attr_name(self) -> &'static str {
        match self {
            AppSlot::Header => "header",
            AppSlot::LeftSidebar => "left_sidebar",
            AppSlot::Center => "center",
            AppSlot::RightSidebar => "right_sidebar",
            AppSlot::Footer => "footer",
        }
    }

    fn area_name(self) -> &'static str {
        match self {
            AppSlot::Header => "header",
            AppSlot::LeftSidebar => "left-sidebar",
            AppSlot::Center => "center",
            AppSlot::RightSidebar => "right-sidebar",
            AppSlot::Footer => "footer",
        }
    }
}

const MIDDLE: [AppSlot; 3] = [AppSlot::LeftSidebar, AppSlot::Center, AppSlot::RightSidebar];

const HEADER_ROW: usize = 0;
const MIDDLE_ROW: usize = 1;
const FOOTER_ROW: usize = 2;

/// Compute the app area map for the given occupancy.
pub fn build(occupied: SlotSet<AppSlot>, merge: bool) -> AreaMap<AppSlot> {
    if occupied.is_empty() {
        return AreaMap::empty();
    }

    let placements = placements(&occupied);

    if !merge {
        let middle = MIDDLE.map(AppSlot::area_name).to_vec();
        let (template, rows) = stack_rows(&occupied, Some(middle));
        return AreaMap {
            template: Some(template),
            placements,
            columns: Some(Tracks::all_panes()),
            rows: Some(Tracks::Panes(rows)),
        };
    }

    if let Some(only) = occupied.single() {
        return AreaMap {
            template: Some(GridTemplate::filled(only.area_name(), 3, 3)),
            placements,
            columns: Some(Tracks::all_panes()),
            rows: Some(Tracks::all_panes()),
        };
    }

    if !MIDDLE.iter().any(|slot| occupied.contains(*slot)) {
        // Header and footer alone: one column, uniform rows.
        let (template, rows) = stack_rows(&occupied, None);
        return AreaMap {
            template: Some(template),
            placements,
            columns: Some(Tracks::Uniform(1)),
            rows: Some(Tracks::Uniform(rows.len())),
        };
    }

    let mut middle = MIDDLE.map(AppSlot::area_name).to_vec();
    let mut columns = vec![0, 1, 2];

    if !occupied.contains(AppSlot::Center) {
        middle.remove(1);
        columns.remove(1);
    }
    if !occupied.contains(AppSlot::LeftSidebar) {
        middle[0] = middle[1];
    }
    if !occupied.contains(AppSlot::RightSidebar) {
        let last = middle.len() - 1;
        middle[last] = middle[last - 1];
    }

    let (template, rows) = stack_rows(&occupied, Some(middle));
    AreaMap {
        template: Some(template),
        placements,
        columns: Some(Tracks::Panes(columns)),
        rows: Some(Tracks::Panes(rows)),
    }
}

/// Stack the header row (if occupied), the middle row (if given) and the
/// footer row (if occupied), matching the middle row's width. Returns the
/// template and the indices of the kept rows.
fn stack_rows(
    occupied: &SlotSet<AppSlot>,
    middle: Option<Vec<&'static str>>,
) -> (GridTemplate, Vec<usize>) {
    let width = middle.as_ref().map(Vec::len).unwrap_or(1);
    let mut rows = Vec::with_capacity(3);
    let mut kept = Vec::with_capacity(3);

    if occupied.contains(AppSlot::Header) {
        rows.push(vec![AppSlot::Header.area_name(); width]);
        kept.push(HEADER_ROW);
    }
    if let Some(middle) = middle {
        rows.push(middle);
        kept.push(MIDDLE_ROW);
    }
    if occupied.contains(AppSlot::Footer) {
        rows.push(vec![AppSlot::Footer.area_name(); width]);
        kept.push(FOOTER_ROW);
    }

    (GridTemplate::new(rows), kept)
}

#[cfg(test)]
mod tests {
    use super::AppSlot::*;
    use super::*;

    fn map(slots: &[AppSlot]) -> AreaMap<AppSlot> {
        build(slots.iter().copied().collect(), true)
    }

    fn css(slots: &[AppSlot]) -> String {
        map(slots).template_css().unwrap_or_default()
    }

    #[test]
    fn full_layout_is_canonical() {
        let map = map(AppSlot::ALL);
        assert_eq!(
            map.template_css().as_deref(),
            Some(
                "\"header header header\"\n\"left-sidebar center right-sidebar\"\n\"footer footer footer\""
            )
        );
        assert_eq!(map.placements.len(), 5);
        assert_eq!(map.columns, Some(Tracks::all_panes()));
        assert_eq!(map.rows, Some(Tracks::all_panes()));
    }

    #[test]
    fn single_occupant_fills_grid() {
        assert_eq!(
            css(&[Center]),
            "\"center center center\"\n\"center center center\"\n\"center center center\""
        );
        assert_eq!(
            css(&[LeftSidebar]),
            "\"left-sidebar left-sidebar left-sidebar\"\n\"left-sidebar left-sidebar left-sidebar\"\n\"left-sidebar left-sidebar left-sidebar\""
        );
        assert_eq!(map(&[Footer]).rows, Some(Tracks::all_panes()));
    }

    #[test]
    fn missing_sidebar_is_covered_by_center() {
        let merged = map(&[Header, Footer, LeftSidebar, Center]);
        assert_eq!(
            merged.template_css().unwrap(),
            "\"header header header\"\n\"left-sidebar center center\"\n\"footer footer footer\""
        );
        assert_eq!(merged.placements.len(), 4);

        assert_eq!(
            css(&[Header, Footer, RightSidebar, Center]),
            "\"header header header\"\n\"center center right-sidebar\"\n\"footer footer footer\""
        );
        assert_eq!(
            css(&[Header, Footer, Center]),
            "\"header header header\"\n\"center center center\"\n\"footer footer footer\""
        );
    }

    #[test]
    fn missing_center_drops_its_column() {
        let merged = map(&[Header, Footer, LeftSidebar, RightSidebar]);
        assert_eq!(
            merged.template_css().unwrap(),
            "\"header header\"\n\"left-sidebar right-sidebar\"\n\"footer footer\""
        );
        assert_eq!(merged.columns, Some(Tracks::Panes(vec![0, 2])));

        assert_eq!(
            css(&[Header, Footer, RightSidebar]),
            "\"header header\"\n\"right-sidebar right-sidebar\"\n\"footer footer\""
        );
    }

    #[test]
    fn empty_middle_row_is_removed() {
        let merged = map(&[Header, Footer]);
        assert_eq!(merged.template_css().unwrap(), "\"header\"\n\"footer\"");
        assert_eq!(merged.columns, Some(Tracks::Uniform(1)));
        assert_eq!(merged.rows, Some(Tracks::Uniform(2)));
    }

    #[test]
    fn missing_header_or_footer_drops_row() {
        let no_header = map(&[Footer, Center, LeftSidebar, RightSidebar]);
        assert_eq!(
            no_header.template_css().unwrap(),
            "\"left-sidebar center right-sidebar\"\n\"footer footer footer\""
        );
        assert_eq!(no_header.rows, Some(Tracks::Panes(vec![1, 2])));

        let no_footer = map(&[Header, Center, LeftSidebar, RightSidebar]);
        assert_eq!(
            no_footer.template_css().unwrap(),
            "\"header header header\"\n\"left-sidebar center right-sidebar\""
        );
        assert_eq!(no_footer.rows, Some(Tracks::Panes(vec![0, 1])));

        assert_eq!(
            css(&[Center, LeftSidebar, RightSidebar]),
            "\"left-sidebar center right-sidebar\""
        );
    }

    #[test]
    fn unmerged_keeps_full_middle_row() {
        let unmerged = build([Header, Footer, Center].into_iter().collect(), false);
        assert_eq!(
            unmerged.template_css().unwrap(),
            "\"header header header\"\n\"left-sidebar center right-sidebar\"\n\"footer footer footer\""
        );
        assert_eq!(unmerged.placements.len(), 3);

        let only_center = build([Center].into_iter().collect(), false);
        assert_eq!(
            only_center.template_css().unwrap(),
            "\"left-sidebar center right-sidebar\""
        );
        assert_eq!(only_center.rows, Some(Tracks::Panes(vec![1])));
        assert_eq!(only_center.columns, Some(Tracks::all_panes()));
    }

    #[test]
    fn empty_layout_has_no_template() {
        assert_eq!(build(SlotSet::empty(), true), AreaMap::empty());
        assert_eq!(build(SlotSet::empty(), false), AreaMap::empty());
    }

    #[test]
    fn placements_use_reading_order() {
        let merged = map(&[Footer, Center, Header]);
        assert_eq!(
            merged.visible_slots().collect::<Vec<_>>(),
            vec![Header, Center, Footer]
        );
    }
}
