//! Area map builder for the 2×2 template.
//!
//! Empty cells are merged column by column: a fully empty column borrows
//! the neighbouring column's areas row by row, otherwise the empty cell
//! borrows from the occupied cell above or below it. A single occupant
//! fills the whole grid.

use super::core::{AreaMap, GridTemplate, SlotName, SlotSet, Tracks, placements};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TwoByTwoSlot {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl SlotName for TwoByTwoSlot {
    const ALL: &'static [Self] = &[
        TwoByTwoSlot::TopLeft,
        TwoByTwoSlot::TopRight,
        TwoByTwoSlot::BottomLeft,
        TwoByTwoSlot::BottomRight,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn attr_name(self) -> &'static str {
        match self {
            TwoByTwoSlot::TopLeft => "top_left",
            TwoByTwoSlot::TopRight => "top_right",
            TwoByTwoSlot::BottomLeft => "bottom_left",
            TwoByTwoSlot::BottomRight => "bottom_right",
        }
    }

    fn area_name(self) -> &'static str {
        match self {
            TwoByTwoSlot::TopLeft => "top-left",
            TwoByTwoSlot::TopRight => "top-right",
            TwoByTwoSlot::BottomLeft => "bottom-left",
            TwoByTwoSlot::BottomRight => "bottom-right",
        }
    }
}

const GRID: [[TwoByTwoSlot; 2]; 2] = [
    [TwoByTwoSlot::TopLeft, TwoByTwoSlot::TopRight],
    [TwoByTwoSlot::BottomLeft, TwoByTwoSlot::BottomRight],
];

/// Compute the 2×2 area map for the given occupancy.
pub fn build(occupied: SlotSet<TwoByTwoSlot>, merge: bool) -> AreaMap<TwoByTwoSlot> {
    if occupied.is_empty() {
        return AreaMap::empty();
    }

    let mut cells = GRID.map(|row| row.map(TwoByTwoSlot::area_name));

    if merge {
        if let Some(only) = occupied.single() {
            cells = [[only.area_name(); 2]; 2];
        } else {
            for column in 0..2 {
                let neighbour = 1 - column;
                let top = occupied.contains(GRID[0][column]);
                let bottom = occupied.contains(GRID[1][column]);
                match (top, bottom) {
                    (false, false) => {
                        cells[0][column] = cells[0][neighbour];
                        cells[1][column] = cells[1][neighbour];
                    }
                    (false, true) => cells[0][column] = cells[1][column],
                    (true, false) => cells[1][column] = cells[0][column],
                    (true, true) => {}
                }
            }
        }
    }

    AreaMap {
        template: Some(GridTemplate::new(
            cells.iter().map(|row| row.to_vec()).collect(),
        )),
        placements: placements(&occupied),
        columns: Some(Tracks::Uniform(2)),
        rows: Some(Tracks::Uniform(2)),
    }
}

#[cfg(test)]
mod tests {
    use super::TwoByTwoSlot::*;
    use super::*;

    const CANONICAL: &str = "\"top-left top-right\"\n\"bottom-left bottom-right\"";

    fn css(slots: &[TwoByTwoSlot], merge: bool) -> Option<String> {
        build(slots.iter().copied().collect(), merge).template_css()
    }

    #[test]
    fn all_occupied_keeps_four_areas() {
        let map = build(SlotSet::all(), true);
        assert_eq!(map.template_css().as_deref(), Some(CANONICAL));
        assert_eq!(map.placements.len(), 4);
        assert_eq!(map.area_of(BottomRight), Some("bottom-right"));
    }

    #[test]
    fn three_occupied_borrow_one_cell() {
        assert_eq!(
            css(&[TopLeft, TopRight, BottomRight], true).as_deref(),
            Some("\"top-left top-right\"\n\"top-left bottom-right\"")
        );
        assert_eq!(
            css(&[TopRight, BottomLeft, BottomRight], true).as_deref(),
            Some("\"bottom-left top-right\"\n\"bottom-left bottom-right\"")
        );
        assert_eq!(
            css(&[TopLeft, BottomLeft, BottomRight], true).as_deref(),
            Some("\"top-left bottom-right\"\n\"bottom-left bottom-right\"")
        );
        assert_eq!(
            css(&[TopLeft, TopRight, BottomLeft], true).as_deref(),
            Some("\"top-left top-right\"\n\"bottom-left top-right\"")
        );
    }

    #[test]
    fn empty_column_borrows_from_neighbour_row() {
        assert_eq!(
            css(&[TopRight, BottomRight], true).as_deref(),
            Some("\"top-right top-right\"\n\"bottom-right bottom-right\"")
        );
        assert_eq!(
            css(&[TopLeft, BottomLeft], true).as_deref(),
            Some("\"top-left top-left\"\n\"bottom-left bottom-left\"")
        );
    }

    #[test]
    fn diagonal_pair_spans_columns() {
        assert_eq!(
            css(&[TopLeft, BottomRight], true).as_deref(),
            Some("\"top-left bottom-right\"\n\"top-left bottom-right\"")
        );
    }

    #[test]
    fn every_occupancy_matches_table() {
        const TL: &str = "top-left";
        const TR: &str = "top-right";
        const BL: &str = "bottom-left";
        const BR: &str = "bottom-right";
        // Indexed by mask: bit 0 top_left, 1 top_right, 2 bottom_left, 3 bottom_right.
        let expected: [Option<[[&str; 2]; 2]>; 16] = [
            None,
            Some([[TL, TL], [TL, TL]]),
            Some([[TR, TR], [TR, TR]]),
            Some([[TL, TR], [TL, TR]]),
            Some([[BL, BL], [BL, BL]]),
            Some([[TL, TL], [BL, BL]]),
            Some([[BL, TR], [BL, TR]]),
            Some([[TL, TR], [BL, TR]]),
            Some([[BR, BR], [BR, BR]]),
            Some([[TL, BR], [TL, BR]]),
            Some([[TR, TR], [BR, BR]]),
            Some([[TL, TR], [TL, BR]]),
            Some([[BL, BR], [BL, BR]]),
            Some([[TL, BR], [BL, BR]]),
            Some([[BL, TR], [BL, BR]]),
            Some([[TL, TR], [BL, BR]]),
        ];

        for (mask, cells) in expected.into_iter().enumerate() {
            let occupied: SlotSet<TwoByTwoSlot> = TwoByTwoSlot::ALL
                .iter()
                .copied()
                .filter(|slot| mask & (1 << slot.index()) != 0)
                .collect();
            let map = build(occupied, true);
            let want = cells.map(|rows| GridTemplate::new(rows.map(|row| row.to_vec()).to_vec()));

            assert_eq!(map.template, want, "mask {mask:04b}");
            assert_eq!(map.placements.len(), occupied.len(), "mask {mask:04b}");
            for slot in occupied.iter() {
                let name = slot.area_name();
                let present = map
                    .template
                    .as_ref()
                    .is_some_and(|template| template.rows().iter().flatten().any(|area| *area == name));
                assert!(present, "mask {mask:04b}: {name} missing");
                assert_eq!(map.area_of(slot), Some(name));
            }
        }
    }

    #[test]
    fn single_occupant_fills_grid() {
        let map = build([TopRight].into_iter().collect(), true);
        assert_eq!(
            map.template_css().as_deref(),
            Some("\"top-right top-right\"\n\"top-right top-right\"")
        );
        assert_eq!(map.placements.len(), 1);
        assert_eq!(map.area_of(TopRight), Some("top-right"));
    }

    #[test]
    fn empty_grid_has_no_template() {
        let map = build(SlotSet::empty(), true);
        assert_eq!(map, AreaMap::empty());
        assert!(build(SlotSet::empty(), false).template.is_none());
    }

    #[test]
    fn unmerged_grid_is_canonical() {
        let map = build([TopRight].into_iter().collect(), false);
        assert_eq!(map.template_css().as_deref(), Some(CANONICAL));
        assert_eq!(map.visible_slots().collect::<Vec<_>>(), vec![TopRight]);
        assert_eq!(map.columns, Some(Tracks::Uniform(2)));
    }

    #[test]
    fn placements_follow_slot_order() {
        let map = build([BottomRight, TopLeft, BottomLeft].into_iter().collect(), true);
        assert_eq!(
            map.visible_slots().collect::<Vec<_>>(),
            vec![TopLeft, BottomLeft, BottomRight]
        );
    }
}
