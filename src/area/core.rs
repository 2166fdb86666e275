use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// A fixed, named position of a template.
///
/// Every template shape enumerates its slots once; the index is dense
/// (`0..ALL.len()`) so slot storage can be a plain array.
pub trait SlotName: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// All slots in their stable child order.
    const ALL: &'static [Self];

    /// Dense index of the slot within [`Self::ALL`].
    fn index(self) -> usize;

    /// Attribute name used by callers (`top_left`).
    fn attr_name(self) -> &'static str;

    /// Grid area name used in templates and child placement (`top-left`).
    fn area_name(self) -> &'static str;
}

/// Set of occupied slots for one template shape.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotSet<S> {
    bits: u8,
    _slot: PhantomData<S>,
}

impl<S: SlotName> SlotSet<S> {
    pub fn empty() -> Self {
        Self {
            bits: 0,
            _slot: PhantomData,
        }
    }

    pub fn all() -> Self {
        S::ALL.iter().copied().collect()
    }

    pub fn insert(&mut self, slot: S) {
        self.bits |= 1 << slot.index();
    }

    pub fn contains(&self, slot: S) -> bool {
        self.bits & (1 << slot.index()) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// The only member, when the set holds exactly one slot.
    pub fn single(&self) -> Option<S> {
        if self.len() == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    /// Members in the shape's stable slot order.
    pub fn iter(&self) -> impl Iterator<Item = S> + '_ {
        S::ALL.iter().copied().filter(|slot| self.contains(*slot))
    }
}

impl<S: SlotName> FromIterator<S> for SlotSet<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::empty();
        for slot in iter {
            set.insert(slot);
        }
        set
    }
}

impl<S: SlotName> fmt::Debug for SlotSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Rows of area names describing which area occupies which cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridTemplate {
    rows: Vec<Vec<&'static str>>,
}

impl GridTemplate {
    pub fn new(rows: Vec<Vec<&'static str>>) -> Self {
        Self { rows }
    }

    /// A `rows` × `columns` grid where every cell is `area`.
    pub fn filled(area: &'static str, rows: usize, columns: usize) -> Self {
        Self::new(vec![vec![area; columns]; rows])
    }

    pub fn rows(&self) -> &[Vec<&'static str>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Render as the `grid-template-areas` value: one quoted row per line.
    pub fn to_css(&self) -> String {
        self.rows
            .iter()
            .map(|row| format!("\"{}\"", row.join(" ")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for GridTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Track sizes along one axis of a computed template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tracks {
    /// `n` equal `1fr` tracks.
    Uniform(usize),
    /// A selection of the container's pane sizes, by index, in order.
    Panes(Vec<usize>),
}

impl Tracks {
    /// All panes of a three-pane axis.
    pub fn all_panes() -> Self {
        Self::Panes(vec![0, 1, 2])
    }

    pub fn len(&self) -> usize {
        match self {
            Tracks::Uniform(count) => *count,
            Tracks::Panes(indices) => indices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve into a `grid-template-columns`/`rows` value.
    pub fn to_css(&self, panes: &[String]) -> String {
        match self {
            Tracks::Uniform(count) => vec!["1fr"; *count].join(" "),
            Tracks::Panes(indices) => indices
                .iter()
                .filter_map(|index| panes.get(*index).map(String::as_str))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Area tag of one visible slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement<S> {
    pub slot: S,
    pub area: &'static str,
}

/// Output of an area map builder run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaMap<S> {
    /// `None` when no slot is occupied.
    pub template: Option<GridTemplate>,
    /// Occupied slots in stable order, each with its area name.
    pub placements: Vec<Placement<S>>,
    pub columns: Option<Tracks>,
    pub rows: Option<Tracks>,
}

impl<S: SlotName> AreaMap<S> {
    /// The map of a template with no occupied slot.
    pub fn empty() -> Self {
        Self {
            template: None,
            placements: Vec::new(),
            columns: None,
            rows: None,
        }
    }

    pub fn area_of(&self, slot: S) -> Option<&'static str> {
        self.placements
            .iter()
            .find(|placement| placement.slot == slot)
            .map(|placement| placement.area)
    }

    pub fn visible_slots(&self) -> impl Iterator<Item = S> + '_ {
        self.placements.iter().map(|placement| placement.slot)
    }

    pub fn template_css(&self) -> Option<String> {
        self.template.as_ref().map(GridTemplate::to_css)
    }
}

/// Each occupied slot tagged with its own area name.
pub(crate) fn placements<S: SlotName>(occupied: &SlotSet<S>) -> Vec<Placement<S>> {
    occupied
        .iter()
        .map(|slot| Placement {
            slot,
            area: slot.area_name(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_renders_quoted_rows() {
        let template = GridTemplate::new(vec![vec!["a", "b"], vec!["c", "d"]]);
        assert_eq!(template.to_css(), "\"a b\"\n\"c d\"");
        assert_eq!(template.row_count(), 2);
        assert_eq!(template.column_count(), 2);
    }

    #[test]
    fn filled_template_repeats_area() {
        let template = GridTemplate::filled("center", 3, 3);
        assert_eq!(
            template.to_string(),
            "\"center center center\"\n\"center center center\"\n\"center center center\""
        );
    }

    #[test]
    fn tracks_resolve_against_panes() {
        let panes = ["1fr".to_string(), "2fr".to_string(), "100px".to_string()];
        assert_eq!(Tracks::Uniform(2).to_css(&panes), "1fr 1fr");
        assert_eq!(Tracks::Panes(vec![0, 2]).to_css(&panes), "1fr 100px");
        assert_eq!(Tracks::all_panes().to_css(&panes), "1fr 2fr 100px");
        assert_eq!(Tracks::Panes(vec![0, 7]).to_css(&panes), "1fr");
    }
}
