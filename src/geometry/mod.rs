use std::fmt;


/// Grid coordinate - (row, column), row grows downwards
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shift by a signed offset
    /// Returns None if the result would fall left of or above the grid origin
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}


/// Movement model used when expanding a cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Directions {
    /// up, down, left, right
    #[default]
    Four,
    /// the four cardinals followed by up-left, up-right, down-left, down-right
    Eight,
}

const CARDINAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const ALL: [(isize, isize); 8] = [
    (-1, 0), (1, 0), (0, -1), (0, 1),
    (-1, -1), (-1, 1), (1, -1), (1, 1),
];

impl Directions {

    /// (d_row, d_col) offsets in expansion order
    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Directions::Four => &CARDINAL,
            Directions::Eight => &ALL,
        }
    }
}


/// Manhattan distance
pub fn manhattan_distance(a: Coord, b: Coord) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

/// Chebyshev distance - the step count with diagonal moves allowed
pub fn chebyshev_distance(a: Coord, b: Coord) -> usize {
    a.row.abs_diff(b.row).max(a.col.abs_diff(b.col))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_stops_at_origin() {
        let c = Coord::new(0, 3);
        assert_eq!(c.offset(-1, 0), None);
        assert_eq!(c.offset(1, -3), Some(Coord::new(1, 0)));
        assert_eq!(c.offset(0, -4), None);
    }

    #[test]
    fn test_direction_order() {
        // up, down, left, right first regardless of movement model
        assert_eq!(Directions::Four.offsets(), &Directions::Eight.offsets()[..4]);
        assert_eq!(Directions::Four.offsets()[0], (-1, 0));
        assert_eq!(Directions::Eight.offsets().len(), 8);
    }

    #[test]
    fn test_distances() {
        let a = Coord::new(1, 5);
        let b = Coord::new(4, 1);
        assert_eq!(manhattan_distance(a, b), 7);
        assert_eq!(manhattan_distance(b, a), 7);
        assert_eq!(chebyshev_distance(a, b), 4);
        assert_eq!(manhattan_distance(a, a), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::from((2, 7)).to_string(), "(2, 7)");
    }
}
