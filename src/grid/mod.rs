use crate::errors::{Endpoint, RejectReason, SearchError};
use crate::geometry::{Coord, Directions};

use std::{fmt::Debug, str::FromStr};
use num_traits::{Bounded, CheckedAdd, NumCast, One, Zero};


/// Numeric type usable as a per-cell traversal cost
/// Blanket implemented for the primitive integers
pub trait Cost: Zero + One + Bounded + CheckedAdd + NumCast + Ord + Copy + Debug {}

impl<T> Cost for T where T: Zero + One + Bounded + CheckedAdd + NumCast + Ord + Copy + Debug {}


/// Rectangular cost surface
/// Every cell holds the cost of entering it, or the blocked sentinel
/// The grid is never empty and never ragged
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<C = u32> {
    rows: usize,
    cols: usize,
    cells: Vec<C>, // row-major
    blocked: C,
}

impl<C: Cost> Grid<C> {

    /// Grid where every cell costs 1, blocked sentinel is `C::max_value()`
    pub fn new(rows: usize, cols: usize) -> Result<Self, SearchError> {
        Self::filled(rows, cols, C::one())
    }

    /// Grid where every cell has the same cost
    pub fn filled(rows: usize, cols: usize, cost: C) -> Result<Self, SearchError> {
        if rows == 0 || cols == 0 {
            return Err(SearchError::InvalidGrid(format!("grid must not be empty, got {rows}x{cols}")));
        }
        let blocked = C::max_value();
        check_cost(cost, blocked)?;
        let len = cell_count(rows, cols)?;
        Ok(Self { rows, cols, cells: vec![cost; len], blocked })
    }

    /// Build from nested rows, `C::max_value()` marks blocked cells
    pub fn from_rows(rows: Vec<Vec<C>>) -> Result<Self, SearchError> {
        Self::from_rows_with_sentinel(rows, C::max_value())
    }

    /// Build from nested rows using a custom blocked sentinel
    pub fn from_rows_with_sentinel(rows: Vec<Vec<C>>, blocked: C) -> Result<Self, SearchError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(SearchError::InvalidGrid("grid must not be empty".to_string()));
        }

        let n_rows = rows.len();
        let mut cells = Vec::with_capacity(cell_count(n_rows, cols)?);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(SearchError::InvalidGrid(format!(
                    "row {r} has {} columns, expected {cols}", row.len()
                )));
            }
            for &cost in &row {
                check_cost(cost, blocked)?;
            }
            cells.extend(row);
        }

        Ok(Self { rows: n_rows, cols, cells, blocked })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value meaning "impassable"
    pub fn blocked_sentinel(&self) -> C {
        self.blocked
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Cost of entering `coord`
    /// None when out of bounds or blocked
    pub fn cost(&self, coord: Coord) -> Option<C> {
        let cost = *self.cells.get(self.index(coord)?)?;
        (cost != self.blocked).then_some(cost)
    }

    pub fn is_traversable(&self, coord: Coord) -> bool {
        self.cost(coord).is_some()
    }

    pub fn is_blocked(&self, coord: Coord) -> bool {
        self.in_bounds(coord) && !self.is_traversable(coord)
    }

    /// Set the cost of entering a cell
    /// Passing the blocked sentinel blocks it
    pub fn set(&mut self, coord: Coord, cost: C) -> Result<(), SearchError> {
        check_cost(cost, self.blocked)?;
        let index = self.index(coord)
            .ok_or_else(|| SearchError::InvalidGrid(format!("{coord} is outside a {}x{} grid", self.rows, self.cols)))?;
        self.cells[index] = cost;
        Ok(())
    }

    /// Mark a cell impassable
    pub fn block(&mut self, coord: Coord) -> Result<(), SearchError> {
        self.set(coord, self.blocked)
    }

    /// Traversable neighbors of `coord` together with the cost of entering them
    /// Order follows `directions.offsets()`
    pub fn neighbors(&self, coord: Coord, directions: Directions) -> impl Iterator<Item = (Coord, C)> + '_ {
        directions.offsets().iter().filter_map(move |&(d_row, d_col)| {
            let next = coord.offset(d_row, d_col)?;
            Some((next, self.cost(next)?))
        })
    }

    /// Sum of entry costs of every cell after the first
    /// None if any cell is not traversable or the sum overflows
    pub fn path_cost(&self, path: &[Coord]) -> Option<C> {
        path.iter().skip(1).try_fold(C::zero(), |total, &coord| total.checked_add(&self.cost(coord)?))
    }

    /// Reject out of bounds or blocked endpoints
    pub(crate) fn check_endpoint(&self, coord: Coord, role: Endpoint) -> Result<(), SearchError> {
        let reason = if !self.in_bounds(coord) {
            RejectReason::OutOfBounds
        } else if !self.is_traversable(coord) {
            RejectReason::Blocked
        } else {
            return Ok(());
        };
        Err(SearchError::InvalidRequest { role, coord, reason })
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord).then(|| coord.row * self.cols + coord.col)
    }
}


fn cell_count(rows: usize, cols: usize) -> Result<usize, SearchError> {
    rows.checked_mul(cols)
        .ok_or_else(|| SearchError::InvalidGrid(format!("{rows}x{cols} cells do not fit in memory")))
}

fn check_cost<C: Cost>(cost: C, blocked: C) -> Result<(), SearchError> {
    if cost != blocked && cost < C::zero() {
        return Err(SearchError::InvalidGrid(format!("negative cell cost {cost:?}")));
    }
    Ok(())
}


/// Text map, one row per line
/// `.` costs 1, `#` is blocked, a digit is its own cost
/// Surrounding blank lines and indentation are ignored
impl FromStr for Grid<u32> {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(parse_cell).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}

fn parse_cell(symbol: char) -> Result<u32, SearchError> {
    match symbol {
        '.' => Ok(1),
        '#' => Ok(u32::MAX),
        d => d.to_digit(10)
            .ok_or_else(|| SearchError::InvalidGrid(format!("unknown map symbol {d:?}"))),
    }
}
