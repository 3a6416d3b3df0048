use crate::geometry::Coord;


/// Outcome of a successful search
/// path: start to destination, both inclusive
/// discovered: every admission to the frontier in order, the start excluded
/// A coordinate appears more than once in `discovered` when a cheaper route to it was found later
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    path: Vec<Coord>,
    discovered: Vec<Coord>,
}

impl SearchResult {

    pub(crate) fn new(path: Vec<Coord>, discovered: Vec<Coord>) -> Self {
        Self { path, discovered }
    }

    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    /// Discovery trace, for visualization only
    pub fn discovered(&self) -> &[Coord] {
        &self.discovered
    }

    /// Number of cells on the path
    pub fn steps(&self) -> usize {
        self.path.len()
    }

    pub fn discovered_count(&self) -> usize {
        self.discovered.len()
    }

    pub fn into_parts(self) -> (Vec<Coord>, Vec<Coord>) {
        (self.path, self.discovered)
    }
}
