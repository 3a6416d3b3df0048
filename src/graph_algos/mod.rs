pub mod bfs;
pub mod dijkstra;
pub mod a_star;
mod frontier;
mod result;
mod shortest_path;

pub use result::SearchResult;
use shortest_path::shortest_path;

use crate::collections::FxIndexMap;
use crate::errors::SearchError;
use crate::geometry::Coord;
use crate::grid::{Cost, Grid};
use crate::options::SearchOptions;

use strum_macros::{Display, EnumIter, EnumString};

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the total cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;


/// Search algorithm selectable at runtime
/// Parses from and prints as "BFS", "Dijkstra" and "A*", ignoring ASCII case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Algorithm {
    #[strum(to_string = "BFS")]
    Bfs,
    #[strum(to_string = "Dijkstra")]
    Dijkstra,
    #[strum(to_string = "A*", serialize = "astar", serialize = "a_star")]
    AStar,
}

impl Algorithm {

    /// Parse a user facing label
    pub fn from_label(label: &str) -> Result<Self, SearchError> {
        label.trim().parse().map_err(|_| SearchError::UnknownAlgorithm(label.to_string()))
    }

    /// Run this algorithm on one request
    pub fn search<C: Cost>(self, grid: &Grid<C>, start: Coord, destination: Coord, options: &SearchOptions) -> Result<Option<SearchResult>, SearchError> {
        match self {
            Algorithm::Bfs => bfs::bfs_with(grid, start, destination, options),
            Algorithm::Dijkstra => dijkstra::dijkstra_with(grid, start, destination, options),
            Algorithm::AStar => a_star::a_star_with(grid, start, destination, options),
        }
    }
}
