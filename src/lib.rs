//! Shortest-path search on rectangular 2D cost grids.
//!
//! Three searches share one request shape - a [`Grid`], a start and a destination:
//!
//! - [`bfs`] treats every traversable cell alike and stops when the destination is discovered
//! - [`dijkstra`] finds the cheapest path, a move costs the cost of the cell entered
//! - [`a_star`] is Dijkstra guided by a [`Heuristic`], Manhattan distance by default
//!
//! Each returns `Ok(None)` when the destination cannot be reached, and otherwise a
//! [`SearchResult`] holding the path and the order in which cells were discovered.
//!
//! ```
//! use gridpath::{Coord, Grid, bfs};
//!
//! let grid: Grid = "
//!     ..#..
//!     .....
//! ".parse().unwrap();
//! let result = bfs(&grid, Coord::new(0, 0), Coord::new(0, 4)).unwrap().unwrap();
//! assert_eq!(result.steps(), 7);
//! ```

pub mod collections;
pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod grid;
pub mod options;

pub use collections::CostTable;
pub use errors::{Endpoint, RejectReason, SearchError};
pub use geometry::{Coord, Directions, chebyshev_distance, manhattan_distance};
pub use graph_algos::{Algorithm, SearchResult};
pub use graph_algos::a_star::{a_star, a_star_with};
pub use graph_algos::bfs::{bfs, bfs_with};
pub use graph_algos::dijkstra::{dijkstra, dijkstra_costs, dijkstra_with};
pub use grid::{Cost, Grid};
pub use options::{Heuristic, SearchOptions};
