use crate::errors::{Endpoint, SearchError};
use crate::collections::{CostTable, FxIndexMap};
use crate::geometry::{Coord, Directions};
use crate::grid::{Cost, Grid};
use crate::options::SearchOptions;
use super::frontier::Node;
use super::{GraphNodeMap, SearchResult, shortest_path};

use std::collections::BinaryHeap;
use indexmap::map::Entry::{Occupied, Vacant};
use log::{debug, trace};


/// Identify the shortest path using Dijkstra's Algorithm with the default options
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
pub fn dijkstra<C: Cost>(grid: &Grid<C>, start: Coord, destination: Coord) -> Result<Option<SearchResult>, SearchError> {
    dijkstra_with(grid, start, destination, &SearchOptions::default())
}

/// Identify the cheapest path, the cost of a move is the cost of the cell entered
/// From start, traverse the grid until the destination is popped from the frontier
pub fn dijkstra_with<C: Cost>(grid: &Grid<C>, start: Coord, destination: Coord, options: &SearchOptions) -> Result<Option<SearchResult>, SearchError> {
    grid.check_endpoint(start, Endpoint::Start)?;
    grid.check_endpoint(destination, Endpoint::Destination)?;
    debug!("dijkstra from {start} to {destination}, {:?} movement", options.directions);

    let mut discovered = Vec::new();
    let (node_map, goal_index) = build_dijkstra_graph(grid, start, destination, options.directions, &mut discovered)?;

    match goal_index {
        Some(goal_index) => {
            let path = shortest_path(&node_map, goal_index);
            debug!("dijkstra reached {destination}: {} steps, {} discovered", path.len(), discovered.len());
            Ok(Some(SearchResult::new(path, discovered)))
        }
        None => {
            debug!("dijkstra found no path, {} discovered", discovered.len());
            Ok(None)
        }
    }
}


/// Return the cost table explored up to the destination
/// Coordinates cheaper than the destination are final, the rest are best known so far
pub fn dijkstra_costs<C: Cost>(grid: &Grid<C>, start: Coord, destination: Coord, options: &SearchOptions) -> Result<CostTable<C>, SearchError> {
    grid.check_endpoint(start, Endpoint::Start)?;
    grid.check_endpoint(destination, Endpoint::Destination)?;

    let (node_map, _) = build_dijkstra_graph(grid, start, destination, options.directions, &mut Vec::new())?;

    Ok(node_map.into_iter().map(|(coord, (_, cost))| (coord, cost)).collect())
}


/// Traverses the grid using Dijkstra's algorithm
/// Returns a map of nodes with their smallest costs along with the index of the destination node
/// Every improvement pushed onto the frontier is appended to `discovered`
fn build_dijkstra_graph<C: Cost>(
    grid: &Grid<C>,
    start: Coord,
    destination: Coord,
    directions: Directions,
    discovered: &mut Vec<Coord>,
) -> Result<(GraphNodeMap<Coord, C>, Option<usize>), SearchError> {

    // Nodes to visit - always expand the least costly node first
    let mut nodes_to_visit: BinaryHeap<Node<C>> = BinaryHeap::new();

    // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the map
    // for the start node, parent_index is set to usize::MAX to indicate it has no parent
    let mut nodes_map: GraphNodeMap<Coord, C> = FxIndexMap::default();

    let start_index = nodes_map.insert_full(start, (usize::MAX, C::zero())).0;
    nodes_to_visit.push(Node {
        index: start_index,
        cost: C::zero(),
        f_cost: C::zero(),
    });

    let mut destination_overflowed = false;

    while let Some(Node { index, cost, .. }) = nodes_to_visit.pop() {

        let Some((&node, &(_, c))) = nodes_map.get_index(index) else {
            continue;
        };

        // A cheaper route to this node was found after this entry was pushed
        if cost > c {
            continue;
        }
        trace!("dijkstra pops {node} at cost {c:?}");

        // Only optimal once popped, cheaper routes may still sit in the frontier before that
        if node == destination {
            return Ok((nodes_map, Some(index)));
        }

        for (neighbor, edge_cost) in grid.neighbors(node, directions) {

            // A route whose cost does not fit in C can never improve on a recorded one
            let Some(new_cost) = c.checked_add(&edge_cost) else {
                destination_overflowed |= neighbor == destination;
                continue;
            };

            let neighbor_index = match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    let i = e.index();
                    e.insert((index, new_cost));
                    i
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        // Re-discovery - a cheaper route to an already reached node
                        e.insert((index, new_cost));
                        e.index()
                    } else {
                        continue;
                    }
                }
            };

            discovered.push(neighbor);
            nodes_to_visit.push(Node {
                index: neighbor_index,
                cost: new_cost,
                f_cost: new_cost,
            });
        }
    }

    // Reachable, but only at a cost C cannot hold
    if destination_overflowed {
        return Err(SearchError::CostOverflow(destination));
    }
    Ok((nodes_map, None))
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_dijkstra_avoids_expensive_cells() {
        let grid: Grid = "
            .9.
            ...
        ".parse().unwrap();
        let result = dijkstra(&grid, Coord::new(0, 0), Coord::new(0, 2)).unwrap().unwrap();

        assert_eq!(
            result.path(),
            &[Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2), Coord::new(0, 2)]
        );
        assert_eq!(grid.path_cost(result.path()), Some(4));
    }

    #[test]
    fn test_dijkstra_first_discovery_is_cheapest() {
        // the cost of a move is the cost of the cell entered, so the first
        // neighbor popped already gives the cheapest route to a cell
        let grid: Grid = "
            .9..
            ..5.
            1...
        ".parse().unwrap();
        let result = dijkstra(&grid, Coord::new(0, 0), Coord::new(0, 3)).unwrap().unwrap();

        let unique: std::collections::HashSet<_> = result.discovered().iter().collect();
        assert_eq!(unique.len(), result.discovered_count());
        assert_eq!(grid.path_cost(result.path()), Some(7));
    }

    #[test]
    fn test_dijkstra_costs_are_shortest() {
        let grid: Grid = "
            .3.
            .1.
            2..
        ".parse().unwrap();
        let costs = dijkstra_costs(&grid, Coord::new(0, 0), Coord::new(2, 2), &SearchOptions::default()).unwrap();

        let expected = HashMap::from([
            (Coord::new(0, 0), 0),
            (Coord::new(1, 0), 1),
            (Coord::new(1, 1), 2),
            (Coord::new(0, 1), 3),
            (Coord::new(1, 2), 3),
            (Coord::new(2, 1), 3),
            (Coord::new(2, 0), 3),
            (Coord::new(2, 2), 4),
        ]);
        for (coord, cost) in expected {
            assert_eq!(costs.get(&coord), Some(&cost), "cost of {coord}");
        }
        assert_eq!(costs.get_index(0), Some((&Coord::new(0, 0), &0)));
    }

    #[test]
    fn test_dijkstra_terminates_on_pop() {
        // the destination is discovered right away but every cheaper cell is expanded before it is popped
        let grid: Grid = "
            .9
            ..
            ..
        ".parse().unwrap();
        let result = dijkstra(&grid, Coord::new(0, 0), Coord::new(0, 1)).unwrap().unwrap();

        assert_eq!(result.path(), &[Coord::new(0, 0), Coord::new(0, 1)]);
        assert_eq!(&result.discovered()[..2], &[Coord::new(1, 0), Coord::new(0, 1)]);
        assert_eq!(result.discovered_count(), 5);
        assert!(result.discovered().contains(&Coord::new(2, 1)));
    }

    #[test]
    fn test_dijkstra_handles_unreachable_goal() {
        let grid: Grid = "
            ...#.
            ...#.
            ####.
        ".parse().unwrap();
        let result = dijkstra(&grid, Coord::new(0, 0), Coord::new(0, 4)).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_dijkstra_start_is_destination() {
        let grid: Grid = Grid::new(3, 3).unwrap();
        let result = dijkstra(&grid, Coord::new(2, 1), Coord::new(2, 1)).unwrap().unwrap();
        assert_eq!(result.path(), &[Coord::new(2, 1)]);
        assert!(result.discovered().is_empty());
    }

    #[test]
    fn test_dijkstra_zero_cost_cells() {
        let grid: Grid = Grid::filled(3, 3, 0).unwrap();
        let result = dijkstra(&grid, Coord::new(0, 0), Coord::new(2, 2)).unwrap().unwrap();
        assert_eq!(result.path().first(), Some(&Coord::new(0, 0)));
        assert_eq!(result.path().last(), Some(&Coord::new(2, 2)));
        assert_eq!(grid.path_cost(result.path()), Some(0));
    }

    #[test]
    fn test_dijkstra_cost_overflow() {
        let grid = Grid::from_rows(vec![vec![1u8, 200, 200]]).unwrap();
        assert_eq!(
            dijkstra(&grid, Coord::new(0, 0), Coord::new(0, 2)),
            Err(SearchError::CostOverflow(Coord::new(0, 2)))
        );
    }

    #[test]
    fn test_dijkstra_skips_unrepresentable_detours() {
        // entering the 254 overflows u8 but that cell is off the cheapest path
        let grid = Grid::from_rows(vec![vec![1u8, 1, 1, 1], vec![1, 1, 254, 1]]).unwrap();
        let result = dijkstra(&grid, Coord::new(0, 0), Coord::new(0, 3)).unwrap().unwrap();

        assert_eq!(result.path(), &[Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2), Coord::new(0, 3)]);
        assert_eq!(grid.path_cost(result.path()), Some(3));
        assert!(!result.discovered().contains(&Coord::new(1, 2)));
    }
}
