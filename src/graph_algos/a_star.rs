use crate::errors::{Endpoint, SearchError};
use crate::collections::FxIndexMap;
use crate::geometry::Coord;
use crate::grid::{Cost, Grid};
use crate::options::SearchOptions;
use super::frontier::Node;
use super::{GraphNodeMap, SearchResult, shortest_path};

use std::collections::BinaryHeap;
use indexmap::map::Entry::{Occupied, Vacant};
use log::{debug, trace};


/// A* with the default options - four-way movement, Manhattan heuristic
/// https://en.wikipedia.org/wiki/A*_search_algorithm
pub fn a_star<C: Cost>(grid: &Grid<C>, start: Coord, destination: Coord) -> Result<Option<SearchResult>, SearchError> {
    a_star_with(grid, start, destination, &SearchOptions::default())
}

/// From start, traverse the grid in order of cost + estimated remaining cost
/// until the destination is popped from the open list
///
/// The path is the cheapest one only while the heuristic never overestimates the true
/// remaining cost. Manhattan distance does overestimate on cells cheaper than 1 and
/// with eight-way movement, there the result is a valid but possibly costlier path.
pub fn a_star_with<C: Cost>(grid: &Grid<C>, start: Coord, destination: Coord, options: &SearchOptions) -> Result<Option<SearchResult>, SearchError> {
    grid.check_endpoint(start, Endpoint::Start)?;
    grid.check_endpoint(destination, Endpoint::Destination)?;
    debug!("a* from {start} to {destination}, {:?} movement, {:?} heuristic", options.directions, options.heuristic);

    let mut discovered = Vec::new();
    let (closed_list, goal_index) = build_graph(grid, start, destination, options, &mut discovered)?;

    match goal_index {
        Some(goal_index) => {
            let path = shortest_path(&closed_list, goal_index);
            debug!("a* reached {destination}: {} steps, {} discovered", path.len(), discovered.len());
            Ok(Some(SearchResult::new(path, discovered)))
        }
        None => {
            debug!("a* found no path, {} discovered", discovered.len());
            Ok(None)
        }
    }
}


/// Traverses the grid using A* algorithm
/// Returns a map of nodes with their smallest costs along with the index of the destination node
fn build_graph<C: Cost>(
    grid: &Grid<C>,
    start: Coord,
    destination: Coord,
    options: &SearchOptions,
    discovered: &mut Vec<Coord>,
) -> Result<(GraphNodeMap<Coord, C>, Option<usize>), SearchError> {
    let estimate = |coord: Coord| -> C { options.heuristic.estimate(coord, destination) };

    // Open List
    // Nodes that need to be evaluated, sorted by f_cost (cost + heuristic)
    let mut open_list: BinaryHeap<Node<C>> = BinaryHeap::new();

    // Reached nodes with their best known cost, used to find the final path
    // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the closed_list
    let mut closed_list: GraphNodeMap<Coord, C> = FxIndexMap::default();

    let start_index = closed_list.insert_full(start, (usize::MAX, C::zero())).0;
    open_list.push(Node {
        index: start_index,
        cost: C::zero(),
        f_cost: estimate(start),
    });

    let mut destination_overflowed = false;

    while let Some(Node { index, cost, f_cost }) = open_list.pop() {

        let Some((&node, &(_, c))) = closed_list.get_index(index) else {
            continue;
        };

        // Stale entry, a better path to this node was pushed later
        if cost > c {
            continue;
        }
        trace!("a* pops {node} at cost {c:?}, f {f_cost:?}");

        if node == destination {
            return Ok((closed_list, Some(index)));
        }

        for (neighbor, edge_cost) in grid.neighbors(node, options.directions) {

            // Confirmed cost, not heuristic
            // A route whose cost does not fit in C can never improve on a recorded one
            let Some(new_cost) = c.checked_add(&edge_cost) else {
                destination_overflowed |= neighbor == destination;
                continue;
            };

            let neighbor_index = match closed_list.entry(neighbor) {
                Vacant(e) => {
                    let i = e.index();
                    e.insert((index, new_cost));
                    i
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        e.insert((index, new_cost));
                        e.index()
                    } else {
                        continue;
                    }
                }
            };

            discovered.push(neighbor);
            open_list.push(Node {
                index: neighbor_index,
                cost: new_cost,
                f_cost: new_cost.checked_add(&estimate(neighbor)).unwrap_or_else(C::max_value),
            });
        }
    }

    // Reachable, but only at a cost C cannot hold
    if destination_overflowed {
        return Err(SearchError::CostOverflow(destination));
    }
    Ok((closed_list, None))
}
