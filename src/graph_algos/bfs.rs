use crate::errors::{Endpoint, SearchError};
use crate::collections::FxIndexMap;
use crate::geometry::Coord;
use crate::grid::{Cost, Grid};
use crate::options::SearchOptions;
use super::{GraphNodeMap, SearchResult, shortest_path};

use std::collections::VecDeque;
use indexmap::map::Entry::Vacant;
use log::{debug, trace};


/// Breadth-first search with the default options
/// https://en.wikipedia.org/wiki/Breadth-first_search
pub fn bfs<C: Cost>(grid: &Grid<C>, start: Coord, destination: Coord) -> Result<Option<SearchResult>, SearchError> {
    bfs_with(grid, start, destination, &SearchOptions::default())
}

/// Breadth-first search
/// Every traversable cell counts as one step, cell costs are ignored
/// Stops as soon as the destination is admitted, the path is shortest in step count
pub fn bfs_with<C: Cost>(grid: &Grid<C>, start: Coord, destination: Coord, options: &SearchOptions) -> Result<Option<SearchResult>, SearchError> {
    grid.check_endpoint(start, Endpoint::Start)?;
    grid.check_endpoint(destination, Endpoint::Destination)?;
    debug!("bfs from {start} to {destination}, {:?} movement", options.directions);

    if start == destination {
        return Ok(Some(SearchResult::new(vec![start], Vec::new())));
    }

    // The tuple contains (parent_index, depth)
    // each node is inserted once, on admission, so presence in the map means visited
    let mut node_map: GraphNodeMap<Coord, usize> = FxIndexMap::default();
    let start_index = node_map.insert_full(start, (usize::MAX, 0)).0;

    let mut queue = VecDeque::from([start_index]);
    let mut discovered = Vec::new();

    while let Some(index) = queue.pop_front() {
        let Some((&node, &(_, depth))) = node_map.get_index(index) else {
            continue;
        };
        trace!("bfs expands {node} at depth {depth}");

        for (neighbor, _) in grid.neighbors(node, options.directions) {
            let Vacant(entry) = node_map.entry(neighbor) else {
                continue;
            };
            let neighbor_index = entry.index();
            entry.insert((index, depth + 1));
            discovered.push(neighbor);

            // Unweighted - the first admission is already the shortest
            if neighbor == destination {
                let path = shortest_path(&node_map, neighbor_index);
                debug!("bfs reached {destination}: {} steps, {} discovered", path.len(), discovered.len());
                return Ok(Some(SearchResult::new(path, discovered)));
            }
            queue.push_back(neighbor_index);
        }
    }

    debug!("bfs found no path, {} discovered", discovered.len());
    Ok(None)
}
