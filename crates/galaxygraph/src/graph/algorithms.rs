//! Shortest-path search.
//!
//! Dijkstra over non-negative edge weights with a binary-heap frontier.
//! Improved distances push a new frontier entry instead of updating the old
//! one in place, so superseded entries are discarded when they are popped.

use crate::error::Result;
use crate::graph::{GraphStore, NodeId};
use log::{debug, trace};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Outcome of a shortest-path query.
///
/// An unreachable target is reported as `weight == f64::INFINITY` with an
/// empty path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Sum of edge weights along `path`
    pub weight: f64,
    /// Node IDs from start to end inclusive
    pub path: Vec<NodeId>,
}

impl PathResult {
    /// Result for a target with no connecting walk.
    pub fn unreachable() -> Self {
        Self {
            weight: f64::INFINITY,
            path: Vec::new(),
        }
    }

    /// Whether a path was found.
    pub fn is_reachable(&self) -> bool {
        self.weight.is_finite()
    }

    /// Number of edges traversed, `None` when unreachable.
    pub fn hops(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// Frontier entry ordered so that `BinaryHeap` pops the smallest distance.
///
/// Equal distances pop the smaller node ID first.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    distance: f64,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the lowest-total-weight path between two nodes.
///
/// # Parameters
/// - `graph`: The store to search
/// - `start`: Starting node ID
/// - `end`: Target node ID
///
/// # Returns
/// The minimum weight and one path achieving it. `start == end` yields
/// weight 0 and `[start]`; no connection yields [`PathResult::unreachable`].
///
/// # Errors
/// Returns [`crate::GraphError::UnknownNode`] if either node doesn't exist.
pub fn shortest_path(graph: &GraphStore, start: NodeId, end: NodeId) -> Result<PathResult> {
    graph.node(start)?;
    graph.node(end)?;

    if start == end {
        return Ok(PathResult {
            weight: 0.0,
            path: vec![start],
        });
    }

    let mut distance: HashMap<NodeId, f64> = graph
        .nodes()
        .map(|node| (node.id, f64::INFINITY))
        .collect();
    let mut previous: HashMap<NodeId, NodeId> = HashMap::new();
    let mut frontier = BinaryHeap::new();

    distance.insert(start, 0.0);
    frontier.push(FrontierEntry {
        distance: 0.0,
        node: start,
    });

    let mut settled = 0usize;
    while let Some(FrontierEntry {
        distance: current_distance,
        node: current,
    }) = frontier.pop()
    {
        let best = distance.get(&current).copied().unwrap_or(f64::INFINITY);
        if current_distance > best {
            trace!("Skipping stale entry for {current} ({current_distance} > {best})");
            continue;
        }
        settled += 1;
        trace!("Settled {current} at {current_distance}");

        for entry in graph.neighbors(current)? {
            let candidate = current_distance + entry.weight;
            let known = distance
                .get(&entry.neighbor)
                .copied()
                .unwrap_or(f64::INFINITY);
            if candidate < known {
                distance.insert(entry.neighbor, candidate);
                previous.insert(entry.neighbor, current);
                frontier.push(FrontierEntry {
                    distance: candidate,
                    node: entry.neighbor,
                });
            }
        }
    }

    let weight = distance.get(&end).copied().unwrap_or(f64::INFINITY);
    debug!("Search {start} -> {end} settled {settled} entries, weight={weight}");
    if !weight.is_finite() {
        return Ok(PathResult::unreachable());
    }

    Ok(PathResult {
        weight,
        path: reconstruct_path(&previous, start, end),
    })
}

/// Walk predecessor links from `end` back to `start`.
fn reconstruct_path(previous: &HashMap<NodeId, NodeId>, start: NodeId, end: NodeId) -> Vec<NodeId> {
    let mut path = vec![end];
    let mut current = end;

    while current != start {
        match previous.get(&current) {
            Some(&parent) => {
                path.push(parent);
                current = parent;
            }
            None => break,
        }
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph() -> GraphStore {
        // 0 - 1 - 2 - 3 with unit weights
        let mut graph = GraphStore::new();
        graph.add_partition("a").unwrap();
        for name in ["a", "b", "c", "d"] {
            graph.add_node("a", name).unwrap();
        }
        for id in 0..3 {
            graph.connect(id, id + 1, 1.0).unwrap();
        }
        graph
    }

    #[test]
    fn test_frontier_pops_smallest_distance() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry { distance: 2.0, node: 0 });
        heap.push(FrontierEntry { distance: 0.5, node: 4 });
        heap.push(FrontierEntry { distance: 0.5, node: 1 });
        heap.push(FrontierEntry { distance: 7.0, node: 2 });

        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|e| e.node).collect();
        assert_eq!(order, vec![1, 4, 0, 2]);
    }

    #[test]
    fn test_line_path() {
        let graph = line_graph();
        let result = shortest_path(&graph, 0, 3).unwrap();
        assert_eq!(result.weight, 3.0);
        assert_eq!(result.path, vec![0, 1, 2, 3]);
        assert_eq!(result.hops(), Some(3));
    }

    #[test]
    fn test_reverse_direction() {
        let graph = line_graph();
        let result = shortest_path(&graph, 3, 0).unwrap();
        assert_eq!(result.path, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_unreachable_has_no_hops() {
        let result = PathResult::unreachable();
        assert!(!result.is_reachable());
        assert_eq!(result.hops(), None);
    }

    #[test]
    fn test_reconstruct_path_single_link() {
        let previous: HashMap<NodeId, NodeId> = [(5, 2)].into_iter().collect();
        assert_eq!(reconstruct_path(&previous, 2, 5), vec![2, 5]);
    }
}
