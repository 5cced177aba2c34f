//! City adjacency graph over a case's countries, and BFS reachability.

use std::collections::{HashSet, VecDeque};

use eurodiff_core::{CityId, NEIGHBOUR_SLOTS};

use crate::country::Country;

/// Read-only view of the city adjacency graph.
///
/// Implemented here for a case's country list; test code can implement
/// it directly to exercise reachability on hand-built graphs.
pub trait CityGraph {
    /// Total number of cities in the graph.
    fn city_count(&self) -> usize;

    /// Whether `city` is a node of this graph.
    fn contains(&self, city: CityId) -> bool;

    /// The neighbour slots of `city`, in west, east, north, south order.
    ///
    /// Returns all-`None` for a city that is not in the graph.
    fn neighbours(&self, city: CityId) -> [Option<CityId>; NEIGHBOUR_SLOTS];
}

impl CityGraph for [Country] {
    fn city_count(&self) -> usize {
        self.iter().map(Country::city_count).sum()
    }

    fn contains(&self, city: CityId) -> bool {
        self.get(city.country.index())
            .and_then(|c| c.city(city.index as usize))
            .is_some()
    }

    fn neighbours(&self, city: CityId) -> [Option<CityId>; NEIGHBOUR_SLOTS] {
        self.get(city.country.index())
            .and_then(|c| c.city(city.index as usize))
            .map(|c| *c.neighbours())
            .unwrap_or([None; NEIGHBOUR_SLOTS])
    }
}

/// Number of distinct cities reachable from `start` over neighbour links,
/// `start` included.
///
/// Breadth-first; each city is visited at most once. Returns 0 if
/// `start` is not in the graph and 1 for an isolated city.
pub fn reachable_count<G: CityGraph + ?Sized>(graph: &G, start: CityId) -> usize {
    if !graph.contains(start) {
        return 0;
    }
    let mut visited = HashSet::with_capacity(graph.city_count());
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(city) = queue.pop_front() {
        for neighbour in graph.neighbours(city).into_iter().flatten() {
            if visited.insert(neighbour) {
                queue.push_back(neighbour);
            }
        }
    }
    visited.len()
}
