use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use crate::heuristics::Heuristic;
use crate::roadmap::RoadMap;

/// Outcome of one search: the cities visited in order with the distance
/// accumulated at each step, and the total distance if the destination
/// was reached. A failed search carries an empty trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub trace: Vec<(String, u32)>,
    pub total_distance: Option<u32>,
}

impl SearchResult {
    fn success(trace: Vec<(String, u32)>, total: u32) -> Self {
        SearchResult {
            trace,
            total_distance: Some(total),
        }
    }

    fn no_path() -> Self {
        SearchResult {
            trace: Vec::new(),
            total_distance: None,
        }
    }

    pub fn path_found(&self) -> bool {
        self.total_distance.is_some()
    }
}

// min-heap entry for the informed searches; ties on priority fall back to
// the city name so popping order is deterministic
#[derive(Debug, Clone, PartialEq, Eq)]
struct QueueEntry {
    priority: u32,
    city: String,
    distance: u32,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.city.cmp(&other.city))
            .then_with(|| self.distance.cmp(&other.distance))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl RoadMap {
    pub fn bfs(&self, start: &str, destination: &str) -> SearchResult {
        log::debug!("breadth-first search from {} to {}", start, destination);
        let mut queue: VecDeque<(String, u32)> = VecDeque::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut trace = Vec::new();

        queue.push_back((start.to_string(), 0));
        while let Some((city, distance)) = queue.pop_front() {
            // every dequeue is recorded, so a city enqueued twice before
            // its first visit shows up twice in the trace
            trace.push((city.clone(), distance));
            if city == destination {
                return SearchResult::success(trace, distance);
            }
            if !visited.insert(city.clone()) {
                continue; // already expanded, don't re-expand
            }
            for (neighbor, road) in self.neighbors(&city) {
                if !visited.contains(neighbor) {
                    queue.push_back((neighbor.clone(), distance + road));
                }
            }
        }

        log::debug!("queue exhausted, {} is unreachable", destination);
        SearchResult::no_path()
    }

    pub fn dfs(&self, start: &str, destination: &str) -> SearchResult {
        log::debug!("depth-first search from {} to {}", start, destination);
        let mut visited: HashSet<String> = HashSet::new();
        let mut trace = Vec::new();

        match self.dfs_visit(start, destination, 0, &mut visited, &mut trace) {
            Some(total) => SearchResult::success(trace, total),
            None => {
                log::debug!("all reachable cities tried, {} is unreachable", destination);
                SearchResult::no_path()
            }
        }
    }

    // visited set and accumulated distance travel through the recursion as
    // explicit arguments; visited cities are never unmarked, so each city
    // is tried at most once
    fn dfs_visit(
        &self,
        current: &str,
        destination: &str,
        distance: u32,
        visited: &mut HashSet<String>,
        trace: &mut Vec<(String, u32)>,
    ) -> Option<u32> {
        trace.push((current.to_string(), distance));
        visited.insert(current.to_string());
        if current == destination {
            return Some(distance);
        }
        for (neighbor, road) in self.neighbors(current) {
            if !visited.contains(neighbor) {
                if let Some(total) =
                    self.dfs_visit(neighbor, destination, distance + road, visited, trace)
                {
                    return Some(total); // first success wins
                }
            }
        }
        None
    }

    pub fn best_first(
        &self,
        start: &str,
        destination: &str,
        heuristic: &dyn Heuristic,
    ) -> SearchResult {
        log::debug!("best-first search from {} to {}", start, destination);
        let mut heap: BinaryHeap<Reverse<QueueEntry>> = BinaryHeap::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut trace = Vec::new();

        heap.push(Reverse(QueueEntry {
            priority: 0,
            city: start.to_string(),
            distance: 0,
        }));
        while let Some(Reverse(entry)) = heap.pop() {
            if visited.contains(&entry.city) {
                continue; // stale entry left behind by lazy deletion
            }
            visited.insert(entry.city.clone());
            trace.push((entry.city.clone(), entry.distance));
            if entry.city == destination {
                return SearchResult::success(trace, entry.distance);
            }
            for (neighbor, road) in self.neighbors(&entry.city) {
                if !visited.contains(neighbor) {
                    // priority is the heuristic alone, the distance only
                    // rides along for reporting
                    heap.push(Reverse(QueueEntry {
                        priority: heuristic.estimate(neighbor, destination),
                        city: neighbor.clone(),
                        distance: entry.distance + road,
                    }));
                }
            }
        }

        log::debug!("queue exhausted, {} is unreachable", destination);
        SearchResult::no_path()
    }

    pub fn a_star(
        &self,
        start: &str,
        destination: &str,
        heuristic: &dyn Heuristic,
    ) -> SearchResult {
        log::debug!("a* search from {} to {}", start, destination);
        let mut heap: BinaryHeap<Reverse<QueueEntry>> = BinaryHeap::new();
        let mut total_cost: HashMap<String, u32> = HashMap::new();
        let mut came_from: HashMap<String, String> = HashMap::new();
        let mut trace = Vec::new();

        total_cost.insert(start.to_string(), 0);
        heap.push(Reverse(QueueEntry {
            priority: 0,
            city: start.to_string(),
            distance: 0,
        }));
        while let Some(Reverse(entry)) = heap.pop() {
            // no closed set: a city reached again at lower cost gets
            // expanded again, and every pop lands in the trace
            trace.push((entry.city.clone(), entry.distance));
            if entry.city == destination {
                return SearchResult::success(trace, entry.distance);
            }
            let current_cost = total_cost[&entry.city];
            for (neighbor, road) in self.neighbors(&entry.city) {
                let new_cost = current_cost + road;
                if total_cost.get(neighbor).is_none_or(|&known| new_cost < known) {
                    total_cost.insert(neighbor.clone(), new_cost);
                    came_from.insert(neighbor.clone(), entry.city.clone());
                    heap.push(Reverse(QueueEntry {
                        priority: new_cost + heuristic.estimate(neighbor, destination),
                        city: neighbor.clone(),
                        distance: new_cost,
                    }));
                }
            }
        }

        log::debug!("queue exhausted, {} is unreachable", destination);
        SearchResult::no_path()
    }
}
