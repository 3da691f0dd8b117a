use std::collections::HashMap;

use crate::roadmap::RoadMap;

/// Straight-line distance from each city to the goal city.
pub type DistanceTable = HashMap<String, u32>;

// cities missing from the table get a large estimate instead of failing
pub const UNKNOWN_DISTANCE: u32 = 9999;

fn table_lookup(table: &DistanceTable, city: &str) -> u32 {
    table.get(city).copied().unwrap_or(UNKNOWN_DISTANCE)
}

/// Estimates the remaining distance from a city to the goal. The informed
/// searches order their queues by these estimates.
pub trait Heuristic {
    fn estimate(&self, city: &str, goal: &str) -> u32;
}

// difference of the two straight-line distances to the fixed goal
pub struct TableDifference<'a> {
    table: &'a DistanceTable,
}

impl<'a> TableDifference<'a> {
    pub fn new(table: &'a DistanceTable) -> Self {
        TableDifference { table }
    }
}

impl Heuristic for TableDifference<'_> {
    fn estimate(&self, city: &str, goal: &str) -> u32 {
        table_lookup(self.table, city).abs_diff(table_lookup(self.table, goal))
    }
}

// sum of the two straight-line distances, capped by a direct road between
// the city and the goal when one exists
pub struct TriangleBound<'a> {
    table: &'a DistanceTable,
    map: &'a RoadMap,
}

impl<'a> TriangleBound<'a> {
    pub fn new(table: &'a DistanceTable, map: &'a RoadMap) -> Self {
        TriangleBound { table, map }
    }
}

impl Heuristic for TriangleBound<'_> {
    fn estimate(&self, city: &str, goal: &str) -> u32 {
        let estimate = table_lookup(self.table, city) + table_lookup(self.table, goal);
        match self.map.direct_distance(city, goal) {
            Some(distance) => estimate.min(distance),
            None => estimate,
        }
    }
}
