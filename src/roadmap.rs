use std::collections::HashMap;

pub struct RoadMap {
    adjacency_list: HashMap<String, Vec<(String, u32)>>,
    cities: Vec<String>, // insertion order, for stable printing
}

impl RoadMap {
    pub fn new() -> Self {
        RoadMap {
            adjacency_list: HashMap::new(),
            cities: Vec::new(),
        }
    }

    pub fn add_road(&mut self, from: &str, to: &str, distance: u32) {
        if from == to {
            return; // a city has no road to itself
        }
        if self.has_road(from, to, distance) {
            return; // exact (neighbor, distance) pair already present
        }
        // insert both directions here so the adjacency list stays
        // symmetric without recursing; the has_road check above means
        // neither side can be mirrored twice
        self.push_road(from, to, distance);
        if !self.has_road(to, from, distance) {
            self.push_road(to, from, distance);
        }
    }

    // note: only an identical (neighbor, distance) pair counts as a
    // duplicate, so two roads between the same cities with different
    // distances are both kept
    fn has_road(&self, from: &str, to: &str, distance: u32) -> bool {
        self.adjacency_list
            .get(from)
            .map(|roads| roads.iter().any(|(c, d)| c == to && *d == distance))
            .unwrap_or(false)
    }

    fn push_road(&mut self, from: &str, to: &str, distance: u32) {
        if !self.adjacency_list.contains_key(from) {
            self.cities.push(from.to_string());
        }
        self.adjacency_list
            .entry(from.to_string())
            .or_default()
            .push((to.to_string(), distance));
    }

    pub fn neighbors(&self, city: &str) -> &[(String, u32)] {
        // unknown cities just have no neighbors; searches stay total
        self.adjacency_list
            .get(city)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn direct_distance(&self, from: &str, to: &str) -> Option<u32> {
        self.neighbors(from)
            .iter()
            .find(|(c, _)| c == to)
            .map(|(_, d)| *d)
    }

    pub fn print_map(&self) {
        for city in &self.cities {
            println!("{}: {:?}", city, self.adjacency_list[city]);
        }
    }
}
