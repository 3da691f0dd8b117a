use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::heuristics::DistanceTable;

#[derive(Debug, Deserialize)]
pub struct RoadRecord {
    pub from: String,
    pub to: String,
    pub distance: u32,
}

#[derive(Debug, Deserialize)]
struct DistanceRecord {
    city: String,
    distance: u32,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read data file: {0}")]
    Csv(#[from] csv::Error),
}

pub fn load_roads(path: impl AsRef<Path>) -> Result<Vec<RoadRecord>, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut roads = Vec::new();
    for record in reader.deserialize() {
        roads.push(record?);
    }
    Ok(roads)
}

pub fn load_distance_table(path: impl AsRef<Path>) -> Result<DistanceTable, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut table = DistanceTable::new();
    for record in reader.deserialize() {
        let record: DistanceRecord = record?;
        table.insert(record.city, record.distance);
    }
    Ok(table)
}
