//! TOML loader for vehicle fleet definitions

use std::path::Path;

use panelplan_types::{Error, Result, Vehicle};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct FleetFile {
    #[serde(default)]
    vehicles: Vec<FleetVehicle>,
}

/// One `[[vehicles]]` entry in a fleet TOML file
#[derive(Debug, Deserialize)]
struct FleetVehicle {
    name: String,
    /// Interior length in cm
    length: f64,
    /// Interior width in cm
    width: f64,
    /// Interior height in cm
    height: f64,
    /// Maximum payload in kg
    max_payload: f64,
}

/// Load vehicles from a fleet TOML file. Ids are assigned by position;
/// callers re-assign them when importing into a store.
pub fn load_vehicles_from_toml(path: &Path) -> Result<Vec<Vehicle>> {
    let content = std::fs::read_to_string(path)?;
    let fleet: FleetFile = toml::from_str(&content).map_err(|e| Error::Toml(e.to_string()))?;

    Ok(fleet
        .vehicles
        .into_iter()
        .enumerate()
        .map(|(idx, v)| Vehicle {
            id: (idx + 1) as i64,
            name: v.name,
            length: v.length,
            width: v.width,
            height: v.height,
            max_payload: v.max_payload,
        })
        .collect())
}
