//! Vehicle registry store

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use panelplan_types::{Result, Vehicle};

/// Standard vehicles seeded into a fresh store: name, interior
/// length/width/height in cm, max payload in kg
const DEFAULT_VEHICLES: [(&str, f64, f64, f64, f64); 4] = [
    ("20\" konteyner", 590.0, 235.0, 239.0, 28000.0),
    ("40\" konteyner", 1203.0, 235.0, 239.0, 26000.0),
    ("40\" high cube konteyner", 1203.0, 235.0, 269.0, 26000.0),
    ("TIR", 1360.0, 245.0, 270.0, 26000.0),
];

/// Persistent store for transport vehicles
pub struct VehicleStore {
    store_path: PathBuf,
    vehicles: BTreeMap<i64, Vehicle>,
}

impl VehicleStore {
    /// Create or load a vehicle store. A fresh store is seeded with the
    /// standard container and truck sizes.
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("vehicles.json");

        if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            let vehicles = serde_json::from_reader(reader).unwrap_or_default();
            Ok(Self {
                store_path,
                vehicles,
            })
        } else {
            let mut store = Self {
                store_path,
                vehicles: BTreeMap::new(),
            };
            for (name, length, width, height, max_payload) in DEFAULT_VEHICLES {
                store.insert(Vehicle {
                    id: 0,
                    name: name.to_string(),
                    length,
                    width,
                    height,
                    max_payload,
                });
            }
            store.save()?;
            Ok(store)
        }
    }

    /// Save store to disk
    fn save(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.vehicles)?;
        Ok(())
    }

    fn next_id(&self) -> i64 {
        self.vehicles.keys().max().copied().unwrap_or(0) + 1
    }

    fn insert(&mut self, mut vehicle: Vehicle) -> i64 {
        let id = self.next_id();
        vehicle.id = id;
        self.vehicles.insert(id, vehicle);
        id
    }

    /// Add a vehicle, assigning the next free id
    pub fn add(&mut self, vehicle: Vehicle) -> Result<i64> {
        let id = self.insert(vehicle);
        self.save()?;
        Ok(id)
    }

    /// Remove a vehicle by id
    pub fn remove(&mut self, id: i64) -> Result<bool> {
        let removed = self.vehicles.remove(&id).is_some();
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    /// Get a vehicle by id
    pub fn get(&self, id: i64) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    /// All vehicles in id order
    pub fn all(&self) -> Vec<&Vehicle> {
        self.vehicles.values().collect()
    }

    /// Total vehicle count
    pub fn count(&self) -> usize {
        self.vehicles.len()
    }
}
