//! Saved loading-plan history store

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use chrono::Utc;
use panelplan_types::{LoadingPlanRecord, LoadingPlanResult, Result};

/// Persistent store for computed loading plans
pub struct PlanStore {
    store_path: PathBuf,
    plans: BTreeMap<i64, LoadingPlanRecord>,
}

impl PlanStore {
    /// Create or load a plan store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("plans.json");

        let plans = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            BTreeMap::new()
        };

        Ok(Self { store_path, plans })
    }

    /// Save store to disk
    fn save(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.plans)?;
        Ok(())
    }

    fn next_id(&self) -> i64 {
        self.plans.keys().max().copied().unwrap_or(0) + 1
    }

    /// Record a computed plan, stamped with the current time
    pub fn add(&mut self, vehicle_id: i64, plan: LoadingPlanResult) -> Result<i64> {
        let id = self.next_id();
        let record = LoadingPlanRecord {
            id,
            vehicle_id,
            total_volume: plan.total_volume,
            used_volume: plan.used_volume,
            total_weight: plan.total_weight,
            plan,
            created_at: Utc::now(),
        };
        self.plans.insert(id, record);
        self.save()?;
        Ok(id)
    }

    /// Remove a saved plan by id
    pub fn remove(&mut self, id: i64) -> Result<bool> {
        let removed = self.plans.remove(&id).is_some();
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    /// Get a saved plan by id
    pub fn get(&self, id: i64) -> Option<&LoadingPlanRecord> {
        self.plans.get(&id)
    }

    /// All saved plans in id order
    pub fn all(&self) -> Vec<&LoadingPlanRecord> {
        self.plans.values().collect()
    }

    /// Total saved plan count
    pub fn count(&self) -> usize {
        self.plans.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn empty_plan() -> LoadingPlanResult {
        LoadingPlanResult {
            pallets: Vec::new(),
            vehicle_length: 1360.0,
            vehicle_width: 245.0,
            vehicle_height: 270.0,
            used_volume: 0.7,
            total_volume: 89.964,
            net_weight: 980.0,
            pallets_weight: 63.86,
            total_weight: 1043.86,
            volume_percentage: 0.78,
            weight_percentage: 4.01,
            requires_multiple_vehicles: false,
            vehicle_count: 1,
            panel_summary: Vec::new(),
        }
    }

    #[test]
    fn test_add_and_reload() {
        let dir = tempdir().unwrap();
        let mut store = PlanStore::open(dir.path().to_path_buf()).unwrap();
        let id = store.add(4, empty_plan()).unwrap();
        assert_eq!(id, 1);

        let reloaded = PlanStore::open(dir.path().to_path_buf()).unwrap();
        let record = reloaded.get(id).unwrap();
        assert_eq!(record.vehicle_id, 4);
        assert!((record.total_weight - 1043.86).abs() < 0.001);
    }

    #[test]
    fn test_remove() {
        let dir = tempdir().unwrap();
        let mut store = PlanStore::open(dir.path().to_path_buf()).unwrap();
        let id = store.add(1, empty_plan()).unwrap();
        assert!(store.remove(id).unwrap());
        assert!(!store.remove(id).unwrap());
    }
}
