//! Panel type registry store

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use panelplan_types::{PanelType, Result};

/// Persistent store for panel types
pub struct PanelStore {
    store_path: PathBuf,
    panels: BTreeMap<i64, PanelType>,
}

impl PanelStore {
    /// Create or load a panel store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("panels.json");

        let panels = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            BTreeMap::new()
        };

        Ok(Self { store_path, panels })
    }

    /// Save store to disk
    fn save(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.panels)?;
        Ok(())
    }

    fn next_id(&self) -> i64 {
        self.panels.keys().max().copied().unwrap_or(0) + 1
    }

    /// Add a panel type, assigning the next free id
    pub fn add(&mut self, mut panel: PanelType) -> Result<i64> {
        let id = self.next_id();
        panel.id = id;
        self.panels.insert(id, panel);
        self.save()?;
        Ok(id)
    }

    /// Remove a panel type by id
    pub fn remove(&mut self, id: i64) -> Result<bool> {
        let removed = self.panels.remove(&id).is_some();
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    /// Get a panel type by id
    pub fn get(&self, id: i64) -> Option<&PanelType> {
        self.panels.get(&id)
    }

    /// All panel types in id order
    pub fn all(&self) -> Vec<&PanelType> {
        self.panels.values().collect()
    }

    /// Total panel type count
    pub fn count(&self) -> usize {
        self.panels.len()
    }
}
