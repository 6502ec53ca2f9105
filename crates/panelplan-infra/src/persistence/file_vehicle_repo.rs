//! File-based implementation of VehicleRepository

use std::path::PathBuf;

use panelplan_domain::repository::VehicleRepository;
use panelplan_store::VehicleStore;
use panelplan_types::{Error, Vehicle};

/// VehicleRepository over the JSON vehicle store
pub struct FileVehicleRepository {
    store: VehicleStore,
}

impl FileVehicleRepository {
    /// Open the repository at a store directory
    pub fn open(store_dir: PathBuf) -> Result<Self, Error> {
        Ok(Self {
            store: VehicleStore::open(store_dir)?,
        })
    }
}

impl VehicleRepository for FileVehicleRepository {
    fn find_all(&self) -> Result<Vec<Vehicle>, Error> {
        Ok(self.store.all().into_iter().cloned().collect())
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, Error> {
        Ok(self.store.get(id).cloned())
    }
}
