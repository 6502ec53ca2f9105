//! File-based implementation of LoadingPlanRepository

use std::path::PathBuf;

use panelplan_domain::repository::LoadingPlanRepository;
use panelplan_store::PlanStore;
use panelplan_types::{Error, LoadingPlanRecord, LoadingPlanResult};

/// LoadingPlanRepository over the JSON plan store
pub struct FileLoadingPlanRepository {
    store: PlanStore,
}

impl FileLoadingPlanRepository {
    /// Open the repository at a store directory
    pub fn open(store_dir: PathBuf) -> Result<Self, Error> {
        Ok(Self {
            store: PlanStore::open(store_dir)?,
        })
    }
}

impl LoadingPlanRepository for FileLoadingPlanRepository {
    fn save(&mut self, vehicle_id: i64, plan: &LoadingPlanResult) -> Result<i64, Error> {
        self.store.add(vehicle_id, plan.clone())
    }

    fn find_all(&self) -> Result<Vec<LoadingPlanRecord>, Error> {
        Ok(self.store.all().into_iter().cloned().collect())
    }

    fn find_by_id(&self, id: i64) -> Result<Option<LoadingPlanRecord>, Error> {
        Ok(self.store.get(id).cloned())
    }

    fn delete(&mut self, id: i64) -> Result<bool, Error> {
        self.store.remove(id)
    }
}
