//! File-based implementation of PanelRepository

use std::path::PathBuf;

use panelplan_domain::repository::PanelRepository;
use panelplan_store::PanelStore;
use panelplan_types::{Error, PanelType};

/// PanelRepository over the JSON panel store
pub struct FilePanelRepository {
    store: PanelStore,
}

impl FilePanelRepository {
    /// Open the repository at a store directory
    pub fn open(store_dir: PathBuf) -> Result<Self, Error> {
        Ok(Self {
            store: PanelStore::open(store_dir)?,
        })
    }
}

impl PanelRepository for FilePanelRepository {
    fn find_all(&self) -> Result<Vec<PanelType>, Error> {
        Ok(self.store.all().into_iter().cloned().collect())
    }

    fn find_by_id(&self, id: i64) -> Result<Option<PanelType>, Error> {
        Ok(self.store.get(id).cloned())
    }
}
