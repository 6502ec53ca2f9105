//! Repository adapters for the persistence layer

use panelplan_infra::persistence::{
    FileLoadingPlanRepository, FilePanelRepository, FileVehicleRepository,
};
use panelplan_store::{PanelStore, VehicleStore};
use panelplan_types::Result;

use crate::config::Config;

/// Open the vehicle store for registry mutations
pub fn open_vehicle_store(config: &Config) -> Result<VehicleStore> {
    VehicleStore::open(config.store_dir()?)
}

/// Open the panel store for registry mutations
pub fn open_panel_store(config: &Config) -> Result<PanelStore> {
    PanelStore::open(config.store_dir()?)
}

/// Open the read-side vehicle repository
pub fn open_vehicle_repo(config: &Config) -> Result<FileVehicleRepository> {
    FileVehicleRepository::open(config.store_dir()?)
}

/// Open the read-side panel repository
pub fn open_panel_repo(config: &Config) -> Result<FilePanelRepository> {
    FilePanelRepository::open(config.store_dir()?)
}

/// Open the loading-plan history repository
pub fn open_plan_repo(config: &Config) -> Result<FileLoadingPlanRepository> {
    FileLoadingPlanRepository::open(config.store_dir()?)
}
