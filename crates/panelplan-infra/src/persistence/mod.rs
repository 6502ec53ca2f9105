//! Store-backed implementations of the domain repository traits

pub mod file_panel_repo;
pub mod file_plan_repo;
pub mod file_vehicle_repo;

pub use file_panel_repo::FilePanelRepository;
pub use file_plan_repo::FileLoadingPlanRepository;
pub use file_vehicle_repo::FileVehicleRepository;
