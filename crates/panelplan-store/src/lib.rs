//! JSON-file-backed stores for the panelplan registries

mod panels;
mod plans;
mod vehicles;

pub use panels::PanelStore;
pub use plans::PlanStore;
pub use vehicles::VehicleStore;
