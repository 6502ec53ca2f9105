//! Domain services

pub mod loading_plan;
pub mod pallet_selector;

pub use loading_plan::{calculate_for_vehicle, calculate_loading_plan, validate_panels};
pub use pallet_selector::{select_pallet, select_pallet_from};
