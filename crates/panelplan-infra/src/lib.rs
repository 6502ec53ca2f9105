//! Infrastructure layer: file loaders and store-backed repositories

pub mod panel_csv;
pub mod persistence;
pub mod vehicle_fleet;
