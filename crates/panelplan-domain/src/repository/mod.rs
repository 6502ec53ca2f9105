//! Repository trait definitions for the vehicle and panel registries

use panelplan_types::{Error, LoadingPlanRecord, LoadingPlanResult, PanelType, Vehicle};

/// Registry of transport vehicles
pub trait VehicleRepository {
    /// All registered vehicles
    fn find_all(&self) -> Result<Vec<Vehicle>, Error>;

    /// Find a vehicle by id
    fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, Error>;
}

/// Registry of panel types
pub trait PanelRepository {
    /// All registered panel types
    fn find_all(&self) -> Result<Vec<PanelType>, Error>;

    /// Find a panel type by id
    fn find_by_id(&self, id: i64) -> Result<Option<PanelType>, Error>;
}

/// History of computed loading plans
pub trait LoadingPlanRepository {
    /// Persist a plan for the given vehicle; returns the record id
    fn save(&mut self, vehicle_id: i64, plan: &LoadingPlanResult) -> Result<i64, Error>;

    /// All saved plans
    fn find_all(&self) -> Result<Vec<LoadingPlanRecord>, Error>;

    /// Find a saved plan by id
    fn find_by_id(&self, id: i64) -> Result<Option<LoadingPlanRecord>, Error>;

    /// Delete a saved plan; returns whether it existed
    fn delete(&mut self, id: i64) -> Result<bool, Error>;
}
