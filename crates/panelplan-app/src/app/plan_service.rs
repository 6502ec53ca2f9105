//! Loading-plan service - the main use case
//!
//! Resolves the vehicle, validates the request, runs the calculator,
//! and optionally persists the result in the plan history.

use panelplan_domain::repository::{LoadingPlanRepository, VehicleRepository};
use panelplan_domain::service::calculate_for_vehicle;
use panelplan_types::{LoadingPlanResult, PanelType, Result};

/// Options for a plan run
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// Persist the computed plan in the plan history
    pub save: bool,

    /// Verbose progress to stderr
    pub verbose: bool,
}

/// Outcome of a plan run
#[derive(Debug)]
pub struct PlanOutcome {
    pub plan: LoadingPlanResult,

    /// Id of the saved history record, when saving was requested
    pub saved_id: Option<i64>,
}

/// Compute (and optionally persist) a loading plan.
pub fn run_loading_plan(
    vehicles: &impl VehicleRepository,
    plans: &mut impl LoadingPlanRepository,
    vehicle_id: i64,
    panels: &[PanelType],
    options: &PlanOptions,
) -> Result<PlanOutcome> {
    if options.verbose {
        eprintln!(
            "Calculating loading plan for {} panel types on vehicle {}",
            panels.len(),
            vehicle_id
        );
    }

    let plan = calculate_for_vehicle(vehicles, vehicle_id, panels)?;

    if options.verbose {
        eprintln!("Net panel weight: {:.2} kg", plan.net_weight);
        eprintln!("Pallet weight: {:.2} kg", plan.pallets_weight);
        eprintln!("Total gross weight: {:.2} kg", plan.total_weight);
    }

    let saved_id = if options.save {
        Some(plans.save(vehicle_id, &plan)?)
    } else {
        None
    };

    Ok(PlanOutcome { plan, saved_id })
}
