//! Loading-plan calculation
//!
//! Plans each panel type sequentially: pallet size, stacking limit,
//! pallet count, pyramid column layout; then aggregates vehicle-level
//! volume and weight usage. The whole calculation is a pure transform
//! of its arguments.

use panelplan_types::{
    Error, LoadingPlanResult, PalletPlacement, PanelSummary, PanelType, Result, Vehicle,
};

use crate::constants::{pallet_weight, stacking_limit, PALLET_HEIGHT_MM};
use crate::model::PanelData;
use crate::repository::VehicleRepository;
use crate::service::pallet_selector::select_pallet;

/// Maximum pallets in one pyramid column, a transport stability
/// constraint
const MAX_PALLETS_PER_COLUMN: u32 = 6;

/// Gap between pyramid columns in cm
const COLUMN_SPACING_CM: f64 = 10.0;

/// Gap between pallets within a column in cm
const PALLET_SPACING_CM: f64 = 1.0;

/// Check a shipment request before planning.
///
/// A panel count of zero is legal (the type is skipped), but dimensions
/// and weight must be sane.
pub fn validate_panels(panels: &[PanelType]) -> Result<()> {
    if panels.is_empty() {
        return Err(Error::Validation("no panels provided".to_string()));
    }
    for panel in panels {
        if panel.width <= 0.0 || panel.length <= 0.0 || panel.thickness <= 0.0 {
            return Err(Error::Validation(format!(
                "panel {} has non-positive dimensions",
                panel.id
            )));
        }
        if panel.weight_per_sqm < 0.0 {
            return Err(Error::Validation(format!(
                "panel {} has negative weight per square meter",
                panel.id
            )));
        }
    }
    Ok(())
}

struct PlannedPanelType {
    placements: Vec<PalletPlacement>,
    summary: PanelSummary,
}

/// Plan pallets for a single panel type. Returns `None` when no panels
/// of the type are requested.
fn plan_panel_type(data: &PanelData) -> Option<PlannedPanelType> {
    let panel = &data.panel;
    if panel.count == 0 {
        return None;
    }

    let pallet = select_pallet(panel.width, panel.length);
    let max_stacking = stacking_limit(&panel.core, panel.width, panel.length);
    let single_pallet_weight = pallet_weight(panel.width, panel.length);

    let valid_count = panel.count.max(1);
    let pallet_count = valid_count.div_ceil(max_stacking);
    let full_pallet_load = valid_count.min(max_stacking);
    let remainder = valid_count % max_stacking;

    let net_weight = data.total_weight;
    let pallets_weight = pallet_count as f64 * single_pallet_weight;

    let summary = PanelSummary {
        panel_id: panel.id,
        color: panel.color.clone(),
        core: panel.core.clone(),
        width: panel.width,
        length: panel.length,
        count: panel.count,
        pallet_count,
        stack_per_pallet: full_pallet_load,
        net_weight,
        pallets_weight,
        total_weight: net_weight + pallets_weight,
    };

    // Footprints in cm for the layout
    let panel_width_cm = panel.width / 10.0;
    let panel_length_cm = panel.length / 10.0;

    // Distribute pallets round-robin into pyramid columns; only the
    // last-created pallet carries the remainder
    let column_count = pallet_count.div_ceil(MAX_PALLETS_PER_COLUMN) as usize;
    let mut columns: Vec<Vec<u32>> = vec![Vec::new(); column_count];
    for i in 0..pallet_count {
        let on_this_pallet = if i < pallet_count - 1 || remainder == 0 {
            max_stacking
        } else {
            remainder
        };
        columns[i as usize % column_count].push(on_this_pallet);
    }

    let mut placements = Vec::with_capacity(pallet_count as usize);
    let mut x = 0.0;
    for column in &mut columns {
        // Fuller pallets sit at the bottom of the column
        column.sort_by(|a, b| b.cmp(a));

        let mut y = 0.0;
        for &count in column.iter() {
            let stack_height = (PALLET_HEIGHT_MM + count as f64 * panel.thickness) / 10.0;
            placements.push(PalletPlacement {
                x,
                y,
                width: panel_width_cm,
                height: panel_length_cm,
                panel_id: panel.id,
                stack_height,
                count,
                pallet_length: pallet.length,
                pallet_width: pallet.width,
                pallet_weight: single_pallet_weight,
            });
            y += panel_length_cm + PALLET_SPACING_CM;
        }
        x += panel_width_cm + COLUMN_SPACING_CM;
    }

    Some(PlannedPanelType {
        placements,
        summary,
    })
}

/// Compute a loading plan for a vehicle and a list of panel types.
///
/// Panel types are processed in input order. Fails with a validation
/// error when the list is empty or a record is malformed.
pub fn calculate_loading_plan(vehicle: &Vehicle, panels: &[PanelType]) -> Result<LoadingPlanResult> {
    validate_panels(panels)?;

    let vehicle_volume = (vehicle.length * vehicle.width * vehicle.height) / 1_000_000.0;

    let enriched: Vec<PanelData> = panels.iter().map(PanelData::from_panel).collect();

    let mut placements = Vec::new();
    let mut panel_summary = Vec::new();
    let mut net_weight = 0.0;
    let mut pallets_weight = 0.0;

    for data in &enriched {
        if let Some(planned) = plan_panel_type(data) {
            net_weight += planned.summary.net_weight;
            pallets_weight += planned.summary.pallets_weight;
            placements.extend(planned.placements);
            panel_summary.push(planned.summary);
        }
    }

    // Raw panel material volume; pallet structure and void space are
    // deliberately not counted
    let used_volume: f64 = enriched
        .iter()
        .map(|d| {
            (d.panel.width / 1000.0)
                * (d.panel.length / 1000.0)
                * (d.panel.thickness / 1000.0)
                * d.panel.count as f64
        })
        .sum();

    let total_weight = net_weight + pallets_weight;
    let volume_percentage = (used_volume / vehicle_volume) * 100.0;
    let weight_percentage = (total_weight / vehicle.max_payload) * 100.0;

    let requires_multiple_vehicles = volume_percentage > 100.0 || weight_percentage > 100.0;
    let vehicle_count = (volume_percentage / 100.0)
        .ceil()
        .max((weight_percentage / 100.0).ceil()) as u32;

    Ok(LoadingPlanResult {
        pallets: placements,
        vehicle_length: vehicle.length,
        vehicle_width: vehicle.width,
        vehicle_height: vehicle.height,
        used_volume,
        total_volume: vehicle_volume,
        net_weight,
        pallets_weight,
        total_weight,
        volume_percentage,
        weight_percentage,
        requires_multiple_vehicles,
        vehicle_count,
        panel_summary,
    })
}

/// Resolve a vehicle from the registry and compute its loading plan.
pub fn calculate_for_vehicle(
    vehicles: &impl VehicleRepository,
    vehicle_id: i64,
    panels: &[PanelType],
) -> Result<LoadingPlanResult> {
    let vehicle = vehicles
        .find_by_id(vehicle_id)?
        .ok_or(Error::VehicleNotFound(vehicle_id))?;
    calculate_loading_plan(&vehicle, panels)
}
