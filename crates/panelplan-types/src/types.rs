//! Shared data types for vehicles, panels, and loading plans

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Transport vehicle with interior dimensions and payload limit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    /// Display name (e.g., "40\" konteyner", "TIR")
    pub name: String,
    /// Interior length in centimeters
    pub length: f64,
    /// Interior width in centimeters
    pub width: f64,
    /// Interior height in centimeters
    pub height: f64,
    /// Maximum payload in kilograms
    pub max_payload: f64,
}

/// Panel core material classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoreType {
    /// Polyethylene core
    Pe,
    /// Fire-retardant core
    Fr,
    /// Non-combustible mineral core
    A2,
}

impl CoreType {
    /// Parse a core designation as it appears on order sheets.
    ///
    /// Returns `None` for unrecognized designations; callers fall back to
    /// conservative stacking defaults rather than failing.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PE" => Some(CoreType::Pe),
            "FR" => Some(CoreType::Fr),
            "A2" => Some(CoreType::A2),
            _ => None,
        }
    }
}

/// One panel type in a shipment request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelType {
    pub id: i64,
    /// Surface color (e.g., "RAL 9016")
    pub color: String,
    /// Core designation: "PE", "FR" or "A2". Kept as a free string;
    /// unknown cores get the default stacking limit instead of an error.
    pub core: String,
    /// Panel width in millimeters
    pub width: f64,
    /// Panel length in millimeters
    pub length: f64,
    /// Panel thickness in millimeters
    pub thickness: f64,
    /// Number of panels of this type
    pub count: u32,
    /// Weight per square meter in kilograms
    pub weight_per_sqm: f64,
}

impl PanelType {
    /// Face area of a single panel in square meters
    pub fn area_sqm(&self) -> f64 {
        (self.width * self.length) / 1_000_000.0
    }
}

/// One physical pallet placed in the vehicle
///
/// Positions and footprints are a layout heuristic for visualization,
/// not a collision-checked packing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PalletPlacement {
    /// X offset in cm (column axis)
    pub x: f64,
    /// Y offset in cm (row axis within a column)
    pub y: f64,
    /// Panel footprint width in cm
    pub width: f64,
    /// Panel footprint length in cm
    pub height: f64,
    pub panel_id: i64,
    /// Pallet base plus panel stack, in cm
    pub stack_height: f64,
    /// Panels carried by this pallet
    pub count: u32,
    /// Pallet length in mm
    pub pallet_length: f64,
    /// Pallet width in mm
    pub pallet_width: f64,
    /// Empty pallet weight in kg
    pub pallet_weight: f64,
}

/// Per-panel-type aggregate of a loading plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelSummary {
    pub panel_id: i64,
    pub color: String,
    pub core: String,
    pub width: f64,
    pub length: f64,
    pub count: u32,
    /// Pallets required for this panel type
    pub pallet_count: u32,
    /// Panels on a full pallet
    pub stack_per_pallet: u32,
    /// Net panel weight in kg
    pub net_weight: f64,
    /// Combined empty-pallet weight in kg
    pub pallets_weight: f64,
    /// Gross weight in kg (panels + pallets)
    pub total_weight: f64,
}

/// Complete loading plan for one vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadingPlanResult {
    pub pallets: Vec<PalletPlacement>,
    pub vehicle_length: f64,
    pub vehicle_width: f64,
    pub vehicle_height: f64,
    /// Raw panel material volume in m³
    pub used_volume: f64,
    /// Vehicle interior volume in m³
    pub total_volume: f64,
    /// Net panel weight in kg
    pub net_weight: f64,
    /// Combined empty-pallet weight in kg
    pub pallets_weight: f64,
    /// Gross weight in kg
    pub total_weight: f64,
    pub volume_percentage: f64,
    pub weight_percentage: f64,
    pub requires_multiple_vehicles: bool,
    /// Estimated vehicles needed for the full shipment
    pub vehicle_count: u32,
    pub panel_summary: Vec<PanelSummary>,
}

/// A saved loading plan with its request context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadingPlanRecord {
    pub id: i64,
    pub vehicle_id: i64,
    pub total_volume: f64,
    pub used_volume: f64,
    pub total_weight: f64,
    pub plan: LoadingPlanResult,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_type_parse() {
        assert_eq!(CoreType::parse("PE"), Some(CoreType::Pe));
        assert_eq!(CoreType::parse("fr"), Some(CoreType::Fr));
        assert_eq!(CoreType::parse(" a2 "), Some(CoreType::A2));
        assert_eq!(CoreType::parse("XPS"), None);
        assert_eq!(CoreType::parse(""), None);
    }

    #[test]
    fn test_panel_area() {
        let panel = PanelType {
            id: 1,
            color: "RAL 9016".to_string(),
            core: "PE".to_string(),
            width: 1250.0,
            length: 2800.0,
            thickness: 4.0,
            count: 50,
            weight_per_sqm: 5.60,
        };
        assert!((panel.area_sqm() - 3.5).abs() < 1e-9);
    }
}
