//! Panel type enriched with derived area and weight figures

use panelplan_types::PanelType;

/// A panel type with its area and weight precomputed for planning
#[derive(Debug, Clone)]
pub struct PanelData {
    pub panel: PanelType,
    /// Single panel face area in m²
    pub area: f64,
    /// Face area of all panels of this type in m²
    pub total_area: f64,
    /// Net weight of all panels of this type in kg
    pub total_weight: f64,
}

impl PanelData {
    pub fn from_panel(panel: &PanelType) -> Self {
        let area = panel.area_sqm();
        let total_area = area * panel.count as f64;
        let total_weight = total_area * panel.weight_per_sqm;
        Self {
            panel: panel.clone(),
            area,
            total_area,
            total_weight,
        }
    }
}
