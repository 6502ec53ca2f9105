//! CSV loader for panel shipment lists

use std::path::Path;

use panelplan_types::{Error, PanelType, Result};
use serde::Deserialize;

/// One row of a panel list CSV
#[derive(Debug, Deserialize)]
struct PanelRow {
    color: String,
    core: String,
    width: f64,
    length: f64,
    thickness: f64,
    count: u32,
    weight_per_sqm: f64,
}

/// Load panel types from a CSV file.
///
/// Expected header:
/// `color,core,width,length,thickness,count,weight_per_sqm`
/// with dimensions in mm and weight in kg/m². Rows become panel ids 1..n
/// in file order.
pub fn load_panels_from_csv(path: &Path) -> Result<Vec<PanelType>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::Csv(e.to_string()))?;

    let mut panels = Vec::new();
    for (idx, row) in reader.deserialize::<PanelRow>().enumerate() {
        let row = row.map_err(|e| Error::Csv(format!("row {}: {}", idx + 2, e)))?;
        panels.push(PanelType {
            id: (idx + 1) as i64,
            color: row.color,
            core: row.core,
            width: row.width,
            length: row.length,
            thickness: row.thickness,
            count: row.count,
            weight_per_sqm: row.weight_per_sqm,
        });
    }

    Ok(panels)
}
