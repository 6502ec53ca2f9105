//! Excel export of loading plans

use std::path::Path;

use panelplan_types::{Error, LoadingPlanRecord, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

/// Export a saved loading plan to an Excel file
pub fn export_plan_to_excel(record: &LoadingPlanRecord, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, record)?;

    let panels_sheet = workbook.add_worksheet();
    write_panels_sheet(panels_sheet, record)?;

    let pallets_sheet = workbook.add_worksheet();
    write_pallets_sheet(pallets_sheet, record)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, record: &LoadingPlanRecord) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let plan = &record.plan;

    sheet
        .write_string_with_format(0, 0, "Loading Plan", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let rows: [(&str, String); 12] = [
        ("Created:", record.created_at.to_rfc3339()),
        ("Vehicle id:", record.vehicle_id.to_string()),
        (
            "Vehicle interior (cm):",
            format!(
                "{} x {} x {}",
                plan.vehicle_length, plan.vehicle_width, plan.vehicle_height
            ),
        ),
        ("Pallets:", plan.pallets.len().to_string()),
        ("Used volume (m³):", format!("{:.3}", plan.used_volume)),
        ("Vehicle volume (m³):", format!("{:.3}", plan.total_volume)),
        ("Net panel weight (kg):", format!("{:.2}", plan.net_weight)),
        ("Pallet weight (kg):", format!("{:.2}", plan.pallets_weight)),
        ("Gross weight (kg):", format!("{:.2}", plan.total_weight)),
        ("Volume use:", format!("{:.1}%", plan.volume_percentage)),
        ("Weight use:", format!("{:.1}%", plan.weight_percentage)),
        ("Vehicles needed:", plan.vehicle_count.to_string()),
    ];

    for (idx, (label, value)) in rows.iter().enumerate() {
        let row = (idx + 2) as u32;
        sheet
            .write_string(row, 0, *label)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, value)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    if plan.requires_multiple_vehicles {
        sheet
            .write_string_with_format(15, 0, "SHIPMENT EXCEEDS SINGLE VEHICLE", &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    Ok(())
}

fn write_panels_sheet(sheet: &mut Worksheet, record: &LoadingPlanRecord) -> Result<()> {
    sheet
        .set_name("Panels")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    let headers = [
        "Panel id",
        "Color",
        "Core",
        "Width (mm)",
        "Length (mm)",
        "Count",
        "Pallets",
        "Per pallet",
        "Net (kg)",
        "Pallets (kg)",
        "Gross (kg)",
    ];

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, summary) in record.plan.panel_summary.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        sheet
            .write_number(row, 0, summary.panel_id as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, &summary.color)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 2, &summary.core)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 3, summary.width)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 4, summary.length)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 5, summary.count as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 6, summary.pallet_count as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 7, summary.stack_per_pallet as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 8, summary.net_weight)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 9, summary.pallets_weight)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 10, summary.total_weight)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    Ok(())
}

fn write_pallets_sheet(sheet: &mut Worksheet, record: &LoadingPlanRecord) -> Result<()> {
    sheet
        .set_name("Pallets")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    let headers = [
        "Panel id",
        "X (cm)",
        "Y (cm)",
        "Stack height (cm)",
        "Panels",
        "Pallet length (mm)",
        "Pallet width (mm)",
        "Pallet weight (kg)",
    ];

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, pallet) in record.plan.pallets.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        sheet
            .write_number(row, 0, pallet.panel_id as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, pallet.x)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 2, pallet.y)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 3, pallet.stack_height)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 4, pallet.count as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 5, pallet.pallet_length)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 6, pallet.pallet_width)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 7, pallet.pallet_weight)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use panelplan_types::{LoadingPlanResult, PalletPlacement, PanelSummary};

    fn sample_record() -> LoadingPlanRecord {
        LoadingPlanRecord {
            id: 1,
            vehicle_id: 4,
            total_volume: 89.964,
            used_volume: 0.7,
            total_weight: 1043.86,
            plan: LoadingPlanResult {
                pallets: vec![PalletPlacement {
                    x: 0.0,
                    y: 0.0,
                    width: 125.0,
                    height: 280.0,
                    panel_id: 1,
                    stack_height: 40.0,
                    count: 50,
                    pallet_length: 3010.0,
                    pallet_width: 1250.0,
                    pallet_weight: 63.86,
                }],
                vehicle_length: 1360.0,
                vehicle_width: 245.0,
                vehicle_height: 270.0,
                used_volume: 0.7,
                total_volume: 89.964,
                net_weight: 980.0,
                pallets_weight: 63.86,
                total_weight: 1043.86,
                volume_percentage: 0.78,
                weight_percentage: 4.01,
                requires_multiple_vehicles: false,
                vehicle_count: 1,
                panel_summary: vec![PanelSummary {
                    panel_id: 1,
                    color: "RAL 9016".to_string(),
                    core: "PE".to_string(),
                    width: 1250.0,
                    length: 2800.0,
                    count: 50,
                    pallet_count: 1,
                    stack_per_pallet: 50,
                    net_weight: 980.0,
                    pallets_weight: 63.86,
                    total_weight: 1043.86,
                }],
            },
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.xlsx");
        export_plan_to_excel(&sample_record(), &path).unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
