//! Output formatting module

use panelplan_types::{
    LoadingPlanRecord, LoadingPlanResult, OutputFormat, PanelType, Result, Vehicle,
};

/// Print a computed loading plan
pub fn output_plan(format: OutputFormat, plan: &LoadingPlanResult) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(plan)?);
        return Ok(());
    }

    println!("\nLoading Plan");
    println!("============");
    println!(
        "Vehicle interior: {:.0} x {:.0} x {:.0} cm",
        plan.vehicle_length, plan.vehicle_width, plan.vehicle_height
    );

    if !plan.panel_summary.is_empty() {
        println!();
        println!(
            "{:<6} {:<12} {:<5} {:<12} {:>6} {:>8} {:>10} {:>10} {:>10}",
            "Id", "Color", "Core", "Size (mm)", "Count", "Pallets", "Per plt", "Net kg", "Gross kg"
        );
        println!("{}", "-".repeat(88));
        for summary in &plan.panel_summary {
            println!(
                "{:<6} {:<12} {:<5} {:<12} {:>6} {:>8} {:>10} {:>10.2} {:>10.2}",
                summary.panel_id,
                summary.color,
                summary.core,
                format!("{:.0}x{:.0}", summary.width, summary.length),
                summary.count,
                summary.pallet_count,
                summary.stack_per_pallet,
                summary.net_weight,
                summary.total_weight
            );
        }
    }

    println!();
    println!("Pallets:         {}", plan.pallets.len());
    println!("Net weight:      {:.2} kg", plan.net_weight);
    println!("Pallet weight:   {:.2} kg", plan.pallets_weight);
    println!("Gross weight:    {:.2} kg", plan.total_weight);
    println!(
        "Volume:          {:.3} / {:.3} m³ ({:.1}%)",
        plan.used_volume, plan.total_volume, plan.volume_percentage
    );
    println!("Weight:          {:.1}% of max payload", plan.weight_percentage);

    if plan.requires_multiple_vehicles {
        println!(
            "\nShipment exceeds a single vehicle: {} vehicles needed",
            plan.vehicle_count
        );
    }

    Ok(())
}

/// Print the vehicle registry
pub fn output_vehicles(format: OutputFormat, vehicles: &[&Vehicle]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&vehicles)?);
        return Ok(());
    }

    println!(
        "{:<6} {:<26} {:>10} {:>9} {:>9} {:>12}",
        "Id", "Name", "Length cm", "Width cm", "Height cm", "Payload kg"
    );
    println!("{}", "-".repeat(78));
    for vehicle in vehicles {
        println!(
            "{:<6} {:<26} {:>10.0} {:>9.0} {:>9.0} {:>12.0}",
            vehicle.id, vehicle.name, vehicle.length, vehicle.width, vehicle.height, vehicle.max_payload
        );
    }

    Ok(())
}

/// Print the panel registry
pub fn output_panels(format: OutputFormat, panels: &[&PanelType]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&panels)?);
        return Ok(());
    }

    println!(
        "{:<6} {:<12} {:<5} {:>9} {:>10} {:>10} {:>6} {:>8}",
        "Id", "Color", "Core", "Width mm", "Length mm", "Thick mm", "Count", "kg/m²"
    );
    println!("{}", "-".repeat(74));
    for panel in panels {
        println!(
            "{:<6} {:<12} {:<5} {:>9.0} {:>10.0} {:>10.1} {:>6} {:>8.2}",
            panel.id,
            panel.color,
            panel.core,
            panel.width,
            panel.length,
            panel.thickness,
            panel.count,
            panel.weight_per_sqm
        );
    }

    Ok(())
}

/// Print the saved-plan history
pub fn output_plan_list(format: OutputFormat, records: &[&LoadingPlanRecord]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!(
        "{:<6} {:<9} {:<17} {:>8} {:>12} {:>10}",
        "Id", "Vehicle", "Created", "Pallets", "Gross kg", "Vehicles"
    );
    println!("{}", "-".repeat(68));
    for record in records {
        println!(
            "{:<6} {:<9} {:<17} {:>8} {:>12.2} {:>10}",
            record.id,
            record.vehicle_id,
            record.created_at.format("%Y-%m-%d %H:%M").to_string(),
            record.plan.pallets.len(),
            record.total_weight,
            record.plan.vehicle_count
        );
    }

    Ok(())
}
