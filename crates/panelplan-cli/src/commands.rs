//! Command handlers

use std::path::PathBuf;

use panelplan_app::app::{run_loading_plan, PlanOptions};
use panelplan_app::config::Config;
use panelplan_app::export::export_plan_to_excel;
use panelplan_app::repository::{
    open_panel_repo, open_panel_store, open_plan_repo, open_vehicle_repo, open_vehicle_store,
};
use panelplan_domain::repository::{LoadingPlanRepository, PanelRepository};
use panelplan_infra::panel_csv::load_panels_from_csv;
use panelplan_infra::vehicle_fleet::load_vehicles_from_toml;
use panelplan_types::{Error, PanelType, Result, Vehicle};

use crate::cli::{Cli, Commands};
use crate::output::{output_plan, output_plan_list, output_panels, output_vehicles};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config and apply CLI overrides
    let mut config = Config::load()?;

    if let Some(ref dir) = cli.store_dir {
        config.store_dir = Some(dir.clone());
    }
    let format = cli.format.unwrap_or(config.output_format);
    let verbose = cli.verbose;

    match cli.command {
        Commands::Vehicles => {
            let store = open_vehicle_store(&config)?;
            output_vehicles(format, &store.all())?;
        }

        Commands::AddVehicle {
            name,
            length,
            width,
            height,
            max_payload,
        } => {
            let mut store = open_vehicle_store(&config)?;
            let id = store.add(Vehicle {
                id: 0,
                name,
                length,
                width,
                height,
                max_payload,
            })?;
            println!("Registered vehicle {}", id);
        }

        Commands::RemoveVehicle { id } => {
            let mut store = open_vehicle_store(&config)?;
            if !store.remove(id)? {
                return Err(Error::VehicleNotFound(id));
            }
            println!("Removed vehicle {}", id);
        }

        Commands::ImportVehicles { path } => {
            let vehicles = load_vehicles_from_toml(&path)?;
            let mut store = open_vehicle_store(&config)?;
            let count = vehicles.len();
            for vehicle in vehicles {
                store.add(vehicle)?;
            }
            println!("Imported {} vehicles from {}", count, path.display());
        }

        Commands::Panels => {
            let store = open_panel_store(&config)?;
            output_panels(format, &store.all())?;
        }

        Commands::AddPanel {
            color,
            core,
            width,
            length,
            thickness,
            count,
            weight_per_sqm,
        } => {
            let mut store = open_panel_store(&config)?;
            let id = store.add(PanelType {
                id: 0,
                color,
                core,
                width,
                length,
                thickness,
                count,
                weight_per_sqm,
            })?;
            println!("Registered panel type {}", id);
        }

        Commands::RemovePanel { id } => {
            let mut store = open_panel_store(&config)?;
            if !store.remove(id)? {
                return Err(Error::PanelNotFound(id));
            }
            println!("Removed panel type {}", id);
        }

        Commands::Plan {
            panels,
            vehicle,
            save,
            output,
        } => {
            let vehicle_id = vehicle.or(config.default_vehicle).ok_or_else(|| {
                Error::Validation(
                    "no vehicle specified; pass --vehicle or set a config default".to_string(),
                )
            })?;

            let panel_list = match panels {
                Some(ref path) => load_panels_from_csv(path)?,
                None => open_panel_repo(&config)?.find_all()?,
            };

            let vehicles = open_vehicle_repo(&config)?;
            let mut plans = open_plan_repo(&config)?;
            let options = PlanOptions { save, verbose };
            let outcome =
                run_loading_plan(&vehicles, &mut plans, vehicle_id, &panel_list, &options)?;

            if let Some(ref path) = output {
                std::fs::write(path, serde_json::to_string_pretty(&outcome.plan)?)?;
                eprintln!("Plan written to {}", path.display());
            }

            output_plan(format, &outcome.plan)?;

            if let Some(id) = outcome.saved_id {
                eprintln!("Saved as plan {}", id);
            }
        }

        Commands::Plans => {
            let plans = open_plan_repo(&config)?;
            let records = plans.find_all()?;
            output_plan_list(format, &records.iter().collect::<Vec<_>>())?;
        }

        Commands::ShowPlan { id } => {
            let plans = open_plan_repo(&config)?;
            let record = plans.find_by_id(id)?.ok_or(Error::PlanNotFound(id))?;
            output_plan(format, &record.plan)?;
        }

        Commands::DeletePlan { id } => {
            let mut plans = open_plan_repo(&config)?;
            if !plans.delete(id)? {
                return Err(Error::PlanNotFound(id));
            }
            println!("Deleted plan {}", id);
        }

        Commands::Export { id, output } => {
            let plans = open_plan_repo(&config)?;
            let record = plans.find_by_id(id)?.ok_or(Error::PlanNotFound(id))?;
            let output_path = output.unwrap_or_else(|| PathBuf::from(format!("plan-{}.xlsx", id)));
            export_plan_to_excel(&record, &output_path)?;
            println!("Exported plan {} to {}", id, output_path.display());
        }

        Commands::Config {
            show,
            set_format,
            set_store_dir,
            set_vehicle,
        } => {
            let mut changed = false;
            if let Some(fmt) = set_format {
                config.output_format = fmt;
                changed = true;
            }
            if let Some(dir) = set_store_dir {
                config.store_dir = Some(dir);
                changed = true;
            }
            if let Some(id) = set_vehicle {
                config.default_vehicle = Some(id);
                changed = true;
            }

            if changed {
                config.save()?;
                println!("Configuration saved");
            }
            if show || !changed {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}
