//! CLI definition using clap

use clap::{Parser, Subcommand};
use panelplan_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "panelplan")]
#[command(version)]
#[command(about = "Cargo loading-plan calculator for composite panel shipments")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Store directory override
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List registered vehicles
    Vehicles,

    /// Register a vehicle
    AddVehicle {
        /// Display name (e.g., "40\" konteyner")
        #[arg(long)]
        name: String,

        /// Interior length in cm
        #[arg(long)]
        length: f64,

        /// Interior width in cm
        #[arg(long)]
        width: f64,

        /// Interior height in cm
        #[arg(long)]
        height: f64,

        /// Maximum payload in kg
        #[arg(long)]
        max_payload: f64,
    },

    /// Remove a vehicle by id
    RemoveVehicle {
        /// Vehicle id
        id: i64,
    },

    /// Import vehicles from a fleet TOML file
    ImportVehicles {
        /// Path to fleet TOML ([[vehicles]] entries)
        path: PathBuf,
    },

    /// List registered panel types
    Panels,

    /// Register a panel type
    AddPanel {
        /// Surface color (e.g., "RAL 9016")
        #[arg(long)]
        color: String,

        /// Core material: PE, FR or A2
        #[arg(long)]
        core: String,

        /// Panel width in mm
        #[arg(long)]
        width: f64,

        /// Panel length in mm
        #[arg(long)]
        length: f64,

        /// Panel thickness in mm
        #[arg(long)]
        thickness: f64,

        /// Number of panels
        #[arg(long)]
        count: u32,

        /// Weight per square meter in kg
        #[arg(long)]
        weight_per_sqm: f64,
    },

    /// Remove a panel type by id
    RemovePanel {
        /// Panel type id
        id: i64,
    },

    /// Compute a loading plan
    Plan {
        /// CSV panel list; uses the panel registry when omitted
        panels: Option<PathBuf>,

        /// Vehicle id. Uses the config default if not specified.
        #[arg(long)]
        vehicle: Option<i64>,

        /// Save the plan to the plan history
        #[arg(long)]
        save: bool,

        /// Write the plan as JSON to a file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// List saved plans
    Plans,

    /// Show a saved plan
    ShowPlan {
        /// Saved plan id
        id: i64,
    },

    /// Delete a saved plan
    DeletePlan {
        /// Saved plan id
        id: i64,
    },

    /// Export a saved plan to Excel
    Export {
        /// Saved plan id
        id: i64,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Set store directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Set default vehicle id
        #[arg(long)]
        set_vehicle: Option<i64>,
    },
}
