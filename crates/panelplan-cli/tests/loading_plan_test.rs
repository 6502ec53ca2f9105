//! Integration tests for the loading-plan pipeline

use std::io::Write;

use panelplan_app::app::{run_loading_plan, PlanOptions};
use panelplan_domain::repository::LoadingPlanRepository;
use panelplan_infra::panel_csv::load_panels_from_csv;
use panelplan_infra::persistence::{FileLoadingPlanRepository, FileVehicleRepository};
use panelplan_store::PlanStore;
use panelplan_types::{Error, PanelType};
use tempfile::tempdir;

fn tir_shipment() -> Vec<PanelType> {
    vec![PanelType {
        id: 1,
        color: "RAL 9016".to_string(),
        core: "PE".to_string(),
        width: 1250.0,
        length: 2800.0,
        thickness: 4.0,
        count: 50,
        weight_per_sqm: 5.60,
    }]
}

/// Full scenario: TIR vehicle, one PE panel type, 50 units
#[test]
fn test_tir_end_to_end() {
    let dir = tempdir().unwrap();
    let vehicles = FileVehicleRepository::open(dir.path().to_path_buf()).unwrap();
    let mut plans = FileLoadingPlanRepository::open(dir.path().to_path_buf()).unwrap();

    let outcome = run_loading_plan(
        &vehicles,
        &mut plans,
        4, // seeded TIR
        &tir_shipment(),
        &PlanOptions::default(),
    )
    .unwrap();

    let plan = &outcome.plan;
    assert_eq!(plan.pallets.len(), 1);
    assert_eq!(plan.pallets[0].count, 50);
    assert!((plan.net_weight - 980.0).abs() < 0.01);
    assert!((plan.pallets_weight - 63.86).abs() < 0.01);
    assert!((plan.total_weight - 1043.86).abs() < 0.01);
    assert!(!plan.requires_multiple_vehicles);
    assert_eq!(plan.vehicle_count, 1);
}

/// Saved plans survive a store reload
#[test]
fn test_saved_plan_roundtrip() {
    let dir = tempdir().unwrap();
    let vehicles = FileVehicleRepository::open(dir.path().to_path_buf()).unwrap();
    let mut plans = FileLoadingPlanRepository::open(dir.path().to_path_buf()).unwrap();

    let options = PlanOptions {
        save: true,
        verbose: false,
    };
    let outcome = run_loading_plan(&vehicles, &mut plans, 4, &tir_shipment(), &options).unwrap();
    let saved_id = outcome.saved_id.unwrap();

    let reloaded = PlanStore::open(dir.path().to_path_buf()).unwrap();
    let record = reloaded.get(saved_id).unwrap();
    assert_eq!(record.vehicle_id, 4);
    assert!((record.total_weight - outcome.plan.total_weight).abs() < 1e-9);
    assert_eq!(record.plan.pallets.len(), outcome.plan.pallets.len());
}

/// CSV shipment list feeds the calculator directly
#[test]
fn test_csv_to_plan_pipeline() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("shipment.csv");
    let mut file = std::fs::File::create(&csv_path).unwrap();
    file.write_all(
        b"color,core,width,length,thickness,count,weight_per_sqm\n\
          RAL 9016,PE,1250,2800,4,50,5.60\n\
          RAL 7016,A2,1500,3200,6,90,9.20\n",
    )
    .unwrap();

    let panels = load_panels_from_csv(&csv_path).unwrap();
    assert_eq!(panels.len(), 2);

    let vehicles = FileVehicleRepository::open(dir.path().to_path_buf()).unwrap();
    let mut plans = FileLoadingPlanRepository::open(dir.path().to_path_buf()).unwrap();
    let outcome = run_loading_plan(
        &vehicles,
        &mut plans,
        4,
        &panels,
        &PlanOptions::default(),
    )
    .unwrap();

    // A2 1500x3200 stacks 29 per pallet: 90 panels need 4 pallets
    let a2 = &outcome.plan.panel_summary[1];
    assert_eq!(a2.pallet_count, 4);
    assert_eq!(a2.stack_per_pallet, 29);
    let placed: u32 = outcome
        .plan
        .pallets
        .iter()
        .filter(|p| p.panel_id == 2)
        .map(|p| p.count)
        .sum();
    assert_eq!(placed, 90);
}

/// Unknown vehicle ids surface as a not-found error
#[test]
fn test_unknown_vehicle() {
    let dir = tempdir().unwrap();
    let vehicles = FileVehicleRepository::open(dir.path().to_path_buf()).unwrap();
    let mut plans = FileLoadingPlanRepository::open(dir.path().to_path_buf()).unwrap();

    let result = run_loading_plan(
        &vehicles,
        &mut plans,
        42,
        &tir_shipment(),
        &PlanOptions::default(),
    );
    assert!(matches!(result, Err(Error::VehicleNotFound(42))));
}

/// Deleting a saved plan removes it from the history
#[test]
fn test_delete_saved_plan() {
    let dir = tempdir().unwrap();
    let vehicles = FileVehicleRepository::open(dir.path().to_path_buf()).unwrap();
    let mut plans = FileLoadingPlanRepository::open(dir.path().to_path_buf()).unwrap();

    let options = PlanOptions {
        save: true,
        verbose: false,
    };
    let outcome = run_loading_plan(&vehicles, &mut plans, 1, &tir_shipment(), &options).unwrap();
    let id = outcome.saved_id.unwrap();

    assert!(plans.delete(id).unwrap());
    assert!(plans.find_by_id(id).unwrap().is_none());
    assert!(!plans.delete(id).unwrap());
}
