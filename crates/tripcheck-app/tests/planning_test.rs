//! End-to-end planning through a user gazetteer file

use tripcheck_app::app::{plan_trip, PlanningOptions, TripRequest};
use tripcheck_app::config::Config;
use tripcheck_app::repository::open_resolver;
use tripcheck_domain::model::DutyKind;
use tripcheck_types::Error;

fn config_with_gazetteer(dir: &tempfile::TempDir, csv: &str) -> Config {
    let path = dir.path().join("depots.csv");
    std::fs::write(&path, csv).unwrap();
    Config {
        gazetteer_path: Some(path),
        ..Config::default()
    }
}

#[test]
fn user_gazetteer_extends_builtin_cities() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_with_gazetteer(&dir, "name,lat,lng\nReno Depot,39.5296,-119.8138\n");
    let resolver = open_resolver(&config).unwrap();

    let plan = plan_trip(
        &TripRequest::new("Reno Depot", "Phoenix", "Los Angeles", 20.0),
        &resolver,
        &PlanningOptions::new(),
    )
    .unwrap();

    assert_eq!(plan.result.legs[0].from.name, "Reno Depot");
    assert!(plan.result.is_compliant);
    let kinds: Vec<DutyKind> = plan.result.log.iter().map(|e| e.kind).collect();
    assert!(kinds.contains(&DutyKind::Pickup));
    assert_eq!(kinds.last(), Some(&DutyKind::Dropoff));
}

#[test]
fn user_gazetteer_overrides_builtin_name() {
    let dir = tempfile::tempdir().unwrap();
    // a yard outside town, deliberately not the city centre
    let config = config_with_gazetteer(&dir, "Denver,39.80,-104.70\n");
    let resolver = open_resolver(&config).unwrap();
    let wp = resolver.resolve("denver", "pickupLocation").unwrap();
    assert!((wp.coordinate.lat - 39.80).abs() < 1e-9);

    let names: Vec<String> = resolver
        .known_locations()
        .unwrap()
        .into_iter()
        .map(|w| w.name)
        .collect();
    assert!(names.contains(&"Denver".to_string()));
    assert!(names.contains(&"Chicago, IL".to_string()));
}

#[test]
fn missing_gazetteer_is_reported() {
    let config = Config {
        gazetteer_path: Some("/definitely/not/here.csv".into()),
        ..Config::default()
    };
    let err = open_resolver(&config).err().unwrap();
    assert!(matches!(err, Error::FileNotFound(_)));
}

#[test]
fn plan_serializes_with_spec_field_names() {
    let plan = plan_trip(
        &TripRequest::new("Dallas", "Atlanta", "Miami", 65.0),
        &open_resolver(&Config::default()).unwrap(),
        &PlanningOptions::new(),
    )
    .unwrap();
    let json = serde_json::to_value(&plan.result).unwrap();
    for key in [
        "legs",
        "fuelStops",
        "log",
        "totalDutyHours",
        "cycleHoursUsed",
        "hoursRemaining",
        "isCompliant",
    ] {
        assert!(json.get(key).is_some(), "missing {}", key);
    }
    assert_eq!(json["isCompliant"], false);
    assert_eq!(json["log"][0]["kind"], "driving");
}
