//! Session protocol tests driven through in-memory readers/writers.

use intercept_cli::Session;
use intercept_core::{CameraPresetRegistry, CameraProfile, DetectionRules};
use serde_json::Value;
use std::io::Cursor;

fn run(input: &str) -> (Session, Vec<Value>) {
    let mut session = Session::new(CameraPresetRegistry::new(), DetectionRules::default());
    let mut output = Vec::new();
    session
        .run(Cursor::new(input.as_bytes()), &mut output)
        .expect("session should run to EOF");

    let responses = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    (session, responses)
}

#[test]
fn test_upsert_then_evaluate_saved_preset() {
    let input = r#"
{"op": "upsert", "name": "Tele 12mm", "profile": {"w": 6.17, "h": 4.55, "f": 12.0, "r": 4056}}
{"op": "evaluate", "camera": "Tele 12mm", "scenario": {"pitch_deg": 0, "horizontal_distance_m": 100, "target_size_m": 0.3}}
{"op": "list"}
"#;
    let (session, responses) = run(input);
    assert_eq!(responses.len(), 3);

    assert_eq!(responses[0]["ok"], true);
    assert_eq!(responses[0]["replaced"], false);

    let report = &responses[1]["report"];
    assert_eq!(report["camera"], "Tele 12mm");
    assert_eq!(report["result"]["is_visible"], true);
    // 4056 * 0.3 * 12 / (6.17 * 100)
    let px = report["result"]["pixels_on_target"].as_f64().unwrap();
    assert!((px - 23.665).abs() < 0.01, "got {px}");

    let names = responses[2]["names"].as_array().unwrap();
    assert_eq!(names.last().unwrap(), "Tele 12mm");
    assert_eq!(
        session.registry().get("Tele 12mm").unwrap(),
        CameraProfile::new(6.17, 4.55, 12.0, 4056)
    );
}

#[test]
fn test_errors_do_not_end_session() {
    let input = r#"
not json
{"op": "upsert", "name": "Broken", "profile": {"w": 5.6, "h": 4.2, "f": 0, "r": 4656}}
{"op": "evaluate", "camera": "Missing", "scenario": {"pitch_deg": 30, "horizontal_distance_m": 50, "target_size_m": 0.3}}
{"op": "get", "name": "Arducam IMX519 (Stock)"}
"#;
    let (session, responses) = run(input);
    assert_eq!(responses.len(), 4);
    assert_eq!(responses[0]["ok"], false);
    assert_eq!(responses[1]["ok"], false);
    assert!(responses[1]["error"].as_str().unwrap().contains("focal_length_mm"));
    assert_eq!(responses[2]["ok"], false);
    assert_eq!(responses[3]["ok"], true);
    assert_eq!(session.registry().len(), 4);
}

#[test]
fn test_overwrite_is_reported_not_rejected() {
    let input = r#"
{"op": "upsert", "name": "GoPro Hero (Wide)", "profile": {"sensor_width_mm": 6.17, "sensor_height_mm": 4.55, "focal_length_mm": 3.0, "resolution_px": 4000}}
"#;
    let (session, responses) = run(input);
    assert_eq!(responses[0]["ok"], true);
    assert_eq!(responses[0]["replaced"], true);
    assert_eq!(session.registry().list_names()[2], "GoPro Hero (Wide)");
    assert_eq!(
        session.registry().get("GoPro Hero (Wide)").unwrap().focal_length_mm,
        3.0
    );
}
