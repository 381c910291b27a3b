use super::*;

#[test]
fn empty_object_uses_viewer_defaults() {
    let cfg = SessionConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, SessionConfig::default());
    assert_eq!(cfg.displacement, Vec3::new(5.0, 0.0, 0.0));
    assert_eq!(cfg.target.rotation_deg, Vec3::new(0.0, 45.0, 0.0));
    assert_eq!(cfg.target.translation, Vec3::new(2.0, 2.0, 0.0));
    assert_eq!(cfg.mode, VisMode::Rgb);
}

#[test]
fn partial_json_overrides_fields() {
    let cfg = SessionConfig::from_json_str(
        r#"{
            "mode": "part_id",
            "displacement": [0.0, -3.0, 1.5],
            "target": { "rotation_deg": [0.0, 90.0, 0.0], "translation": [2.0, 0.0, 0.0] },
            "selected_group": 1,
            "selected_part": -4
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.mode, VisMode::PartId);
    assert_eq!(cfg.displacement, Vec3::new(0.0, -3.0, 1.5));
    assert_eq!(cfg.target.rotation_deg, Vec3::new(0.0, 90.0, 0.0));
    assert_eq!(cfg.selection(), PartKey::new(1, -4));
}

#[test]
fn out_of_range_displacement_is_rejected() {
    let err = SessionConfig::from_json_str(r#"{"displacement":[11.0,0.0,0.0]}"#).unwrap_err();
    assert!(matches!(err, CloudError::Validation(_)));
}

#[test]
fn non_finite_values_are_rejected() {
    let cfg = SessionConfig {
        target: Se3Target {
            rotation_deg: Vec3::new(f32::NAN, 0.0, 0.0),
            translation: Vec3::ZERO,
        },
        ..SessionConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(CloudError::Validation(_))));
}

#[test]
fn malformed_json_maps_to_serde_error() {
    let err = SessionConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, CloudError::Serde(_)));
    let err = SessionConfig::from_json_str(r#"{"mode":"depth"}"#).unwrap_err();
    assert!(matches!(err, CloudError::Serde(_)));
}

#[test]
fn initial_state_is_idle_with_configured_values() {
    let cfg = SessionConfig {
        selected_group: 3,
        selected_part: 7,
        ..SessionConfig::default()
    };
    let state = cfg.initial_state();
    assert_eq!(state.selection(), PartKey::new(3, 7));
    assert_eq!(state.displacement(), cfg.displacement);
    assert_eq!(state.anim1_progress(), 0.0);
    assert_eq!(state.anim2_progress(), 0.0);
    assert!(!state.is_playing1() && !state.is_playing2());
}

#[test]
fn config_file_round_trip_and_missing_file() {
    let path = std::env::temp_dir().join("cloudanim_config_file.json");
    std::fs::write(&path, r#"{"mode":"group_id","selected_part":2}"#).unwrap();
    let cfg = SessionConfig::from_json_file(&path).unwrap();
    assert_eq!(cfg.mode, VisMode::GroupId);
    assert_eq!(cfg.selection(), PartKey::new(0, 2));

    let missing = std::env::temp_dir().join("cloudanim_config_missing.json");
    let _ = std::fs::remove_file(&missing);
    let err = SessionConfig::from_json_file(&missing).unwrap_err();
    assert!(matches!(err, CloudError::Other(_)));
}
