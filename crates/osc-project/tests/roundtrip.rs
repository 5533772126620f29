use osc_project::schema::*;
use osc_project::{load_json, load_yaml, save_json, save_yaml, validate_scenario};

#[test]
fn roundtrip_yaml_default_scenario() {
    let scenario = Scenario::default();
    validate_scenario(&scenario).unwrap();

    let path = std::env::temp_dir().join("osc_project_roundtrip_default.yaml");
    save_yaml(&path, &scenario).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn roundtrip_json_along_velocity() {
    let mut scenario = Scenario::default();
    scenario.name = "Flipped damping".to_string();
    scenario.oscillator.damping_convention = DampingConventionDef::AlongVelocity;
    scenario.oscillator.damping_n_s_per_m = -4.0;
    scenario.animation.show_trail = false;

    let path = std::env::temp_dir().join("osc_project_roundtrip_along.json");
    save_json(&path, &scenario).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn optional_sections_take_defaults() {
    let yaml = r#"
version: 1
name: Minimal
oscillator:
  mass_kg: 1.0
  stiffness_n_per_m: 4.0
  damping_n_s_per_m: 0.0
  initial_position_m: 1.0
time_grid:
  t_end_s: 5.0
  samples: 50
"#;
    let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
    validate_scenario(&scenario).unwrap();

    assert_eq!(
        scenario.oscillator.damping_convention,
        DampingConventionDef::AgainstVelocity
    );
    assert_eq!(scenario.oscillator.initial_velocity_m_per_s, 0.0);
    assert_eq!(scenario.time_grid.t_start_s, 0.0);
    assert_eq!(scenario.solver, SolverDef::default());
    assert_eq!(scenario.animation, AnimationDef::default());
}

#[test]
fn convention_names_are_snake_case() {
    let yaml = serde_yaml::to_string(&Scenario::default()).unwrap();
    assert!(yaml.contains("damping_convention: against_velocity"));
}

#[test]
fn invalid_file_is_rejected_on_load() {
    let mut scenario = Scenario::default();
    scenario.oscillator.mass_kg = 0.0;
    let content = serde_yaml::to_string(&scenario).unwrap();

    let path = std::env::temp_dir().join("osc_project_invalid_mass.yaml");
    std::fs::write(&path, content).unwrap();

    assert!(load_yaml(&path).is_err());
}
