use atomlab_core::{element_by_symbol, AtomConfiguration, ElementCategory};

#[test]
fn default_configuration_is_neutral_carbon() {
    let config = AtomConfiguration::default();
    assert_eq!(config.protons, 6);
    assert_eq!(config.neutrons, 6);
    assert_eq!(config.electrons, 6);
    assert!(!config.ion_mode);
    assert!(config.validate().is_ok());
}

#[test]
fn clamped_constructor_normalizes_each_field() {
    let config = AtomConfiguration::clamped(-3, -10, 0, true);
    assert_eq!(
        config,
        AtomConfiguration {
            protons: 1,
            neutrons: 0,
            electrons: 1,
            ion_mode: true,
        }
    );

    let config = AtomConfiguration::clamped(300, 7, 300, false);
    assert_eq!(config.protons, 118);
    assert_eq!(config.electrons, 300);
}

#[test]
fn serialization_uses_exactly_four_fields() {
    let config = AtomConfiguration::clamped(8, 8, 10, true);

    let json = serde_json::to_value(config).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 4);
    assert_eq!(json["protons"], 8);
    assert_eq!(json["neutrons"], 8);
    assert_eq!(json["electrons"], 10);
    assert_eq!(json["ion_mode"], true);

    let decoded: AtomConfiguration = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, config);
}

#[test]
fn deserialize_rejects_out_of_range_protons() {
    let value = serde_json::json!({
        "protons": 0,
        "neutrons": 1,
        "electrons": 1,
        "ion_mode": false
    });

    let err = serde_json::from_value::<AtomConfiguration>(value).unwrap_err();
    assert!(
        err.to_string().contains("protons (0) must be within 1..=118"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_zero_electrons() {
    let value = serde_json::json!({
        "protons": 3,
        "neutrons": 4,
        "electrons": 0,
        "ion_mode": true
    });

    let err = serde_json::from_value::<AtomConfiguration>(value).unwrap_err();
    assert!(err.to_string().contains("electrons (0) must be >= 1"));
}

#[test]
fn element_category_serializes_as_kebab_case() {
    let json = serde_json::to_value(ElementCategory::AlkalineEarthMetal).unwrap();
    assert_eq!(json, "alkaline-earth-metal");
    let decoded: ElementCategory = serde_json::from_value(serde_json::json!("noble-gas")).unwrap();
    assert_eq!(decoded, ElementCategory::NobleGas);
}

#[test]
fn element_record_serializes_for_display_layers() {
    let neon = element_by_symbol("Ne").expect("neon is seeded");

    let json = serde_json::to_value(neon).unwrap();
    assert_eq!(json["atomic_number"], 10);
    assert_eq!(json["category"], "noble-gas");
    assert_eq!(json["phase"], "gas");
    assert!(json["electronegativity"].is_null());
    assert!(json["uses"].as_array().is_some_and(|uses| !uses.is_empty()));
}
