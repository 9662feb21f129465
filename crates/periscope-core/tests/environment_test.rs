use periscope_core::config::EnvironmentTable;
use periscope_core::errors::PeriscopeError;
use periscope_core::models::{ApiVersion, Environment, EnvironmentName};

#[test]
fn environment_parse_accepts_known_names() {
    let env: Environment = "stage".parse().expect("stage is a known environment");
    assert_eq!(env.name, EnvironmentName::Stage);
    assert!(!env.preview);
}

#[test]
fn environment_parse_accepts_preview_variants() {
    let env: Environment = "dev-preview".parse().expect("preview variant");
    assert_eq!(env.name, EnvironmentName::Dev);
    assert!(env.preview);
    assert_eq!(env.label(), "dev-preview");
}

#[test]
fn environment_parse_rejects_unknown_names() {
    let err = "bogus".parse::<Environment>().unwrap_err();
    assert!(matches!(
        err,
        PeriscopeError::InvalidEnvironment { ref name } if name == "bogus"
    ));
}

#[test]
fn environment_parse_rejects_custom() {
    // `custom` is synthetic, never a switch target.
    assert!("custom".parse::<Environment>().is_err());
    assert!("custom-preview".parse::<Environment>().is_err());
}

#[test]
fn environment_label_round_trips_through_parse() {
    for label in ["prod", "stage-preview", "local", "dev"] {
        let env: Environment = label.parse().expect("known label");
        assert_eq!(env.label(), label);
    }
}

#[test]
fn api_version_detected_from_server_url_suffix() {
    assert_eq!(
        ApiVersion::from_server_url("https://settings.example.net/v2"),
        ApiVersion::V2
    );
    assert_eq!(
        ApiVersion::from_server_url("https://settings.example.net/v2/"),
        ApiVersion::V2
    );
    assert_eq!(
        ApiVersion::from_server_url("https://settings.example.net/v1"),
        ApiVersion::V1
    );
    assert_eq!(
        ApiVersion::from_server_url("https://settings.example.net"),
        ApiVersion::V1
    );
}

#[test]
fn classify_matches_known_roots_by_prefix() {
    let table = EnvironmentTable::default();
    let url = format!("{}/v1", table.stage.server_root);
    let env = table.classify(&url, false);
    assert_eq!(env.name, EnvironmentName::Stage);
}

#[test]
fn classify_appends_preview_from_mode() {
    let table = EnvironmentTable::default();
    let url = format!("{}/v1", table.prod.server_root);
    let env = table.classify(&url, true);
    assert_eq!(env.label(), "prod-preview");
}

#[test]
fn classify_unknown_root_is_custom() {
    let table = EnvironmentTable::default();
    let env = table.classify("https://settings.elsewhere.example/v1", false);
    assert_eq!(env.name, EnvironmentName::Custom);
}

#[test]
fn environment_table_from_toml_overrides_one_entry() {
    let table = EnvironmentTable::from_toml(
        r#"
        [stage]
        server_root = "https://settings.stage.internal"
        push_endpoint = "wss://push.stage.internal"
        "#,
    )
    .expect("valid table");
    assert_eq!(table.stage.server_root, "https://settings.stage.internal");
    // Unmentioned entries keep their defaults.
    assert_eq!(table.prod, EnvironmentTable::default().prod);
}

#[test]
fn environment_table_from_toml_rejects_garbage() {
    let err = EnvironmentTable::from_toml("stage = 3").unwrap_err();
    assert!(matches!(err, PeriscopeError::InvalidConfig { .. }));
}
