use magisk_setup::config::{get_config, ModuleConfig};
use magisk_setup::error::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults_without_setup_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = get_config(temp_dir.path()).unwrap();

    assert_eq!(config, ModuleConfig::default());
    assert_eq!(config.name, "battery-optimizer");
    assert_eq!(config.version_code, "10");
    assert_eq!(config.repository_owner, "claude ai");
}

#[test]
fn test_json_setup_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("setup.json"),
        r#"{"name": "thermal-tweaks", "display_name": "Thermal Tweaks", "author": "jane"}"#,
    )
    .unwrap();

    let config = get_config(temp_dir.path()).unwrap();
    assert_eq!(config.name, "thermal-tweaks");
    assert_eq!(config.display_name, "Thermal Tweaks");
    assert_eq!(config.repository_name, "thermal-tweaks");
    assert_eq!(config.repository_owner, "jane");
}

#[test]
fn test_json_takes_precedence_over_yaml() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("setup.json"), r#"{"name": "from-json"}"#).unwrap();
    fs::write(temp_dir.path().join("setup.yml"), "name: from-yaml\n").unwrap();

    assert_eq!(get_config(temp_dir.path()).unwrap().name, "from-json");
}

#[test]
fn test_yaml_setup_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("setup.yaml"),
        "name: gps-fix\nversion: \"3.4\"\nrepository_owner: gps-org\n",
    )
    .unwrap();

    let config = get_config(temp_dir.path()).unwrap();
    assert_eq!(config.version, "3.4");
    assert_eq!(config.version_code, "34");
    assert_eq!(config.repository_owner, "gps-org");
}

#[test]
fn test_invalid_setup_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("setup.yml"), "name: [unclosed\n").unwrap();

    assert!(matches!(get_config(temp_dir.path()), Err(Error::ConfigError(_))));
}

#[test]
fn test_validate() {
    assert!(ModuleConfig::default().validate().is_ok());

    let spaced = ModuleConfig { name: "My Module".to_string(), ..ModuleConfig::default() };
    assert!(matches!(spaced.validate(), Err(Error::InvalidModuleName { .. })));

    let template =
        ModuleConfig { name: "Magisk-Module-Template".to_string(), ..ModuleConfig::default() };
    assert!(matches!(template.validate(), Err(Error::InvalidModuleName { .. })));
}
