use super::*;

#[test]
fn default_config_has_expected_tick_rate() {
    let config = AppConfig::default();
    assert_eq!(config.general.tick_rate(), std::time::Duration::from_millis(250));
}

#[test]
fn default_config_has_all_general_fields() {
    let config = AppConfig::default();
    assert_eq!(config.general.tick_rate_ms, 250);
    assert_eq!(config.general.frame_rate_ms, 16);
    assert_eq!(config.general.slide_duration_ms, 300);
    assert!(config.general.show_app_logs);
    assert_eq!(config.general.log_lines, 6);
}

#[test]
fn default_config_has_no_seed_connections() {
    let config = AppConfig::default();
    assert!(config.connections.is_empty());
}

#[test]
fn embedded_defaults_parse() {
    let config: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
    assert_eq!(config.keybindings.global.get("quit").unwrap(), "ctrl+q");
    assert_eq!(config.keybindings.global.get("toggle_logs").unwrap(), "ctrl+l");
    assert_eq!(config.keybindings.connections.get("new_connection").unwrap(), "n");
    assert_eq!(config.keybindings.connections.get("remove_connection").unwrap(), "d");
    assert_eq!(config.keybindings.connections.get("connect_connection").unwrap(), "c");
    assert_eq!(config.keybindings.connections.get("disconnect_connection").unwrap(), "x");
    assert_eq!(config.keybindings.connections.get("search").unwrap(), "/");
    assert_eq!(config.keybindings.connections.get("explore").unwrap(), "enter");
    assert_eq!(config.keybindings.navigation.get("select_next").unwrap(), "down");
    assert_eq!(config.keybindings.explorer.get("back").unwrap(), "esc");
}

#[test]
fn embedded_defaults_are_valid_and_collision_free() {
    let config = AppConfig::default();
    assert!(validate_keybindings(&config.keybindings).is_empty());
    assert!(check_collisions(&config.keybindings).is_empty());
}

#[test]
fn parse_general_from_toml() {
    let raw = r#"
[general]
tick_rate_ms = 100
slide-duration-ms = 500
"#;
    let config: AppConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.general.tick_rate_ms, 100);
    assert_eq!(config.general.slide_duration_ms, 500);
    assert_eq!(config.general.frame_rate_ms, 16);
}

#[test]
fn parse_seed_connections() {
    let raw = r#"
[[connections]]
type = "Spark"
name = "localhost:4040"

[[connections]]
type = "Livy"
name = "Gateway"
token = "gw"
"#;
    let config: AppConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.connections.len(), 2);
    assert_eq!(config.connections[0].kind, "Spark");
    assert_eq!(config.connections[0].token_or_default(0), "spark-0");
    assert_eq!(config.connections[1].token_or_default(1), "gw");
}

#[test]
fn partial_toml_only_general_merges_with_defaults() {
    let mut base = AppConfig::default();
    let user_toml = r#"
[general]
tick_rate_ms = 500
"#;
    let user: AppConfig = toml::from_str(user_toml).unwrap();
    base.merge(user);

    assert_eq!(base.general.tick_rate_ms, 500);
    assert!(!base.keybindings.global.is_empty());
    assert_eq!(base.keybindings.global.get("quit").unwrap(), "ctrl+q");
}

#[test]
fn merge_overrides_keybindings() {
    let mut base: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
    let user_toml = r#"
[keybindings.connections]
search = "ctrl+f"
"#;
    let user: AppConfig = toml::from_str(user_toml).unwrap();
    base.merge(user);

    assert_eq!(base.keybindings.connections.get("search").unwrap(), "ctrl+f");
    assert_eq!(base.keybindings.connections.get("explore").unwrap(), "enter");
}

#[test]
fn empty_user_config_keeps_defaults() {
    let mut base: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
    let user: AppConfig = toml::from_str("").unwrap();
    base.merge(user);
    assert!(!base.keybindings.global.is_empty());
    assert!(!base.keybindings.connections.is_empty());
    assert!(!base.keybindings.navigation.is_empty());
    assert!(!base.keybindings.explorer.is_empty());
}

#[test]
fn serialized_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = AppConfig::default();
    config.connections.push(ConnectionEntry { kind: "Spark".into(), name: "Local".into(), token: None });
    std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

    let loaded = AppConfig::load_from(&path).unwrap();
    assert_eq!(loaded.general.tick_rate_ms, config.general.tick_rate_ms);
    assert_eq!(loaded.keybindings.global.get("quit").unwrap(), "ctrl+q");
    assert_eq!(loaded.connections, config.connections);
}

#[test]
fn zero_frame_rate_from_toml_is_clamped() {
    let raw = r#"
[general]
frame_rate_ms = 0
tick_rate_ms = 0
"#;
    let config: AppConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.general.frame_rate_ms, 0);
    assert_eq!(config.general.frame_rate(), std::time::Duration::from_millis(MIN_INTERVAL_MS));
    assert_eq!(config.general.tick_rate(), std::time::Duration::from_millis(MIN_INTERVAL_MS));
}

#[test]
fn connections_enabled_defaults_on_and_reads_kebab_key() {
    assert!(AppConfig::default().general.connections_enabled);

    let config: AppConfig = toml::from_str("[general]\nconnections-enabled = false\n").unwrap();
    assert!(!config.general.connections_enabled);
    assert_eq!(config.general.log_lines, 6);
}
