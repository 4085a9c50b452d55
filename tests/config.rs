use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use wncl_portal::config::PortalConfig;

fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<PortalConfig> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    PortalConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = config_from(&[]).expect("defaults");
    assert_eq!(config.start_path, "/");
    assert_eq!(config.seed_path, None);
    assert_eq!(config.as_of, None);
    assert_eq!(config.tick_rate, Duration::from_millis(250));
    assert!(!config.sidebar_collapsed);
}

#[test]
fn reads_every_variable() {
    let config = config_from(&[
        ("PORTAL_START_PATH", "/availability"),
        ("PORTAL_SEED_PATH", "data/club.json"),
        ("PORTAL_AS_OF", "2024-12-27 18:30"),
        ("PORTAL_TICK_MS", "100"),
        ("PORTAL_SIDEBAR_COLLAPSED", "yes"),
    ])
    .expect("valid config");
    assert_eq!(config.start_path, "/availability");
    assert_eq!(config.seed_path, Some(PathBuf::from("data/club.json")));
    assert!(config.as_of.is_some());
    assert_eq!(config.tick_rate, Duration::from_millis(100));
    assert!(config.sidebar_collapsed);
}

#[test]
fn tick_rate_is_clamped_and_garbage_ignored() {
    let fast = config_from(&[("PORTAL_TICK_MS", "1")]).expect("config");
    assert_eq!(fast.tick_rate, Duration::from_millis(50));
    let slow = config_from(&[("PORTAL_TICK_MS", "60000")]).expect("config");
    assert_eq!(slow.tick_rate, Duration::from_millis(2000));
    let junk = config_from(&[("PORTAL_TICK_MS", "soon")]).expect("config");
    assert_eq!(junk.tick_rate, Duration::from_millis(250));
}

#[test]
fn blank_values_count_as_unset() {
    let config = config_from(&[("PORTAL_START_PATH", "  "), ("PORTAL_AS_OF", "")])
        .expect("config");
    assert_eq!(config.start_path, "/");
    assert_eq!(config.as_of, None);
}

#[test]
fn invalid_as_of_is_an_error() {
    let err = config_from(&[("PORTAL_AS_OF", "next tuesday")]).unwrap_err();
    assert!(err.to_string().contains("PORTAL_AS_OF"));
}

#[test]
fn sidebar_flag_is_false_for_other_words() {
    let config = config_from(&[("PORTAL_SIDEBAR_COLLAPSED", "nope")]).expect("config");
    assert!(!config.sidebar_collapsed);
}
