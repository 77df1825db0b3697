//! Configuration persistence round-trips.

use netsurvey::config::Config;

#[tokio::test]
async fn create_default_then_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let path = path.to_str().expect("utf-8 path");

    Config::create_default(path).await.expect("create default");
    let config = Config::load(path).await.expect("load");

    assert_eq!(config.survey.mission_id_prefix, "NS ");
    assert_eq!(config.location.provider, "gps");
    assert_eq!(config.location.accuracy_threshold_meters, 32.0);
}

#[tokio::test]
async fn save_preserves_custom_values() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let path = path.to_str().expect("utf-8 path");

    let mut config = Config::default();
    config.survey.device_id = "358000000000000".to_string();
    config.location.accuracy_threshold_meters = 15.0;
    config.logging.level = "debug".to_string();
    config.save(path).await.expect("save");

    let reloaded = Config::load(path).await.expect("load");
    assert_eq!(reloaded.survey.device_id, "358000000000000");
    assert_eq!(reloaded.location.accuracy_threshold_meters, 15.0);
    assert_eq!(reloaded.logging.level, "debug");
}

#[tokio::test]
async fn invalid_config_fails_to_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    tokio::fs::write(&path, "[survey]\ndevice_id = \"\"\n")
        .await
        .expect("write");

    let result = Config::load(path.to_str().expect("utf-8 path")).await;
    assert!(result.is_err());
}
