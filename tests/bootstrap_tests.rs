use chrono::DateTime;
use clinic_mock_api::harness::bootstrap::{ARTIFACT_FILE, GlobalSetup};
use tempfile::tempdir;

#[test]
fn artifact_written_with_expected_keys() {
    let dir = tempdir().unwrap();
    let setup = GlobalSetup::new("http://localhost:8080", dir.path(), "test");

    let artifact = setup.write_artifact().unwrap();
    assert_eq!(artifact.base_url, "http://localhost:8080");
    assert_eq!(artifact.test_environment, "test");

    let raw = std::fs::read_to_string(dir.path().join(ARTIFACT_FILE)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["baseURL"], "http://localhost:8080");
    assert_eq!(value["testEnvironment"], "test");
    assert!(value["setupTime"].is_string());
}

#[test]
fn artifact_setup_time_is_rfc3339() {
    let dir = tempdir().unwrap();
    let setup = GlobalSetup::new("http://localhost:8080", dir.path(), "test");

    let artifact = setup.write_artifact().unwrap();
    DateTime::parse_from_rfc3339(&artifact.setup_time).unwrap();
}

#[tokio::test]
async fn unreachable_target_aborts_setup() {
    let dir = tempdir().unwrap();
    // Port 1 is never serving; the probe must fail fast with no retry
    let setup = GlobalSetup::new("http://127.0.0.1:1", dir.path().join("artifacts"), "test");

    let result = setup.run().await;
    assert!(result.is_err());
    // Probe failure means no artifact gets written
    assert!(!setup.artifact_path().exists());
    // But the artifact directory itself was prepared before the probe
    assert!(setup.artifact_dir().exists());
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let dir = tempdir().unwrap();
    let setup = GlobalSetup::new("http://127.0.0.1:1/", dir.path(), "test");

    // Still a probe failure (nothing listening), not a malformed-URL error
    let err = setup.probe_target().await.unwrap_err();
    assert!(format!("{err:#}").contains("http://127.0.0.1:1/api/health"));
}
