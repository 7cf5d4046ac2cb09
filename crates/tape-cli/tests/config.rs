use std::fs;

use tape_cli::config::{ConfigError, DEFAULT_BATCH_SIZE, TapeConfig};
use tape_core::DatePolicy;
use tape_model::CanonicalField;
use tempfile::TempDir;

#[test]
fn loads_config_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tape.toml");
    fs::write(
        &path,
        "[mapping]\nbalance = \"UPB\"\n\n[output]\nbatch_size = 2\n",
    )
    .unwrap();

    let config = TapeConfig::load(&path).unwrap();
    let mapping = config.mapping_override().unwrap().unwrap();
    assert_eq!(mapping.get(CanonicalField::Balance), Some("UPB"));
    assert_eq!(mapping.len(), 1);
    assert_eq!(config.output.batch_size, 2);
    assert_eq!(config.ingest.date_policy, DatePolicy::FallbackToToday);
}

#[test]
fn missing_path_means_defaults() {
    let config = TapeConfig::load_optional(None).unwrap();
    assert_eq!(config.output.batch_size, DEFAULT_BATCH_SIZE);
    assert!(config.mapping.is_empty());
}

#[test]
fn unreadable_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let error = TapeConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(error, ConfigError::Read { .. }));
}

#[test]
fn malformed_toml_reports_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[mapping\nloan_id = ").unwrap();

    let error = TapeConfig::load(&path).unwrap_err();
    assert!(matches!(error, ConfigError::Parse { .. }));
    assert!(error.to_string().contains("broken.toml"));
}

#[test]
fn invalid_values_surface_from_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[mapping]\ngrade = \"Grade\"\n").unwrap();

    let error = TapeConfig::load(&path).unwrap_err();
    assert_eq!(error.to_string(), "unknown field 'grade' in [mapping]");
}
