use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "config.json";

pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    if !config_path.is_file() {
        return Err(AppError::ConfigMissing { path: config_path });
    }

    let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.clone(),
        source,
    })?;

    let file_config: FileConfig =
        serde_json::from_str(&raw).map_err(|source| AppError::ConfigInvalid {
            path: config_path.clone(),
            details: source.to_string(),
        })?;

    if let Some(field) = file_config.empty_required_field() {
        return Err(AppError::ConfigInvalid {
            path: config_path,
            details: format!("required field `{field}` must not be empty"),
        });
    }

    Ok(file_config.into_app_config())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tempfile::TempDir;

    use super::*;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.json");
        fs::write(&path, contents).expect("must write test config");
        path
    }

    #[test]
    fn fails_with_config_missing_when_file_is_absent() {
        let err = load(Some(Path::new("./missing-config.json"))).expect_err("must fail");

        assert!(matches!(err, AppError::ConfigMissing { .. }));
    }

    #[test]
    fn loads_required_fields_with_default_sections() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_config(
            &dir,
            r#"{"hostname": "forum.example.com", "username": "system", "api_key": "abc"}"#,
        );

        let config = load(Some(&path)).expect("config must load");

        assert_eq!(config.forum.hostname, "forum.example.com");
        assert_eq!(config.forum.username, "system");
        assert_eq!(config.forum.api_key, "abc");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.pacing.request_delay(), Duration::from_secs(1));
        assert_eq!(config.pacing.page_size, 50);
        assert_eq!(config.pacing.rate_limit_fallback(), Duration::from_secs(10));
        assert_eq!(config.work_list_path, PathBuf::from("work_list.json"));
    }

    #[test]
    fn merges_optional_sections_over_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_config(
            &dir,
            r#"{
                "hostname": "forum.example.com",
                "username": "system",
                "api_key": "abc",
                "logging": {"level": "debug"},
                "pacing": {"request_delay_ms": 250, "page_size": 20},
                "http": {"timeout_secs": 5},
                "work_list_path": "state/pending.json"
            }"#,
        );

        let config = load(Some(&path)).expect("config must load");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.pacing.request_delay_ms, 250);
        assert_eq!(config.pacing.page_size, 20);
        assert_eq!(config.pacing.rate_limit_fallback_secs, 10);
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.work_list_path, PathBuf::from("state/pending.json"));
    }

    #[test]
    fn rejects_missing_required_field() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_config(&dir, r#"{"hostname": "forum.example.com", "username": "system"}"#);

        let err = load(Some(&path)).expect_err("must fail");

        match err {
            AppError::ConfigInvalid { details, .. } => assert!(details.contains("api_key")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_wrong_typed_field() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_config(
            &dir,
            r#"{"hostname": "forum.example.com", "username": 7, "api_key": "abc"}"#,
        );

        let err = load(Some(&path)).expect_err("must fail");

        assert!(matches!(err, AppError::ConfigInvalid { .. }));
    }

    #[test]
    fn rejects_unparseable_json() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_config(&dir, "{ not json");

        let err = load(Some(&path)).expect_err("must fail");

        assert!(matches!(err, AppError::ConfigInvalid { .. }));
    }

    #[test]
    fn rejects_blank_required_field() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_config(
            &dir,
            r#"{"hostname": "  ", "username": "system", "api_key": "abc"}"#,
        );

        let err = load(Some(&path)).expect_err("must fail");

        match err {
            AppError::ConfigInvalid { details, .. } => assert!(details.contains("hostname")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
