//! Configuration loading tests

#[cfg(test)]
mod tests {
    use clubcentral::config::{LogFormat, RbacConfig};
    use clubcentral::{ClubError, Config, PermissionSet};
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_strict_config_drives_raw_parsing() {
        let file = write_config("rbac:\n  strict_permission_keys: true\n");
        let config = tokio_test::block_on(Config::from_file(file.path())).unwrap();

        let raw = json!({ "manage_tasks": true, "old_flag": true });
        let err = PermissionSet::from_raw_with(&raw, config.rbac()).unwrap_err();
        assert!(matches!(err, ClubError::UnknownPermission(_)));
    }

    #[tokio::test]
    async fn test_empty_file_uses_defaults() {
        let file = write_config("{}\n");
        let config = Config::from_file(file.path()).await.unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.logging().format, LogFormat::Text);
        assert_eq!(config.rbac(), &RbacConfig::default());
    }

    #[tokio::test]
    async fn test_malformed_yaml_is_a_config_error() {
        let file = write_config("logging: [unterminated\n");
        let err = Config::from_file(file.path()).await.unwrap_err();

        assert!(matches!(err, ClubError::Config(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn test_unknown_log_format_rejected() {
        let file = write_config("logging:\n  format: xml\n");
        assert!(Config::from_file(file.path()).await.is_err());
    }
}
