//! Configuration loading tests

#[cfg(test)]
mod tests {
    use item_service::config::{Config, StorageBackend, load_config_with_precedence};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_file_overrides_defaults() {
        let file = write_config(
            r#"
server:
  port: 9090
processing:
  pool_size: 3
  delay_ms: 0
"#,
        );

        let service = load_config_with_precedence(file.path().to_str(), false)
            .await
            .unwrap();

        assert_eq!(service.server.port, 9090);
        assert_eq!(service.processing.pool_size, 3);
        assert_eq!(service.processing.delay_ms, 0);
        assert_eq!(service.storage.backend, StorageBackend::Memory);
    }

    #[tokio::test]
    async fn test_env_references_are_expanded() {
        // SAFETY: test-only variable with a unique name
        unsafe { std::env::set_var("ITEM_SERVICE_IT_DB_URL", "sqlite::memory:") };

        let file = write_config(
            r#"
storage:
  backend: database
  database:
    url: "${ITEM_SERVICE_IT_DB_URL}"
    max_connections: 1
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.storage().database.url, "sqlite::memory:");
        assert_eq!(config.storage().backend, StorageBackend::Database);

        unsafe { std::env::remove_var("ITEM_SERVICE_IT_DB_URL") };
    }

    #[tokio::test]
    async fn test_invalid_yaml_is_rejected() {
        let file = write_config("server: [not, a, map");
        assert!(Config::from_file(file.path()).await.is_err());
    }
}
