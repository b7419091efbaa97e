//! Integration tests for loading hookseal settings from files

use hookseal_config::*;
use std::io::Write;
use std::time::Duration;

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_load_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "hookseal.toml",
        r#"
secret = "0123456789abcdef0123456789abcdef"
timeout_secs = 3

[endpoints]
client_add = "https://n8n.example.com/webhook/add"
client_delete = "https://n8n.example.com/webhook/delete"
"#,
    );

    let settings = SettingsLoader::new().file(&path).without_env().load().unwrap();

    assert_eq!(settings.timeout(), Duration::from_secs(3));
    assert_eq!(
        settings.endpoints.client_add.as_deref(),
        Some("https://n8n.example.com/webhook/add")
    );
    assert_eq!(settings.endpoints.client_edit, None);
    assert_eq!(settings.signing_secret().unwrap().len(), 32);
}

#[test]
fn test_load_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "hookseal.json",
        r#"{"secret": "s", "endpoints": {"client_edit": "http://localhost:5678/edit"}}"#,
    );

    let settings = SettingsLoader::new().file(&path).without_env().load().unwrap();

    assert_eq!(
        settings.endpoints.client_edit.as_deref(),
        Some("http://localhost:5678/edit")
    );
    assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_dotenv_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let toml = write_file(
        &dir,
        "hookseal.toml",
        r#"
secret = "from-file"

[endpoints]
client_add = "https://example.com/file"
"#,
    );
    let dotenv = write_file(
        &dir,
        "local.env",
        "HOOKSEAL_SECRET=from-dotenv\nHOOKSEAL_TIMEOUT_SECS=7\n",
    );

    let settings = SettingsLoader::new()
        .file(&toml)
        .dotenv(&dotenv)
        .without_env()
        .load()
        .unwrap();

    assert_eq!(settings.secret, "from-dotenv");
    assert_eq!(settings.timeout_secs, 7);
    assert_eq!(
        settings.endpoints.client_add.as_deref(),
        Some("https://example.com/file")
    );
}

#[test]
fn test_env_file_and_dotenv_read_the_same_secret() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "hookseal.env",
        "HOOKSEAL_SECRET=\"0123456789abcdef0123456789abcdef\" # rotated 2026\n",
    );

    let as_file = SettingsLoader::new().file(&path).without_env().load().unwrap();
    let as_dotenv = SettingsLoader::new().dotenv(&path).without_env().load().unwrap();

    assert_eq!(as_file.secret, "0123456789abcdef0123456789abcdef");
    assert_eq!(as_file.secret, as_dotenv.secret);
}

#[test]
fn test_missing_file_is_load_error() {
    let result = SettingsLoader::new()
        .file("/nonexistent/hookseal.toml")
        .without_env()
        .load();

    assert!(matches!(result, Err(ConfigError::LoadError(_))));
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "hookseal.yaml", "secret: s");

    let result = SettingsLoader::new().file(&path).without_env().load();
    assert!(matches!(result, Err(ConfigError::LoadError(_))));
}
