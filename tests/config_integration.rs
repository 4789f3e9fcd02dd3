use movie_chat::config::{AppConfig, DEFAULT_ENDPOINT, LogFormat};
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("MOVIE_CHAT_SERVER__PORT");
        env::remove_var("MOVIE_CHAT_BACKEND__ENDPOINT");
        env::remove_var("MOVIE_CHAT_BACKEND__TIMEOUT_SECS");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("RECOMMEND_ENDPOINT");
    }
}

/// Switches into a fresh temp directory for the life of the guard, so the
/// `./config.yaml` fallback never sees (or touches) a developer's own file.
struct TempCwd {
    original: PathBuf,
    dir: tempfile::TempDir,
}

impl TempCwd {
    fn enter() -> Self {
        let original = env::current_dir().expect("current dir");
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        env::set_current_dir(dir.path()).expect("Failed to enter temp dir");
        Self { original, dir }
    }

    fn path(&self) -> &std::path::Path {
        self.dir.path()
    }
}

impl Drop for TempCwd {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original);
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();
    let _cwd = TempCwd::enter();

    let config = AppConfig::load_from_args(["movie-chat"]).expect("defaults should load");

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.backend.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.backend.timeout(), None);
    assert_eq!(config.logging.format, LogFormat::Text);
    assert_eq!(config.bind_address(), "127.0.0.1:3000");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("MOVIE_CHAT_SERVER__PORT", "9090");
        env::set_var("MOVIE_CHAT_BACKEND__TIMEOUT_SECS", "15");
    }
    let _cwd = TempCwd::enter();

    let config = AppConfig::load_from_args(["movie-chat"]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.backend.timeout_secs, Some(15));

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    writeln!(
        file,
        r#"
server:
  port: 7070
backend:
  endpoint: "http://recommender.internal:5000/recommend"
logging:
  format: json
"#
    )
    .unwrap();

    // Tell AppConfig to use this file via Env Var (mocking CLI arg indirectly)
    unsafe {
        env::set_var("CONFIG_FILE", file.path());
    }

    let _cwd = TempCwd::enter();
    let config =
        AppConfig::load_from_args(["movie-chat"]).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(
        config.backend.endpoint,
        "http://recommender.internal:5000/recommend"
    );
    assert_eq!(config.logging.format, LogFormat::Json);
    // Untouched keys keep their defaults
    assert_eq!(config.server.host, "127.0.0.1");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env_and_file() {
    clear_env_vars();

    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    writeln!(file, "server:\n  port: 7070\n").unwrap();
    unsafe {
        env::set_var("MOVIE_CHAT_SERVER__PORT", "9090");
    }

    let path = file.path().to_string_lossy().to_string();
    let config = AppConfig::load_from_args([
        "movie-chat",
        "--config",
        path.as_str(),
        "--port",
        "4000",
        "--endpoint",
        "https://movies.example.com/recommend",
    ])
    .unwrap();

    assert_eq!(config.server.port, 4000);
    assert_eq!(config.backend.endpoint, "https://movies.example.com/recommend");

    clear_env_vars();
}

#[test]
#[serial]
fn test_invalid_endpoint_rejected() {
    clear_env_vars();
    let _cwd = TempCwd::enter();

    for endpoint in ["not a url", "ftp://127.0.0.1/recommend"] {
        let result = AppConfig::load_from_args(["movie-chat", "--endpoint", endpoint]);
        assert!(result.is_err(), "{endpoint} should be rejected");
    }
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();
    let original = env::current_dir().unwrap();
    let cwd = TempCwd::enter();
    assert_ne!(env::current_dir().unwrap(), original);

    // Create ./config.yaml
    let config_content = r#"
server:
  port: 6060
    "#;
    fs::write(cwd.path().join("config.yaml"), config_content)
        .expect("Failed to write ./config.yaml");

    // No Env var, No CLI flag: should pick up ./config.yaml
    let config = AppConfig::load_from_args(["movie-chat"]).expect("Failed to load config");
    assert_eq!(config.server.port, 6060);

    // The file lived in the temp dir, never next to the crate.
    let written = cwd.path().join("config.yaml");
    drop(cwd);
    assert_eq!(env::current_dir().unwrap(), original);
    assert!(!written.exists());
}
