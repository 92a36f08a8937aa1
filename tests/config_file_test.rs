//! Loading configuration files from disk.

use gridlock::{GameConfig, LogTarget};
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
[players.first]
name = "Ada"
mark = "A"

[players.second]
name = "Grace"
mark = "G"

[logging]
filter = "gridlock=debug"
file = "session.log"
"#,
    );

    let config = GameConfig::load(file.path()).expect("config should load");
    let first = config.players().first().to_player();
    assert_eq!(first.name(), "Ada");
    assert_eq!(first.mark().symbol(), 'A');
    assert_eq!(config.players().second().mark().symbol(), 'G');
    assert_eq!(config.logging().filter(), "gridlock=debug");
    assert_eq!(
        LogTarget::for_console(config.logging()),
        LogTarget::File(PathBuf::from("session.log"))
    );
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = GameConfig::load_or_default(dir.path().join("absent.toml"))
        .expect("missing file is not an error");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_load_reports_parse_errors() {
    let file = write_config("[players.first\nname = ");
    let err = GameConfig::load(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_load_validates_marks() {
    let file = write_config(
        r#"
[players.first]
name = "Ada"
mark = "O"
"#,
    );
    let err = GameConfig::load(file.path()).unwrap_err();
    assert!(err.message.contains("both 'O'"));
}

#[test]
fn test_load_missing_file_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = GameConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_written_config_loads_back() {
    let config = GameConfig::default().with_names(Some("Ada".into()), Some("Grace".into()));
    let file = write_config(&config.to_toml().unwrap());
    assert_eq!(GameConfig::load(file.path()).unwrap(), config);
}
