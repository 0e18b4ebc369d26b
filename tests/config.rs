use std::fs;
use taglog::config::extract_sources;
use taglog::fmt::Color;
use taglog::{Config, Error, Level, Logger};
use tempfile::TempDir;

#[test]
fn empty_file_yields_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("taglog.toml");
    fs::write(&path, "").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parse_level(), Level::Info);
    assert!(config.console.enabled);
    assert!(config.console.colors);
    assert!(!config.file.enabled);
    assert!(!config.debug.enabled);
    assert_eq!(config.console.structure, "{tag} {location} : {msg}");
}

#[test]
fn missing_file_yields_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("nope.toml")).unwrap();
    assert!(config.apps.is_empty());
}

#[test]
fn sections_are_parsed() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("taglog.toml");
    fs::write(
        &path,
        r##"
[general]
level = "warning"

[console]
colors = false
buffer_size = 512
stderr = false

[file]
enabled = true
path = "~/logs/app.log"
structure = "{level} {msg}"

[debug]
enabled = true
"##,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parse_level(), Level::Warn);
    assert!(!config.console.colors);
    assert_eq!(config.console.buffer_size, 512);
    assert!(!config.console.stderr);
    assert!(config.file.enabled);
    assert_eq!(config.file.path, "~/logs/app.log");
    assert_eq!(config.file.structure, "{level} {msg}");
    assert!(config.debug.enabled);
}

#[test]
fn syntax_error_is_reported() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("broken.toml");
    fs::write(&path, "[general\nlevel = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn unknown_level_falls_back_to_info() {
    let mut config = Config::default();
    config.general.level = "verbose".to_string();
    assert_eq!(config.parse_level(), Level::Info);
}

#[test]
fn load_with_sources_merges_maps() {
    let tmp_dir = TempDir::new().unwrap();
    let base_path = tmp_dir.path().join("base.toml");
    let child_path = tmp_dir.path().join("child.toml");

    let base_content = format!(
        r##"
source = "{}"

[colors]
r = "#ff0000"
"##,
        child_path.display()
    );
    fs::write(&base_path, base_content).unwrap();

    fs::write(
        &child_path,
        r##"
[colors]
r = "#00ff00"
q = "#0000ff"

[apps.worker]
level = "debug"
"##,
    )
    .unwrap();

    let config = Config::load_from(&base_path).unwrap();
    assert_eq!(config.colors["r"], "#ff0000");
    assert_eq!(config.colors["q"], "#0000ff");
    assert!(config.apps.contains_key("worker"));
}

#[test]
fn relative_sources_resolve_next_to_including_file() {
    let tmp_dir = TempDir::new().unwrap();
    let base_path = tmp_dir.path().join("base.toml");
    fs::write(&base_path, "source = \"colors.toml\"\n").unwrap();
    fs::write(tmp_dir.path().join("colors.toml"), "[colors]\nq = \"#123456\"\n").unwrap();

    let config = Config::load_from(&base_path).unwrap();
    assert_eq!(config.colors["q"], "#123456");
}

#[test]
fn load_with_missing_source_is_ignored() {
    let tmp_dir = TempDir::new().unwrap();
    let base_path = tmp_dir.path().join("base.toml");

    let base_content = format!(
        r##"
source = "{}"

[colors]
r = "#ff0000"
"##,
        tmp_dir.path().join("missing.toml").display()
    );
    fs::write(&base_path, base_content).unwrap();

    let config = Config::load_from(&base_path).unwrap();
    assert!(config.colors.contains_key("r"));
}

#[test]
fn load_with_cyclic_sources_errors() {
    let tmp_dir = TempDir::new().unwrap();
    let a_path = tmp_dir.path().join("a.toml");
    let b_path = tmp_dir.path().join("b.toml");

    let a_content = format!(r#"source = "{}""#, b_path.display());
    let b_content = format!(r#"source = "{}""#, a_path.display());
    fs::write(&a_path, a_content).unwrap();
    fs::write(&b_path, b_content).unwrap();

    let err = Config::load_from(&a_path).unwrap_err();
    assert!(matches!(err, Error::CyclicInclude(_)));
}

#[test]
fn extract_sources_splits_directives() {
    let (sources, rest) = extract_sources("source = \"a.toml\"\n[general]\nsource_ish = 1\nsource='b.toml'\n");
    assert_eq!(sources, ["a.toml", "b.toml"]);
    assert_eq!(rest, "[general]\nsource_ish = 1\n");
}

#[test]
fn palette_applies_color_overrides() {
    let mut config = Config::default();
    config.colors.insert("q".into(), "#010203".into());
    config.colors.insert("r".into(), "#ffffff".into());

    let palette = config.palette();
    assert_eq!(palette.get('q'), Some(Color::new(1, 2, 3).fg_ansi().as_str()));
    assert_eq!(palette.get('r'), Some("\x1b[38;2;255;255;255m"));
    assert_eq!(palette.get('g'), Some("\x1b[32m"));
}

#[test]
fn palette_skips_invalid_entries() {
    let mut config = Config::default();
    config.colors.insert("qq".into(), "#010203".into());
    config.colors.insert("|".into(), "#010203".into());
    config.colors.insert("x".into(), "not-a-color".into());

    let palette = config.palette();
    assert_eq!(palette.len(), 16);
    assert!(!palette.contains('x'));
    assert!(!palette.contains('|'));
}

#[test]
fn for_app_applies_overrides() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("taglog.toml");
    fs::write(
        &path,
        r#"
[general]
level = "info"

[apps.worker]
level = "debug"

[apps.worker.console]
colors = false

[apps.worker.file]
enabled = true
path = "/tmp/worker.log"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    let worker = config.for_app("worker");
    assert_eq!(worker.parse_level(), Level::Debug);
    assert!(!worker.console.colors);
    assert!(worker.console.enabled);
    assert!(worker.file.enabled);
    assert_eq!(worker.file.path, "/tmp/worker.log");

    let other = config.for_app("other");
    assert_eq!(other.parse_level(), Level::Info);
    assert!(!other.file.enabled);
}

#[test]
fn logger_from_config_builds_enabled_outputs() {
    let tmp_dir = TempDir::new().unwrap();
    let log_path = tmp_dir.path().join("logs").join("app.log");

    let mut config = Config::default();
    config.general.level = "debug".to_string();
    config.console.enabled = false;
    config.file.enabled = true;
    config.file.path = log_path.to_string_lossy().into_owned();
    config.file.structure = "{level} {msg}".to_string();
    config.file.buffer_size = 0;

    let mut logger = Logger::from_config_with(&config, None).unwrap();
    assert_eq!(logger.output_count(), 1);
    assert_eq!(logger.min_level(), Level::Debug);

    logger.debug("from b|config|");
    assert_eq!(fs::read_to_string(&log_path).unwrap(), "debug from config\n");
}

#[test]
fn logger_from_config_rejects_tiny_buffer() {
    let mut config = Config::default();
    config.console.buffer_size = 2;

    assert!(matches!(
        Logger::from_config_with(&config, None),
        Err(Error::BufferCapacity { .. })
    ));
}

#[test]
fn logger_from_config_uses_app_overrides() {
    let mut config = Config::default();
    config.apps.insert(
        "quiet".to_string(),
        toml::from_str("level = \"error\"\n[console]\nenabled = false\n").unwrap(),
    );

    let logger = Logger::from_config_with(&config, Some("quiet")).unwrap();
    assert_eq!(logger.min_level(), Level::Error);
    assert_eq!(logger.output_count(), 0);
}
