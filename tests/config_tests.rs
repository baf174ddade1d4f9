use console_draw::config::{AppConfig, ColorMode, CONFIG_FILE_NAME, CONFIG_PATH_ENV};
use console_draw_core::{EncodingMode, FillStyle, LineStyle};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_load_valid_basic_config() {
    let fixture_path = PathBuf::from("tests/fixtures/config/valid_basic.toml");
    let config = AppConfig::load_from_file(&fixture_path).unwrap();

    assert_eq!(config.render.charset, "ascii");
    assert_eq!(config.render.color, "never");
    assert_eq!(config.logging.level, "debug");
    assert!(config.validate().is_ok());

    assert_eq!(config.render.charset().name(), "ascii");
    assert_eq!(config.render.line_style().unwrap(), LineStyle::Double);
    assert_eq!(config.render.fill_style(), FillStyle::ShadeMedium);
    assert_eq!(
        config.render.text_metrics(false).unwrap().mode(),
        EncodingMode::Utf8
    );
}

#[test]
fn test_load_partial_config_fills_defaults() {
    let fixture_path = PathBuf::from("tests/fixtures/config/valid_partial.toml");
    let config = AppConfig::load_from_file(&fixture_path).unwrap();

    assert_eq!(config.render.charset, "dec");
    assert_eq!(config.render.color, "auto");
    assert_eq!(config.render.line_style, "single");
    assert_eq!(config.render.fill_style, "none");
    assert_eq!(config.render.encoding, "auto");
    assert_eq!(config.logging.level, "warn");
    assert!(config.validate().is_ok());
}

#[test]
fn test_numeric_line_style_and_literal_fill() {
    let fixture_path = PathBuf::from("tests/fixtures/config/valid_literal_fill.toml");
    let config = AppConfig::load_from_file(&fixture_path).unwrap();

    assert!(config.validate().is_ok());
    assert_eq!(config.render.line_style().unwrap(), LineStyle::Double);
    assert_eq!(config.render.fill_style(), FillStyle::literal("*"));
}

#[test]
fn test_invalid_fixtures_fail_validation() {
    let cases = [
        ("invalid_charset.toml", "Invalid charset"),
        ("invalid_color.toml", "Invalid color mode"),
        ("invalid_encoding.toml", "Invalid encoding"),
        ("invalid_line_style.toml", "Invalid line style"),
        ("invalid_log_level.toml", "Invalid log level"),
    ];

    for (file, expected) in cases {
        let fixture_path = PathBuf::from("tests/fixtures/config").join(file);
        let config = AppConfig::load_from_file(&fixture_path).unwrap();
        let err = config.validate().unwrap_err();
        assert!(
            err.to_string().contains(expected),
            "{file}: expected '{expected}' in '{err}'"
        );
    }
}

#[test]
fn test_malformed_toml_is_a_load_error() {
    let fixture_path = PathBuf::from("tests/fixtures/config/malformed.toml");
    let err = AppConfig::load_from_file(&fixture_path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_load_from_missing_file_creates_default() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nested").join(CONFIG_FILE_NAME);

    let config = AppConfig::load_from_file(&config_path).unwrap();
    assert!(config_path.exists());
    assert_eq!(config.render.charset, "utf8");
    assert!(config.validate().is_ok());

    // The written file parses back to the same settings
    let reloaded = AppConfig::load_from_file(&config_path).unwrap();
    assert_eq!(reloaded.render.charset, config.render.charset);
    assert_eq!(reloaded.logging.level, config.logging.level);
}

#[test]
fn test_load_from_written_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &config_path,
        "[render]\ncharset = \"utf8-heavy\"\ncolor = \"always\"\n",
    )
    .unwrap();

    let config = AppConfig::load_from_file(&config_path).unwrap();
    assert_eq!(config.render.charset().name(), "utf8-heavy");
    assert_eq!(
        config.render.color.parse::<ColorMode>().unwrap(),
        ColorMode::Always
    );
}

#[test]
#[serial]
fn test_env_overrides() {
    env::set_var("CONSOLE_DRAW_CHARSET", "ascii");
    env::set_var("CONSOLE_DRAW_COLOR", "never");
    env::set_var("CONSOLE_DRAW_LOG_LEVEL", "trace");

    let mut config = AppConfig::default();
    config.apply_env_overrides();

    env::remove_var("CONSOLE_DRAW_CHARSET");
    env::remove_var("CONSOLE_DRAW_COLOR");
    env::remove_var("CONSOLE_DRAW_LOG_LEVEL");

    assert_eq!(config.render.charset, "ascii");
    assert_eq!(config.render.color, "never");
    assert_eq!(config.logging.level, "trace");
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_env_override_can_invalidate() {
    env::set_var("CONSOLE_DRAW_COLOR", "rainbow");
    let mut config = AppConfig::default();
    config.apply_env_overrides();
    env::remove_var("CONSOLE_DRAW_COLOR");

    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn test_search_paths_order() {
    env::remove_var(CONFIG_PATH_ENV);
    let paths = AppConfig::search_paths();
    assert_eq!(paths[0], PathBuf::from(CONFIG_FILE_NAME));
    assert!(paths
        .iter()
        .skip(1)
        .all(|p| p.ends_with(PathBuf::from(".console-draw").join(CONFIG_FILE_NAME))));

    env::set_var(CONFIG_PATH_ENV, "/tmp/elsewhere.toml");
    let paths = AppConfig::search_paths();
    env::remove_var(CONFIG_PATH_ENV);

    assert_eq!(paths.last(), Some(&PathBuf::from("/tmp/elsewhere.toml")));
}

#[test]
fn test_summary_lists_settings() {
    let config = AppConfig::embedded_default().unwrap();
    let summary = config.summary();
    assert!(summary.contains("Charset: utf8"));
    assert!(summary.contains("Color: auto"));
    assert!(summary.contains("Logging Level: warn"));
}
