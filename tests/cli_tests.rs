use clap::Parser;
use console_draw::cli::{execute, Cli, CliState, Command};
use console_draw::config::CONFIG_FILE_NAME;
use console_draw_core::charset;
use console_draw_core::{Buffer, NoColor, Renderer, Size, TextMetrics};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, body: &str) -> String {
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, body).unwrap();
    path.to_string_lossy().into_owned()
}

fn preview(state: &CliState) -> Vec<String> {
    let size = state.cli.preview.unwrap();
    let charset = charset::by_name(&state.config.render.charset).unwrap();
    let mut buffer = Buffer::new(size);
    let mut renderer = Renderer::new(
        &mut buffer,
        charset.as_ref(),
        &NoColor,
        TextMetrics::new(console_draw_core::EncodingMode::Utf8),
    );
    execute(&state.cli.command, &mut renderer, &state.config.render).unwrap();
    buffer.rows()
}

#[test]
#[serial]
fn test_initialize_with_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(
        &temp_dir,
        "[render]\ncharset = \"ascii\"\nline_style = \"single\"\nfill_style = \"none\"\n",
    );

    let cli = Cli::try_parse_from([
        "console-draw",
        "--config",
        &config_path,
        "--preview",
        "6x3",
        "box",
        "0",
        "0",
        "4",
        "2",
    ])
    .unwrap();
    let state = CliState::initialize(cli).unwrap();

    assert_eq!(state.config.render.charset, "ascii");
    assert_eq!(preview(&state), vec!["+---+", "|   |", "+---+"]);
}

#[test]
#[serial]
fn test_charset_flag_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(&temp_dir, "[render]\ncharset = \"ascii\"\n");

    let cli = Cli::try_parse_from([
        "console-draw",
        "box",
        "0",
        "0",
        "3",
        "1",
        "--charset",
        "utf8",
        "--config",
        &config_path,
        "--preview",
        "4x2",
    ])
    .unwrap();
    let state = CliState::initialize(cli).unwrap();

    assert_eq!(state.config.render.charset, "utf8");
    assert_eq!(preview(&state), vec!["┌──┐", "└──┘"]);
}

#[test]
#[serial]
fn test_unknown_charset_flag_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(&temp_dir, "");

    let cli = Cli::try_parse_from([
        "console-draw",
        "clear",
        "--charset",
        "klingon",
        "--config",
        &config_path,
    ])
    .unwrap();
    let err = CliState::initialize(cli).err().unwrap();
    assert!(format!("{err:#}").contains("Invalid charset"));
}

#[test]
#[serial]
fn test_line_and_block_preview() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(&temp_dir, "");

    let cli = Cli::try_parse_from([
        "console-draw",
        "--config",
        &config_path,
        "--preview",
        "8x3",
        "line",
        "truncated text",
    ])
    .unwrap();
    let state = CliState::initialize(cli).unwrap();
    assert_eq!(preview(&state), vec!["truncate", "", ""]);

    let cli = Cli::try_parse_from([
        "console-draw",
        "--config",
        &config_path,
        "--preview",
        "10x4",
        "block",
        "one two three",
        "--width",
        "-2",
        "--x",
        "1",
        "--y",
        "1",
    ])
    .unwrap();
    let state = CliState::initialize(cli).unwrap();
    assert_eq!(
        state.cli.command,
        Command::Block {
            text: "one two three".to_string(),
            width: -2,
            height: None,
            x: 1,
            y: 1,
            color: None,
            bg: None,
        }
    );
    // available width 9, minus 2 => 7 cells
    assert_eq!(preview(&state), vec!["", " one two", " three", ""]);
}

#[test]
fn test_preview_size_must_be_valid() {
    assert!(Cli::try_parse_from(["console-draw", "--preview", "80", "clear"]).is_err());
    let cli = Cli::try_parse_from(["console-draw", "--preview", "80x25", "clear"]).unwrap();
    assert_eq!(cli.preview, Some(Size::new(80, 25)));
}
