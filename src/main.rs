use anyhow::Result;
use clap::Parser;
use console_draw::cli::{Cli, CliState};
use std::env;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize CLI state (loads and validates config)
    let state = CliState::initialize(cli)?;

    // Initialize logging based on config; stderr keeps drawn output clean
    let level = state.config.logging.level.to_lowercase();
    let default_directive = format!("console_draw={level},console_draw_core={level}");
    let env_override = env::var("RUST_LOG").unwrap_or_default();
    let combined_filter = if env_override.trim().is_empty() {
        default_directive
    } else if env_override.contains("console_draw") {
        env_override
    } else {
        format!("{},{}", env_override, default_directive)
    };

    tracing_subscriber::fmt()
        .with_env_filter(combined_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("{}", state.config.summary());
    state.run()
}
