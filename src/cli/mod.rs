//! Command line front end
//!
//! Each subcommand maps onto one renderer call. With `--preview WxH` the
//! drawing goes into an in-memory buffer whose rows are printed instead of
//! driving the terminal, which makes the output easy to diff.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console_draw_core::charset::{self, Charset, CHARSET_NAMES};
use console_draw_core::{
    BoxStyle, Buffer, Color, ColorSink, Device, FillStyle, LineStyle, NoColor, Renderer, Size,
    Terminal, TextBlock,
};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::{AppConfig, RenderConfig};

/// Draw boxes, lines and text blocks on the console.
#[derive(Debug, Parser)]
#[command(name = "console-draw", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (created with defaults when missing)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Glyph set, overriding the configuration (utf8, utf8-heavy, ascii, dec)
    #[arg(long, global = true)]
    pub charset: Option<String>,

    /// Render into an in-memory WIDTHxHEIGHT grid and print it
    #[arg(long, global = true, value_name = "WxH", value_parser = parse_size)]
    pub preview: Option<Size>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Draw a box; negative X2/Y2 are measured from the right/bottom edge
    Box {
        #[arg(allow_negative_numbers = true)]
        x1: i32,
        #[arg(allow_negative_numbers = true)]
        y1: i32,
        #[arg(allow_negative_numbers = true)]
        x2: i32,
        #[arg(allow_negative_numbers = true)]
        y2: i32,
        /// Border style: none, single, double, block or a numeric code
        #[arg(long)]
        line: Option<LineStyle>,
        /// Interior fill: none, shade-light, shade-medium, shade-dark, block,
        /// a numeric code, or a literal character
        #[arg(long, value_parser = parse_fill)]
        fill: Option<FillStyle>,
        /// Border color
        #[arg(long)]
        color: Option<Color>,
        /// Border background color
        #[arg(long)]
        bg: Option<Color>,
        /// Fill color
        #[arg(long)]
        fill_color: Option<Color>,
        /// Fill background color
        #[arg(long)]
        fill_bg: Option<Color>,
    },
    /// Write one line of text, truncated to the device width
    Line {
        text: String,
        #[arg(long)]
        color: Option<Color>,
        #[arg(long)]
        bg: Option<Color>,
    },
    /// Write word-wrapped text into a rectangle
    Block {
        text: String,
        /// Block width; negative means distance from the right edge
        #[arg(long, allow_negative_numbers = true)]
        width: i32,
        /// Block height; negative means distance from the bottom edge
        #[arg(long, allow_negative_numbers = true)]
        height: Option<i32>,
        #[arg(long, default_value_t = 0)]
        x: u16,
        #[arg(long, default_value_t = 0)]
        y: u16,
        #[arg(long)]
        color: Option<Color>,
        #[arg(long)]
        bg: Option<Color>,
    },
    /// Clear the screen
    Clear,
    /// Set the window title
    Title { text: String },
}

fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width = w
        .trim()
        .parse::<u16>()
        .map_err(|e| format!("invalid width '{w}': {e}"))?;
    let height = h
        .trim()
        .parse::<u16>()
        .map_err(|e| format!("invalid height '{h}': {e}"))?;
    if width == 0 || height == 0 {
        return Err(format!("preview size must be non-zero, got '{s}'"));
    }
    Ok(Size::new(width, height))
}

fn parse_fill(s: &str) -> Result<FillStyle, String> {
    Ok(FillStyle::parse(s))
}

/// Loaded configuration plus the parsed command line
pub struct CliState {
    pub cli: Cli,
    pub config: AppConfig,
}

impl CliState {
    /// Load configuration for the parsed command line
    ///
    /// An explicit `--config` path wins over the lookup order; environment
    /// overrides apply on top of either.
    pub fn initialize(cli: Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => AppConfig::load_from_file(path)?,
            None => AppConfig::load()?,
        };
        config.apply_env_overrides();
        if let Some(name) = &cli.charset {
            config.render.charset = name.clone();
        }
        config.validate().context("Invalid configuration")?;
        Ok(Self { cli, config })
    }

    /// Execute the command against the terminal or a preview buffer
    pub fn run(&self) -> Result<()> {
        let charset = resolve_charset(&self.config.render)?;

        if let Some(size) = self.cli.preview {
            let mut buffer = Buffer::new(size);
            let metrics = self.config.render.text_metrics(buffer.is_utf8())?;
            debug!(charset = charset.name(), mode = ?metrics.mode(), "Renderer configured");
            {
                let mut renderer =
                    Renderer::new(&mut buffer, charset.as_ref(), &NoColor, metrics);
                execute(&self.cli.command, &mut renderer, &self.config.render)?;
            }
            let title = buffer.title();
            if !title.is_empty() {
                info!(%title, "Title set");
            }
            let mut stdout = io::stdout().lock();
            for row in buffer.rows() {
                writeln!(stdout, "{row}").context("Failed to write preview")?;
            }
            return Ok(());
        }

        let colors: Box<dyn ColorSink> =
            self.config.render.color_sink(io::stdout().is_terminal());
        let mut terminal = Terminal::new();
        let metrics = self.config.render.text_metrics(terminal.is_utf8())?;
        debug!(charset = charset.name(), mode = ?metrics.mode(), "Renderer configured");
        {
            let mut renderer =
                Renderer::new(&mut terminal, charset.as_ref(), colors.as_ref(), metrics);
            execute(&self.cli.command, &mut renderer, &self.config.render)?;
        }
        terminal.flush().context("Failed to flush terminal")?;
        Ok(())
    }
}

fn resolve_charset(render: &RenderConfig) -> Result<Box<dyn Charset>> {
    charset::by_name(&render.charset).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown charset: {} (expected one of {})",
            render.charset,
            CHARSET_NAMES.join(", ")
        )
    })
}

/// Run one command through a renderer
///
/// Box styles not given on the command line come from `defaults`.
pub fn execute<D: Device + ?Sized>(
    command: &Command,
    renderer: &mut Renderer<'_, D>,
    defaults: &RenderConfig,
) -> Result<()> {
    match command {
        Command::Box {
            x1,
            y1,
            x2,
            y2,
            line,
            fill,
            color,
            bg,
            fill_color,
            fill_bg,
        } => {
            let line = match line {
                Some(line) => *line,
                None => defaults.line_style()?,
            };
            let fill = fill.clone().unwrap_or_else(|| defaults.fill_style());

            let mut style = BoxStyle::new().line(line).fill(fill);
            if let Some(c) = color {
                style = style.color(*c);
            }
            if let Some(c) = bg {
                style = style.bg(*c);
            }
            if let Some(c) = fill_color {
                style = style.fill_color(*c);
            }
            if let Some(c) = fill_bg {
                style = style.fill_bg(*c);
            }
            renderer
                .write_box((*x1, *y1, *x2, *y2), &style)
                .context("Failed to draw box")?;
        }
        Command::Line { text, color, bg } => {
            renderer
                .write_line(text, *color, *bg)
                .context("Failed to write line")?;
        }
        Command::Block {
            text,
            width,
            height,
            x,
            y,
            color,
            bg,
        } => {
            let mut block = TextBlock::new(*width).at(*x, *y);
            if let Some(h) = height {
                block = block.height(*h);
            }
            if let Some(c) = color {
                block = block.color(*c);
            }
            if let Some(c) = bg {
                block = block.bg(*c);
            }
            renderer
                .write_text_block(text, &block)
                .context("Failed to write text block")?;
        }
        Command::Clear => {
            renderer.device().clear().context("Failed to clear screen")?;
        }
        Command::Title { text } => {
            renderer
                .device()
                .set_title(text)
                .context("Failed to set title")?;
        }
    }
    Ok(())
}
