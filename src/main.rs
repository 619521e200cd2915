use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use rgba_grid::color::palette;
use rgba_grid::{Color, Pattern, PngEncoder, RenderConfig};

#[derive(Parser, Debug)]
#[command(name = "rgba-grid", version, about = "Render RGBA pixel grids to PNG")]
struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log debug details to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Paint a grid with a color pair and write it as PNG
    Render {
        /// TOML render config
        #[arg(short, long, default_value = "rgba-grid.toml")]
        config: PathBuf,

        #[arg(long)]
        width: Option<i32>,

        #[arg(long)]
        height: Option<i32>,

        /// Color pair id, e.g. "black and white"
        #[arg(long)]
        pair: Option<String>,

        #[arg(long, value_enum)]
        pattern: Option<Pattern>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Composite TOP over BOTTOM and print the result
    Blend {
        /// Color drawn on top: a palette name or hex
        #[arg(value_parser = parse_color)]
        top: Color,
        /// Color underneath: a palette name or hex
        #[arg(value_parser = parse_color)]
        bottom: Color,
    },
    /// List the predefined colors
    Colors,
    /// List the predefined color pairs
    Pairs,
}

/// Accept a palette name ("red") or a hex color ("#ff000080")
fn parse_color(value: &str) -> Result<Color, String> {
    palette::color(value.trim()).map_or_else(
        || value.parse::<Color>().map_err(|e| e.to_string()),
        Ok,
    )
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set log level based on flags
    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::debug!("rgba-grid version {}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Render {
            config,
            width,
            height,
            pair,
            pattern,
            output,
        } => {
            let mut config = RenderConfig::load(&config)?;
            config.width = width.unwrap_or(config.width);
            config.height = height.unwrap_or(config.height);
            config.pair = pair.unwrap_or(config.pair);
            config.pattern = pattern.unwrap_or(config.pattern);
            config.output = output.unwrap_or(config.output);
            config.validate()?;
            render(&config)
        }
        Command::Blend { top, bottom } => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", top.composite_over(bottom))?;
            Ok(())
        }
        Command::Colors => {
            let mut stdout = std::io::stdout().lock();
            for (name, color) in palette::colors() {
                writeln!(stdout, "{name:<12} {}", color.to_hex8())?;
            }
            Ok(())
        }
        Command::Pairs => {
            let mut stdout = std::io::stdout().lock();
            for pair in palette::pairs() {
                writeln!(stdout, "{pair}")?;
            }
            Ok(())
        }
    }
}

fn render(config: &RenderConfig) -> anyhow::Result<()> {
    let pair = config.resolve_pair()?;
    let grid = config
        .pattern
        .render(&pair, config.width, config.height, config.cell_size)?;
    let encoder = PngEncoder::new();
    let png = grid.encode(&encoder)?;

    let output = config.output_path(&encoder);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&output, &png)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(
        "Wrote {}x{} {} image to {} ({} bytes)",
        config.width,
        config.height,
        pair.id(),
        output.display(),
        png.len()
    );
    Ok(())
}
