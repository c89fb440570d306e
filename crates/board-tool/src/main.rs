use anyhow::Context;
use board_code::{BitMatrix, BoardCode};
use board_tool::config::ToolConfig;
use board_tool::report::{self, DecodeReport, DemoReport, EncodeReport};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "board-tool")]
#[command(about = "Convert between 8x8 bit matrices and 64-bit board codes")]
struct Cli {
    /// Path to the configuration file (defaults to board-tool.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a matrix into a number
    Encode {
        /// Eight rows of '0'/'1', or a single argument with '/' between rows
        #[arg(required = true)]
        rows: Vec<String>,
    },
    /// Decode a number into matrix rows
    Decode {
        /// Decimal, 0x hexadecimal or 0b binary value
        #[arg(allow_negative_numbers = true)]
        value: String,
        /// Draw the grid with the configured glyphs
        #[arg(long)]
        grid: bool,
    },
    /// Draw a number as a labelled grid
    Show {
        /// Decimal, 0x hexadecimal or 0b binary value
        #[arg(allow_negative_numbers = true)]
        value: String,
    },
    /// Encode and decode the sample values
    Demo {
        /// Preset from the configuration file to use as samples
        #[arg(short, long)]
        preset: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn emit<T: Serialize>(
    json: bool,
    report: &T,
    text: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", report::to_json(report)?);
    } else {
        println!("{}", text(report));
    }
    Ok(())
}

fn parse_code(value: &str) -> anyhow::Result<BoardCode> {
    value
        .parse()
        .with_context(|| format!("Failed to parse value '{}'", value))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config =
        ToolConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Encode { rows } => {
            // A single argument carries all rows with separators.
            let parsed = if rows.len() == 1 {
                rows[0].parse::<BitMatrix>()
            } else {
                BitMatrix::from_rows(&rows)
            };
            let matrix = parsed.context("Failed to parse matrix")?;

            tracing::debug!("Encoding {} set cells", matrix.count());
            emit(cli.json, &EncodeReport::new(matrix), EncodeReport::to_text)?;
        }
        Commands::Decode { value, grid } => {
            let code = parse_code(&value)?;
            tracing::debug!("Decoding {}", code);
            let report = DecodeReport::new(code);
            if grid {
                emit(cli.json, &report, |r| r.to_grid(&config.display))?;
            } else {
                emit(cli.json, &report, DecodeReport::to_text)?;
            }
        }
        Commands::Show { value } => {
            let code = parse_code(&value)?;
            emit(cli.json, &DecodeReport::new(code), |r| r.to_board(&config.display))?;
        }
        Commands::Demo { preset } => {
            let sample = config
                .sample(preset.as_deref())
                .context("Failed to resolve demo sample")?;
            emit(cli.json, &DemoReport::new(&sample), DemoReport::to_text)?;
        }
    }

    Ok(())
}
