use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use svg2jsx::{generate, IconMode, RawConfig, DEFAULT_CONFIG_FILE};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "svg2jsx")]
#[command(about = "Convert SVG icons to React components")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate components from SVG icons
    Generate {
        /// Configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Input directory containing SVG files (overrides the config file)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory for generated files (overrides the config file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Which files to generate (overrides the config file)
        #[arg(short, long, value_enum)]
        mode: Option<IconMode>,
    },

    /// Write a starter configuration file
    Init {
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Generate {
            config,
            input,
            output,
            mode,
        } => {
            let mut raw = load_config(&config)?;
            if input.is_some() {
                raw.input_dir = input;
            }
            if output.is_some() {
                raw.output_dir = output;
            }
            if mode.is_some() {
                raw.icon_mode = mode;
            }

            let report = generate(raw)?;

            println!(
                "\nDone! {} icons generated ({} skipped).",
                report.components.len(),
                report.skipped.len()
            );
        }
        Commands::Init { path } => {
            init_config(&path)?;
            println!("Created {}", path.display());
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// A missing config file is fine as long as the flags supply the directories
fn load_config(path: &Path) -> Result<RawConfig> {
    if !path.exists() {
        tracing::debug!("No config file at {}, using flags only", path.display());
        return Ok(RawConfig::default());
    }
    RawConfig::load(path).context("Failed to load configuration")
}

fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    std::fs::write(path, svg2jsx::config::default_config_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
