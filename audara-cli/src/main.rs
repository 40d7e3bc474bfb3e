//! # audara
//!
//! Static site builder for the Audara landing page.
//!
//! ## Usage
//!
//! ```bash
//! # Render dist/index.html and copy ./public alongside it
//! audara build --public public
//!
//! # Pin the footer year
//! audara build --out site --year 2026
//!
//! # Dump page content as JSON
//! audara content
//!
//! # Verify referenced images exist
//! audara check-assets --public public
//! ```

mod assets;
mod build;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use build::{BuildOptions, build_site};
use config::SiteConfig;

#[derive(Parser, Debug)]
#[command(name = "audara")]
#[command(about = "Build the Audara landing page as static HTML")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render index.html and copy public files into the output directory
    Build {
        /// Output directory (default: dist)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Directory copied verbatim into the output
        #[arg(long)]
        public: Option<PathBuf>,
        /// Footer year (default: current year)
        #[arg(long)]
        year: Option<i32>,
        /// Config file (default: ./audara.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print navigation, features and steps as JSON
    Content {
        /// Single-line output
        #[arg(long)]
        compact: bool,
    },
    /// Check that every image the page references exists under a directory
    CheckAssets {
        /// Directory the site is served from
        #[arg(long)]
        public: PathBuf,
        /// Print statuses as JSON
        #[arg(long)]
        json: bool,
    },
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Build {
            out,
            public,
            year,
            config,
        } => {
            let cwd = std::env::current_dir().context("failed to read working directory")?;
            let site_config = SiteConfig::load(config.as_deref(), &cwd)?;
            let opts = BuildOptions::resolve(out, public, year, &site_config.build);
            let report = build_site(&opts).context("build failed")?;

            println!("{}", report.index.display());
            info!(
                copied = report.copied_files,
                missing = report.missing_assets.len(),
                "build complete"
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Content { compact } => {
            let manifest = audara_site::content::manifest();
            let json = if compact {
                serde_json::to_string(&manifest)
            } else {
                serde_json::to_string_pretty(&manifest)
            }
            .context("failed to serialize content")?;
            println!("{json}");
            Ok(ExitCode::SUCCESS)
        }
        Command::CheckAssets { public, json } => {
            let statuses = assets::check_assets(&public);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&statuses).context("failed to serialize assets")?
                );
            } else {
                for status in &statuses {
                    let label = if status.present { "ok" } else { "missing" };
                    println!("{label:<8}{}", status.path);
                }
            }

            if statuses.iter().all(|s| s.present) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[audara] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
