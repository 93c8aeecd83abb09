// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pictor - prompt-to-image generation with a local gallery.
//!
//! This is the binary entry point for the Pictor CLI.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use pictor_core::{PictorError, Style};
use pictor_engine::{GenerationPipeline, RateLimiter};
use pictor_storage::RecordStore;
use tracing::{debug, warn};

mod gallery;
mod generate;
mod rate;
mod remove;
mod report;
mod seed;
mod show;

/// Pictor - prompt-to-image generation with a local gallery.
#[derive(Parser, Debug)]
#[command(name = "pictor", version, about, long_about = None)]
struct Cli {
    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate an image from a prompt and store it in the gallery.
    Generate {
        /// Prompt text, up to 500 characters.
        prompt: String,

        /// Visual style: realistic, cyberpunk, or cartoon.
        #[arg(long, default_value = "realistic")]
        style: Style,
    },
    /// List stored generations, newest first.
    Gallery,
    /// Show one record in full, including the image path and dimensions.
    Show {
        /// Record id.
        id: i64,
    },
    /// Score a generation from 1 to 10, with optional feedback.
    Rate {
        /// Record id.
        id: i64,

        /// Score in 1..=10.
        score: i64,

        /// Free-form feedback on the generation.
        #[arg(long)]
        feedback: Option<String>,
    },
    /// Delete a record and its stored image.
    Remove {
        /// Record id.
        id: i64,
    },
    /// Print evaluation statistics over the whole gallery.
    Report,
    /// Populate an empty gallery with three sample generations.
    Seed,
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("pictor: use --help for available commands");
        return;
    };

    let config = match pictor_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            pictor_config::render_errors(&errors);
            std::process::exit(1);
        }
    };
    debug!(
        database = %config.storage.database_path,
        image_dir = %config.storage.image_dir,
        "config loaded"
    );

    let store = match RecordStore::open(&config.storage).await {
        Ok(store) => Arc::new(store),
        Err(err) => {
            eprintln!("pictor: cannot open the record store: {err}");
            std::process::exit(1);
        }
    };

    let result = dispatch(command, &config, &store, cli.plain).await;

    if let Err(err) = store.close().await {
        warn!(%err, "store close failed");
    }

    if let Err(err) = result {
        eprintln!("pictor: {err}");
        std::process::exit(1);
    }
}

/// Route one parsed subcommand to its implementation.
async fn dispatch(
    command: Commands,
    config: &pictor_config::PictorConfig,
    store: &Arc<RecordStore>,
    plain: bool,
) -> Result<(), PictorError> {
    match command {
        Commands::Generate { prompt, style } => {
            let pipeline = build_pipeline(config, store.clone())?;
            generate::run_generate(&pipeline, &prompt, style, plain).await
        }
        Commands::Gallery => gallery::run_gallery(store, plain).await,
        Commands::Show { id } => show::run_show(store, id, plain).await,
        Commands::Rate {
            id,
            score,
            feedback,
        } => rate::run_rate(store, id, score, feedback.as_deref(), plain).await,
        Commands::Remove { id } => remove::run_remove(store, id, plain).await,
        Commands::Report => report::run_report(store, plain).await,
        Commands::Seed => {
            let pipeline = build_pipeline(config, store.clone())?;
            seed::run_seed(&pipeline, store, plain).await
        }
    }
}

/// Wire the submission pipeline for the commands that generate images.
fn build_pipeline(
    config: &pictor_config::PictorConfig,
    store: Arc<RecordStore>,
) -> Result<GenerationPipeline, PictorError> {
    let generator = pictor_huggingface::resolve_generator(&config.huggingface)?;
    let limiter = RateLimiter::new(&config.limits);
    Ok(GenerationPipeline::new(store, generator, limiter))
}

/// Initialize the tracing subscriber from `PICTOR_LOG`, defaulting to
/// info for the pictor crates and warn for everything else.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("PICTOR_LOG")
        .unwrap_or_else(|_| EnvFilter::new("pictor=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_parses_style_and_prompt() {
        let cli =
            Cli::try_parse_from(["pictor", "generate", "a castle", "--style", "cartoon"]).unwrap();
        match cli.command {
            Some(Commands::Generate { prompt, style }) => {
                assert_eq!(prompt, "a castle");
                assert_eq!(style, Style::Cartoon);
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn generate_defaults_to_realistic() {
        let cli = Cli::try_parse_from(["pictor", "generate", "a castle"]).unwrap();
        match cli.command {
            Some(Commands::Generate { style, .. }) => assert_eq!(style, Style::Realistic),
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn unknown_style_is_rejected_at_parse_time() {
        let result = Cli::try_parse_from(["pictor", "generate", "x", "--style", "impressionist"]);
        assert!(result.is_err());
    }

    #[test]
    fn binary_loads_config_defaults() {
        // Verify config loads with defaults (no config file needed)
        let config = pictor_config::load_and_validate().expect("default config should be valid");
        assert_eq!(config.limits.max_requests, 5);
    }
}
