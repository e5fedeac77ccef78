//! `spacekit`: turns a saved AI response into a design file.
//!
//! ```text
//! spacekit [--config <file>] [--name <design name>] [<response file> | -]
//! ```
//!
//! The input may be the raw model text or the service's full JSON envelope.
//! The normalized design is printed to stdout as JSON.

use anyhow::Context;
use clap::Parser;
use spacekit::assistant::{normalize_response, GenerationResponse};
use spacekit::{designer_from_config, init_logging, normalize_limits, Config, SettingsPersistence};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "spacekit", version)]
#[command(about = "Turn a saved AI response into a SpaceKit design file")]
struct Args {
    /// Settings file; defaults to the per-user config location
    #[arg(long)]
    config: Option<PathBuf>,
    /// Design name written into the output
    #[arg(long)]
    name: Option<String>,
    /// Response file, or `-` for stdin
    #[arg(default_value = "-")]
    input: PathBuf,
}

impl Args {
    /// `None` when the response comes from stdin.
    fn input_path(&self) -> Option<&Path> {
        (self.input.as_os_str() != "-").then_some(self.input.as_path())
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(SettingsPersistence::load_default_location().config().clone()),
    }
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Unwraps a service envelope; anything else is treated as model text.
fn response_text(input: String) -> anyhow::Result<String> {
    match serde_json::from_str::<serde_json::Value>(&input) {
        Ok(payload) if payload.get("candidates").is_some() => {
            let response = GenerationResponse::from_service_payload(&payload)?;
            info!("Service envelope reported {} tokens", response.tokens);
            Ok(response.text)
        }
        _ => Ok(input),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!("spacekit {} (built {})", spacekit::VERSION, spacekit::BUILD_DATE);

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let text = response_text(read_input(args.input_path())?)?;

    let scene = normalize_response(&text, &normalize_limits(&config.assistant))
        .context("AI response could not be turned into a scene")?;

    let mut state = designer_from_config(&config);
    if let Some(name) = args.name {
        state.design_name = name;
    }
    let generation = state.generation();
    state.replace_scene_if_current(generation, scene);

    println!("{}", state.to_design_file().to_json()?);
    Ok(())
}
