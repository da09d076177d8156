//! sharpen-gen - sharpen-only post-processing shader generator
//!
//! Substitutes `KERNEL` and `STRIDE` in the sharpen template. Both `--strength`
//! and `--stride` are required (either may come from `--config` instead).

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use nether_postfx::{ShaderPaths, Stride, config, parse_stride};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sharpen-gen")]
#[command(about = "Generate the sharpen fragment shader from its template")]
#[command(version)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Kernel strength
    #[arg(long)]
    strength: Option<f64>,

    /// Stride to sample texture, must be greater than 0
    #[arg(long, value_parser = parse_stride)]
    stride: Option<Stride>,

    /// Shader template to read [default: shaders/screen_sharpen_template.frag]
    #[arg(long)]
    template: Option<PathBuf>,

    /// Shader file to write [default: shaders/screen_sharpen.frag]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file with [paths] and [defaults] sections
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let config_file = config::load_optional(cli.config.as_deref())?;
    let config_stride = match &cli.config {
        Some(path) => config_file.stride_from(path)?,
        None => None,
    };

    let Some(strength) = cli.strength.or(config_file.defaults.strength) else {
        missing_argument("--strength <STRENGTH>")
    };
    let Some(stride) = cli.stride.or(config_stride) else {
        missing_argument("--stride <STRIDE>")
    };

    let paths = ShaderPaths::sharpen_default()
        .with_overrides(config_file.paths.template, config_file.paths.output)
        .with_overrides(cli.template, cli.output);

    tracing::debug!(strength, stride = stride.get(), ?paths, "Resolved generation parameters");
    nether_postfx::generate_sharpen_shader(&paths, strength, stride)
}

fn missing_argument(arg: &str) -> ! {
    Cli::command()
        .error(
            ErrorKind::MissingRequiredArgument,
            format!("the following required argument was not provided: {arg}"),
        )
        .exit()
}

fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
