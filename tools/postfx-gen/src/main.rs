//! postfx-gen - generic post-processing shader generator
//!
//! Reads a fragment shader template containing `OFFSETS`, `OFFSET_SZ`, `KERNEL`
//! and `STRIDE` and writes the substituted shader.
//!
//! # Usage
//!
//! ```bash
//! # Sharpen (default type) with the default 1/300 stride
//! postfx-gen --strength 0.5
//!
//! # Edge detection, custom stride
//! postfx-gen --type edge --strength 1 --stride 0.002
//!
//! # Blur ignores --strength
//! postfx-gen --type blur --template my.frag --output out.frag
//! ```

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use nether_postfx::{
    FilterKind, GenerationParameters, ParamError, ShaderPaths, Stride, config, parse_stride,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "postfx-gen")]
#[command(about = "Generate a post-processing fragment shader from a template")]
#[command(version)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Filter to generate [default: sharpen]
    #[arg(long = "type", value_enum)]
    kind: Option<FilterKind>,

    /// Strength of filter (required for sharpen and edge)
    #[arg(long)]
    strength: Option<f64>,

    /// Stride to sample texture, must be greater than 0 [default: 1/300]
    #[arg(long, value_parser = parse_stride)]
    stride: Option<Stride>,

    /// Shader template to read [default: shaders/screen_generic.frag]
    #[arg(long)]
    template: Option<PathBuf>,

    /// Shader file to write [default: shaders/screen_postprocess.frag]
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

    let kind = cli.kind.or(config_file.defaults.kind).unwrap_or_default();
    let strength = cli.strength.or(config_file.defaults.strength);
    let stride = cli.stride.or(config_stride).unwrap_or_default();

    let params = match GenerationParameters::new(kind, strength, stride) {
        Ok(params) => params,
        Err(err @ ParamError::MissingStrength(_)) => Cli::command()
            .error(ErrorKind::MissingRequiredArgument, format!("{err} (--strength)"))
            .exit(),
        Err(err) => return Err(err.into()),
    };

    let paths = ShaderPaths::post_process_default()
        .with_overrides(config_file.paths.template, config_file.paths.output)
        .with_overrides(cli.template, cli.output);

    tracing::debug!(?params, ?paths, "Resolved generation parameters");
    nether_postfx::generate_post_process_shader(&paths, &params)
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
