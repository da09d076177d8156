//! Post-processing shader generation
//!
//! Builds fragment shaders from GLSL templates by replacing placeholder tokens
//! with generated source text:
//!
//! - `KERNEL` - a 3x3 `float[](...)` convolution kernel (sharpen, blur or edge)
//! - `OFFSETS` - a `vec2 offsets[9]` declaration of symbolic sample offsets
//! - `OFFSET_SZ` - the length of that array
//! - `STRIDE` - the texture-sampling step as a float literal
//!
//! Shared by the `postfx-gen` and `sharpen-gen` tools.

pub mod config;
pub mod kernel;
pub mod literal;
pub mod offsets;
pub mod params;
pub mod pipeline;
pub mod template;

pub use config::{ConfigError, GeneratorConfig};
pub use kernel::{Kernel, generate_blur, generate_kernel, generate_sharpen};
pub use offsets::{AxisTerm, OffsetGrid, generate_offsets};
pub use params::{FilterKind, GenerationParameters, ParamError, Stride, parse_stride};
pub use pipeline::{
    ShaderPaths, generate_post_process_shader, generate_sharpen_shader, render_post_process,
    render_sharpen,
};
pub use template::{OFFSET_GRID_SIZE, Placeholder, Substitutions, TemplateError};
