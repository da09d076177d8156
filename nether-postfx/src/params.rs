//! Generation parameters and their validation
//!
//! Every value that reaches the generators passes through here first. Validation
//! returns an explicit `Result`; callers must stop before touching any file when
//! it fails.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Validation error for generation parameters
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    /// Stride was zero, negative or NaN
    #[error("stride must be greater than 0 (got {0})")]
    NonPositiveStride(f64),

    /// A numeric argument could not be parsed
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// Sharpen and edge filters need a strength
    #[error("a strength is required for the {0} filter")]
    MissingStrength(FilterKind),

    /// Filter name is not one of sharpen, blur, edge
    #[error("unknown filter type '{0}' (expected sharpen, blur or edge)")]
    UnknownFilter(String),
}

/// Which kernel the generated shader convolves with
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Unsharp-mask kernel scaled by strength
    #[default]
    Sharpen,
    /// Fixed 3x3 Gaussian-like blur
    Blur,
    /// Sharpen kernel without the identity term (high-pass)
    Edge,
}

impl FilterKind {
    /// Lowercase name used on the command line and in config files
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Sharpen => "sharpen",
            FilterKind::Blur => "blur",
            FilterKind::Edge => "edge",
        }
    }

    /// Edge detection is sharpen with the `+1` center term dropped
    pub fn detects_edges(self) -> bool {
        self == FilterKind::Edge
    }

    /// Whether the kernel for this filter depends on a strength value
    pub fn needs_strength(self) -> bool {
        self != FilterKind::Blur
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sharpen" => Ok(FilterKind::Sharpen),
            "blur" => Ok(FilterKind::Blur),
            "edge" => Ok(FilterKind::Edge),
            other => Err(ParamError::UnknownFilter(other.to_string())),
        }
    }
}

/// Texture-sampling step between adjacent taps. Always `> 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stride(f64);

impl Stride {
    /// One texel of a 300px-wide target
    pub const DEFAULT: Stride = Stride(1.0 / 300.0);

    /// Validate a stride value.
    ///
    /// # Errors
    ///
    /// Returns `ParamError::NonPositiveStride` for zero, negative or NaN values.
    pub fn new(value: f64) -> Result<Self, ParamError> {
        // NaN fails this comparison too
        if value > 0.0 {
            Ok(Stride(value))
        } else {
            Err(ParamError::NonPositiveStride(value))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Stride {
    fn default() -> Self {
        Stride::DEFAULT
    }
}

/// Parse and validate a stride from command-line text.
///
/// Used directly as a clap `value_parser`, so a bad stride is rejected while
/// arguments are parsed.
pub fn parse_stride(text: &str) -> Result<Stride, ParamError> {
    let value = text
        .trim()
        .parse::<f64>()
        .map_err(|_| ParamError::InvalidNumber(text.to_string()))?;
    Stride::new(value)
}

/// Everything needed to generate one post-processing shader
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParameters {
    pub kind: FilterKind,
    /// Absent only for blur, which ignores it
    pub strength: Option<f64>,
    pub stride: Stride,
}

impl GenerationParameters {
    /// # Errors
    ///
    /// Returns `ParamError::MissingStrength` when a sharpen or edge filter is
    /// requested without a strength.
    pub fn new(
        kind: FilterKind,
        strength: Option<f64>,
        stride: Stride,
    ) -> Result<Self, ParamError> {
        if kind.needs_strength() && strength.is_none() {
            return Err(ParamError::MissingStrength(kind));
        }
        Ok(Self {
            kind,
            strength,
            stride,
        })
    }

    pub fn detect_edges(&self) -> bool {
        self.kind.detects_edges()
    }
}
