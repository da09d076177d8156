//! 3x3 convolution kernels
//!
//! Kernels are kept as numbers and only turned into GLSL `float[](...)` text when
//! substituted into a template, so tests can check coefficients directly.

use std::fmt;

use crate::literal::glsl_float;
use crate::params::FilterKind;

/// Index of the center tap in a row-major 3x3 kernel
const CENTER: usize = 4;

/// Row-major 3x3 kernel coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    coefficients: [f64; 9],
}

impl Kernel {
    pub fn new(coefficients: [f64; 9]) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[f64; 9] {
        &self.coefficients
    }

    pub fn center(&self) -> f64 {
        self.coefficients[CENTER]
    }

    /// The eight non-center coefficients, row-major
    pub fn neighbors(&self) -> impl Iterator<Item = f64> + '_ {
        self.coefficients
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != CENTER)
            .map(|(_, c)| *c)
    }

    /// True when the kernel is point-symmetric about its center tap
    pub fn is_symmetric(&self) -> bool {
        (0..CENTER).all(|i| self.coefficients[i] == self.coefficients[8 - i])
    }

    /// Render as a GLSL array constructor, one kernel row per line
    pub fn to_glsl(&self) -> String {
        let rows: Vec<String> = self
            .coefficients
            .chunks(3)
            .map(|row| {
                let cells: Vec<String> = row.iter().map(|c| glsl_float(*c)).collect();
                format!("        {}", cells.join(", "))
            })
            .collect();
        format!("float[](\n{}\n    )", rows.join(",\n"))
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_glsl())
    }
}

/// Fixed Gaussian-like blur: `[1, 2, 1, 2, 4, 2, 1, 2, 1] / 16`
pub fn generate_blur() -> Kernel {
    Kernel::new([
        1.0 / 16.0,
        2.0 / 16.0,
        1.0 / 16.0,
        2.0 / 16.0,
        4.0 / 16.0,
        2.0 / 16.0,
        1.0 / 16.0,
        2.0 / 16.0,
        1.0 / 16.0,
    ])
}

/// Unsharp-mask kernel.
///
/// Every neighbor is `-strength` and the center is `1 + 8 * strength`. With
/// `detect_edges` the identity term is dropped, leaving a pure high-pass kernel
/// with center `8 * strength`. Strength is not range checked.
pub fn generate_sharpen(strength: f64, detect_edges: bool) -> Kernel {
    let identity = if detect_edges { 0.0 } else { 1.0 };
    let mut coefficients = [-strength; 9];
    coefficients[CENTER] = identity + 8.0 * strength;
    Kernel::new(coefficients)
}

/// Kernel for a filter kind. Blur ignores `strength`.
pub fn generate_kernel(kind: FilterKind, strength: f64) -> Kernel {
    match kind {
        FilterKind::Blur => generate_blur(),
        FilterKind::Sharpen => generate_sharpen(strength, false),
        FilterKind::Edge => generate_sharpen(strength, true),
    }
}
