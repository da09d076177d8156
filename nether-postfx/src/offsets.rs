//! Symmetric sample-offset grids
//!
//! Offsets are symbolic: each axis value is an integer multiple of an `offset`
//! variable that the template itself declares (normally bound to the stride).

use std::fmt;

/// One axis coordinate, `k * offset`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AxisTerm(pub i32);

impl fmt::Display for AxisTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => f.write_str("0"),
            k => write!(f, "{k}*offset"),
        }
    }
}

/// Axis values from `-(n / 2)` through `0` to `n / 2`, in increasing order
pub fn axis_terms(n: u32) -> Vec<AxisTerm> {
    let half = (n / 2) as i32;
    (-half..=half).map(AxisTerm).collect()
}

/// Grid of `(x, y)` offsets in sampling order.
///
/// Rows run top to bottom (most positive `y` first) and each row runs left to
/// right (most negative `x` first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetGrid {
    n: u32,
    pairs: Vec<(AxisTerm, AxisTerm)>,
}

impl OffsetGrid {
    /// Size the grid was requested with
    pub fn size(&self) -> u32 {
        self.n
    }

    pub fn pairs(&self) -> &[(AxisTerm, AxisTerm)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Array length written into the GLSL declaration (`n * n`)
    pub fn declared_len(&self) -> u64 {
        u64::from(self.n) * u64::from(self.n)
    }

    /// Render as a GLSL `vec2` array declaration named `offsets`
    pub fn to_glsl(&self) -> String {
        let entries: Vec<String> = self
            .pairs
            .iter()
            .map(|(x, y)| format!("\n\t\tvec2({x}, {y})"))
            .collect();
        format!(
            "vec2 offsets[{}] = vec2[]({}\n\t)",
            self.declared_len(),
            entries.join(",")
        )
    }
}

impl fmt::Display for OffsetGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_glsl())
    }
}

/// Build the offset grid for an `n x n` filter.
///
/// `n` is expected to be odd. An even `n` still produces `n + 1` terms per
/// axis (zero is always included) while the declaration says `n * n`.
pub fn generate_offsets(n: u32) -> OffsetGrid {
    let axis = axis_terms(n);
    let pairs = axis
        .iter()
        .rev()
        .flat_map(|&y| axis.iter().map(move |&x| (x, y)))
        .collect();
    OffsetGrid { n, pairs }
}
