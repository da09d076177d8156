//! Placeholder substitution for shader templates
//!
//! Templates carry bare tokens (`KERNEL`, `OFFSETS`, ...) that are replaced
//! literally, in order, with no escaping. Replacement text is therefore checked
//! up front: it may never contain any token from the vocabulary, or a later
//! pass would rewrite it.

use tracing::debug;

use crate::kernel::{generate_kernel, generate_sharpen};
use crate::literal::glsl_float;
use crate::offsets::generate_offsets;
use crate::params::{GenerationParameters, Stride};

/// Size of the offset grid written into post-processing shaders
pub const OFFSET_GRID_SIZE: u32 = 3;

/// Error type for building substitutions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// Generated text would be picked up by a later replacement pass
    #[error("replacement for {placeholder} contains the placeholder token {found}")]
    TokenInReplacement {
        placeholder: &'static str,
        found: &'static str,
    },
}

/// Token vocabulary understood by the templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Offsets,
    OffsetSz,
    Kernel,
    Stride,
}

impl Placeholder {
    pub const ALL: [Placeholder; 4] = [
        Placeholder::Offsets,
        Placeholder::OffsetSz,
        Placeholder::Kernel,
        Placeholder::Stride,
    ];

    /// Literal text searched for in the template
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Offsets => "OFFSETS",
            Placeholder::OffsetSz => "OFFSET_SZ",
            Placeholder::Kernel => "KERNEL",
            Placeholder::Stride => "STRIDE",
        }
    }
}

/// Ordered `(placeholder, text)` replacements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    entries: Vec<(Placeholder, String)>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a replacement, applied after every earlier one.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::TokenInReplacement` if `text` contains any
    /// placeholder token verbatim.
    pub fn push(
        &mut self,
        placeholder: Placeholder,
        text: impl Into<String>,
    ) -> Result<(), TemplateError> {
        let text = text.into();
        if let Some(found) = Placeholder::ALL
            .iter()
            .map(|p| p.token())
            .find(|token| text.contains(token))
        {
            return Err(TemplateError::TokenInReplacement {
                placeholder: placeholder.token(),
                found,
            });
        }
        self.entries.push((placeholder, text));
        Ok(())
    }

    pub fn entries(&self) -> &[(Placeholder, String)] {
        &self.entries
    }

    /// Placeholders whose token occurs in `template`, in substitution order
    pub fn applied_tokens(&self, template: &str) -> Vec<Placeholder> {
        self.entries
            .iter()
            .map(|(p, _)| *p)
            .filter(|p| template.contains(p.token()))
            .collect()
    }

    /// Replace every occurrence of each token, one pass per entry.
    ///
    /// Tokens missing from the template are skipped silently.
    pub fn apply(&self, template: &str) -> String {
        let mut shader = template.to_string();
        for (placeholder, text) in &self.entries {
            shader = shader.replace(placeholder.token(), text);
        }
        shader
    }
}

/// `OFFSETS`, `OFFSET_SZ`, `KERNEL`, `STRIDE` for the generic post-process template
pub fn post_process_substitutions(
    params: &GenerationParameters,
) -> Result<Substitutions, TemplateError> {
    let grid = generate_offsets(OFFSET_GRID_SIZE);
    // Blur is the only kind without a strength and it ignores the value
    let kernel = generate_kernel(params.kind, params.strength.unwrap_or_default());

    let mut subs = Substitutions::new();
    subs.push(Placeholder::Offsets, grid.to_glsl())?;
    subs.push(Placeholder::OffsetSz, grid.declared_len().to_string())?;
    subs.push(Placeholder::Kernel, kernel.to_glsl())?;
    subs.push(Placeholder::Stride, glsl_float(params.stride.get()))?;

    debug!(
        kind = %params.kind,
        offsets = grid.len(),
        "built post-process substitutions"
    );
    Ok(subs)
}

/// `KERNEL` and `STRIDE` for the sharpen-only template
pub fn sharpen_substitutions(
    strength: f64,
    stride: Stride,
) -> Result<Substitutions, TemplateError> {
    let mut subs = Substitutions::new();
    subs.push(Placeholder::Kernel, generate_sharpen(strength, false).to_glsl())?;
    subs.push(Placeholder::Stride, glsl_float(stride.get()))?;
    Ok(subs)
}
