//! Template in, shader out
//!
//! Parameters must already be validated before any of these run; the file
//! variants read the template once and overwrite the output in a single write.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::params::{GenerationParameters, Stride};
use crate::template::{Substitutions, post_process_substitutions, sharpen_substitutions};

/// Template to read and shader file to write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderPaths {
    pub template: PathBuf,
    pub output: PathBuf,
}

impl ShaderPaths {
    pub fn new(template: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            output: output.into(),
        }
    }

    /// `shaders/screen_generic.frag` -> `shaders/screen_postprocess.frag`
    pub fn post_process_default() -> Self {
        Self::new("shaders/screen_generic.frag", "shaders/screen_postprocess.frag")
    }

    /// `shaders/screen_sharpen_template.frag` -> `shaders/screen_sharpen.frag`
    pub fn sharpen_default() -> Self {
        Self::new(
            "shaders/screen_sharpen_template.frag",
            "shaders/screen_sharpen.frag",
        )
    }

    /// Replace either path where an override is given
    pub fn with_overrides(self, template: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        Self {
            template: template.unwrap_or(self.template),
            output: output.unwrap_or(self.output),
        }
    }
}

/// Substitute the generic post-process template
pub fn render_post_process(template: &str, params: &GenerationParameters) -> Result<String> {
    let subs = post_process_substitutions(params)?;
    Ok(render(template, &subs))
}

/// Substitute the sharpen-only template
pub fn render_sharpen(template: &str, strength: f64, stride: Stride) -> Result<String> {
    let subs = sharpen_substitutions(strength, stride)?;
    Ok(render(template, &subs))
}

fn render(template: &str, subs: &Substitutions) -> String {
    let matched: Vec<&str> = subs
        .applied_tokens(template)
        .iter()
        .map(|p| p.token())
        .collect();
    debug!("Placeholders found in template: {:?}", matched);
    subs.apply(template)
}

/// Generate `paths.output` from the generic post-process template
pub fn generate_post_process_shader(
    paths: &ShaderPaths,
    params: &GenerationParameters,
) -> Result<()> {
    let template = read_template(&paths.template)?;
    let shader = render_post_process(&template, params)?;
    write_shader(&paths.output, &shader)?;
    info!(
        "Generated {} shader: {}",
        params.kind,
        paths.output.display()
    );
    Ok(())
}

/// Generate `paths.output` from the sharpen-only template
pub fn generate_sharpen_shader(paths: &ShaderPaths, strength: f64, stride: Stride) -> Result<()> {
    let template = read_template(&paths.template)?;
    let shader = render_sharpen(&template, strength, stride)?;
    write_shader(&paths.output, &shader)?;
    info!("Generated sharpen shader: {}", paths.output.display());
    Ok(())
}

fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read shader template {}", path.display()))
}

fn write_shader(path: &Path, shader: &str) -> Result<()> {
    std::fs::write(path, shader)
        .with_context(|| format!("Failed to write shader to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::FilterKind;
    use tempfile::tempdir;

    #[test]
    fn test_override_paths() {
        let paths = ShaderPaths::post_process_default()
            .with_overrides(None, Some(PathBuf::from("out.frag")));
        assert_eq!(paths.template, PathBuf::from("shaders/screen_generic.frag"));
        assert_eq!(paths.output, PathBuf::from("out.frag"));
    }

    #[test]
    fn test_render_blur_exact() {
        let params =
            GenerationParameters::new(FilterKind::Blur, None, Stride::new(0.01).unwrap()).unwrap();
        let shader = render_post_process("K=KERNEL;S=STRIDE;", &params).unwrap();
        assert_eq!(
            shader,
            "K=float[](\n        0.0625, 0.125, 0.0625,\n        0.125, 0.25, 0.125,\n        0.0625, 0.125, 0.0625\n    );S=0.01;"
        );
    }

    #[test]
    fn test_generate_writes_output() {
        let dir = tempdir().unwrap();
        let paths = ShaderPaths::new(dir.path().join("in.frag"), dir.path().join("out.frag"));
        std::fs::write(&paths.template, "OFFSETS;\nfloat k[OFFSET_SZ] = KERNEL;\nSTRIDE").unwrap();

        let params =
            GenerationParameters::new(FilterKind::Edge, Some(1.0), Stride::DEFAULT).unwrap();
        generate_post_process_shader(&paths, &params).unwrap();

        let shader = std::fs::read_to_string(&paths.output).unwrap();
        assert!(shader.starts_with("vec2 offsets[9] = vec2[]("));
        assert!(shader.contains("float k[9] = float[]("));
        assert!(shader.contains("-1.0, 8.0, -1.0"));
        assert!(shader.ends_with("0.0033333333333333335"));
    }

    #[test]
    fn test_generate_overwrites_existing_output() {
        let dir = tempdir().unwrap();
        let paths = ShaderPaths::new(dir.path().join("in.frag"), dir.path().join("out.frag"));
        std::fs::write(&paths.template, "s = STRIDE;").unwrap();
        std::fs::write(&paths.output, "stale contents that are longer").unwrap();

        generate_sharpen_shader(&paths, 1.0, Stride::new(0.5).unwrap()).unwrap();
        assert_eq!(std::fs::read_to_string(&paths.output).unwrap(), "s = 0.5;");
    }

    #[test]
    fn test_missing_template_is_error() {
        let dir = tempdir().unwrap();
        let paths = ShaderPaths::new(dir.path().join("missing.frag"), dir.path().join("out.frag"));
        let err = generate_sharpen_shader(&paths, 1.0, Stride::DEFAULT).unwrap_err();
        assert!(err.to_string().contains("missing.frag"));
        assert!(!paths.output.exists());
    }
}
