//! Handlebars-based template renderer for project scaffolding.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled by
//! default. Strict mode ensures that any `{{variable}}` referenced in a
//! template must be present in the data context; otherwise rendering returns
//! an error. Templates here produce build files, so a silently missing
//! variable would yield a Dockerfile that fails only at image build time, far
//! from the actual cause.

use std::fs::File;
use std::path::Path;

use handlebars::Handlebars;
use serde_json::Value;

use crate::error::{LascError, Result};

/// Template renderer using Handlebars for generating project files.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| LascError::TemplateRender(e.to_string()))
    }

    /// Render a template directly into `dest`, creating or truncating the file.
    ///
    /// On render failure a half-written destination may remain; the pipeline
    /// treats that as an accepted, visible failure state.
    pub fn render_to_file(&self, template: &str, data: &Value, dest: &Path) -> Result<()> {
        let file = File::create(dest)?;
        self.hbs
            .render_template_to_write(template, data, file)
            .map_err(|e| LascError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_substitutes_variables() {
        let renderer = TemplateRenderer::new();
        let out = renderer
            .render("WORKDIR {{build_directory}}", &json!({ "build_directory": "/srv/fn" }))
            .unwrap();
        assert_eq!(out, "WORKDIR /srv/fn");
    }

    #[test]
    fn test_strict_mode_rejects_missing_variable() {
        let renderer = TemplateRenderer::new();
        let result = renderer.render("WORKDIR {{build_directory}}", &json!({}));
        assert!(matches!(result, Err(LascError::TemplateRender(_))));
    }

    #[test]
    fn test_render_to_file_truncates_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("Dockerfile");
        std::fs::write(&dest, "stale content that is much longer than the rendering").unwrap();

        let renderer = TemplateRenderer::new();
        renderer
            .render_to_file("FROM {{image}}", &json!({ "image": "golang:1.22" }), &dest)
            .unwrap();

        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "FROM golang:1.22");
    }

    #[test]
    fn test_render_to_file_missing_parent_fails() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("no/such/parent/Dockerfile");

        let renderer = TemplateRenderer::new();
        let result = renderer.render_to_file("FROM scratch", &json!({}), &dest);
        assert!(matches!(result, Err(LascError::Io(_))));
    }
}
