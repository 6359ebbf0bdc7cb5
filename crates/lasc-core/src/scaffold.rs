//! The scaffold pipeline.
//!
//! Runs a fixed sequence of steps against a single target directory: module
//! init, template rendering, formatting, dependency installation, deployment
//! config. Steps run strictly in order; the first failure aborts the run and
//! already-written files are left in place (a partial scaffold is a visible
//! failure state, not something to roll back).
//!
//! Two steps are guarded by idempotence markers: module init is skipped when
//! `go.mod` exists, and the config step is skipped when `config.cue` exists.
//! Rendered templates are overwritten unconditionally on every run.

use std::path::PathBuf;

use crate::config;
use crate::error::Result;
use crate::templates::{self, renderer::TemplateRenderer};
use crate::tools::ToolRunner;

/// Module manifest written by `go mod init`; its presence marks the module
/// step as already done. The content is never interpreted here.
pub const MODULE_MANIFEST: &str = "go.mod";

/// Deployment config file; its presence marks the config step as already done.
pub const CONFIG_FILE: &str = "config.cue";

/// Drives the scaffold pipeline against one target directory.
pub struct Scaffolder {
    root: PathBuf,
    tools: Box<dyn ToolRunner>,
}

impl Scaffolder {
    pub fn new(root: impl Into<PathBuf>, tools: Box<dyn ToolRunner>) -> Self {
        Self {
            root: root.into(),
            tools,
        }
    }

    /// Run the full pipeline, stopping at the first failed step.
    ///
    /// Each step's error is wrapped with the step label, so a failure reads
    /// as `failed to format files: ...` all the way up the call chain.
    pub async fn run(&self) -> Result<()> {
        self.init_module()
            .await
            .map_err(|e| e.in_step("initialize module"))?;
        self.render_templates()
            .map_err(|e| e.in_step("render templates"))?;
        self.format_files()
            .await
            .map_err(|e| e.in_step("format files"))?;
        self.install_dependencies()
            .await
            .map_err(|e| e.in_step("install dependencies"))?;
        self.write_function_config()
            .map_err(|e| e.in_step("write function config"))?;
        Ok(())
    }

    /// Ensure the target directory and Go module exist.
    async fn init_module(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;

        if self.root.join(MODULE_MANIFEST).exists() {
            tracing::debug!("module manifest present, skipping go mod init");
            return Ok(());
        }

        self.tools.run(&self.root, "go", &["mod", "init"]).await
    }

    /// Render every catalogue entry into the target, overwriting.
    fn render_templates(&self) -> Result<()> {
        // The container build file needs the absolute build context, not
        // whatever relative path the caller happened to pass.
        let build_directory = self.root.canonicalize()?;

        let renderer = TemplateRenderer::new();
        for target in templates::catalogue(&build_directory) {
            let dest = self.root.join(target.destination());
            renderer.render_to_file(target.template, &target.data, &dest)?;
        }
        Ok(())
    }

    async fn format_files(&self) -> Result<()> {
        self.tools.run(&self.root, "go", &["fmt"]).await
    }

    /// Reconcile the dependency graph, then fetch it.
    async fn install_dependencies(&self) -> Result<()> {
        self.tools.run(&self.root, "go", &["mod", "tidy"]).await?;
        self.tools.run(&self.root, "go", &["mod", "download"]).await
    }

    /// Write `config.cue` unless one already exists.
    fn write_function_config(&self) -> Result<()> {
        let dest = self.root.join(CONFIG_FILE);
        if dest.exists() {
            tracing::debug!("config file present, leaving it untouched");
            return Ok(());
        }

        std::fs::write(dest, config::function_config()?)?;
        Ok(())
    }
}
