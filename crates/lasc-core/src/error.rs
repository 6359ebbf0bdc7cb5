//! Unified error types for the lasc scaffolder.

use thiserror::Error;

/// All errors that can occur while scaffolding a project.
#[derive(Error, Debug)]
pub enum LascError {
    // --- Pipeline ---

    /// A pipeline step failed. Carries the step label; the underlying cause
    /// is preserved as the error source.
    #[error("failed to {step}")]
    Step {
        step: &'static str,
        #[source]
        source: Box<LascError>,
    },

    // --- External tools ---

    /// An external tool exited with a non-zero status or could not be spawned.
    #[error("command `{command}` failed: {stderr}")]
    ToolFailed { command: String, stderr: String },

    /// A required external tool (the Go toolchain) is not installed.
    #[error("required tool '{name}' not found (install: {install})")]
    MissingTool { name: String, install: String },

    // --- Templates ---

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- Deployment config ---

    /// Encoding or formatting the deployment descriptor failed.
    #[error("config encoding failed: {0}")]
    ConfigEncode(String),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LascError {
    /// Wrap this error with the label of the pipeline step it occurred in.
    pub fn in_step(self, step: &'static str) -> Self {
        Self::Step {
            step,
            source: Box::new(self),
        }
    }
}

/// Alias for `Result<T, LascError>`.
pub type Result<T> = std::result::Result<T, LascError>;
