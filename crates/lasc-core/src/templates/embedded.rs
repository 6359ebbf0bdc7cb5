//! Compile-time embedded templates for project scaffolding.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`].
//! The paths are relative to this source file
//! (`crates/lasc-core/src/templates/embedded.rs`).
//!
//! Constant names mirror the template file names because the destination of a
//! rendered file is derived from the template name (the `.tmpl` suffix is
//! stripped). Do NOT rename or move template files without updating the
//! `include_str!` path here; a wrong path fails at compile time.

/// Container build file for the function image. Takes `{{build_directory}}`.
pub const DOCKERFILE: &str = include_str!("../../../../templates/Dockerfile.tmpl");

/// Go entrypoint wiring the handler into the Lambda runtime. Static body.
pub const MAIN_GO: &str = include_str!("../../../../templates/main.go.tmpl");
