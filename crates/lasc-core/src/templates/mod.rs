//! Template system for lasc project scaffolding.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`]
//! in the [`embedded`] module, then rendered at runtime with
//! [Handlebars](https://handlebarsjs.com/) via the [`renderer::TemplateRenderer`].
//!
//! The catalogue is closed and known at build time. Every entry pairs an
//! embedded template with the data it is rendered against; its destination is
//! the template name with the `.tmpl` suffix stripped
//! (`Dockerfile.tmpl` becomes `Dockerfile`).
//!
//! ## Template variables
//!
//! - `{{build_directory}}`: absolute build context for the container build file
//!
//! The entrypoint template (`main.go.tmpl`) is static and takes no variables.

pub mod embedded;
pub mod renderer;

use std::path::Path;

use serde_json::{json, Value};

/// Suffix shared by every template name; stripping it yields the destination.
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// One catalogue entry: a named template plus the data it renders against.
#[derive(Debug, Clone)]
pub struct RenderTarget {
    /// Template name, e.g. `Dockerfile.tmpl`.
    pub name: &'static str,
    /// Embedded template body.
    pub template: &'static str,
    /// Handlebars data context.
    pub data: Value,
}

impl RenderTarget {
    /// Destination path relative to the scaffold root: the name minus `.tmpl`.
    pub fn destination(&self) -> &'static str {
        self.name.trim_end_matches(TEMPLATE_SUFFIX)
    }
}

/// Build the fixed render catalogue.
///
/// `build_directory` must be the absolute build context; it is baked into the
/// container build file so the image builds from the scaffolded tree.
pub fn catalogue(build_directory: &Path) -> Vec<RenderTarget> {
    vec![
        RenderTarget {
            name: "Dockerfile.tmpl",
            template: embedded::DOCKERFILE,
            data: json!({ "build_directory": build_directory.display().to_string() }),
        },
        RenderTarget {
            name: "main.go.tmpl",
            template: embedded::MAIN_GO,
            data: json!({}),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_strips_template_suffix() {
        let targets = catalogue(Path::new("/tmp/fn"));
        let destinations: Vec<_> = targets.iter().map(|t| t.destination()).collect();
        assert_eq!(destinations, vec!["Dockerfile", "main.go"]);
    }

    #[test]
    fn test_catalogue_carries_build_directory() {
        let targets = catalogue(Path::new("/srv/build/fn"));
        assert_eq!(targets[0].data["build_directory"], "/srv/build/fn");
    }

    #[test]
    fn test_entrypoint_template_is_static() {
        let targets = catalogue(Path::new("/tmp/fn"));
        assert_eq!(targets[1].data, json!({}));
        assert!(!embedded::MAIN_GO.contains("{{"));
    }
}
