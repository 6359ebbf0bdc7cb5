//! lasc CLI: scaffold a container-image AWS Lambda function written in Go.
//!
//! Runs the fixed pipeline from [`lasc_core::scaffold`] against a root
//! directory: module init, template rendering, formatting, dependency
//! installation, and deployment config generation. A pipeline failure maps
//! to a non-zero exit status with the step-labelled error on stderr.

mod output;

use std::path::PathBuf;

use clap::Parser;

use lasc_core::scaffold::Scaffolder;
use lasc_core::tools::{self, ProcessRunner};

#[derive(Parser)]
#[command(
    name = "lasc",
    about = "Scaffold a container-image AWS Lambda function written in Go",
    version
)]
struct Cli {
    /// Root directory for the generated project
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    output::print_header(&format!("lasc: {}", cli.root.display()));

    if let Err(missing) = tools::check_prerequisites() {
        output::print_warning(&format!(
            "Missing: {} (install: {})",
            missing.tool_name, missing.install_instructions
        ));
    }

    let scaffolder = Scaffolder::new(&cli.root, Box::new(ProcessRunner));
    scaffolder.run().await?;

    output::print_success(&format!("Project scaffolded in {}", cli.root.display()));
    println!();
    println!("  Next steps:");
    println!("    edit config.cue (FunctionName, Role, Code.ImageUri)");
    println!("    docker build {}", cli.root.display());
    println!();

    Ok(())
}
