use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::license_compliance::domain::License;

/// Audit the licenses of a project's dependency tree
#[derive(Parser, Debug)]
#[command(name = "honker")]
#[command(version)]
#[command(
    about = "Audit the licenses of a project's dependency tree",
    long_about = "Detects dependencies whose license conflicts with the project license \
                  and lists the licenses to mention in the project's LICENSE and NOTICE files."
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Dependency description (defaults to <PATH>/honker-deps.toml)
    #[arg(short, long, value_name = "FILE")]
    pub dependencies: Option<PathBuf>,

    /// Configuration file (defaults to <PATH>/honker.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project license, by name or URL (defaults to Apache 2)
    #[arg(short, long)]
    pub license: Option<License>,

    /// Output format: json or markdown (defaults to markdown)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory of LICENSE/NOTICE templates (defaults to <PATH>/templates)
    #[arg(short, long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Exit with code 1 when a license conflict is detected
    #[arg(long)]
    pub fail_on_conflicts: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
