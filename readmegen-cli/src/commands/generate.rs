//! `readmegen generate` — render the README and write or print it.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use readmegen_core::DEFAULT_PROJECT_FILE;
use readmegen_export::{
    pipeline::{self, Action, Outcome, Request},
    WriteResult,
};

/// Arguments for `readmegen generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Project file to render.
    #[arg(default_value = DEFAULT_PROJECT_FILE)]
    pub project: PathBuf,

    /// Output file (default: README.md next to the project file).
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the markdown to stdout instead of writing a file.
    #[arg(long, conflicts_with_all = ["output", "dry_run"])]
    pub stdout: bool,

    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,

    /// Directory of `.tera` files overriding the embedded section templates.
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,
}

impl GenerateArgs {
    pub fn run(self) -> Result<()> {
        let config = super::load_config()?;
        let action = if self.stdout {
            Action::Print
        } else {
            Action::Write {
                dry_run: self.dry_run,
            }
        };
        let request = Request {
            project: self.project,
            output: self.output,
            templates: self.templates,
            action,
        };

        let outcome = pipeline::run(&request, &config)
            .with_context(|| format!("generate failed for '{}'", request.project.display()))?;
        match outcome {
            Outcome::Printed(markdown) => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(markdown.as_bytes())
                    .context("failed to write to stdout")?;
            }
            Outcome::Written(result) => print_result(&result),
            Outcome::Diffed { .. } => {}
        }
        Ok(())
    }
}

fn print_result(result: &WriteResult) {
    match result {
        WriteResult::Written { path } => println!("✎  wrote {}", path.display()),
        WriteResult::WouldWrite { path } => println!("[dry-run] ~  would write {}", path.display()),
        WriteResult::Unchanged { path } => println!("·  {} is up to date", path.display()),
    }
}
