//! `readmegen diff [PROJECT]` — show what `generate` would change.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use readmegen_core::DEFAULT_PROJECT_FILE;
use readmegen_export::pipeline::{self, Action, Outcome, Request};

/// Arguments for `readmegen diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Project file to render.
    #[arg(default_value = DEFAULT_PROJECT_FILE)]
    pub project: PathBuf,

    /// README to compare against (default: README.md next to the project file).
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Directory of `.tera` files overriding the embedded section templates.
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let config = super::load_config()?;
        let request = Request {
            project: self.project,
            output: self.output,
            templates: self.templates,
            action: Action::Diff,
        };

        let outcome = pipeline::run(&request, &config)
            .with_context(|| format!("diff failed for '{}'", request.project.display()))?;
        let Outcome::Diffed { path, diff } = outcome else {
            return Ok(());
        };

        match diff {
            None => println!("No differences for '{}'.", path.display()),
            Some(diff) => {
                print!("{}", diff.unified_diff);
                if !diff.unified_diff.ends_with('\n') {
                    println!();
                }
            }
        }
        Ok(())
    }
}
