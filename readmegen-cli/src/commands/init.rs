//! `readmegen init [PATH] [--title ...] [--author ...] [--tech ...] [--status ...]`

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use readmegen_core::{
    project::{init_project, InitOutcome},
    Badge, StatusCatalog, DEFAULT_PROJECT_FILE,
};

/// Color used for technologies the catalog does not know.
const UNKNOWN_TECH_COLOR: &str = "blue";

/// Write a starter project file.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project file to create (`.json` selects JSON, anything else YAML).
    #[arg(default_value = DEFAULT_PROJECT_FILE)]
    pub path: PathBuf,

    /// Project title.
    #[arg(long)]
    pub title: Option<String>,

    /// Author / GitHub username.
    #[arg(long)]
    pub author: Option<String>,

    /// Technology badge to add; colors come from the catalog. Repeatable.
    #[arg(long = "tech", value_name = "NAME")]
    pub tech: Vec<String>,

    /// Status badge to add from the status catalog. Repeatable.
    #[arg(long = "status", value_name = "NAME")]
    pub status: Vec<String>,

    /// Overwrite an existing project file.
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        let config = super::load_config()?;
        let catalog = config.catalog();
        let statuses = StatusCatalog::builtin();

        let mut seed = config.defaults.seed();
        if let Some(title) = self.title {
            seed.title = title;
        }
        if let Some(author) = self.author {
            seed.author = author;
        }
        for name in &self.tech {
            let color = match catalog.find(name) {
                Some(entry) => entry.color.clone(),
                None => {
                    tracing::warn!(tech = %name, "not in catalog; using color {}", UNKNOWN_TECH_COLOR);
                    UNKNOWN_TECH_COLOR.to_string()
                }
            };
            seed.badges.add_tech(Badge::new(name.clone(), color));
        }
        for name in &self.status {
            let Some(entry) = statuses.find(name) else {
                bail!("unknown status '{name}'; run `readmegen catalog --status` for the list");
            };
            seed.badges.add_status(Badge::new(entry.name.clone(), entry.color.clone()));
        }

        let outcome = init_project(&self.path, seed, self.force)
            .with_context(|| format!("failed to init '{}'", self.path.display()))?;
        match outcome {
            InitOutcome::Created(_) => {
                println!("✓ Created {}", self.path.display());
                println!("  Edit it, then run `readmegen generate`.");
            }
            InitOutcome::Existing(info) => {
                println!(
                    "· {} already exists ('{}'); use --force to overwrite",
                    self.path.display(),
                    info.title
                );
            }
        }
        Ok(())
    }
}
