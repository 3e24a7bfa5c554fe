//! `readmegen catalog` — browse technology and status badges.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use readmegen_core::{StatusCatalog, TechCatalog};

/// Arguments for `readmegen catalog`.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Limit to one technology category (case-insensitive).
    #[arg(long, conflicts_with = "status")]
    pub category: Option<String>,

    /// Case-insensitive substring filter on names.
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// List status badges instead of technologies.
    #[arg(long)]
    pub status: bool,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Tabled)]
struct TechRow {
    #[tabled(rename = "category")]
    category: String,
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "color")]
    color: String,
    #[tabled(rename = "logo")]
    logo: String,
}

#[derive(Serialize, Tabled)]
struct StatusRow {
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "color")]
    color: String,
}

impl CatalogArgs {
    pub fn run(self) -> Result<()> {
        let term = self.search.clone().unwrap_or_default();
        if self.status {
            let needle = term.to_lowercase();
            let rows: Vec<StatusRow> = StatusCatalog::builtin()
                .entries()
                .iter()
                .filter(|e| e.name.to_lowercase().contains(&needle))
                .map(|e| StatusRow {
                    name: e.name.clone(),
                    color: e.color.clone(),
                })
                .collect();
            return self.emit(rows, "status badges");
        }

        let catalog = super::load_config()?.catalog();
        let rows = tech_rows(&catalog, self.category.as_deref(), &term)?;
        self.emit(rows, "technologies")
    }

    fn emit<T: Serialize + Tabled>(&self, rows: Vec<T>, what: &str) -> Result<()> {
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&rows).context("failed to serialize catalog JSON")?
            );
            return Ok(());
        }
        if rows.is_empty() {
            println!("No matching {what}.");
            return Ok(());
        }
        println!("{} {}", rows.len().to_string().bold(), what);
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}

fn tech_rows(catalog: &TechCatalog, category: Option<&str>, term: &str) -> Result<Vec<TechRow>> {
    let categories: Vec<&str> = match category {
        Some(wanted) => match catalog
            .categories()
            .find(|c| c.name.eq_ignore_ascii_case(wanted))
        {
            Some(found) => vec![found.name.as_str()],
            None => {
                let known: Vec<&str> = catalog.categories().map(|c| c.name.as_str()).collect();
                bail!("unknown category '{wanted}'; expected one of: {}", known.join(", "));
            }
        },
        None => catalog.categories().map(|c| c.name.as_str()).collect(),
    };

    Ok(categories
        .into_iter()
        .flat_map(|name| {
            catalog.search(term, Some(name)).into_iter().map(move |e| TechRow {
                category: name.to_string(),
                name: e.name.clone(),
                color: e.color.clone(),
                logo: e.logo.clone(),
            })
        })
        .collect())
}
