//! readmegen core library — domain types, catalogs, project files, config.
//!
//! - [`types`] — [`ProjectInfo`] and the records it is built from
//! - [`catalog`] — technology/status catalogs and stack groups
//! - [`project`] — load / save / init project files
//! - [`config`] — `~/.readmegen/config.yaml`
//! - [`error`] — [`CoreError`]

pub mod catalog;
pub mod config;
pub mod error;
pub mod project;
pub mod types;

pub use catalog::{StackGroup, StackGroups, StatusCatalog, StatusEntry, TechCatalog, TechEntry};
pub use config::{Config, ProjectDefaults};
pub use error::CoreError;
pub use project::{InitOutcome, ProjectFormat, DEFAULT_PROJECT_FILE};
pub use types::{
    Badge, Badges, CustomSection, ProjectInfo, SectionFlags, SocialLink, SocialPlatform, Stats,
};
