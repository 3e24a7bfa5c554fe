//! # readmegen-renderer
//!
//! Tera-based template engine that renders a README from a [`ProjectInfo`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use readmegen_core::ProjectInfo;
//! use readmegen_renderer::ReadmeGenerator;
//!
//! fn preview(info: &ProjectInfo) {
//!     if let Ok(generator) = ReadmeGenerator::new() {
//!         if let Ok(markdown) = generator.generate(info) {
//!             print!("{markdown}");
//!         }
//!     }
//! }
//! ```
//!
//! [`ProjectInfo`]: readmegen_core::ProjectInfo

pub mod badge;
pub mod context;
pub mod engine;
pub mod error;
pub mod section;

pub use context::ReadmeContext;
pub use engine::{GeneratorOptions, ReadmeGenerator, TemplateEngine};
pub use error::RenderError;
pub use section::SectionKind;
