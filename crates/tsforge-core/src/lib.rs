//! tsforge core - scaffolding library for TypeScript projects
//!
//! Given a target directory and a set of feature flags (TypeScript, ESLint, git, commit
//! hooks, EditorConfig, nodemon), this library materializes a project skeleton by copying
//! template fragments and invoking git and the selected package manager.
//!
//! # Architecture
//!
//! - **Collaborators** - `runtime` (external commands), `templates` (no-clobber copying)
//! - **Installers** - `features`, one per selectable feature
//! - **Orchestration** - `pipeline` runs the ordered, predicate-gated step list;
//!   `bootstrap` validates, times, and rolls back a run
//! - **Output** - optional cliclack progress (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based progress reporter
//!
//! # Example Usage
//!
//! ```ignore
//! use tsforge_core::{create_project, Configuration, ProjectOptions, ProcessRunner};
//! use tsforge_core::pipeline::ConsoleProgress;
//!
//! let options = ProjectOptions { name: Some("demo".into()), ts: true, ..Default::default() };
//! let templates = tsforge_core::templates::resolve_template_root(None);
//! let config = Configuration::new(options, &std::env::current_dir()?, templates)?;
//! let report = create_project(&config, &ProcessRunner, &mut ConsoleProgress).await?;
//! println!("{}", report.summary());
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod features;
pub mod pipeline;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use bootstrap::{create_project, ProjectReport};
pub use config::{Configuration, PackageManager, ProjectOptions};
pub use error::{BootstrapError, ScaffoldError};
pub use features::{Feature, Notice};
pub use runtime::{CommandRunner, ProcessRunner};
