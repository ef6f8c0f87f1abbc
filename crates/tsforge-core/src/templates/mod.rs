//! Template root resolution and fragment copying
//!
//! This module provides:
//! - Template root lookup (override, env var, executable location) and validation
//! - The fragment names shipped under `templates/`
//! - No-clobber copying of fragments into a project

pub mod copier;
pub mod fragment;
pub mod root;

pub use copier::{copy_template, CopyReport};
pub use fragment::Fragment;
pub use root::{resolve_template_root, validate_template_root, TEMPLATE_DIR_ENV};
