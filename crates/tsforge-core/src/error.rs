//! Error types for project scaffolding
//!
//! Every step of the pipeline fails with a [`ScaffoldError`]. The bootstrapper is the
//! only place that turns a step failure into a [`BootstrapError`] for the caller.

use crate::features::Feature;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by configuration, installers, the copier and the command runner
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Template root missing/unreadable or an invalid resolved configuration
    #[error("Configuration error: {message}{}", display_path(.path))]
    Configuration {
        message: String,
        path: Option<PathBuf>,
    },

    /// A feature was requested without the features it builds on
    #[error("{feature} requires {} to be enabled", join_features(.missing))]
    FeaturePrecondition {
        feature: Feature,
        missing: Vec<Feature>,
    },

    /// Template copy or filesystem failure
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An external program exited unsuccessfully (status is `None` if it never started)
    #[error("Failed to run {}{}", display_invocation(.command, .args), display_status(.status))]
    ExternalCommand {
        command: String,
        args: Vec<String>,
        status: Option<i32>,
    },
}

impl ScaffoldError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error about a specific path
    pub fn config_at(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Wrap an I/O error with the path it happened at
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Fatal outcome of [`crate::bootstrap::create_project`]
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// Nothing was touched: the run was refused before the first step
    #[error(transparent)]
    Configuration(ScaffoldError),

    /// A step failed; the target directory was rolled back if `rolled_back` is set
    #[error("Cannot create project: step '{step}' failed")]
    CreationFailed {
        step: String,
        #[source]
        source: ScaffoldError,
        rolled_back: bool,
    },
}

/// Render a command line for diagnostics
pub fn display_invocation(command: &str, args: &[String]) -> String {
    let mut line = command.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" ({})", p.display()))
        .unwrap_or_default()
}

fn display_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!(" (exit code {})", code),
        None => " (could not be started)".to_string(),
    }
}

fn join_features(features: &[Feature]) -> String {
    features
        .iter()
        .map(|f| f.display_name())
        .collect::<Vec<_>>()
        .join(" and ")
}
