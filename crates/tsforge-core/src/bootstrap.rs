//! Project creation entry point
//!
//! [`create_project`] is the single recovery boundary of a run: it validates the template
//! root, drives the pipeline, and rolls the target directory back if a step fails. A
//! directory the run created is removed; a directory that already existed only loses
//! what the run added to it.

use crate::config::Configuration;
use crate::error::{BootstrapError, ScaffoldError};
use crate::features::Notice;
use crate::pipeline::{build_steps, Pipeline, Progress, StepFailure};
use crate::runtime::{check, CommandRunner};
use crate::templates::validate_template_root;
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::fs;

/// Final status of a successful run
#[derive(Debug, Clone)]
pub struct ProjectReport {
    pub name: Option<String>,
    pub target_directory: PathBuf,
    pub elapsed: Duration,
    pub executed: Vec<&'static str>,
    pub notices: Vec<Notice>,
    pub copied: Vec<PathBuf>,
    /// Files the project already had; the template versions were not written
    pub skipped: Vec<PathBuf>,
}

impl ProjectReport {
    /// One-line "ready" status
    pub fn summary(&self) -> String {
        let seconds = self.elapsed.as_secs_f64();
        match &self.name {
            Some(name) => format!("Project {} is ready ({:.2}s)", name, seconds),
            None => format!("Project is ready ({:.2}s)", seconds),
        }
    }
}

/// Create a project from a resolved configuration
pub async fn create_project<R: CommandRunner, P: Progress>(
    config: &Configuration,
    runner: &R,
    progress: &mut P,
) -> Result<ProjectReport, BootstrapError> {
    validate_template_root(&config.template_directory).map_err(BootstrapError::Configuration)?;

    for tool in check::check_tools(config) {
        if !tool.available {
            progress.warning(&format!("{} was not found on PATH", tool.name));
        }
    }

    // None when this run creates the target directory
    let existing = if config.target_directory.exists() {
        Some(
            top_level_entries(&config.target_directory)
                .await
                .map_err(BootstrapError::Configuration)?,
        )
    } else {
        None
    };
    let mut pipeline = Pipeline::new(build_steps());
    let start = Instant::now();

    match pipeline.run(config, runner, progress).await {
        Ok(report) => Ok(ProjectReport {
            name: config.name.clone(),
            target_directory: config.target_directory.clone(),
            elapsed: start.elapsed(),
            executed: report.executed,
            notices: report.notices,
            copied: report.copied,
            skipped: report.skipped,
        }),
        Err(StepFailure {
            title,
            error,
            copied,
            ..
        }) => {
            let rolled_back = match &existing {
                None => remove_path(&config.target_directory, progress).await,
                Some(before) => {
                    undo_changes(&config.target_directory, before, &copied, progress).await
                }
            };

            Err(BootstrapError::CreationFailed {
                step: title.to_string(),
                source: error,
                rolled_back,
            })
        }
    }
}

/// Names directly under `dir`
async fn top_level_entries(dir: &Path) -> Result<HashSet<OsString>, ScaffoldError> {
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| ScaffoldError::io(dir, e))?;
    let mut names = HashSet::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| ScaffoldError::io(dir, e))?
    {
        names.insert(entry.file_name());
    }
    Ok(names)
}

/// Remove what a failed run added to a directory that existed before it
///
/// Copied files are removed wherever they landed; any other top-level entry that was not
/// there before the run (`.git`, `node_modules`, lockfiles, new folders) is removed whole.
/// Files the user already had are never touched.
async fn undo_changes<P: Progress>(
    target: &Path,
    before: &HashSet<OsString>,
    copied: &[PathBuf],
    progress: &mut P,
) -> bool {
    let mut clean = true;
    for path in copied.iter().rev() {
        clean &= remove_path(path, progress).await;
    }

    let now = match top_level_entries(target).await {
        Ok(now) => now,
        Err(error) => {
            progress.warning(&format!("Rollback failed: {}", error));
            return false;
        }
    };
    let mut added: Vec<&OsString> = now.iter().filter(|n| !before.contains(*n)).collect();
    added.sort();
    for name in added {
        clean &= remove_path(&target.join(name), progress).await;
    }
    clean
}

/// Best-effort removal of a file or directory tree; failures are only reported
async fn remove_path<P: Progress>(path: &Path, progress: &mut P) -> bool {
    let result = match fs::symlink_metadata(path).await {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path).await,
        Ok(_) => fs::remove_file(path).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(()) => true,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
        Err(e) => {
            let error = ScaffoldError::io(path, e);
            progress.warning(&format!("Rollback failed: {}", error));
            false
        }
    }
}
