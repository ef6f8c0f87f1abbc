//! Template fragment copying
//!
//! Copies never overwrite: a file that already exists in the project keeps its content and
//! the template's version is skipped.

use crate::error::ScaffoldError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use walkdir::WalkDir;

/// Files written and files left alone by one copy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub copied: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Copy a template file or directory tree into `destination`
///
/// A directory source is copied recursively with `destination` as its root. A file source
/// lands as `destination/<file name>`.
pub async fn copy_template(
    source: &Path,
    destination: &Path,
) -> Result<CopyReport, ScaffoldError> {
    let metadata = fs::metadata(source)
        .await
        .map_err(|e| ScaffoldError::io(source, e))?;

    let mut report = CopyReport::default();

    if metadata.is_file() {
        let file_name = source.file_name().ok_or_else(|| {
            ScaffoldError::io(
                source,
                std::io::Error::new(ErrorKind::InvalidInput, "template file has no name"),
            )
        })?;
        fs::create_dir_all(destination)
            .await
            .map_err(|e| ScaffoldError::io(destination, e))?;
        copy_file(source, &destination.join(file_name), &mut report).await?;
        return Ok(report);
    }

    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source).to_path_buf();
            ScaffoldError::io(path, e.into())
        })?;

        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|_| {
                ScaffoldError::io(
                    entry.path(),
                    std::io::Error::new(ErrorKind::InvalidInput, "entry outside template"),
                )
            })?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .await
                .map_err(|e| ScaffoldError::io(&target, e))?;
        } else {
            copy_file(entry.path(), &target, &mut report).await?;
        }
    }

    Ok(report)
}

/// Copy one file unless the target already exists
async fn copy_file(
    source: &Path,
    target: &Path,
    report: &mut CopyReport,
) -> Result<(), ScaffoldError> {
    // create_new makes the existence check and the write one operation
    let mut output = match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(target)
        .await
    {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            report.skipped.push(target.to_path_buf());
            return Ok(());
        }
        Err(e) => return Err(ScaffoldError::io(target, e)),
    };

    let mut input = fs::File::open(source)
        .await
        .map_err(|e| ScaffoldError::io(source, e))?;
    tokio::io::copy(&mut input, &mut output)
        .await
        .map_err(|e| ScaffoldError::io(target, e))?;
    output
        .flush()
        .await
        .map_err(|e| ScaffoldError::io(target, e))?;

    // Keep hook scripts executable
    let permissions = input
        .metadata()
        .await
        .map_err(|e| ScaffoldError::io(source, e))?
        .permissions();
    fs::set_permissions(target, permissions)
        .await
        .map_err(|e| ScaffoldError::io(target, e))?;

    report.copied.push(target.to_path_buf());
    Ok(())
}
