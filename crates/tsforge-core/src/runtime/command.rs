//! External command execution
//!
//! Every program the pipeline launches (git, npm/yarn/pnpm, husky) goes through a
//! [`CommandRunner`]. The exit status is the only success signal; output is captured so it
//! doesn't interleave with progress rendering, and is never parsed.

use crate::error::ScaffoldError;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Runs one external program to completion in a working directory
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    async fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<(), ScaffoldError>;
}

/// Runner backed by real processes
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<(), ScaffoldError> {
        if !cwd.is_dir() {
            return Err(ScaffoldError::io(
                cwd,
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "working directory does not exist",
                ),
            ));
        }

        let failed = |status: Option<i32>| ScaffoldError::ExternalCommand {
            command: program.to_string(),
            args: args.to_vec(),
            status,
        };

        let output = TokioCommand::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|_| failed(None))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(failed(Some(output.status.code().unwrap_or(-1))))
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording runner shared by the installer, pipeline and bootstrap tests

    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// One recorded call
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Invocation {
        pub program: String,
        pub args: Vec<String>,
        pub cwd: PathBuf,
    }

    impl Invocation {
        pub fn line(&self) -> String {
            crate::error::display_invocation(&self.program, &self.args)
        }
    }

    /// Records invocations instead of spawning; fails calls whose line starts with `fail_on`
    #[derive(Debug, Default)]
    pub struct RecordingRunner {
        calls: Mutex<Vec<Invocation>>,
        fail_on: Option<String>,
    }

    impl RecordingRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_on(prefix: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_on: Some(prefix.to_string()),
            }
        }

        pub fn calls(&self) -> Vec<Invocation> {
            self.calls.lock().unwrap().clone()
        }

        pub fn lines(&self) -> Vec<String> {
            self.calls().iter().map(Invocation::line).collect()
        }
    }

    impl CommandRunner for RecordingRunner {
        async fn run(
            &self,
            program: &str,
            args: &[String],
            cwd: &Path,
        ) -> Result<(), ScaffoldError> {
            let invocation = Invocation {
                program: program.to_string(),
                args: args.to_vec(),
                cwd: cwd.to_path_buf(),
            };
            let line = invocation.line();
            self.calls.lock().unwrap().push(invocation);

            // `git init` is the one call later steps depend on for on-disk state
            if line == "git init" {
                std::fs::create_dir_all(cwd.join(".git"))
                    .map_err(|e| ScaffoldError::io(cwd.join(".git"), e))?;
            }

            match &self.fail_on {
                Some(prefix) if line.starts_with(prefix.as_str()) => {
                    Err(ScaffoldError::ExternalCommand {
                        command: program.to_string(),
                        args: args.to_vec(),
                        status: Some(1),
                    })
                }
                _ => Ok(()),
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[tokio::test]
    async fn test_successful_command() {
        let dir = tempfile::tempdir().unwrap();
        ProcessRunner
            .run("sh", &sh("touch created"), dir.path())
            .await
            .unwrap();
        assert!(dir.path().join("created").exists());
    }

    #[tokio::test]
    async fn test_failing_command_carries_invocation() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProcessRunner
            .run("sh", &sh("exit 3"), dir.path())
            .await
            .unwrap_err();
        match err {
            ScaffoldError::ExternalCommand {
                command,
                args,
                status,
            } => {
                assert_eq!(command, "sh");
                assert_eq!(args, sh("exit 3"));
                assert_eq!(status, Some(3));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_program() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProcessRunner
            .run("tsforge-definitely-not-installed", &[], dir.path())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::ExternalCommand { status: None, .. }
        ));
    }

    #[tokio::test]
    async fn test_missing_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProcessRunner
            .run("sh", &sh("true"), &dir.path().join("nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
    }
}
