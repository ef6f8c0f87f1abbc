//! Ordered, conditionally enabled step execution
//!
//! A [`Pipeline`] runs its steps strictly one after another in declared order. Each step's
//! predicate is evaluated once, before the first step runs, so a step can never switch
//! another one on or off mid-run. The first failure stops the run.

pub mod progress;
pub mod steps;

pub use progress::{ConsoleProgress, Progress, SilentProgress};
pub use steps::{build_steps, Action, Step};

use crate::config::Configuration;
use crate::error::ScaffoldError;
use crate::features::{InstallContext, Notice};
use crate::runtime::CommandRunner;
use std::path::PathBuf;

/// Where a pipeline is in its run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Pending,
    Running(usize),
    Completed,
    Failed(usize),
}

/// A step that aborted the run
#[derive(Debug)]
pub struct StepFailure {
    pub index: usize,
    pub title: &'static str,
    pub error: ScaffoldError,
    /// Files written by the steps that completed before this one
    pub copied: Vec<PathBuf>,
}

/// Result of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Titles of the steps that ran, in order
    pub executed: Vec<&'static str>,
    pub notices: Vec<Notice>,
    /// Template files written into the project
    pub copied: Vec<PathBuf>,
    /// Template files that already existed and were left alone
    pub skipped: Vec<PathBuf>,
}

pub struct Pipeline {
    steps: Vec<Step>,
    state: PipelineState,
}

impl Pipeline {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            state: PipelineState::Pending,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Run every enabled step in order
    pub async fn run<R: CommandRunner, P: Progress>(
        &mut self,
        config: &Configuration,
        runner: &R,
        progress: &mut P,
    ) -> Result<RunReport, StepFailure> {
        let enabled: Vec<bool> = self.steps.iter().map(|s| (s.enabled_by)(config)).collect();
        let ctx = InstallContext::new(config, runner);
        let mut report = RunReport::default();

        for (index, step) in self.steps.iter().enumerate() {
            if !enabled[index] {
                continue;
            }

            self.state = PipelineState::Running(index);
            progress.step_started(step.title);

            match step.action.run(&ctx).await {
                Ok(outcome) => {
                    progress.step_finished(step.title);
                    for notice in &outcome.notices {
                        progress.notice(notice);
                    }
                    report.executed.push(step.title);
                    report.notices.extend(outcome.notices);
                    report.copied.extend(outcome.copied);
                    report.skipped.extend(outcome.skipped);
                }
                Err(error) => {
                    progress.step_failed(step.title, &error);
                    self.state = PipelineState::Failed(index);
                    return Err(StepFailure {
                        index,
                        title: step.title,
                        error,
                        copied: report.copied,
                    });
                }
            }
        }

        self.state = PipelineState::Completed;
        Ok(report)
    }
}
