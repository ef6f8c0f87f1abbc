//! Charm-style progress rendering using cliclack

use crate::error::ScaffoldError;
use crate::features::Notice;
use crate::pipeline::Progress;
use std::io;

/// Shows a spinner per running step and log lines for notices and warnings
///
/// Progress callbacks cannot fail a step, so the first terminal write error is kept and
/// handed back by [`CliclackProgress::finish`].
#[derive(Default)]
pub struct CliclackProgress {
    spinner: Option<cliclack::ProgressBar>,
    error: Option<io::Error>,
}

impl CliclackProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// End rendering, returning the first write error seen during the run
    pub fn finish(mut self) -> io::Result<()> {
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn keep(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            self.error.get_or_insert(e);
        }
    }
}

impl Progress for CliclackProgress {
    fn step_started(&mut self, title: &str) {
        let spinner = cliclack::spinner();
        spinner.start(format!("{}...", title));
        self.spinner = Some(spinner);
    }

    fn step_finished(&mut self, title: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop(title);
        }
    }

    fn step_failed(&mut self, title: &str, error: &ScaffoldError) {
        if let Some(spinner) = self.spinner.take() {
            spinner.error(title);
        }
        self.keep(cliclack::log::error(error.to_string()));
    }

    fn notice(&mut self, notice: &Notice) {
        self.keep(cliclack::log::warning(notice.to_string()));
    }

    fn warning(&mut self, message: &str) {
        self.keep(cliclack::log::warning(message));
    }
}
