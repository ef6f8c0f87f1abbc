//! Progress reporting for pipeline runs

use crate::error::ScaffoldError;
use crate::features::Notice;
use colored::Colorize;

/// Receives the observable signals of a run
///
/// Every method has a no-op default so reporters only implement what they render.
pub trait Progress {
    /// An enabled step is about to run
    fn step_started(&mut self, _title: &str) {}

    fn step_finished(&mut self, _title: &str) {}

    fn step_failed(&mut self, _title: &str, _error: &ScaffoldError) {}

    /// Structured notice produced by a step (e.g. skipped installs)
    fn notice(&mut self, _notice: &Notice) {}

    /// Non-fatal problem outside any step (missing tools, failed rollback)
    fn warning(&mut self, _message: &str) {}
}

/// Discards everything
#[derive(Debug, Default)]
pub struct SilentProgress;

impl Progress for SilentProgress {}

/// Plain colored lines on stdout/stderr
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn step_started(&mut self, title: &str) {
        println!("  {} {}", "->".blue(), title);
    }

    fn step_finished(&mut self, title: &str) {
        println!("  {} {}", "done".green(), title.dimmed());
    }

    fn step_failed(&mut self, title: &str, error: &ScaffoldError) {
        eprintln!("  {} {}: {}", "failed".red(), title, error);
    }

    fn notice(&mut self, notice: &Notice) {
        println!("{} {}", "Note:".yellow(), notice);
    }

    fn warning(&mut self, message: &str) {
        eprintln!("{} {}", "Warning:".yellow(), message);
    }
}
