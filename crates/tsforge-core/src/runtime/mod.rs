//! External programs
//!
//! This module provides:
//! - The `CommandRunner` seam and its process-backed implementation
//! - Detection of the tools (git, package managers) a run depends on

pub mod check;
pub mod command;

pub use check::{check_tool, check_tools, ToolInfo};
pub use command::{CommandRunner, ProcessRunner};
