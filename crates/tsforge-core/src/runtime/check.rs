//! Detection of the external tools a run will invoke

use crate::config::Configuration;
use std::process::Command;

/// Tool detection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Check if a program answers `--version`
pub fn check_tool(name: &'static str) -> ToolInfo {
    let output = Command::new(name).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            ToolInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => ToolInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Programs the enabled steps of this configuration will launch
pub fn required_tools(config: &Configuration) -> Vec<&'static str> {
    let features = &config.features;
    let mut tools = Vec::new();

    if features.git {
        tools.push("git");
    }

    let installs = config.run_install
        && (features.ts || features.eslint || features.nodemon || features.commit_lint);
    if installs {
        tools.push(config.package_manager.binary());
    }

    tools
}

/// Probe every required tool; missing ones are reported, not fatal
pub fn check_tools(config: &Configuration) -> Vec<ToolInfo> {
    required_tools(config).into_iter().map(check_tool).collect()
}
