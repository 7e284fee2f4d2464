//! Startup checks for the external tools every run depends on.

use log::debug;

use crate::error::{Error, Result};
use crate::flavor::RequiredTool;
use crate::runner::{CommandRunner, CommandSpec};

/// Tools probed before anything else happens.
pub const REQUIRED_TOOLS: [RequiredTool; 3] = [
    RequiredTool {
        name: "Node.js",
        probe: &["node", "-v"],
        hint: "Install it from https://nodejs.org and try again.",
    },
    RequiredTool {
        name: "Git",
        probe: &["git", "--version"],
        hint: "Install it from https://git-scm.com and try again.",
    },
    RequiredTool {
        name: "npm",
        probe: &["npm", "-v"],
        hint: "It ships with Node.js; reinstall Node.js and try again.",
    },
];

/// Probes a single tool.
///
/// # Errors
/// * `Error::ToolMissing` if the probe command fails or cannot be started
pub fn ensure_tool(runner: &dyn CommandRunner, tool: &RequiredTool) -> Result<()> {
    let Some((program, args)) = tool.probe.split_first() else {
        return Ok(());
    };

    let probe = CommandSpec::new(*program).args(args.iter().copied());
    if runner.probe(&probe) {
        debug!("Found {} ('{}')", tool.name, probe);
        Ok(())
    } else {
        Err(Error::ToolMissing { tool: tool.name.to_string(), hint: tool.hint.to_string() })
    }
}

/// Verifies that Node.js, Git and npm are reachable.
///
/// # Errors
/// * `Error::ToolMissing` naming the first tool that could not be found
pub fn check_environment(runner: &dyn CommandRunner) -> Result<()> {
    REQUIRED_TOOLS.iter().try_for_each(|tool| ensure_tool(runner, tool))
}
