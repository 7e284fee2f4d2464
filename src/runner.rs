//! External command execution.
//! Every package manager, framework generator and git invocation goes through
//! the [`CommandRunner`] trait so the orchestration can be exercised without
//! touching the real tools.

use std::fmt;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};

const REDACTED: &str = "***";

/// Description of one external invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
    secrets: Vec<String>,
}

impl CommandSpec {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self { program: program.into(), args: Vec::new(), current_dir: None, secrets: Vec::new() }
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Directory the command runs in. Without it the command inherits the
    /// process working directory.
    pub fn current_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Marks a value that must never show up in logs or error messages.
    pub fn secret<S: Into<String>>(mut self, secret: S) -> Self {
        let secret = secret.into();
        if !secret.is_empty() {
            self.secrets.push(secret);
        }
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    /// Shell-like rendering of the command with secrets masked.
    pub fn line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            if arg.contains(char::is_whitespace) {
                line.push('"');
                line.push_str(arg);
                line.push('"');
            } else {
                line.push_str(arg);
            }
        }
        self.secrets.iter().fold(line, |line, secret| line.replace(secret.as_str(), REDACTED))
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line())
    }
}

/// Trait for executing external commands.
pub trait CommandRunner {
    /// Runs the command to completion, streaming its output to the user.
    ///
    /// # Errors
    /// * `Error::CommandExecution` if the command cannot be started or exits
    ///   with a non-zero status. The error carries the captured stderr text.
    fn run(&self, command: &CommandSpec) -> Result<()>;

    /// Runs the command with all output suppressed and reports whether it
    /// succeeded. Never fails.
    fn probe(&self, command: &CommandSpec) -> bool;
}

/// Runner backed by `std::process::Command`.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(spec: &CommandSpec) -> Command {
        let mut command = Command::new(locate_program(spec.program()));
        command.args(spec.arguments());
        if let Some(dir) = spec.working_dir() {
            command.current_dir(dir);
        }
        command
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<()> {
        debug!("Running '{}' in {:?}", spec, spec.working_dir());

        let mut child = Self::command(spec)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::CommandExecution { command: spec.line(), stderr: e.to_string() })?;

        // Echo stderr as it arrives while keeping a copy for the error report.
        let mut captured = String::new();
        if let Some(stderr) = child.stderr.take() {
            let mut reader = BufReader::new(stderr);
            let mut buf = Vec::new();
            loop {
                buf.clear();
                match reader.read_until(b'\n', &mut buf) {
                    Ok(0) => break,
                    Ok(_) => {
                        let chunk = String::from_utf8_lossy(&buf);
                        eprint!("{chunk}");
                        captured.push_str(&chunk);
                    }
                    Err(e) => {
                        debug!("Stopped reading stderr of '{}': {}", spec, e);
                        break;
                    }
                }
            }
        }

        let status = child
            .wait()
            .map_err(|e| Error::CommandExecution { command: spec.line(), stderr: e.to_string() })?;

        if !status.success() {
            debug!("'{}' exited with {}", spec, status);
            return Err(Error::CommandExecution { command: spec.line(), stderr: captured });
        }

        Ok(())
    }

    fn probe(&self, spec: &CommandSpec) -> bool {
        let status = Self::command(spec)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) => status.success(),
            Err(e) => {
                debug!("Probe '{}' failed: {}", spec, e);
                false
            }
        }
    }
}

/// Full path of `program` as found on `PATH` (honouring `PATHEXT` on
/// Windows, where Node tools are `.cmd` shims). Unknown programs are returned
/// as given so spawning reports them as missing.
pub fn locate_program(program: &str) -> PathBuf {
    which::which(program).unwrap_or_else(|e| {
        debug!("'{}' not found on PATH: {}", program, e);
        PathBuf::from(program)
    })
}
