//! Blocking invocation of external command-line tools.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{Result, StackError};

/// Captured result of one finished process
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub program: String,
    pub args: Vec<String>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    /// Stdout and stderr together, for classifying failures by message
    pub fn combined(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Convert the output into an error carrying the process' own text
    pub fn into_error(self) -> StackError {
        let stderr = if self.stderr.trim().is_empty() {
            self.stdout.trim().to_string()
        } else {
            self.stderr.trim().to_string()
        };
        StackError::CommandFailed {
            program: self.program,
            args: self.args,
            stderr,
        }
    }

    /// Stdout of a successful run, or the verbatim failure
    pub fn into_stdout(self) -> Result<String> {
        if self.success {
            Ok(self.stdout)
        } else {
            Err(self.into_error())
        }
    }
}

/// How the child's stdin is wired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// No input; the child sees a closed stdin
    Closed,
    /// The child reads from the terminal (e.g. for the host tool's own prompts)
    Terminal,
}

/// Run `program` with `args` in `cwd` and wait for it to exit
pub fn run(
    program: &str,
    args: &[&str],
    cwd: &Path,
    envs: &[(&str, &str)],
    input: Input,
) -> Result<ProcessOutput> {
    debug!(program, ?args, cwd = %cwd.display(), "running");

    let stdin = match input {
        Input::Closed => Stdio::null(),
        Input::Terminal => Stdio::inherit(),
    };

    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .envs(envs.iter().copied())
        .stdin(stdin)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| StackError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let result = ProcessOutput {
        program: program.to_string(),
        args: args.iter().map(|a| a.to_string()).collect(),
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    };

    debug!(program, status = ?output.status.code(), "finished");

    Ok(result)
}
