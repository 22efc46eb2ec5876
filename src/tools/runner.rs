//! Command execution abstraction.
//!
//! The [`CommandRunner`] trait is the only way the triage pipeline reaches the outside world.
//! [`LocalRunner`] spawns real processes; tests substitute a runner returning canned output.

use getset::Getters;
use log::debug;
use std::process::{Command, Stdio};

use super::tool_error::ToolError;

/// Captured result of a finished external program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct ToolOutput {
    /// Exit code, `None` if the process was killed by a signal.
    #[get = "pub"]
    code: Option<i32>,
    /// Standard output, lossily decoded as UTF-8.
    #[get = "pub"]
    stdout: String,
    /// Standard error, lossily decoded as UTF-8.
    #[get = "pub"]
    stderr: String,
}

impl ToolOutput {
    pub fn new(code: Option<i32>, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        ToolOutput {
            code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Whether the program exited with status zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Both output streams, standard output first.
    pub fn combined(&self) -> String {
        let mut out = self.stdout.clone();
        out.push_str(&self.stderr);
        out
    }

    /// Converts a failed run into a [`ToolError::Exit`] carrying the standard error text.
    pub fn into_exit_error(self, program: &str) -> ToolError {
        ToolError::Exit {
            program: program.to_string(),
            code: self.code,
            diagnostics: self.stderr,
        }
    }
}

/// A provider capable of executing programs and returning their output.
pub trait CommandRunner {
    /// Executes `program` with `args` and waits for it to finish.
    ///
    /// A non-zero exit status is not an error at this level: it is reported through
    /// [`ToolOutput::code`]. Only a failure to start or await the process yields `Err`.
    fn run(&self, program: &str, args: &[&str]) -> Result<ToolOutput, ToolError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, program: &str, args: &[&str]) -> Result<ToolOutput, ToolError> {
        (**self).run(program, args)
    }
}

/// Executes programs on the local machine via [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalRunner;

impl CommandRunner for LocalRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<ToolOutput, ToolError> {
        debug!("Running `{} {}`", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| ToolError::Spawn {
                program: program.to_string(),
                source,
            })?;

        debug!("`{program}` finished with {}", output.status);

        Ok(ToolOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
