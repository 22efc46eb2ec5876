//! Error types for external tool invocations.
//!
//! A tool invocation fails either because the program could not be started at all
//! (missing binary, permission denied) or because it ran and exited with a non-zero status.

use std::io;
use thiserror;

/// Represents a failed invocation of an external program.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// The program could not be spawned or awaited.
    #[error("failed to execute `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    /// The program ran but reported a failure.
    /// `code` is `None` when the process was terminated by a signal.
    #[error("`{program}` exited with status {}: {diagnostics}", display_code(.code))]
    Exit {
        program: String,
        code: Option<i32>,
        diagnostics: String,
    },
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => String::from("<signal>"),
    }
}
