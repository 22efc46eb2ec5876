//! Invocation of the external forensic tools.

pub mod runner;
pub mod tool_error;

pub use runner::{CommandRunner, LocalRunner, ToolOutput};
pub use tool_error::ToolError;
