//!
//! DataDetective: a library and CLI for triaging disk images.
//!
//! This crate drives The Sleuth Kit to:
//! - Check that an image is readable and partitioned (`mmls`)
//! - Print its partition table
//! - Locate a partition by type label and list its files (`fls`)
//!
//! No on-disk format is parsed here: the external tools are reached through the
//! [`CommandRunner`] capability, and only their textual output is interpreted.
//!
//! # Re-exports
//! - [`Triage`]: the partition-resolution pipeline
//! - [`Config`]: validated command-line configuration
//! - [`PartitionTable`]: raw reader output with a tolerant row scanner

pub mod cli;
pub mod commands;
pub mod constants;
pub mod error;
pub mod partition;
pub mod pipeline;
pub mod tools;
pub mod traits;

/// Validated configuration (see [`cli::Config`]).
pub use crate::cli::Config;
/// Categorized pipeline errors (see [`error::TriageError`]).
pub use crate::error::{ErrorKind, Outcome, TriageError};
/// Partition table text and resolved offsets (see [`partition`]).
pub use crate::partition::{Offset, PartitionEntry, PartitionTable};
/// The partition-resolution pipeline (see [`pipeline::Triage`]).
pub use crate::pipeline::Triage;
/// External program execution (see [`tools::runner`]).
pub use crate::tools::{CommandRunner, LocalRunner};
