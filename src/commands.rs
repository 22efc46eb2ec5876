//! This module defines the `Intent` enum: the single action one invocation performs.
//!
//! The intent is chosen from the command-line flags before any external tool is spawned,
//! so conflicting flags never cost a process.

use crate::error::TriageError;

/// Represents the action selected for one run of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Run the image validator only.
    CheckImage,
    /// Print the partition table.
    ShowPartitions,
    /// Resolve the target partition, then list its files.
    ShowFiles,
    /// No action flag given: validate the image.
    Default,
}

impl Intent {
    /// Selects the intent from the action flags.
    ///
    /// # Returns
    /// - `Err(TriageError::Usage)` if both `--check-image` and `--show-partitions` are set.
    /// - Otherwise the first set flag in the order check-image, show-partitions, show-files,
    ///   or `Intent::Default` when none is set.
    pub fn from_flags(
        check_image: bool,
        show_partitions: bool,
        show_files: bool,
    ) -> Result<Self, TriageError> {
        match (check_image, show_partitions, show_files) {
            (true, true, _) => Err(TriageError::Usage(String::from(
                "Error: --check-image and --show-partitions cannot be used together.",
            ))),
            (true, false, _) => Ok(Intent::CheckImage),
            (false, true, _) => Ok(Intent::ShowPartitions),
            (false, false, true) => Ok(Intent::ShowFiles),
            (false, false, false) => Ok(Intent::Default),
        }
    }
}
