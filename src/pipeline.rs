//! The partition-resolution pipeline.
//!
//! Four dependent stages, each a method of [`Triage`]:
//! - [`Triage::validate`]: the partition-table reader accepts the image
//! - [`Triage::list_partitions`]: capture the table, gated on validation
//! - [`Triage::resolve_offset`]: first row carrying the target label
//! - [`Triage::list_files`]: file listing of the partition at that offset
//!
//! Stages short-circuit on the first failure. Nothing is cached: every stage that depends on
//! validation runs the validator again.

use log::{debug, info, warn};

use crate::cli::Config;
use crate::commands::Intent;
use crate::constants::VALID_IMAGE_MESSAGE;
use crate::error::{Outcome, TriageError};
use crate::partition::{Offset, PartitionTable};
use crate::tools::CommandRunner;
use crate::traits::LayoutDisplay;

/// Drives the external tools through a [`CommandRunner`].
pub struct Triage<R: CommandRunner> {
    runner: R,
    partition_reader: String,
    file_lister: String,
    recursive: bool,
}

impl<R: CommandRunner> Triage<R> {
    /// Creates a pipeline using the tools named in `config`.
    pub fn new(runner: R, config: &Config) -> Self {
        Triage {
            runner,
            partition_reader: config.partition_reader().clone(),
            file_lister: config.file_lister().clone(),
            recursive: config.recursive(),
        }
    }

    /// Checks that the partition-table reader accepts the image.
    ///
    /// Only the exit status is inspected. On failure the reader's combined output is
    /// embedded verbatim in the error.
    pub fn validate(&self, image: &str) -> Outcome<&'static str> {
        let output = match self.runner.run(&self.partition_reader, &[image]) {
            Ok(output) => output,
            Err(err) => {
                warn!("{err}");
                return Err(TriageError::InvalidImage(err.to_string()));
            }
        };

        if output.success() {
            Ok(VALID_IMAGE_MESSAGE)
        } else {
            warn!("`{}` rejected {image}", self.partition_reader);
            Err(TriageError::InvalidImage(output.combined()))
        }
    }

    /// Returns the partition table of a validated image.
    ///
    /// # Errors
    /// - The validator's error, unchanged, if the image is rejected. The reader is not run a
    ///   second time in that case.
    /// - `TriageError::PartitionListing` if the second reader run fails.
    pub fn list_partitions(&self, image: &str) -> Outcome<PartitionTable> {
        self.validate(image)?;

        let output = self
            .runner
            .run(&self.partition_reader, &[image])
            .map_err(TriageError::PartitionListing)?;

        if !output.success() {
            return Err(TriageError::PartitionListing(
                output.into_exit_error(&self.partition_reader),
            ));
        }

        Ok(PartitionTable::new(output.stdout().clone()))
    }

    /// Finds the start sector of the first partition whose description contains `label`.
    ///
    /// # Errors
    /// - Any error of [`Triage::list_partitions`].
    /// - `TriageError::PartitionNotFound` if the table holds no matching row.
    pub fn resolve_offset(&self, image: &str, label: &str) -> Outcome<Offset> {
        let table = self.list_partitions(image)?;

        match table.find(label) {
            Some(entry) => {
                info!(
                    "Resolved '{label}' to slot {} starting at sector {}",
                    entry.slot(),
                    entry.start()
                );
                Ok(entry.offset())
            }
            None => Err(TriageError::PartitionNotFound(label.to_string())),
        }
    }

    /// Lists the files of the partition starting at `offset`.
    ///
    /// The offset is handed to the file lister as is.
    pub fn list_files(&self, image: &str, offset: Offset) -> Outcome<String> {
        let sector = offset.to_string();
        let mut args = Vec::with_capacity(4);
        if self.recursive {
            args.push("-r");
        }
        args.extend(["-o", sector.as_str(), image]);

        let output = self
            .runner
            .run(&self.file_lister, &args)
            .map_err(TriageError::FileListing)?;

        if !output.success() {
            return Err(TriageError::FileListing(
                output.into_exit_error(&self.file_lister),
            ));
        }

        Ok(output.stdout().clone())
    }

    /// Runs the intent selected in `config` and returns the text to show the user.
    pub fn run(&self, config: &Config) -> Outcome<String> {
        let image = config.image().as_str();
        debug!("Running {:?} on {image}", config.intent());

        match config.intent() {
            Intent::CheckImage | Intent::Default => self.validate(image).map(str::to_string),
            Intent::ShowPartitions => {
                let table = self.list_partitions(image)?;
                if !config.layout() {
                    return Ok(table.to_string());
                }
                match table.display_layout(0) {
                    Ok(layout) => Ok(layout),
                    Err(err) => {
                        warn!("Layout rendering failed, falling back to raw table: {err}");
                        Ok(table.to_string())
                    }
                }
            }
            Intent::ShowFiles => {
                let offset = self.resolve_offset(image, config.target_label())?;
                self.list_files(image, offset)
            }
        }
    }
}
