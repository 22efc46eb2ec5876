//! Command-line interface definitions and parsing.

use clap::Parser;
use getset::{CopyGetters, Getters};

use crate::commands::Intent;
use crate::constants::{DEFAULT_FILE_LISTER, DEFAULT_PARTITION_READER, DEFAULT_TARGET_LABEL};
use crate::error::TriageError;

/// DataDetective - Unlock the story hidden in data. Your digital investigation partner.
#[derive(Parser, Debug)]
#[command(name = "data_detective", version)]
#[command(about = "Unlock the story hidden in data - Your digital investigation partner.")]
pub struct Args {
    /// Path to the disk image file.
    #[arg(short, long)]
    pub image: Option<String>,

    /// Check if the disk image is valid and contains partitions.
    #[arg(long)]
    pub check_image: bool,

    /// Show partitions in the disk image without further analysis.
    #[arg(long)]
    pub show_partitions: bool,

    /// List the files of the target partition.
    #[arg(long)]
    pub show_files: bool,

    /// Partition type label the file listing is resolved against.
    #[arg(long, default_value = DEFAULT_TARGET_LABEL)]
    pub label: String,

    /// Program used to read partition tables.
    #[arg(long, default_value = DEFAULT_PARTITION_READER)]
    pub mmls: String,

    /// Program used to list files within a partition.
    #[arg(long, default_value = DEFAULT_FILE_LISTER)]
    pub fls: String,

    /// List files recursively.
    #[arg(short, long)]
    pub recursive: bool,

    /// Render the partition table as a layout instead of the raw reader output.
    #[arg(long)]
    pub layout: bool,

    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parsed and validated CLI configuration.
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct Config {
    #[get = "pub"]
    image: String,
    #[get_copy = "pub"]
    intent: Intent,
    #[get = "pub"]
    target_label: String,
    #[get = "pub"]
    partition_reader: String,
    #[get = "pub"]
    file_lister: String,
    #[get_copy = "pub"]
    recursive: bool,
    #[get_copy = "pub"]
    layout: bool,
}

impl Config {
    /// Validates parsed arguments into a configuration.
    ///
    /// # Errors
    /// - `TriageError::Usage` if the image is missing or empty, or the action flags conflict.
    pub fn from_args(args: Args) -> Result<Self, TriageError> {
        let image = args
            .image
            .filter(|image| !image.is_empty())
            .ok_or_else(|| TriageError::Usage(String::from("Error: -i/--image is required.")))?;

        let intent = Intent::from_flags(args.check_image, args.show_partitions, args.show_files)?;

        Ok(Config {
            image,
            intent,
            target_label: args.label,
            partition_reader: args.mmls,
            file_lister: args.fls,
            recursive: args.recursive,
            layout: args.layout,
        })
    }

    /// A configuration with the default tools and label.
    pub fn new(image: impl Into<String>, intent: Intent) -> Self {
        Config {
            image: image.into(),
            intent,
            target_label: DEFAULT_TARGET_LABEL.to_string(),
            partition_reader: DEFAULT_PARTITION_READER.to_string(),
            file_lister: DEFAULT_FILE_LISTER.to_string(),
            recursive: false,
            layout: false,
        }
    }

    pub fn with_target_label(mut self, label: impl Into<String>) -> Self {
        self.target_label = label.into();
        self
    }

    pub fn with_tools(mut self, partition_reader: impl Into<String>, file_lister: impl Into<String>) -> Self {
        self.partition_reader = partition_reader.into();
        self.file_lister = file_lister.into();
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_layout(mut self, layout: bool) -> Self {
        self.layout = layout;
        self
    }
}
