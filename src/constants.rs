/// The partition type label looked up by `--show-files` when none is given.
pub const DEFAULT_TARGET_LABEL: &str = "Basic data partition";

/// The program reading partition tables (The Sleuth Kit).
pub const DEFAULT_PARTITION_READER: &str = "mmls";

/// The program listing files within a partition (The Sleuth Kit).
pub const DEFAULT_FILE_LISTER: &str = "fls";

/// Message reported when the partition-table reader accepts the image.
pub const VALID_IMAGE_MESSAGE: &str = "The specified image is valid and contains partitions.";

/// Printed before any action.
pub const BANNER: &str = r#"
 ___  ____ ___ ____    ___  ____ ___ ____ ____ ___ _ _  _ ____
 |  \ |__|  |  |__|    |  \ |___  |  |___ |     |  | |  | |___
 |__/ |  |  |  |  |    |__/ |___  |  |___ |___  |  |  \/  |___
"#;
