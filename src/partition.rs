//! Partition table text and the rows resolved from it.

pub mod offset;
pub mod table;

pub use offset::Offset;
pub use table::{PartitionEntry, PartitionTable};
