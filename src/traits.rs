//! Declaration of traits reused across the code.

use std::fmt;

/// Implementation of the LayoutDisplay trait.
/// It is used to render the layout of a given structure such as a partition table.
pub trait LayoutDisplay {
    fn display_layout(&self, indent: u8) -> Result<String, fmt::Error>;
}
