use std::fmt;

/// Starting sector of a partition within an image.
///
/// An offset only makes sense together with the image it was resolved from;
/// nothing checks that it still matches when handed to the file lister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Offset(u64);

impl Offset {
    pub fn new(sector: u64) -> Self {
        Offset(sector)
    }

    pub fn sector(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Offset {
    fn from(sector: u64) -> Self {
        Offset(sector)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
