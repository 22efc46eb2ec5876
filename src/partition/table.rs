//! Partition table text as emitted by the partition-table reader.
//!
//! The table is kept verbatim; rows are only parsed on demand, one line at a time, with a
//! tolerant grammar:
//!
//! ```text
//! <slot>:  <flags>  <start>  <end>  <length>  <description>
//! ```
//!
//! e.g. `002:  000   0000002048   0000206847   0000204800   Basic data partition`.
//! Lines that do not fit (headers, separators, non-numeric fields) are skipped.

use getset::Getters;
use log::trace;
use std::fmt::{self, Display, Write};

use super::offset::Offset;
use crate::traits::LayoutDisplay;

/// Represents a single parsed row of the partition table.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PartitionEntry {
    /// Slot index, without the trailing colon.
    #[get = "pub"]
    slot: String,
    /// Slot/flags token (`000` for GPT, `000:001` for DOS tables).
    #[get = "pub"]
    flags: String,
    /// The first sector of the partition.
    #[get = "pub"]
    start: u64,
    /// The last sector of the partition.
    #[get = "pub"]
    end: u64,
    /// The number of sectors in the partition.
    #[get = "pub"]
    length: u64,
    /// Free-text partition type description.
    #[get = "pub"]
    description: String,
}

impl PartitionEntry {
    /// Parses one line of the table.
    ///
    /// # Returns
    /// - `Some(PartitionEntry)` if the line follows the row grammar.
    /// - `None` for any other line, including rows whose numeric fields do not parse.
    pub fn from_line(line: &str) -> Option<Self> {
        let (slot, rest) = next_field(line)?;
        let slot = slot.strip_suffix(':').filter(|s| is_digits(s))?;

        let (flags, rest) = next_field(rest)?;
        if !is_flags(flags) {
            return None;
        }

        let (start, rest) = next_field(rest)?;
        let (end, rest) = next_field(rest)?;
        let (length, rest) = next_field(rest)?;

        let description = rest.trim();
        if description.is_empty() {
            return None;
        }

        Some(PartitionEntry {
            slot: slot.to_string(),
            flags: flags.to_string(),
            start: parse_sector(start)?,
            end: parse_sector(end)?,
            length: parse_sector(length)?,
            description: description.to_string(),
        })
    }

    /// Whether the description mentions `label`.
    pub fn matches(&self, label: &str) -> bool {
        self.description.contains(label)
    }

    pub fn offset(&self) -> Offset {
        Offset::new(self.start)
    }
}

/// Raw partition table text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionTable {
    text: String,
}

impl PartitionTable {
    pub fn new(text: impl Into<String>) -> Self {
        PartitionTable { text: text.into() }
    }

    /// The table exactly as the reader printed it.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Iterates over the rows that follow the grammar, in table order.
    pub fn entries(&self) -> impl Iterator<Item = PartitionEntry> + '_ {
        self.text.lines().filter_map(|line| {
            let entry = PartitionEntry::from_line(line);
            if entry.is_none() && !line.trim().is_empty() {
                trace!("Skipping partition table line {line:?}");
            }
            entry
        })
    }

    /// Returns the first row, in table order, whose description contains `label`.
    ///
    /// Later rows sharing the label are never considered.
    pub fn find(&self, label: &str) -> Option<PartitionEntry> {
        self.entries().find(|entry| entry.matches(label))
    }
}

impl Display for PartitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Renders the parsed rows as a box-drawn table.
impl LayoutDisplay for PartitionTable {
    fn display_layout(&self, indent: u8) -> Result<String, fmt::Error> {
        let mut out = String::new();
        let indent = " ".repeat(indent.into());

        writeln!(out, "{}┌{:─^84}┐", indent, " Partition Table Layout ")?;
        writeln!(
            out,
            "{}├{:^8}┬{:^12}┬{:^12}┬{:^12}┬{:^36}┤",
            indent, "Slot", "Start", "End", "Length", "Description"
        )?;
        writeln!(
            out,
            "{}├{:─<8}┼{:─<12}┼{:─<12}┼{:─<12}┼{:─<36}┤",
            indent, "", "", "", "", ""
        )?;

        for entry in self.entries() {
            writeln!(
                out,
                "{}│{:^8}│{:>12}│{:>12}│{:>12}│ {:<35}│",
                indent, entry.slot, entry.start, entry.end, entry.length, entry.description
            )?;
        }

        writeln!(
            out,
            "{}└{:─<8}┴{:─<12}┴{:─<12}┴{:─<12}┴{:─<36}┘",
            indent, "", "", "", "", ""
        )?;

        Ok(out)
    }
}

/// Splits off the next whitespace-delimited field, returning it and the unparsed remainder.
fn next_field(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }

    match s.find(char::is_whitespace) {
        Some(pos) => Some((&s[..pos], &s[pos..])),
        None => Some((s, "")),
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// `000` or `000:001`
fn is_flags(s: &str) -> bool {
    match s.split_once(':') {
        Some((table, slot)) => is_digits(table) && is_digits(slot),
        None => is_digits(s),
    }
}

fn parse_sector(s: &str) -> Option<u64> {
    if !is_digits(s) {
        return None;
    }
    s.parse().ok()
}
