#![forbid(unsafe_code)]

//! Errors reported by panel operations.
//!
//! Every variant is caller misuse. Nothing here is retried or recovered
//! internally, and a failed call leaves the panel exactly as it was.

use std::fmt;

use crate::color_panel::EntryId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelError {
    /// A selection change was requested on an empty panel.
    InvalidState,
    /// The requested selection is past the last entry.
    OutOfRange { index: usize, len: usize },
    /// A signed selection request was negative.
    NegativeIndex { index: isize, len: usize },
    /// The entry is already part of the panel.
    DuplicateEntry { id: EntryId },
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState => write!(f, "there are no entries in this panel"),
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} is out of range for {len} entries")
            }
            Self::NegativeIndex { index, len } => {
                write!(f, "negative index {index} is out of range for {len} entries")
            }
            Self::DuplicateEntry { id } => write!(f, "entry {id} is already part of the panel"),
        }
    }
}

impl std::error::Error for PanelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            PanelError::InvalidState.to_string(),
            "there are no entries in this panel"
        );
        assert_eq!(
            PanelError::OutOfRange { index: 7, len: 3 }.to_string(),
            "index 7 is out of range for 3 entries"
        );
        assert_eq!(
            PanelError::NegativeIndex { index: -1, len: 3 }.to_string(),
            "negative index -1 is out of range for 3 entries"
        );
        assert_eq!(
            PanelError::OutOfRange {
                index: usize::MAX,
                len: 3
            }
            .to_string(),
            format!("index {} is out of range for 3 entries", usize::MAX)
        );
        assert_eq!(
            PanelError::DuplicateEntry { id: EntryId(12) }.to_string(),
            "entry #12 is already part of the panel"
        );
    }

    #[test]
    fn is_std_error() {
        fn takes(_: &dyn std::error::Error) {}
        takes(&PanelError::InvalidState);
    }
}
