//! Error types for the quote widget
//!
//! Every variant of [`QuoteError`] is a configuration or integration mistake:
//! an empty quote list, a blank quote field, or a screen region that the
//! renderer or input controller expects but cannot find. None of them are
//! transient, so nothing in the crate retries after one.

use crate::page::SlotId;
use std::fmt;

/// Which field of a quote record was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteField {
    Text,
    Author,
}

impl fmt::Display for QuoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteField::Text => write!(f, "text"),
            QuoteField::Author => write!(f, "author"),
        }
    }
}

/// Fatal configuration errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// The quote store was built from an empty list
    EmptyStore,

    /// A quote record has an empty text or author
    EmptyField { index: usize, field: QuoteField },

    /// A display slot or control is not present on the page
    MissingSlot(SlotId),
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteError::EmptyStore => {
                write!(f, "Quote store is empty: at least one quote is required")
            }
            QuoteError::EmptyField { index, field } => {
                write!(f, "Quote #{} has an empty {}", index, field)
            }
            QuoteError::MissingSlot(slot) => {
                write!(f, "Required display slot '{}' is missing", slot)
            }
        }
    }
}

impl std::error::Error for QuoteError {}
