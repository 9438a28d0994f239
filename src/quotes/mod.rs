//! Quote records and the immutable quote store
//!
//! The store is fixed for the lifetime of the process. It is the index space
//! the [`selector`] draws from, so it must never be empty.

pub mod selector;

use crate::errors::{QuoteError, QuoteField};

pub use selector::{Selector, Session};

/// A single (text, author) record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    text: String,
    author: String,
}

impl Quote {
    /// Create a record. Both fields must be non-empty after trimming.
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Result<Self, QuoteError> {
        let text = text.into();
        let author = author.into();
        if text.trim().is_empty() {
            return Err(QuoteError::EmptyField {
                index: 0,
                field: QuoteField::Text,
            });
        }
        if author.trim().is_empty() {
            return Err(QuoteError::EmptyField {
                index: 0,
                field: QuoteField::Author,
            });
        }
        Ok(Quote { text, author })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

/// Built-in quotes shown by the binary
const BUILTIN_QUOTES: [(&str, &str); 10] = [
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "Life is what happens to you while you're busy making other plans.",
        "John Lennon",
    ),
    (
        "In the middle of difficulty lies opportunity.",
        "Albert Einstein",
    ),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    (
        "It is during our darkest moments that we must focus to see the light.",
        "Aristotle",
    ),
    ("Whoever is happy will make others happy too.", "Anne Frank"),
    (
        "You must be the change you wish to see in the world.",
        "Mahatma Gandhi",
    ),
    (
        "Spread love everywhere you go. Let no one ever come to you without leaving happier.",
        "Mother Teresa",
    ),
    (
        "The only thing we have to fear is fear itself.",
        "Franklin D. Roosevelt",
    ),
    (
        "Do not go where the path may lead, go instead where there is no path and leave a trail.",
        "Ralph Waldo Emerson",
    ),
];

/// Ordered, immutable sequence of quotes (N >= 1)
#[derive(Debug, Clone)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
}

impl QuoteStore {
    /// Build a store, rejecting an empty list
    pub fn new(quotes: Vec<Quote>) -> Result<Self, QuoteError> {
        if quotes.is_empty() {
            return Err(QuoteError::EmptyStore);
        }
        Ok(QuoteStore { quotes })
    }

    /// Build a store from raw (text, author) pairs, validating each record.
    ///
    /// Errors report the position of the offending pair.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, QuoteError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let quotes = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (text, author))| {
                Quote::new(text, author).map_err(|e| match e {
                    QuoteError::EmptyField { field, .. } => QuoteError::EmptyField { index, field },
                    other => other,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(quotes)
    }

    /// The ten quotes the widget ships with
    pub fn builtin() -> Result<Self, QuoteError> {
        Self::from_pairs(BUILTIN_QUOTES)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Always false for a constructed store
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Quote> {
        self.quotes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_store_has_ten_quotes() {
        let store = QuoteStore::builtin().unwrap();
        assert_eq!(store.len(), 10);
        assert_eq!(store.get(0).unwrap().author(), "Steve Jobs");
        assert_eq!(store.get(9).unwrap().author(), "Ralph Waldo Emerson");
        assert!(store.get(10).is_none());
        assert!(store.iter().all(|q| q.text().ends_with('.')));
    }

    #[test]
    fn test_empty_store_is_rejected() {
        assert_eq!(QuoteStore::new(Vec::new()).unwrap_err(), QuoteError::EmptyStore);
        assert_eq!(
            QuoteStore::from_pairs(std::iter::empty()).unwrap_err(),
            QuoteError::EmptyStore
        );
    }

    #[test]
    fn test_blank_fields_are_rejected_with_position() {
        let err = QuoteStore::from_pairs([("fine", "Someone"), ("also fine", "  ")]).unwrap_err();
        assert_eq!(
            err,
            QuoteError::EmptyField {
                index: 1,
                field: QuoteField::Author
            }
        );

        assert!(matches!(
            Quote::new("", "Author A"),
            Err(QuoteError::EmptyField {
                field: QuoteField::Text,
                ..
            })
        ));
    }
}
