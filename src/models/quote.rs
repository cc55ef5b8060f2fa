//! Motivational quote model
//!
//! Quotes are entered by an administrator and rotated on the user
//! dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::QuoteId;

/// A motivational quote shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Unique identifier
    pub id: QuoteId,

    /// The quote text
    pub text: String,

    /// When the quote was added
    pub created_at: DateTime<Utc>,
}

impl Quote {
    /// Create a new quote
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: QuoteId::new(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{201c}{}\u{201d}", self.text)
    }
}
