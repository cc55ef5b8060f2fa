//! Quote service
//!
//! Admin-side quote management plus the uniform random pick the dashboard
//! uses for its rotating wealth quote.

use rand::seq::SliceRandom;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Quote, QuoteId};

/// Service for motivational quote management
pub struct QuoteService;

impl QuoteService {
    /// Add a quote to the collection, trimming surrounding whitespace
    pub fn add(quotes: &mut Vec<Quote>, text: impl Into<String>) -> TrackerResult<QuoteId> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TrackerError::Validation(
                "Quote text must not be empty".to_string(),
            ));
        }

        let quote = Quote::new(trimmed);
        let id = quote.id;
        quotes.push(quote);
        Ok(id)
    }

    /// Remove a quote by id
    pub fn delete(quotes: &mut Vec<Quote>, id: QuoteId) -> TrackerResult<Quote> {
        match quotes.iter().position(|q| q.id == id) {
            Some(index) => Ok(quotes.remove(index)),
            None => Err(TrackerError::quote_not_found(id.to_string())),
        }
    }

    /// Pick a quote uniformly at random, or None if there are no quotes
    pub fn random(quotes: &[Quote]) -> Option<&Quote> {
        quotes.choose(&mut rand::thread_rng())
    }
}
