//! Typed identifiers for domain entities
//!
//! Each entity gets its own UUID-backed newtype so ids cannot be mixed up
//! across entity types. Display renders a short prefixed form for logs and
//! terminal output.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(uuid::Uuid::parse_str(s)?))
            }

            pub fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, &self.0.to_string()[..8])
            }
        }
    };
}

define_id!(
    /// Unique identifier for a money-flow transaction
    TransactionId,
    "txn"
);

define_id!(
    /// Unique identifier for a financial goal
    GoalId,
    "goal"
);

define_id!(
    /// Unique identifier for a category
    CategoryId,
    "cat"
);

define_id!(
    /// Unique identifier for a motivational quote
    QuoteId,
    "qt"
);
