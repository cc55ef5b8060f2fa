//! Transaction categories
//!
//! Categories are managed by an administrator; regular users pick from the
//! active set when recording a transaction. A catalog seeded with the
//! default set is available for callers that have no category store to
//! draw from.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::transaction::TransactionKind;

/// Default income category names
pub const DEFAULT_INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Commission",
    "Work",
    "Investment",
    "Dividend",
    "Royalty",
    "Interest",
];

/// Default expense category names
pub const DEFAULT_EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Travel",
    "Transportation",
    "Rent",
    "Utilities",
    "Entertainment",
    "Healthcare",
    "Misc",
];

/// A transaction category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Whether this category applies to income or expense records
    pub kind: TransactionKind,

    /// Inactive categories are hidden from pickers but kept for history
    #[serde(default = "default_active")]
    pub is_active: bool,

    /// Position in pickers, lowest first
    #[serde(default)]
    pub sort_order: u32,
}

fn default_active() -> bool {
    true
}

impl Category {
    /// Create a new active category
    pub fn new(name: impl Into<String>, kind: TransactionKind, sort_order: u32) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            kind,
            is_active: true,
            sort_order,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// An ordered collection of categories with lookup helpers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    /// An empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog seeded with the default income and expense categories
    pub fn with_defaults() -> Self {
        let mut categories = Vec::new();
        for (i, name) in DEFAULT_INCOME_CATEGORIES.iter().enumerate() {
            categories.push(Category::new(*name, TransactionKind::Income, i as u32 + 1));
        }
        for (i, name) in DEFAULT_EXPENSE_CATEGORIES.iter().enumerate() {
            categories.push(Category::new(*name, TransactionKind::Expense, i as u32 + 1));
        }
        Self { categories }
    }

    /// All categories, including inactive ones
    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    /// Active categories of the given kind, sorted by sort order then name
    pub fn active(&self, kind: TransactionKind) -> Vec<&Category> {
        let mut matches: Vec<&Category> = self
            .categories
            .iter()
            .filter(|c| c.is_active && c.kind == kind)
            .collect();
        matches.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then(a.name.cmp(&b.name)));
        matches
    }

    /// Active category names of the given kind
    pub fn names(&self, kind: TransactionKind) -> Vec<String> {
        self.active(kind).iter().map(|c| c.name.clone()).collect()
    }

    /// Check whether a name is an active category of the given kind
    pub fn contains(&self, name: &str, kind: TransactionKind) -> bool {
        self.categories
            .iter()
            .any(|c| c.is_active && c.kind == kind && c.name == name)
    }

    /// Add a category
    pub fn add(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// Deactivate a category by name, returning whether one was found
    pub fn deactivate(&mut self, name: &str, kind: TransactionKind) -> bool {
        match self
            .categories
            .iter_mut()
            .find(|c| c.kind == kind && c.name == name)
        {
            Some(category) => {
                category.is_active = false;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_seeded() {
        let catalog = CategoryCatalog::with_defaults();
        assert_eq!(
            catalog.active(TransactionKind::Income).len(),
            DEFAULT_INCOME_CATEGORIES.len()
        );
        assert_eq!(
            catalog.active(TransactionKind::Expense).len(),
            DEFAULT_EXPENSE_CATEGORIES.len()
        );
        assert!(catalog.contains("Salary", TransactionKind::Income));
        assert!(catalog.contains("Rent", TransactionKind::Expense));
    }

    #[test]
    fn test_kind_is_part_of_membership() {
        let catalog = CategoryCatalog::with_defaults();
        // "Salary" is an income category, not an expense category
        assert!(!catalog.contains("Salary", TransactionKind::Expense));
    }

    #[test]
    fn test_deactivate_hides_from_pickers() {
        let mut catalog = CategoryCatalog::with_defaults();
        assert!(catalog.deactivate("Misc", TransactionKind::Expense));
        assert!(!catalog.contains("Misc", TransactionKind::Expense));
        // still present in the full listing
        assert!(catalog.all().iter().any(|c| c.name == "Misc"));
    }

    #[test]
    fn test_active_ordering() {
        let mut catalog = CategoryCatalog::new();
        catalog.add(Category::new("Beta", TransactionKind::Expense, 2));
        catalog.add(Category::new("Alpha", TransactionKind::Expense, 1));
        let names = catalog.names(TransactionKind::Expense);
        assert_eq!(names, vec!["Alpha".to_string(), "Beta".to_string()]);
    }

    #[test]
    fn test_deactivate_missing_returns_false() {
        let mut catalog = CategoryCatalog::new();
        assert!(!catalog.deactivate("Nope", TransactionKind::Income));
    }
}
