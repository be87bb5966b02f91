//! Menu catalog and order pricing.
//!
//! Pricing is deliberately lenient: a name that matches no entry adds nothing
//! and is never an error. Matching trims surrounding whitespace only and is
//! case-sensitive.

use crate::domain::model::MenuItem;

#[derive(Debug, Clone, PartialEq)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The menu served when no catalog is configured.
    pub fn builtin() -> Self {
        Self::new(vec![
            MenuItem::new("Burger", 50.00),
            MenuItem::new("Pizza", 150.00),
            MenuItem::new("Pasta", 100.00),
            MenuItem::new("Sandwich", 40.00),
            MenuItem::new("Fries", 30.00),
            MenuItem::new("Soda", 20.00),
            MenuItem::new("Coffee", 25.00),
            MenuItem::new("Salad", 60.00),
            MenuItem::new("Ice Cream", 45.00),
            MenuItem::new("Soup", 35.00),
        ])
    }

    /// Uses `items` when non-empty, otherwise the built-in menu.
    pub fn from_configured(items: Vec<MenuItem>) -> Self {
        if items.is_empty() {
            Self::builtin()
        } else {
            Self::new(items)
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sums the price of every catalog entry matched by each ordered name.
    /// Repeated names are charged each time they appear.
    pub fn compute_total<S: AsRef<str>>(&self, ordered_items: &[S]) -> f64 {
        ordered_items
            .iter()
            .map(|requested| {
                let requested = requested.as_ref().trim();
                self.items
                    .iter()
                    .filter(|item| item.name == requested)
                    .map(|item| item.price)
                    .sum::<f64>()
            })
            .sum()
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
