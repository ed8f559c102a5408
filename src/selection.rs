//! Service selection and requirements-text aggregation.
//!
//! A [`Selection`] is a plain set of item descriptions. It is not tied to a
//! catalog: toggling an unknown item simply adds or removes it. Aggregation
//! walks the catalog, so output order always follows the catalog rather than
//! the order items were selected in.
//!
//! # Example
//!
//! ```
//! use proposalforge::{build_service_text, Selection, ServiceCatalog, ServiceCategory};
//!
//! let catalog = ServiceCatalog::new(vec![ServiceCategory::new("SEO", ["Write blog", "Fix links"])]);
//! let mut selection = Selection::new();
//! selection.toggle_item("Write blog");
//!
//! assert_eq!(build_service_text(&catalog, &selection), "SEO:\n- Write blog");
//! ```

use std::collections::HashSet;

use crate::model::{ServiceCatalog, ServiceCategory};

/// Set of selected service items, deduplicated by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: HashSet<String>,
}

/// How much of a category is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryState {
    /// No item of the category is selected
    Unselected,
    /// Some but not all items are selected
    Partial,
    /// Every item is selected
    Full,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select every item of every category in the catalog.
    pub fn select_all(catalog: &ServiceCatalog) -> Self {
        catalog.items().collect()
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Check if an item is selected.
    pub fn contains(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    /// Flip membership of a single item.
    pub fn toggle_item(&mut self, item: &str) {
        if !self.items.remove(item) {
            self.items.insert(item.to_string());
        }
    }

    /// Deselect the whole category if it is fully selected, otherwise select all of it.
    pub fn toggle_category(&mut self, category: &ServiceCategory) {
        if self.is_fully_selected(category) {
            for item in &category.items {
                self.items.remove(item);
            }
        } else {
            self.items.extend(category.items.iter().cloned());
        }
    }

    /// Check if every item of the category is selected.
    ///
    /// Vacuously true for a category with no items.
    pub fn is_fully_selected(&self, category: &ServiceCategory) -> bool {
        category.items.iter().all(|i| self.contains(i))
    }

    /// Number of the category's items that are selected.
    pub fn selected_in(&self, category: &ServiceCategory) -> usize {
        category.items.iter().filter(|i| self.contains(i)).count()
    }

    /// Classify how much of a category is selected.
    pub fn category_state(&self, category: &ServiceCategory) -> CategoryState {
        if self.is_fully_selected(category) {
            CategoryState::Full
        } else if self.selected_in(category) > 0 {
            CategoryState::Partial
        } else {
            CategoryState::Unselected
        }
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over selected items in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for Selection {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

/// Render the selected items as requirements text, grouped by category.
///
/// Categories and items keep catalog order; categories with nothing
/// selected are left out. Returns an empty string for an empty selection.
pub fn build_service_text(catalog: &ServiceCatalog, selection: &Selection) -> String {
    if selection.is_empty() {
        return String::new();
    }

    catalog
        .categories
        .iter()
        .filter_map(|category| {
            let lines: Vec<String> = category
                .items
                .iter()
                .filter(|item| selection.contains(item))
                .map(|item| format!("- {}", item))
                .collect();
            if lines.is_empty() {
                None
            } else {
                Some(format!("{}:\n{}", category.name, lines.join("\n")))
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
