//! Service catalog types.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A named group of service line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategory {
    /// Category name, used as the group header in aggregated text
    #[serde(rename = "category")]
    pub name: String,

    /// Item descriptions in display order
    pub items: Vec<String>,
}

impl ServiceCategory {
    /// Create a category from a name and its items.
    pub fn new<I, S>(name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether an item belongs to this category.
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }
}

/// An ordered list of service categories.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceCatalog {
    /// Categories in display order
    pub categories: Vec<ServiceCategory>,
}

impl ServiceCatalog {
    /// Create a catalog from categories.
    pub fn new(categories: Vec<ServiceCategory>) -> Self {
        Self { categories }
    }

    /// Parse a catalog from a JSON array of `{ "category", "items" }` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The built-in digital marketing catalog.
    pub fn builtin() -> Self {
        Self::new(vec![
            ServiceCategory::new(
                "Website Development & Maintenance",
                [
                    "Developing and updating website pages for multiple locations",
                    "Creating new pages and campaigns as requested by staff and doctors",
                    "Fixing broken links and correcting text across all location pages",
                    "Performing backend WordPress theme and plugin updates weekly",
                    "Ensuring website compatibility and smooth functionality",
                ],
            ),
            ServiceCategory::new(
                "Search Engine Optimization (SEO)",
                [
                    "Writing and posting SEO-friendly blog posts",
                    "Optimizing blog posts and website pages with proper meta titles, descriptions, and image alt-text",
                    "Adjusting and adding internal links to improve site navigation and SEO",
                    "Optimizing image file sizes to enhance website loading speed and performance",
                ],
            ),
            ServiceCategory::new(
                "Content Updates & Management",
                [
                    "Handling basic content updates such as text changes, job postings, and individual location page edits",
                    "Coordinating with staff for content requests and updates",
                    "Maintaining consistent branding and messaging aligned with core values (Compassion, Efficiency, Patient-Centered Care)",
                ],
            ),
            ServiceCategory::new(
                "Social Media Management",
                [
                    "Writing and designing social media posts for platforms like Facebook, Instagram, and Twitter",
                    "Scheduling social media posts intermittently to promote location openings and ongoing updates",
                    "Posting grand opening announcements and other timely content",
                    "Creating custom 250-word posts specifically for Google My Business",
                ],
            ),
            ServiceCategory::new(
                "Blog Posts",
                [
                    "Writing, posting, and scheduling blog posts on relevant health and safety topics",
                    "SEO optimization of blog content including titles, descriptions, and alt-text",
                    "Blog topics including emergency medical information, seasonal safety tips, and poison prevention awareness",
                ],
            ),
            ServiceCategory::new(
                "Patient Review System",
                [
                    "Setting up patient survey and review pages/forms for new patients",
                    "Tracking survey results in the backend system",
                    "Coordinating with facility directors for survey follow-up and management",
                ],
            ),
            ServiceCategory::new(
                "Google Business Profile Management",
                [
                    "Updating Google Business profiles with accurate hours, photos, and information",
                    "Managing edits and awaiting Google confirmation for profile updates",
                    "Writing and posting Google My Business posts to enhance local SEO and engagement",
                ],
            ),
            ServiceCategory::new(
                "Image Management",
                [
                    "Adding or editing alt-text for images to improve accessibility and SEO",
                    "Optimizing image file sizes for faster website performance",
                ],
            ),
        ])
    }

    /// Find a category by exact name.
    pub fn category(&self, name: &str) -> Option<&ServiceCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Iterate over every item in catalog order.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter().map(String::as_str))
    }

    /// Total number of items across all categories.
    pub fn total_items(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Check if the catalog has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = ServiceCatalog::builtin();
        assert_eq!(catalog.categories.len(), 8);
        assert_eq!(catalog.total_items(), 27);
        assert_eq!(
            catalog.categories[0].name,
            "Website Development & Maintenance"
        );
    }

    #[test]
    fn test_from_json_uses_category_key() {
        let json = r#"[{"category": "SEO", "items": ["Write blog", "Fix links"]}]"#;
        let catalog = ServiceCatalog::from_json(json).unwrap();
        assert_eq!(catalog.categories.len(), 1);
        assert_eq!(catalog.categories[0].name, "SEO");
        assert!(catalog.categories[0].contains("Fix links"));
    }

    #[test]
    fn test_from_json_rejects_object() {
        assert!(ServiceCatalog::from_json(r#"{"category": "SEO"}"#).is_err());
    }

    #[test]
    fn test_lookup_and_items() {
        let catalog = ServiceCatalog::builtin();
        assert!(catalog.category("Blog Posts").is_some());
        assert!(catalog.category("blog posts").is_none());
        assert_eq!(catalog.items().count(), catalog.total_items());
    }
}
