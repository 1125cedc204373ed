//! Read-only projections for the public grid
//!
//! The grid never mutates the catalog; it narrows it. Layout concerns
//! (column spans, hover states) stay in the rendering layer.

use super::types::{Category, Project};

/// Grid filter: everything, or one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// The "ALL" tab
    #[default]
    All,
    /// A single category tab
    Only(Category),
}

impl CategoryFilter {
    /// Convert to the tab string the site displays
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "ALL",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Parse from a tab string
    pub fn parse(s: &str) -> Option<Self> {
        if s == "ALL" {
            return Some(CategoryFilter::All);
        }
        Category::parse(s).map(CategoryFilter::Only)
    }

    /// Get all filters, in the order the site's tab bar lists them
    pub fn all() -> &'static [CategoryFilter] {
        &[
            CategoryFilter::All,
            CategoryFilter::Only(Category::BrandedContent),
            CategoryFilter::Only(Category::Interview),
            CategoryFilter::Only(Category::Making),
            CategoryFilter::Only(Category::AiStudio),
        ]
    }

    /// Whether `project` belongs under this tab.
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == *category,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Narrow `projects` to the entries under `filter`, preserving catalog
/// order.
pub fn filter_by_category<'a>(projects: &'a [Project], filter: CategoryFilter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}
