use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named bucket of preset title suggestions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub titles: Vec<String>,
}

impl Category {
    pub fn new(id: impl Into<String>, titles: &[&str]) -> Self {
        Category {
            id: id.into(),
            titles: titles.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Errors raised while building a registry from configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    #[error("no categories defined")]
    NoCategories,
    #[error("duplicate category id: {0}")]
    DuplicateCategory(String),
    #[error("category {0} has no titles")]
    EmptyCategory(String),
}

/// Ordered, read-only mapping from category id to its candidate titles.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    categories: IndexMap<String, Vec<String>>,
}

impl CategoryRegistry {
    /// Build a registry, rejecting duplicate ids and empty title lists.
    pub fn from_categories(categories: Vec<Category>) -> Result<Self, CategoryError> {
        if categories.is_empty() {
            return Err(CategoryError::NoCategories);
        }
        let mut map = IndexMap::with_capacity(categories.len());
        for category in categories {
            if category.titles.is_empty() {
                return Err(CategoryError::EmptyCategory(category.id));
            }
            if map.contains_key(&category.id) {
                return Err(CategoryError::DuplicateCategory(category.id));
            }
            map.insert(category.id, category.titles);
        }
        Ok(CategoryRegistry { categories: map })
    }

    /// The registry shipped with the binary
    pub fn builtin() -> Self {
        let categories = builtin_categories()
            .into_iter()
            .map(|c| (c.id, c.titles))
            .collect();
        CategoryRegistry { categories }
    }

    /// Category ids in declaration order
    pub fn ids(&self) -> Vec<&str> {
        self.categories.keys().map(|k| k.as_str()).collect()
    }

    /// Candidate titles for a category. Unknown ids yield an empty slice.
    pub fn candidates(&self, id: &str) -> &[String] {
        self.categories
            .get(id)
            .map(|titles| titles.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.categories.contains_key(id)
    }

    pub fn first_id(&self) -> Option<&str> {
        self.categories.keys().next().map(|k| k.as_str())
    }

    /// Position of a category in declaration order
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.categories.get_index_of(id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate `(id, titles)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(id, titles)| (id.as_str(), titles.as_slice()))
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_categories() -> Vec<Category> {
    vec![
        Category::new(
            "Fun",
            &[
                "Board games revival",
                "Comedy trends",
                "Amusement parks",
                "Escape rooms",
                "Street performances",
                "Online challenges",
                "Festivals impact",
                "Crafting movement",
                "Social gaming",
                "Virtual reality",
            ],
        ),
        Category::new(
            "Education",
            &[
                "Gamified learning",
                "Education systems",
                "Bilingual benefits",
                "Standardized testing",
                "Arts in schools",
                "Tech bootcamps",
                "Homeschooling dynamics",
                "Mentorship importance",
                "Educational equity",
                "Mobile learning",
            ],
        ),
        Category::new(
            "Sports",
            &[
                "Sports medicine",
                "Team sociology",
                "Olympic economics",
                "Gender parity",
            ],
        ),
        Category::new(
            "News",
            &[
                "Citizen journalism",
                "Whistleblower influence",
                "Fake news",
                "Print media survival",
            ],
        ),
        Category::new(
            "Investment",
            &[
                "Robo-advising",
                "Geopolitical impacts",
                "Index funds",
                "Real estate trends",
            ],
        ),
        Category::new(
            "Facts",
            &[
                "Animal oddities",
                "Everyday science",
                "Historical obscurities",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order_and_sizes() {
        let registry = CategoryRegistry::builtin();
        assert_eq!(
            registry.ids(),
            vec!["Fun", "Education", "Sports", "News", "Investment", "Facts"]
        );
        assert_eq!(registry.candidates("Fun").len(), 10);
        assert_eq!(registry.candidates("Education").len(), 10);
        assert_eq!(registry.candidates("Facts").len(), 3);
        assert_eq!(registry.candidates("Sports")[0], "Sports medicine");
    }

    #[test]
    fn test_builtin_invariants() {
        let registry = CategoryRegistry::builtin();
        for (id, titles) in registry.iter() {
            assert!(!titles.is_empty(), "{} has no titles", id);
        }
        // Rebuilding through the validating path must succeed
        let categories = registry
            .iter()
            .map(|(id, titles)| Category {
                id: id.to_string(),
                titles: titles.to_vec(),
            })
            .collect();
        assert_eq!(CategoryRegistry::from_categories(categories), Ok(registry));
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let registry = CategoryRegistry::builtin();
        assert!(registry.candidates("Cooking").is_empty());
        assert!(!registry.contains("Cooking"));
        assert_eq!(registry.index_of("Cooking"), None);
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = CategoryRegistry::from_categories(vec![
            Category::new("A", &["one"]),
            Category::new("A", &["two"]),
        ])
        .unwrap_err();
        assert_eq!(err, CategoryError::DuplicateCategory("A".into()));
    }

    #[test]
    fn test_empty_titles_rejected() {
        let err = CategoryRegistry::from_categories(vec![Category::new("A", &[])]).unwrap_err();
        assert_eq!(err, CategoryError::EmptyCategory("A".into()));
        assert_eq!(
            CategoryRegistry::from_categories(vec![]).unwrap_err(),
            CategoryError::NoCategories
        );
    }

    #[test]
    fn test_custom_order_preserved() {
        let registry = CategoryRegistry::from_categories(vec![
            Category::new("Zeta", &["z"]),
            Category::new("Alpha", &["a"]),
        ])
        .unwrap();
        assert_eq!(registry.ids(), vec!["Zeta", "Alpha"]);
        assert_eq!(registry.first_id(), Some("Zeta"));
        assert_eq!(registry.index_of("Alpha"), Some(1));
    }
}
