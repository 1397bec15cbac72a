//! Core types for scan results.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Declaration categories, in fixed presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "functions")]
    Function,
    #[serde(rename = "constructors")]
    Constructor,
    #[serde(rename = "destructors")]
    Destructor,
    #[serde(rename = "operators")]
    Operator,
}

impl Category {
    /// All categories in presentation order.
    pub const ALL: [Category; 4] = [
        Category::Function,
        Category::Constructor,
        Category::Destructor,
        Category::Operator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Function => "functions",
            Category::Constructor => "constructors",
            Category::Destructor => "destructors",
            Category::Operator => "operators",
        }
    }

    /// Section heading used in the catalog document.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Function => "Functions",
            Category::Constructor => "Constructors",
            Category::Destructor => "Destructors",
            Category::Operator => "Operator Overloads",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "functions" => Some(Category::Function),
            "constructors" => Some(Category::Constructor),
            "destructors" => Some(Category::Destructor),
            "operators" => Some(Category::Operator),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classified declaration snippets for one file.
///
/// Snippets are deduplicated per category; iteration order is lexicographic
/// by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSignatures {
    functions: BTreeSet<String>,
    constructors: BTreeSet<String>,
    destructors: BTreeSet<String>,
    operators: BTreeSet<String>,
}

impl FileSignatures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one snippet to a category.
    pub fn insert(&mut self, category: Category, snippet: String) {
        self.set_mut(category).insert(snippet);
    }

    /// Add every snippet in the iterator to a category.
    pub fn extend<I: IntoIterator<Item = String>>(&mut self, category: Category, snippets: I) {
        self.set_mut(category).extend(snippets);
    }

    /// Snippets recorded for a category.
    pub fn get(&self, category: Category) -> &BTreeSet<String> {
        match category {
            Category::Function => &self.functions,
            Category::Constructor => &self.constructors,
            Category::Destructor => &self.destructors,
            Category::Operator => &self.operators,
        }
    }

    /// True if every category is empty.
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.get(*c).is_empty())
    }

    /// Total snippet count across all categories.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    fn set_mut(&mut self, category: Category) -> &mut BTreeSet<String> {
        match category {
            Category::Function => &mut self.functions,
            Category::Constructor => &mut self.constructors,
            Category::Destructor => &mut self.destructors,
            Category::Operator => &mut self.operators,
        }
    }
}
