//! Decision categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A decision type selecting which criteria list and weights apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Career,
    #[default]
    Personal,
    Financial,
    Relationship,
    Health,
}

impl Category {
    /// Categories in the order they are offered to the user.
    pub const ALL: [Category; 5] = [
        Category::Career,
        Category::Personal,
        Category::Financial,
        Category::Relationship,
        Category::Health,
    ];

    /// Category whose criteria apply when the requested one is unknown.
    pub const FALLBACK: Category = Category::Personal;

    /// Display name, also the value stored on a decision.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Career => "Career",
            Category::Personal => "Personal",
            Category::Financial => "Financial",
            Category::Relationship => "Relationship",
            Category::Health => "Health",
        }
    }

    /// Exact lookup by display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Lookup that never fails: unknown or blank names resolve to the fallback.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name.trim()).unwrap_or(Self::FALLBACK)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
