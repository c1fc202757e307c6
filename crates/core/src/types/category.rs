//! Product categories and the collection filter selector.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A product's functional class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Dining,
    Coffee,
    Conference,
    Console,
}

impl Category {
    /// Every category, in tab order.
    pub const ALL: [Self; 4] = [Self::Dining, Self::Coffee, Self::Conference, Self::Console];

    /// Display label, also accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dining => "Dining",
            Self::Coffee => "Coffee",
            Self::Conference => "Conference",
            Self::Console => "Console",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    /// Parse a category label, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::InvalidCategory(s.to_owned()))
    }
}

/// Category selector for the collection grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// No filtering.
    #[default]
    All,
    /// Only products of one category.
    Only(Category),
}

impl CategoryFilter {
    /// The five selectors in display order.
    #[must_use]
    pub const fn options() -> [Self; 5] {
        [
            Self::All,
            Self::Only(Category::Dining),
            Self::Only(Category::Coffee),
            Self::Only(Category::Conference),
            Self::Only(Category::Console),
        ]
    }

    /// Whether a product of `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    /// Display label, also accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.as_str(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Category>().map(Self::Only)
    }
}
