// SPDX-License-Identifier: MPL-2.0
//! Gallery categories used by the filter bar.

use crate::error::UnknownCategory;
use std::fmt;
use std::str::FromStr;

/// One of the five photo groupings the gallery can be filtered by.
///
/// `All` is synthetic: it stands for the concatenation of every real
/// category in [`Category::REAL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Every photo, real categories concatenated.
    #[default]
    All,
    Divers,
    Marine,
    Landscapes,
    Vibes,
}

impl Category {
    /// Filter bar order.
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Divers,
        Category::Marine,
        Category::Landscapes,
        Category::Vibes,
    ];

    /// Real categories in concatenation order for [`Category::All`].
    pub const REAL: [Category; 4] = [
        Category::Divers,
        Category::Marine,
        Category::Landscapes,
        Category::Vibes,
    ];

    /// Returns the tag used in config files and catalog data.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Divers => "divers",
            Category::Marine => "marine",
            Category::Landscapes => "landscapes",
            Category::Vibes => "vibes",
        }
    }

    /// Returns the i18n message key for the filter button label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Category::All => "gallery-filter-all",
            Category::Divers => "gallery-filter-divers",
            Category::Marine => "gallery-filter-marine",
            Category::Landscapes => "gallery-filter-landscapes",
            Category::Vibes => "gallery-filter-vibes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
