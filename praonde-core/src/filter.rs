//! Category filter shown above the deck.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseFilterError;
use crate::event::{Category, Event};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// Filter bar entries, left to right.
    pub const BAR: [Filter; 5] = [
        Filter::All,
        Filter::Only(Category::Festa),
        Filter::Only(Category::Bar),
        Filter::Only(Category::Show),
        Filter::Only(Category::Cultural),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "Todos",
            Filter::Only(Category::Festa) => "Festas",
            Filter::Only(Category::Bar) => "Bares",
            Filter::Only(Category::Show) => "Shows",
            Filter::Only(Category::Cultural) => "Cultural",
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(category) => event.category == *category,
        }
    }

    /// Next entry in bar order, wrapping around.
    pub fn next(&self) -> Filter {
        let pos = self.position();
        Self::BAR[(pos + 1) % Self::BAR.len()]
    }

    /// Previous entry in bar order, wrapping around.
    pub fn prev(&self) -> Filter {
        let pos = self.position();
        Self::BAR[(pos + Self::BAR.len() - 1) % Self::BAR.len()]
    }

    fn position(&self) -> usize {
        match self {
            Filter::All => 0,
            Filter::Only(Category::Festa) => 1,
            Filter::Only(Category::Bar) => 2,
            Filter::Only(Category::Show) => 3,
            Filter::Only(Category::Cultural) => 4,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Filter {
    type Err = ParseFilterError;

    /// Accepts the bar label or the bare category name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "todos" | "all" => Ok(Filter::All),
            "festas" | "festa" => Ok(Filter::Only(Category::Festa)),
            "bares" | "bar" => Ok(Filter::Only(Category::Bar)),
            "shows" | "show" => Ok(Filter::Only(Category::Show)),
            "cultural" => Ok(Filter::Only(Category::Cultural)),
            _ => Err(ParseFilterError(s.to_string())),
        }
    }
}
