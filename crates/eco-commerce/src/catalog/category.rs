//! Category set of the product feed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product category.
///
/// The feed uses a closed set of five categories; a record with an unknown
/// category fails catalog deserialization as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Roupas,
    #[serde(rename = "Acessórios")]
    Acessorios,
    Casa,
    Beleza,
    Livros,
}

impl Category {
    /// All categories, in selector order.
    pub const ALL: [Category; 5] = [
        Category::Roupas,
        Category::Acessorios,
        Category::Casa,
        Category::Beleza,
        Category::Livros,
    ];

    /// The wire/display name (e.g., "Acessórios").
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Roupas => "Roupas",
            Category::Acessorios => "Acessórios",
            Category::Casa => "Casa",
            Category::Beleza => "Beleza",
            Category::Livros => "Livros",
        }
    }

    /// Parse a category name. Accepts the accented and plain spellings.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Roupas" => Some(Category::Roupas),
            "Acessórios" | "Acessorios" => Some(Category::Acessorios),
            "Casa" => Some(Category::Casa),
            "Beleza" => Some(Category::Beleza),
            "Livros" => Some(Category::Livros),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
