use serde::{Deserialize, Serialize};

/// Which search pipeline the backend runs. The mode decides which form
/// fields are required at submission and which score fields the response
/// carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Vector,
    Fulltext,
    Hybrid,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Vector => "vector",
            SearchMode::Fulltext => "fulltext",
            SearchMode::Hybrid => "hybrid",
        }
    }

    /// True when this mode searches description text.
    pub fn uses_description(&self) -> bool {
        matches!(self, SearchMode::Vector | SearchMode::Hybrid)
    }

    /// True when this mode searches title text.
    pub fn uses_title(&self) -> bool {
        matches!(self, SearchMode::Fulltext | SearchMode::Hybrid)
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vector" => Ok(SearchMode::Vector),
            "fulltext" | "full-text" => Ok(SearchMode::Fulltext),
            "hybrid" => Ok(SearchMode::Hybrid),
            other => Err(format!(
                "unknown search mode '{}' (expected vector, fulltext or hybrid)",
                other
            )),
        }
    }
}

/// Optional attributes attached to a search. Every filter is an opt-in: an
/// inactive filter stays `None` and is omitted from the wire body entirely,
/// never sent as a neutral default the backend would have to ignore.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub available: Option<bool>,
    pub max_price: Option<f64>,
    pub restaurant: Option<String>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.available.is_none() && self.max_price.is_none() && self.restaurant.is_none()
    }
}
