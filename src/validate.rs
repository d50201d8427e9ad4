use crate::error::{PicaronesError, Result};
use crate::form::FormSnapshot;
use crate::types::SearchMode;

/// Shown when a vector or hybrid search is submitted without a description.
pub const DESCRIPTION_REQUIRED: &str = "description is required for vector or hybrid search.";

/// Shown when a full-text search is submitted without a title.
pub const TITLE_REQUIRED: &str = "title is required for full-text search.";

/// A query whose mode-required text fields are known to be non-empty.
/// Only [`validate`] constructs one, so a request can never be built
/// around a blank required field.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedQuery {
    Vector { description: String },
    Fulltext { title: String },
    Hybrid { description: String, title: String },
}

impl ValidatedQuery {
    pub fn mode(&self) -> SearchMode {
        match self {
            ValidatedQuery::Vector { .. } => SearchMode::Vector,
            ValidatedQuery::Fulltext { .. } => SearchMode::Fulltext,
            ValidatedQuery::Hybrid { .. } => SearchMode::Hybrid,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            ValidatedQuery::Vector { description } => Some(description),
            ValidatedQuery::Hybrid { description, .. } => Some(description),
            ValidatedQuery::Fulltext { .. } => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            ValidatedQuery::Fulltext { title } => Some(title),
            ValidatedQuery::Hybrid { title, .. } => Some(title),
            ValidatedQuery::Vector { .. } => None,
        }
    }
}

/// Check that the snapshot carries every text field the mode requires.
/// Runs before any network call; a failure is a blocking, user-visible
/// stop. Hybrid checks the description first, then the title.
pub fn validate(mode: SearchMode, form: &FormSnapshot) -> Result<ValidatedQuery> {
    let description = form.description_text.trim();
    let title = form.title_text.trim();

    match mode {
        SearchMode::Vector => {
            if description.is_empty() {
                return Err(PicaronesError::Validation(DESCRIPTION_REQUIRED.to_string()));
            }
            Ok(ValidatedQuery::Vector {
                description: description.to_string(),
            })
        }
        SearchMode::Fulltext => {
            if title.is_empty() {
                return Err(PicaronesError::Validation(TITLE_REQUIRED.to_string()));
            }
            Ok(ValidatedQuery::Fulltext {
                title: title.to_string(),
            })
        }
        SearchMode::Hybrid => {
            if description.is_empty() {
                return Err(PicaronesError::Validation(DESCRIPTION_REQUIRED.to_string()));
            }
            if title.is_empty() {
                return Err(PicaronesError::Validation(TITLE_REQUIRED.to_string()));
            }
            Ok(ValidatedQuery::Hybrid {
                description: description.to_string(),
                title: title.to_string(),
            })
        }
    }
}
