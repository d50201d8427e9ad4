//! Client library for a restaurant product search backend that runs
//! vector, full-text and hybrid pipelines behind one JSON API.

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod render;
pub mod request;
pub mod response;
pub mod session;
pub mod types;
pub mod validate;

pub use client::SearchClient;
pub use config::ClientConfig;
pub use error::{PicaronesError, Result};
pub use form::{FormSnapshot, FormState};
pub use render::render_results;
pub use request::{SearchRequest, DEFAULT_LIMIT};
pub use response::{ResultItem, ScoreSet, SearchResponse};
pub use session::{RequestSequencer, SearchSession};
pub use types::{SearchFilters, SearchMode};
pub use validate::{validate, ValidatedQuery};
