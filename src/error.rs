use thiserror::Error;

/// Rendered in place of results when a search fails without a
/// server-provided message.
pub const GENERIC_SEARCH_FAILURE: &str = "Error al buscar resultados.";

/// Rendered when the restaurant list cannot be loaded.
pub const RESTAURANT_LIST_FAILURE: &str = "No se pudo obtener el listado de restaurantes.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PicaronesError {
    /// A mode-required form field was empty. Raised before any network
    /// call; the message is shown to the user verbatim.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The request never produced an HTTP response (connection refused,
    /// DNS failure, timeout).
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The backend answered with a failure status. `message` carries the
    /// `message` field of the error body when one could be decoded.
    #[error("Search API returned status {status}")]
    Api { status: u16, message: Option<String> },

    /// A success response whose body could not be decoded.
    #[error("Failed to decode search response: {0}")]
    Decode(String),

    /// The restaurant listing endpoint failed. Never blocks search.
    #[error("Restaurant list fetch failed: {0}")]
    RestaurantList(String),

    /// Invalid client settings (bad base URL). The only fatal variant.
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PicaronesError>;

impl From<serde_json::Error> for PicaronesError {
    fn from(e: serde_json::Error) -> Self {
        PicaronesError::Decode(e.to_string())
    }
}

impl PicaronesError {
    /// The text rendered in place of results when this failure reaches the
    /// user. Validation messages and server-reported messages pass through
    /// verbatim; everything else collapses to a generic line.
    pub fn user_message(&self) -> String {
        match self {
            PicaronesError::Validation(message) => message.clone(),
            PicaronesError::Api {
                message: Some(message),
                ..
            } => message.clone(),
            PicaronesError::RestaurantList(_) => RESTAURANT_LIST_FAILURE.to_string(),
            _ => GENERIC_SEARCH_FAILURE.to_string(),
        }
    }
}
