use serde::{Deserialize, Deserializer};

use crate::types::SearchMode;

/// Heading used when a result carries neither a product name nor a title.
pub const UNNAMED_PRODUCT: &str = "Producto sin nombre";

// Wire DTOs. Every field the backend might omit is optional here; decoding
// happens once at this boundary so the renderer never probes raw JSON.

/// Body of a 2xx `/api/search` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponseBody {
    #[serde(default, deserialize_with = "lenient_mode")]
    pub mode: Option<SearchMode>,
    /// `None` covers both an absent key and an explicit `null`; either way
    /// the response normalizes to an empty list.
    #[serde(default)]
    pub results: Option<Vec<ResultDoc>>,
}

/// Accept a missing or unrecognized echoed mode without failing the whole
/// response. An unrecognized value decodes to `None` and the requested
/// mode takes over at render time.
fn lenient_mode<'de, D>(deserializer: D) -> Result<Option<SearchMode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDoc {
    #[serde(default)]
    pub product: Option<ProductDoc>,
    #[serde(default)]
    pub restaurant_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub score_details: Option<ScoreDetailsDoc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDoc {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub available: Option<bool>,
    #[serde(default)]
    pub price: Option<PriceDoc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceDoc {
    #[serde(default)]
    pub amount: Option<f64>,
}

/// Per-pipeline score breakdown returned for hybrid searches. Any pipeline
/// block may be missing, and a present block may still omit its score.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetailsDoc {
    #[serde(default)]
    pub fusion: Option<PipelineScoreDoc>,
    #[serde(default)]
    pub vector_pipeline: Option<PipelineScoreDoc>,
    #[serde(default)]
    pub full_text_pipeline: Option<PipelineScoreDoc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineScoreDoc {
    #[serde(default)]
    pub score: Option<f64>,
}

// Normalized shapes handed to the renderer.

/// Scores attached to a decoded result. Which ones are meaningful depends
/// on the mode; all of them stay optional into the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreSet {
    /// Top-level scalar score (vector and full-text responses).
    pub score: Option<f64>,
    pub fusion: Option<f64>,
    pub vector: Option<f64>,
    pub text: Option<f64>,
}

/// One result after boundary decoding: heading resolved, display defaults
/// applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultItem {
    pub heading: String,
    pub description: Option<String>,
    pub title: Option<String>,
    pub restaurant: Option<String>,
    pub available: bool,
    pub price: f64,
    pub scores: ScoreSet,
}

/// A decoded `/api/search` response.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResponse {
    pub mode: Option<SearchMode>,
    pub results: Vec<ResultItem>,
}

impl SearchResponse {
    /// The mode to render with. The backend's echoed mode reflects what
    /// actually ran and wins over the requested one; without an echo the
    /// requested mode stands.
    pub fn effective_mode(&self, requested: SearchMode) -> SearchMode {
        self.mode.unwrap_or(requested)
    }
}

impl SearchResponseBody {
    pub fn normalize(self) -> SearchResponse {
        SearchResponse {
            mode: self.mode,
            results: self
                .results
                .unwrap_or_default()
                .into_iter()
                .map(ResultDoc::normalize)
                .collect(),
        }
    }
}

impl ResultDoc {
    fn normalize(self) -> ResultItem {
        let ProductDoc {
            name,
            description,
            available,
            price,
        } = self.product.unwrap_or_default();

        let heading = name
            .or_else(|| self.title.clone())
            .unwrap_or_else(|| UNNAMED_PRODUCT.to_string());

        let details = self.score_details.unwrap_or_default();
        ResultItem {
            heading,
            description,
            title: self.title,
            restaurant: self.restaurant_name,
            available: available.unwrap_or(false),
            price: price.and_then(|p| p.amount).unwrap_or(0.0),
            scores: ScoreSet {
                score: self.score,
                fusion: details.fusion.and_then(|p| p.score),
                vector: details.vector_pipeline.and_then(|p| p.score),
                text: details.full_text_pipeline.and_then(|p| p.score),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> SearchResponse {
        serde_json::from_value::<SearchResponseBody>(value)
            .unwrap()
            .normalize()
    }

    // ── mode echo ───────────────────────────────────────────────────────

    #[test]
    fn echoed_mode_wins_over_requested() {
        let response = decode(json!({"mode": "vector", "results": []}));
        assert_eq!(
            response.effective_mode(SearchMode::Hybrid),
            SearchMode::Vector
        );
    }

    #[test]
    fn missing_mode_falls_back_to_requested() {
        let response = decode(json!({"results": []}));
        assert_eq!(
            response.effective_mode(SearchMode::Fulltext),
            SearchMode::Fulltext
        );
    }

    #[test]
    fn unrecognized_mode_falls_back_to_requested() {
        let response = decode(json!({"mode": "semantic", "results": []}));
        assert_eq!(response.mode, None);
        assert_eq!(
            response.effective_mode(SearchMode::Vector),
            SearchMode::Vector
        );
    }

    #[test]
    fn missing_results_decode_as_empty() {
        let response = decode(json!({"mode": "vector"}));
        assert!(response.results.is_empty());
    }

    #[test]
    fn null_results_decode_as_empty() {
        let response = decode(json!({"mode": "vector", "results": null}));
        assert!(response.results.is_empty());
    }

    // ── result normalization ────────────────────────────────────────────

    #[test]
    fn full_result_normalizes_every_field() {
        let response = decode(json!({
            "mode": "hybrid",
            "results": [{
                "product": {
                    "name": "Picarones clásicos",
                    "description": "Masa de zapallo y camote",
                    "available": true,
                    "price": {"amount": 12.5}
                },
                "restaurantName": "La Pampa",
                "title": "Picarones x6",
                "scoreDetails": {
                    "fusion": {"score": 0.8231},
                    "vectorPipeline": {"score": 0.71},
                    "fullTextPipeline": {"score": 3.2}
                }
            }]
        }));
        let item = &response.results[0];
        assert_eq!(item.heading, "Picarones clásicos");
        assert_eq!(item.description.as_deref(), Some("Masa de zapallo y camote"));
        assert_eq!(item.title.as_deref(), Some("Picarones x6"));
        assert_eq!(item.restaurant.as_deref(), Some("La Pampa"));
        assert!(item.available);
        assert_eq!(item.price, 12.5);
        assert_eq!(item.scores.fusion, Some(0.8231));
        assert_eq!(item.scores.vector, Some(0.71));
        assert_eq!(item.scores.text, Some(3.2));
    }

    #[test]
    fn heading_falls_back_to_title_then_placeholder() {
        let response = decode(json!({
            "results": [
                {"title": "Solo título"},
                {}
            ]
        }));
        assert_eq!(response.results[0].heading, "Solo título");
        assert_eq!(response.results[1].heading, UNNAMED_PRODUCT);
    }

    #[test]
    fn bare_result_gets_display_defaults() {
        let response = decode(json!({"results": [{}]}));
        let item = &response.results[0];
        assert_eq!(item.heading, UNNAMED_PRODUCT);
        assert_eq!(item.description, None);
        assert_eq!(item.restaurant, None);
        assert!(!item.available);
        assert_eq!(item.price, 0.0);
        assert_eq!(item.scores, ScoreSet::default());
    }

    #[test]
    fn missing_price_amount_defaults_to_zero() {
        let response = decode(json!({
            "results": [{"product": {"name": "X", "price": {}}}]
        }));
        assert_eq!(response.results[0].price, 0.0);
    }

    // ── score breakdown ─────────────────────────────────────────────────

    #[test]
    fn missing_pipeline_blocks_leave_scores_unset() {
        let response = decode(json!({
            "results": [{
                "scoreDetails": {"fusion": {"score": 0.8231}}
            }]
        }));
        let scores = response.results[0].scores;
        assert_eq!(scores.fusion, Some(0.8231));
        assert_eq!(scores.vector, None);
        assert_eq!(scores.text, None);
    }

    #[test]
    fn pipeline_block_without_score_stays_unset() {
        let response = decode(json!({
            "results": [{
                "scoreDetails": {"vectorPipeline": {}}
            }]
        }));
        assert_eq!(response.results[0].scores.vector, None);
    }

    #[test]
    fn scalar_score_survives_normalization() {
        let response = decode(json!({
            "results": [{"score": 1.25}]
        }));
        assert_eq!(response.results[0].scores.score, Some(1.25));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let response = decode(json!({
            "mode": "vector",
            "took": 12,
            "results": [{"score": 0.5, "debugInfo": {"shards": 3}}]
        }));
        assert_eq!(response.results.len(), 1);
    }
}
