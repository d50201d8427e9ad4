use crate::response::ResultItem;
use crate::types::SearchMode;

/// Shown when a search succeeds but matches nothing.
pub const NO_RESULTS: &str = "No se encontraron resultados.";

/// Placeholder for a missing display value.
pub const NOT_AVAILABLE: &str = "N/D";

fn fmt_score(score: Option<f64>) -> String {
    match score {
        Some(value) => format!("{:.4}", value),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Map a decoded result list to display lines. Each call produces the
/// whole list; the caller replaces any previous rendering with it.
///
/// An empty list renders a single line: `fallback` when given (a
/// validation or request failure), otherwise the no-results text.
///
/// The score block depends on the mode:
/// - hybrid: three lines (fusion, vector, text), each `N/D` when absent
/// - fulltext: one text-score line, `N/D` when absent
/// - vector: one score line, only when the item carries a score
pub fn render_results(
    results: &[ResultItem],
    mode: SearchMode,
    fallback: Option<&str>,
) -> Vec<String> {
    if results.is_empty() {
        return vec![fallback.unwrap_or(NO_RESULTS).to_string()];
    }

    let mut lines = Vec::new();
    for (i, item) in results.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(item.heading.clone());
        if let Some(description) = &item.description {
            lines.push(format!("  {}", description));
        }
        if mode.uses_title() {
            if let Some(title) = &item.title {
                lines.push(format!("  Título: {}", title));
            }
        }
        lines.push(format!(
            "  Restaurante: {} | Disponible: {} | Precio: S/{:.2}",
            item.restaurant.as_deref().unwrap_or(NOT_AVAILABLE),
            if item.available { "Sí" } else { "No" },
            item.price,
        ));
        match mode {
            SearchMode::Hybrid => {
                lines.push(format!("  Puntaje combinado: {}", fmt_score(item.scores.fusion)));
                lines.push(format!("  Puntaje vectorial: {}", fmt_score(item.scores.vector)));
                lines.push(format!("  Puntaje de texto: {}", fmt_score(item.scores.text)));
            }
            SearchMode::Fulltext => {
                lines.push(format!("  Puntaje de texto: {}", fmt_score(item.scores.score)));
            }
            SearchMode::Vector => {
                if let Some(score) = item.scores.score {
                    lines.push(format!("  Puntaje: {:.4}", score));
                }
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::ScoreSet;

    fn item(heading: &str) -> ResultItem {
        ResultItem {
            heading: heading.into(),
            description: None,
            title: None,
            restaurant: None,
            available: false,
            price: 0.0,
            scores: ScoreSet::default(),
        }
    }

    // ── empty list ──────────────────────────────────────────────────────

    #[test]
    fn empty_results_render_default_text() {
        let lines = render_results(&[], SearchMode::Vector, None);
        assert_eq!(lines, vec![NO_RESULTS.to_string()]);
    }

    #[test]
    fn empty_results_render_fallback_when_given() {
        let lines = render_results(&[], SearchMode::Hybrid, Some("boom"));
        assert_eq!(lines, vec!["boom".to_string()]);
    }

    // ── metadata line ───────────────────────────────────────────────────

    #[test]
    fn metadata_line_formats_price_and_availability() {
        let mut it = item("Picarones clásicos");
        it.restaurant = Some("La Pampa".into());
        it.available = true;
        it.price = 12.5;
        let lines = render_results(&[it], SearchMode::Vector, None);
        assert!(lines.contains(&"  Restaurante: La Pampa | Disponible: Sí | Precio: S/12.50".to_string()));
    }

    #[test]
    fn missing_restaurant_shows_placeholder() {
        let lines = render_results(&[item("X")], SearchMode::Vector, None);
        assert!(lines.contains(&"  Restaurante: N/D | Disponible: No | Precio: S/0.00".to_string()));
    }

    #[test]
    fn description_renders_indented_when_present() {
        let mut it = item("X");
        it.description = Some("Masa de zapallo y camote".into());
        let lines = render_results(&[it], SearchMode::Vector, None);
        assert!(lines.contains(&"  Masa de zapallo y camote".to_string()));
    }

    // ── title line ──────────────────────────────────────────────────────

    #[test]
    fn title_line_appears_for_fulltext_and_hybrid() {
        let mut it = item("X");
        it.title = Some("Picarones x6".into());
        for mode in [SearchMode::Fulltext, SearchMode::Hybrid] {
            let lines = render_results(&[it.clone()], mode, None);
            assert!(lines.contains(&"  Título: Picarones x6".to_string()));
        }
    }

    #[test]
    fn title_line_is_suppressed_in_vector_mode() {
        let mut it = item("X");
        it.title = Some("Picarones x6".into());
        let lines = render_results(&[it], SearchMode::Vector, None);
        assert!(!lines.iter().any(|l| l.starts_with("  Título:")));
    }

    // ── hybrid scores ───────────────────────────────────────────────────

    #[test]
    fn hybrid_renders_three_score_lines_with_placeholders() {
        let mut it = item("X");
        it.scores.fusion = Some(0.8231);
        let lines = render_results(&[it], SearchMode::Hybrid, None);
        assert!(lines.contains(&"  Puntaje combinado: 0.8231".to_string()));
        assert!(lines.contains(&"  Puntaje vectorial: N/D".to_string()));
        assert!(lines.contains(&"  Puntaje de texto: N/D".to_string()));
    }

    #[test]
    fn hybrid_renders_all_scores_when_present() {
        let mut it = item("X");
        it.scores = ScoreSet {
            score: None,
            fusion: Some(0.8231),
            vector: Some(0.71),
            text: Some(3.2),
        };
        let lines = render_results(&[it], SearchMode::Hybrid, None);
        assert!(lines.contains(&"  Puntaje combinado: 0.8231".to_string()));
        assert!(lines.contains(&"  Puntaje vectorial: 0.7100".to_string()));
        assert!(lines.contains(&"  Puntaje de texto: 3.2000".to_string()));
    }

    // ── fulltext score ──────────────────────────────────────────────────

    #[test]
    fn fulltext_renders_scalar_score_as_text_score() {
        let mut it = item("X");
        it.scores.score = Some(2.5);
        let lines = render_results(&[it], SearchMode::Fulltext, None);
        assert!(lines.contains(&"  Puntaje de texto: 2.5000".to_string()));
    }

    #[test]
    fn fulltext_shows_placeholder_for_missing_score() {
        let lines = render_results(&[item("X")], SearchMode::Fulltext, None);
        assert!(lines.contains(&"  Puntaje de texto: N/D".to_string()));
    }

    // ── vector score ────────────────────────────────────────────────────

    #[test]
    fn vector_renders_score_only_when_present() {
        let mut it = item("X");
        it.scores.score = Some(0.9132);
        let lines = render_results(&[it], SearchMode::Vector, None);
        assert!(lines.contains(&"  Puntaje: 0.9132".to_string()));
    }

    #[test]
    fn vector_omits_score_line_when_absent() {
        let lines = render_results(&[item("X")], SearchMode::Vector, None);
        assert!(!lines.iter().any(|l| l.starts_with("  Puntaje")));
    }

    // ── list layout ─────────────────────────────────────────────────────

    #[test]
    fn items_are_separated_by_blank_lines() {
        let lines = render_results(
            &[item("Primero"), item("Segundo")],
            SearchMode::Vector,
            None,
        );
        assert_eq!(lines[0], "Primero");
        let blank = lines.iter().position(|l| l.is_empty()).unwrap();
        assert_eq!(lines[blank + 1], "Segundo");
    }

    #[test]
    fn fallback_is_ignored_when_results_exist() {
        let lines = render_results(&[item("X")], SearchMode::Vector, Some("boom"));
        assert!(!lines.contains(&"boom".to_string()));
        assert_eq!(lines[0], "X");
    }
}
