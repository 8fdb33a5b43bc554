//! Search panel state.

use crate::binder::{BindContext, SearchResultsView};
use crate::events::{Effect, Handler, UiEvent};
use crate::query::SearchQuery;
use tracing::debug;

/// Input text and visibility of the results panel
#[derive(Debug, Clone)]
pub struct SearchPanel {
    ctx: BindContext,
    input: String,
    results_visible: bool,
    clear_visible: bool,
}

impl SearchPanel {
    pub fn new(ctx: BindContext) -> Self {
        Self {
            ctx,
            input: String::new(),
            results_visible: false,
            clear_visible: false,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn clear_visible(&self) -> bool {
        self.clear_visible
    }

    fn submit(&self) -> Vec<Effect> {
        match SearchQuery::parse(&self.input) {
            Some(query) => vec![Effect::run_search(&query)],
            None => {
                debug!("Empty search query, skipping request");
                Vec::new()
            }
        }
    }
}

impl Handler for SearchPanel {
    fn handle(&mut self, event: &UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::SearchInput(text) => {
                self.input = text.clone();
                Vec::new()
            }
            UiEvent::SearchSubmitted => self.submit(),
            UiEvent::SearchKey(key) if key == "Enter" => self.submit(),
            UiEvent::SearchCompleted(records) => {
                self.results_visible = true;
                self.clear_visible = true;
                vec![Effect::ShowSearchResults {
                    results: SearchResultsView::bind(records, &self.ctx),
                }]
            }
            UiEvent::SearchCleared => {
                self.input.clear();
                self.results_visible = false;
                self.clear_visible = false;
                vec![Effect::ClearSearch]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::record;

    fn panel() -> SearchPanel {
        SearchPanel::new(BindContext::default())
    }

    #[test]
    fn test_blank_input_requests_nothing() {
        let mut panel = panel();
        panel.handle(&UiEvent::SearchInput("   ".to_string()));
        assert!(panel.handle(&UiEvent::SearchSubmitted).is_empty());
        assert!(panel.handle(&UiEvent::SearchKey("Enter".to_string())).is_empty());
    }

    #[test]
    fn test_enter_key_submits_trimmed_query() {
        let mut panel = panel();
        panel.handle(&UiEvent::SearchInput("  bebop ".to_string()));

        assert!(panel.handle(&UiEvent::SearchKey("a".to_string())).is_empty());
        assert_eq!(
            panel.handle(&UiEvent::SearchKey("Enter".to_string())),
            vec![Effect::RunSearch {
                query: "bebop".to_string()
            }]
        );
    }

    #[test]
    fn test_results_show_panel_and_clear_button() {
        let mut panel = panel();
        let effects = panel.handle(&UiEvent::SearchCompleted(vec![record(1, "Cowboy Bebop")]));

        assert!(panel.results_visible());
        assert!(panel.clear_visible());
        assert!(matches!(
            &effects[..],
            [Effect::ShowSearchResults { results }] if results.cards.len() == 1
        ));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut panel = panel();
        panel.handle(&UiEvent::SearchInput("bebop".to_string()));
        panel.handle(&UiEvent::SearchCompleted(Vec::new()));

        assert_eq!(panel.handle(&UiEvent::SearchCleared), vec![Effect::ClearSearch]);
        assert_eq!(panel.input(), "");
        assert!(!panel.results_visible());
        assert!(!panel.clear_visible());
    }
}
