//! Global state container and action dispatch for the model picker panel.

use crate::actions::Action;
use crate::host::HostClient;
use crate::search::{self, RankedModel, SearchItem};
use crate::state::AppState;

pub struct App {
    pub state: AppState,
    client: HostClient,
    pub should_quit: bool,
    /// Searchable items derived from the catalog, ascending by id.
    index: Vec<SearchItem>,
    /// Current dropdown rows: favorites pinned, then fuzzy matches.
    results: Vec<RankedModel>,
}

impl App {
    pub fn new(client: HostClient) -> Self {
        Self {
            state: AppState::default(),
            client,
            should_quit: false,
            index: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Startup: one refresh notification to the host (never awaited), then an
    /// initial pull of catalog + committed configuration.
    pub fn bootstrap(&mut self) {
        self.state.connected = self.client.health_check();
        self.client.notify_refresh();
        self.load_host_state();
        let label = self.state.committed_label();
        self.state.picker.reset_to(&label);
    }

    pub fn results(&self) -> &[RankedModel] {
        &self.results
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    fn load_host_state(&mut self) {
        match self.client.fetch_models() {
            Ok(models) => self.state.models = models,
            Err(e) => tracing::warn!(error = %e, "failed to fetch model catalog"),
        }
        match self.client.fetch_config() {
            Ok(config) => self.state.config = config,
            Err(e) => tracing::warn!(error = %e, "failed to fetch configuration"),
        }
        self.refresh_results();
    }

    /// Recompute index + ranked rows from current inputs. Eager and cheap;
    /// the catalog is a few hundred entries at most.
    fn refresh_results(&mut self) {
        self.index = search::build_index(&self.state.models);
        self.results = search::rank(
            &self.index,
            &self.state.picker.query,
            &self.state.config.favorited_model_ids,
        );
        // A favorite toggle or reload can shrink the list under the
        // highlight; keep it on the last row, or drop it with the list.
        if let Some(i) = self.state.picker.highlighted {
            if i >= self.results.len() {
                self.state.picker.highlighted = self.results.len().checked_sub(1);
            }
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::Char(c) => {
                let picker = &mut self.state.picker;
                if !picker.open {
                    // Typing into a closed picker behaves like focusing it:
                    // the committed label is selected and gets overwritten.
                    picker.open = true;
                    picker.select_all = true;
                }
                if picker.select_all {
                    picker.input.clear();
                    picker.cursor = 0;
                    picker.select_all = false;
                }
                let pos = picker.cursor.min(picker.input.len());
                picker.input.insert(pos, c);
                picker.cursor = pos + c.len_utf8();
                picker.query = picker.input.clone();
                picker.highlighted = None;
                self.refresh_results();
            }
            Action::Backspace => {
                let picker = &mut self.state.picker;
                if picker.select_all {
                    picker.input.clear();
                    picker.cursor = 0;
                    picker.select_all = false;
                } else if picker.cursor > 0 && picker.cursor <= picker.input.len() {
                    // Delete the whole previous char, not one byte of it.
                    let width = picker.input[..picker.cursor]
                        .chars()
                        .last()
                        .map(char::len_utf8)
                        .unwrap_or(1);
                    picker.input.drain(picker.cursor - width..picker.cursor);
                    picker.cursor -= width;
                } else {
                    return;
                }
                picker.open = true;
                picker.query = picker.input.clone();
                picker.highlighted = None;
                self.refresh_results();
            }
            Action::ClearInput => {
                let picker = &mut self.state.picker;
                picker.input.clear();
                picker.cursor = 0;
                picker.query.clear();
                picker.open = true;
                picker.highlighted = None;
                picker.select_all = false;
                self.refresh_results();
            }
            Action::FocusInput => {
                let picker = &mut self.state.picker;
                picker.open = true;
                picker.select_all = true;
                picker.cursor = picker.input.len();
            }
            Action::CloseDropdown => {
                let label = self.state.committed_label();
                self.state.picker.reset_to(&label);
                self.refresh_results();
            }

            Action::HighlightUp => {
                let picker = &mut self.state.picker;
                if picker.open {
                    if let Some(i) = picker.highlighted {
                        if i > 0 {
                            picker.highlighted = Some(i - 1);
                        }
                    }
                }
            }
            Action::HighlightDown => {
                let picker = &mut self.state.picker;
                if picker.open && !self.results.is_empty() {
                    picker.highlighted = Some(match picker.highlighted {
                        None => 0,
                        Some(i) => (i + 1).min(self.results.len() - 1),
                    });
                }
            }
            Action::HighlightRow(i) => {
                if self.state.picker.open && i < self.results.len() {
                    self.state.picker.highlighted = Some(i);
                }
            }

            Action::CommitHighlighted => {
                if !self.state.picker.open {
                    return;
                }
                if let Some(id) = self
                    .state
                    .picker
                    .highlighted
                    .and_then(|i| self.results.get(i))
                    .map(|m| m.id.clone())
                {
                    self.commit(&id);
                }
            }
            Action::CommitRow(i) => {
                if !self.state.picker.open {
                    return;
                }
                if let Some(id) = self.results.get(i).map(|m| m.id.clone()) {
                    self.commit(&id);
                }
            }

            Action::ToggleFavoriteRow(i) => {
                if let Some(id) = self.results.get(i).map(|m| m.id.clone()) {
                    self.toggle_favorite(&id);
                }
            }
            Action::ToggleFavoriteHighlighted => {
                if let Some(id) = self
                    .state
                    .picker
                    .highlighted
                    .and_then(|i| self.results.get(i))
                    .map(|m| m.id.clone())
                {
                    self.toggle_favorite(&id);
                }
            }

            Action::ToggleDetail => {
                self.state.picker.detail_expanded = !self.state.picker.detail_expanded;
            }
            Action::Reload => self.load_host_state(),
        }
    }

    /// Commit a selection: notify the host with id + metadata snapshot, cache
    /// it locally, show the clean display label (never derived markup), close.
    fn commit(&mut self, id: &str) {
        let info = self.state.models.get(id).cloned().unwrap_or_default();
        self.client.update_config(id, &info);

        let label = info.label_or(id).to_string();
        self.state.config.selected_model_id = Some(id.to_string());
        self.state.config.selected_model_info = Some(info);

        let picker = &mut self.state.picker;
        picker.input = label;
        picker.cursor = picker.input.len();
        picker.query.clear();
        picker.open = false;
        picker.highlighted = None;
        picker.select_all = false;
        self.refresh_results();
    }

    /// Fire the toggle at the host and flip the cached flag so the pin order
    /// updates immediately. Never commits, never closes the dropdown.
    fn toggle_favorite(&mut self, id: &str) {
        self.client.toggle_favorite(id);
        let favorites = &mut self.state.config.favorited_model_ids;
        match favorites.iter().position(|f| f == id) {
            Some(i) => {
                favorites.remove(i);
            }
            None => favorites.push(id.to_string()),
        }
        self.refresh_results();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ModelInfo;
    use std::collections::BTreeMap;

    /// Port 9 is discard/refused; outbound notifications are fire-and-forget
    /// so a dead host never affects behavior.
    fn test_app() -> App {
        let mut app = App::new(HostClient::new("http://127.0.0.1:9".to_string()));
        let mut models = BTreeMap::new();
        models.insert(
            "a1".to_string(),
            ModelInfo {
                display_name: Some("Alpha".to_string()),
                ..ModelInfo::default()
            },
        );
        models.insert(
            "b2".to_string(),
            ModelInfo {
                display_name: Some("Beta".to_string()),
                ..ModelInfo::default()
            },
        );
        app.state.models = models;
        app.refresh_results();
        app
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.dispatch(Action::Char(c));
        }
    }

    #[test]
    fn typing_opens_and_tracks_query() {
        let mut app = test_app();
        type_str(&mut app, "alp");
        assert!(app.state.picker.open);
        assert_eq!(app.state.picker.input, "alp");
        assert_eq!(app.state.picker.query, "alp");
        assert_eq!(app.state.picker.highlighted, None);
    }

    #[test]
    fn typing_after_focus_replaces_the_committed_label() {
        let mut app = test_app();
        app.state.picker.input = "Alpha".to_string();
        app.state.picker.cursor = 5;
        app.dispatch(Action::FocusInput);
        app.dispatch(Action::Char('b'));
        assert_eq!(app.state.picker.input, "b");
        assert_eq!(app.state.picker.query, "b");
    }

    #[test]
    fn highlight_down_clamps_at_the_last_row() {
        let mut app = test_app();
        app.dispatch(Action::FocusInput);
        assert_eq!(app.state.picker.highlighted, None);
        app.dispatch(Action::HighlightDown);
        assert_eq!(app.state.picker.highlighted, Some(0));
        app.dispatch(Action::HighlightDown);
        assert_eq!(app.state.picker.highlighted, Some(1));
        app.dispatch(Action::HighlightDown);
        assert_eq!(app.state.picker.highlighted, Some(1));
    }

    #[test]
    fn highlight_up_clamps_at_zero_and_ignores_no_highlight() {
        let mut app = test_app();
        app.dispatch(Action::FocusInput);
        app.dispatch(Action::HighlightUp);
        assert_eq!(app.state.picker.highlighted, None);
        app.dispatch(Action::HighlightDown);
        app.dispatch(Action::HighlightUp);
        assert_eq!(app.state.picker.highlighted, Some(0));
        app.dispatch(Action::HighlightUp);
        assert_eq!(app.state.picker.highlighted, Some(0));
    }

    #[test]
    fn backspace_deletes_whole_multibyte_chars() {
        let mut app = test_app();
        app.dispatch(Action::Char('é'));
        app.dispatch(Action::Char('中'));
        assert_eq!(app.state.picker.input, "é中");
        app.dispatch(Action::Backspace);
        assert_eq!(app.state.picker.input, "é");
        assert_eq!(app.state.picker.cursor, "é".len());
        app.dispatch(Action::Backspace);
        assert_eq!(app.state.picker.input, "");
        assert_eq!(app.state.picker.cursor, 0);
    }

    #[test]
    fn unfavoriting_a_pinned_row_clamps_the_highlight() {
        let mut app = test_app();
        app.dispatch(Action::FocusInput);
        app.dispatch(Action::ToggleFavoriteRow(1));
        // b2 is pinned past the "alp" filter: results are [b2, a1].
        type_str(&mut app, "alp");
        app.dispatch(Action::HighlightDown);
        app.dispatch(Action::HighlightDown);
        assert_eq!(app.state.picker.highlighted, Some(1));
        // Unpinning b2 drops it from the list entirely.
        app.dispatch(Action::ToggleFavoriteRow(0));
        assert_eq!(app.results().len(), 1);
        assert_eq!(app.state.picker.highlighted, Some(0));
        // Enter now commits the row the highlight sits on.
        app.dispatch(Action::CommitHighlighted);
        assert_eq!(app.state.config.selected_model_id.as_deref(), Some("a1"));
    }

    #[test]
    fn typing_resets_the_highlight() {
        let mut app = test_app();
        app.dispatch(Action::FocusInput);
        app.dispatch(Action::HighlightDown);
        type_str(&mut app, "a");
        assert_eq!(app.state.picker.highlighted, None);
    }

    #[test]
    fn enter_commits_the_highlighted_row() {
        let mut app = test_app();
        type_str(&mut app, "alp");
        app.dispatch(Action::HighlightDown);
        app.dispatch(Action::CommitHighlighted);
        assert_eq!(app.state.config.selected_model_id.as_deref(), Some("a1"));
        assert_eq!(
            app.state
                .config
                .selected_model_info
                .as_ref()
                .and_then(|m| m.display_name.as_deref()),
            Some("Alpha")
        );
        assert_eq!(app.state.picker.input, "Alpha");
        assert_eq!(app.state.picker.query, "");
        assert!(!app.state.picker.open);
    }

    #[test]
    fn enter_without_a_highlight_does_nothing() {
        let mut app = test_app();
        type_str(&mut app, "alp");
        app.dispatch(Action::CommitHighlighted);
        assert_eq!(app.state.config.selected_model_id, None);
        assert!(app.state.picker.open);
    }

    #[test]
    fn click_commit_ignores_the_keyboard_highlight() {
        let mut app = test_app();
        app.dispatch(Action::FocusInput);
        app.dispatch(Action::HighlightDown);
        app.dispatch(Action::CommitRow(1));
        assert_eq!(app.state.config.selected_model_id.as_deref(), Some("b2"));
        assert_eq!(app.state.picker.input, "Beta");
    }

    #[test]
    fn escape_restores_the_committed_label() {
        let mut app = test_app();
        app.dispatch(Action::FocusInput);
        app.dispatch(Action::CommitRow(1));
        type_str(&mut app, "garbage");
        app.dispatch(Action::CloseDropdown);
        assert!(!app.state.picker.open);
        assert_eq!(app.state.picker.input, "Beta");
        assert_eq!(app.state.picker.query, "");
    }

    #[test]
    fn escape_with_no_selection_falls_back_to_the_default_label() {
        let mut app = test_app();
        type_str(&mut app, "junk");
        app.dispatch(Action::CloseDropdown);
        // Default id is not in the test catalog, so its raw id shows.
        assert_eq!(app.state.picker.input, crate::state::DEFAULT_MODEL_ID);
    }

    #[test]
    fn favorite_toggle_neither_commits_nor_closes() {
        let mut app = test_app();
        app.dispatch(Action::FocusInput);
        app.dispatch(Action::ToggleFavoriteRow(1));
        assert!(app.state.picker.open);
        assert_eq!(app.state.config.selected_model_id, None);
        assert_eq!(app.state.config.favorited_model_ids, vec!["b2".to_string()]);
        // Favorited row is now pinned first.
        assert_eq!(app.results()[0].id, "b2");
        // Toggling again unpins it.
        app.dispatch(Action::ToggleFavoriteRow(0));
        assert!(app.state.config.favorited_model_ids.is_empty());
    }

    #[test]
    fn clear_empties_input_and_keeps_the_dropdown_open() {
        let mut app = test_app();
        type_str(&mut app, "alp");
        app.dispatch(Action::ClearInput);
        assert!(app.state.picker.open);
        assert_eq!(app.state.picker.input, "");
        assert_eq!(app.state.picker.query, "");
        assert_eq!(app.results().len(), 2);
    }

    #[test]
    fn commit_of_an_unknown_id_still_degrades_gracefully() {
        let mut app = test_app();
        app.state.picker.open = true;
        app.commit("ghost");
        assert_eq!(app.state.config.selected_model_id.as_deref(), Some("ghost"));
        assert_eq!(app.state.picker.input, "ghost");
        assert!(!app.state.selection_known());
    }
}
