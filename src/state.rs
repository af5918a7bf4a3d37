//! App state: model catalog, committed configuration, picker navigation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fallback selection when the host has no committed configuration yet.
pub const DEFAULT_MODEL_ID: &str = "anthropic/claude-sonnet-4";

/// Model metadata from the host catalog. Everything beyond the id is optional;
/// display falls back to the raw id when `display_name` is absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub context_window: Option<u64>,
    pub max_tokens: Option<u64>,
    pub supports_images: Option<bool>,
    /// USD per million input tokens.
    pub input_price: Option<f64>,
    /// USD per million output tokens.
    pub output_price: Option<f64>,
}

impl ModelInfo {
    pub fn label_or<'a>(&'a self, id: &'a str) -> &'a str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => id,
        }
    }
}

/// Committed configuration owned by the host; cached locally between fetches
/// and updated optimistically on commit / favorite toggle.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    pub selected_model_id: Option<String>,
    /// Metadata snapshot taken at commit time.
    pub selected_model_info: Option<ModelInfo>,
    #[serde(default)]
    pub favorited_model_ids: Vec<String>,
}

/// Dropdown navigation state. Reset to the committed label whenever the
/// dropdown closes without a selection.
#[derive(Clone, Debug, Default)]
pub struct PickerState {
    /// Text shown in the input box. Tracks `query` while the user types,
    /// holds the committed label otherwise.
    pub input: String,
    pub cursor: usize,
    /// Text the ranker filters on. Cleared on commit and on close.
    pub query: String,
    pub open: bool,
    /// None means no row highlighted; any result-set change resets it.
    pub highlighted: Option<usize>,
    /// Armed on focus: the next keystroke replaces the whole input.
    pub select_all: bool,
    pub detail_expanded: bool,
}

impl PickerState {
    /// Put the committed label back in the input and drop the query,
    /// leaving the dropdown closed.
    pub fn reset_to(&mut self, label: &str) {
        self.input = label.to_string();
        self.cursor = self.input.len();
        self.query.clear();
        self.open = false;
        self.highlighted = None;
        self.select_all = false;
    }
}

/// Everything the render pass reads.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub models: BTreeMap<String, ModelInfo>,
    pub config: ModelConfig,
    pub picker: PickerState,
    pub connected: bool,
}

impl AppState {
    /// Label of the committed selection, falling back to the default model.
    /// This is what Escape and click-outside restore into the input.
    pub fn committed_label(&self) -> String {
        let id = self
            .config
            .selected_model_id
            .as_deref()
            .unwrap_or(DEFAULT_MODEL_ID);
        match self.models.get(id) {
            Some(info) => info.label_or(id).to_string(),
            None => id.to_string(),
        }
    }

    /// Whether the committed id exists in the current catalog. Absent or
    /// unknown ids just mean the detail panel gives way to the help text.
    pub fn selection_known(&self) -> bool {
        self.config
            .selected_model_id
            .as_deref()
            .is_some_and(|id| self.models.contains_key(id))
    }
}
