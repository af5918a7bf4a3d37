//! HTTP client for the ModelHub host (GET /models, GET /config, notifications).

use std::collections::BTreeMap;

use crate::state::{ModelConfig, ModelInfo};

pub struct HostClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HostClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("reqwest client");
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Fetch the model catalog (GET /models).
    pub fn fetch_models(&self) -> Result<BTreeMap<String, ModelInfo>, String> {
        let resp = self
            .client
            .get(self.url("/models"))
            .send()
            .map_err(|e| e.to_string())?;
        if !resp.status().is_success() {
            return Err(format!("HTTP {}", resp.status()));
        }
        resp.json().map_err(|e| e.to_string())
    }

    /// Fetch the committed configuration (GET /config).
    pub fn fetch_config(&self) -> Result<ModelConfig, String> {
        let resp = self
            .client
            .get(self.url("/config"))
            .send()
            .map_err(|e| e.to_string())?;
        if !resp.status().is_success() {
            return Err(format!("HTTP {}", resp.status()));
        }
        resp.json().map_err(|e| e.to_string())
    }

    /// Ask the host to re-pull the catalog from upstream. Sent once at
    /// startup; the reply is never consumed.
    pub fn notify_refresh(&self) {
        self.fire_and_forget("/models/refresh", serde_json::json!({}));
    }

    /// Flip a model's favorite flag on the host.
    pub fn toggle_favorite(&self, model_id: &str) {
        self.fire_and_forget(
            "/favorites/toggle",
            serde_json::json!({ "modelId": model_id }),
        );
    }

    /// Commit a selection: new id plus its full metadata snapshot.
    pub fn update_config(&self, model_id: &str, info: &ModelInfo) {
        self.fire_and_forget(
            "/config",
            serde_json::json!({
                "selectedModelId": model_id,
                "selectedModelInfo": info,
            }),
        );
    }

    pub fn health_check(&self) -> bool {
        self.client
            .get(self.url("/health"))
            .send()
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    fn fire_and_forget(&self, path: &str, body: serde_json::Value) {
        let url = self.url(path);
        if let Err(e) = self.client.post(&url).json(&body).send() {
            tracing::debug!(%url, error = %e, "host notification failed");
        }
    }
}
