// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime configuration, read from `window.__APP_CONFIG`.
//!
//! The config object is injected by the hosting page (see `index.html`), so
//! the same build runs against any backend.

use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RuntimeConfig {
    /// Base URL of the backend serving `/api/token`.
    #[serde(rename = "apiBaseUrl")]
    pub api_base_url: String,
    /// Media server address. Absence is not fatal at load time; every
    /// connect attempt fails with a configuration error instead.
    #[serde(rename = "mediaServerUrl")]
    #[serde(default)]
    pub media_server_url: Option<String>,
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().expect("window");
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

/// DOM id of the element remote agent tracks are attached to.
pub const REMOTE_MEDIA_CONTAINER_ID: &str = "agent-media";

/// Fallbacks when the user submits the join form with empty fields.
pub const DEFAULT_IDENTITY: &str = "guest";
pub const DEFAULT_ROOM: &str = "assistant-room";
