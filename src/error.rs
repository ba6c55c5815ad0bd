//! Error types for mounting and driving the grid field.

use wasm_bindgen::JsValue;

/// Error returned when the renderer cannot mount or draw.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    /// There is no global `window` (not running in a browser).
    #[error("no window available")]
    NoWindow,
    /// The canvas element did not hand out a 2D rendering context.
    #[error("canvas has no 2d context")]
    NoContext,
    /// The host-supplied configuration was rejected.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

/// Error returned by [`crate::config::GridConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON for a grid configuration.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but its value is out of range.
    #[error("{field}: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

impl From<JsValue> for RendererError {
    fn from(value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Js(message)
    }
}

impl From<RendererError> for JsValue {
    fn from(err: RendererError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
