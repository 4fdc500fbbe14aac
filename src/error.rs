use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("play request rejected: {0}")]
    PlayRejected(String),
    #[error("{0} is not available")]
    SinkUnavailable(&'static str),
    #[error("failed to register listener: {0}")]
    Listener(String),
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Best-effort text for a value thrown from the JS side.
pub fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
