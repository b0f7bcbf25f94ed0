use gloo::net::http::Request;
use shared::config::template_or_fallback;
use shared::constants::CONFIG_PATH;
use shared::{Result, Segment, WheelError};

/// Loads the starter segments for new wheels. Any failure falls back to the
/// built-in template, so this never fails.
pub async fn fetch_template() -> Vec<Segment> {
    template_or_fallback(fetch_config_document().await)
}

async fn fetch_config_document() -> Result<String> {
    let response = Request::get(CONFIG_PATH)
        .send()
        .await
        .map_err(|e| WheelError::ConfigLoad(e.to_string()))?;

    if !response.ok() {
        return Err(WheelError::ConfigLoad(format!(
            "{CONFIG_PATH} answered {}",
            response.status()
        )));
    }

    response
        .text()
        .await
        .map_err(|e| WheelError::ConfigLoad(e.to_string()))
}
