//! Parsing of the startup configuration document that supplies the default
//! segment template for new wheels.

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_SEGMENTS, MIN_SEGMENTS};
use crate::error::{Result, WheelError};
use crate::segment::{fallback_template, Segment};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WheelConfig {
    default_wheel: DefaultWheel,
}

#[derive(Debug, Deserialize)]
struct DefaultWheel {
    segments: Vec<Segment>,
}

/// Reads `defaultWheel.segments` from a configuration document.
///
/// # Errors
/// `ConfigLoad` when the document is malformed, when a segment fails
/// validation, or when the segment count can't seed a usable wheel.
pub fn parse_template(document: &str) -> Result<Vec<Segment>> {
    let config: WheelConfig =
        serde_json::from_str(document).map_err(|e| WheelError::ConfigLoad(e.to_string()))?;
    let segments = config.default_wheel.segments;

    if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&segments.len()) {
        return Err(WheelError::ConfigLoad(format!(
            "default wheel has {} segments, expected {MIN_SEGMENTS}..={MAX_SEGMENTS}",
            segments.len()
        )));
    }

    for (index, segment) in segments.iter().enumerate() {
        segment
            .validate()
            .map_err(|e| WheelError::ConfigLoad(format!("segment {index}: {e}")))?;
    }

    Ok(segments)
}

/// Resolves the template from whatever the host managed to fetch. Any
/// failure is logged and replaced by the embedded fallback.
pub fn template_or_fallback(document: Result<String>) -> Vec<Segment> {
    match document.and_then(|doc| parse_template(&doc)) {
        Ok(template) => {
            log::debug!("Loaded default template with {} segments", template.len());
            template
        }
        Err(err) => {
            log::error!("Failed to load wheel config, using fallback template: {err}");
            fallback_template()
        }
    }
}
