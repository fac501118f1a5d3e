use tracing::{error, info};

use super::gemini::CompletionClient;
use super::prompts::{build_prompt, sensitivity_response_schema};
use super::types::{GenerationOutcome, PlayStyle, SensitivityRecord};
use crate::error::GenerationError;

/// Substituted whenever live generation fails.
pub const FALLBACK_RECORD: SensitivityRecord = SensitivityRecord {
    general: 98.0,
    red_dot: 95.0,
    scope_2x: 88.0,
    scope_4x: 78.0,
    sniper_scope: 65.0,
    free_look: 75.0,
};

/// Generate a sensitivity record for a device and play style.
///
/// Makes exactly one call to `client` and never fails: any error is logged
/// and replaced with [`FALLBACK_RECORD`], tagged with its cause. Parsed
/// values are passed through without range checks.
pub async fn generate<C: CompletionClient>(
    client: &C,
    device_model: &str,
    style: PlayStyle,
) -> GenerationOutcome {
    info!(
        "Generating sensitivity for device '{}' with style '{}'",
        device_model,
        style.label()
    );

    match request_record(client, device_model, style).await {
        Ok(record) => {
            info!("Generated sensitivity for '{}': {:?}", device_model, record);
            GenerationOutcome::Generated { record }
        }
        Err(e) => {
            error!("Failed to generate sensitivity: {}", e);
            GenerationOutcome::Fallback {
                record: FALLBACK_RECORD,
                cause: e.kind(),
            }
        }
    }
}

async fn request_record<C: CompletionClient>(
    client: &C,
    device_model: &str,
    style: PlayStyle,
) -> Result<SensitivityRecord, GenerationError> {
    let prompt = build_prompt(device_model, style);
    let schema = sensitivity_response_schema();
    let text = client.complete(&prompt, &schema).await?;
    parse_record(&text)
}

/// Parse model output into a record. Blank text counts as empty, not malformed.
pub fn parse_record(text: &str) -> Result<SensitivityRecord, GenerationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    serde_json::from_str(trimmed).map_err(|e| {
        let preview: String = trimmed.chars().take(500).collect();
        GenerationError::MalformedJson(format!("{} (response: {})", e, preview))
    })
}
