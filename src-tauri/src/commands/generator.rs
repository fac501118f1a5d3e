use tauri::State;
use tracing::{info, warn};

use crate::sensitivity::{generate, GeminiClient, GenerationOutcome, PlayStyle};

#[tauri::command]
pub async fn generate_sensitivity(
    client: State<'_, GeminiClient>,
    device_model: String,
    play_style: PlayStyle,
) -> Result<GenerationOutcome, String> {
    info!(
        "generate_sensitivity called for '{}' ({})",
        device_model,
        play_style.label()
    );

    let outcome = generate(client.inner(), &device_model, play_style).await;
    if let GenerationOutcome::Fallback { cause, .. } = &outcome {
        warn!("Serving fallback sensitivity (cause: {:?})", cause);
    }
    Ok(outcome)
}
