use serde::Serialize;
use tauri::State;
use tracing::info;

use crate::sensitivity::GeminiClient;

#[derive(Debug, Clone, Serialize)]
pub struct EngineStatus {
    pub api_key_set: bool,
    pub model: String,
}

impl EngineStatus {
    pub fn from_client(client: &GeminiClient) -> Self {
        Self {
            api_key_set: client.config().has_api_key(),
            model: client.config().model.clone(),
        }
    }
}

#[tauri::command]
pub fn get_engine_status(client: State<'_, GeminiClient>) -> Result<EngineStatus, String> {
    let status = EngineStatus::from_client(client.inner());
    info!(
        "Engine status: model={}, api_key_set={}",
        status.model, status.api_key_set
    );
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;

    #[test]
    fn test_status_reports_key_presence_without_leaking_it() {
        let client = GeminiClient::new(GeneratorConfig {
            api_key: "secret-key".into(),
            ..GeneratorConfig::default()
        })
        .unwrap();
        let status = EngineStatus::from_client(&client);
        assert!(status.api_key_set);
        assert_eq!(status.model, "gemini-2.5-flash");
        let json = serde_json::to_string(&status).unwrap();
        assert!(!json.contains("secret-key"));
    }

    #[test]
    fn test_status_without_key() {
        let client = GeminiClient::new(GeneratorConfig::default()).unwrap();
        assert!(!EngineStatus::from_client(&client).api_key_set);
    }
}
