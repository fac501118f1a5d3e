use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// -- Types matching backend structs --

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityRecord {
    pub general: f64,
    pub red_dot: f64,
    pub scope_2x: f64,
    pub scope_4x: f64,
    pub sniper_scope: f64,
    pub free_look: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayStyle {
    Rusher,
    Sniper,
    Support,
    #[default]
    Balanced,
}

impl PlayStyle {
    pub const ALL: [PlayStyle; 4] = [
        PlayStyle::Rusher,
        PlayStyle::Sniper,
        PlayStyle::Support,
        PlayStyle::Balanced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlayStyle::Rusher => "Rusher (Aggressive)",
            PlayStyle::Sniper => "Sniper (Passive)",
            PlayStyle::Support => "Support (Tactical)",
            PlayStyle::Balanced => "Balanced (All-rounder)",
        }
    }

    /// Button text: the label up to its parenthesised hint.
    pub fn short_label(self) -> &'static str {
        let label = self.label();
        label.split(" (").next().unwrap_or(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingCredential,
    Network,
    Timeout,
    Upstream,
    EmptyResponse,
    MalformedJson,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum GenerationOutcome {
    Generated {
        record: SensitivityRecord,
    },
    Fallback {
        record: SensitivityRecord,
        cause: ErrorKind,
    },
}

impl GenerationOutcome {
    pub fn record(&self) -> SensitivityRecord {
        match self {
            GenerationOutcome::Generated { record } => *record,
            GenerationOutcome::Fallback { record, .. } => *record,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, GenerationOutcome::Fallback { .. })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineStatus {
    pub api_key_set: bool,
    pub model: String,
}

// -- Arg structs for serialization --

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateSensitivityArgs {
    device_model: String,
    play_style: PlayStyle,
}

// -- Typed invoke helpers --

pub async fn generate_sensitivity(
    device_model: &str,
    play_style: PlayStyle,
) -> Result<GenerationOutcome, String> {
    let args = serde_wasm_bindgen::to_value(&GenerateSensitivityArgs {
        device_model: device_model.to_string(),
        play_style,
    })
    .map_err(|e| e.to_string())?;

    let result = invoke("generate_sensitivity", args)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| "Unknown error".to_string()))?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn get_engine_status() -> Result<EngineStatus, String> {
    let args = serde_wasm_bindgen::to_value(&serde_json::json!({}))
        .map_err(|e| e.to_string())?;

    let result = invoke("get_engine_status", args)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| "Unknown error".to_string()))?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_labels() {
        let shorts: Vec<&str> = PlayStyle::ALL.iter().map(|s| s.short_label()).collect();
        assert_eq!(shorts, vec!["Rusher", "Sniper", "Support", "Balanced"]);
    }

    #[test]
    fn test_generate_args_use_backend_names() {
        let args = GenerateSensitivityArgs {
            device_model: "POCO X3".to_string(),
            play_style: PlayStyle::Sniper,
        };
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json, serde_json::json!({"deviceModel": "POCO X3", "playStyle": "sniper"}));
    }

    #[test]
    fn test_outcome_decodes_backend_fallback() {
        let outcome: GenerationOutcome = serde_json::from_str(
            r#"{"source":"fallback","cause":"missing_credential","record":{"general":98,"redDot":95,"scope2x":88,"scope4x":78,"sniperScope":65,"freeLook":75}}"#,
        )
        .unwrap();
        assert!(outcome.is_fallback());
        assert_eq!(outcome.record().scope_4x, 78.0);
    }

    #[test]
    fn test_outcome_decodes_backend_generated() {
        let outcome: GenerationOutcome = serde_json::from_str(
            r#"{"source":"generated","record":{"general":91.5,"redDot":80,"scope2x":70,"scope4x":60,"sniperScope":40,"freeLook":55}}"#,
        )
        .unwrap();
        assert!(!outcome.is_fallback());
        assert_eq!(outcome.record().general, 91.5);
    }
}
