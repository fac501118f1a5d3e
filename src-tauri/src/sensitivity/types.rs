use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;

/// Six-field aim sensitivity configuration.
/// Values are conventionally in 0..=100 but nothing here enforces it.
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

    /// Full label as embedded in the generation prompt.
    pub fn label(self) -> &'static str {
        match self {
            PlayStyle::Rusher => "Rusher (Aggressive)",
            PlayStyle::Sniper => "Sniper (Passive)",
            PlayStyle::Support => "Support (Tactical)",
            PlayStyle::Balanced => "Balanced (All-rounder)",
        }
    }
}

/// Result of a generation attempt. A fallback still carries a usable record,
/// tagged with why the live answer was replaced.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_names_match_schema() {
        let record = SensitivityRecord {
            general: 1.0,
            red_dot: 2.0,
            scope_2x: 3.0,
            scope_4x: 4.0,
            sniper_scope: 5.0,
            free_look: 6.0,
        };
        let json = serde_json::to_value(record).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["freeLook", "general", "redDot", "scope2x", "scope4x", "sniperScope"]
        );
    }

    #[test]
    fn test_record_accepts_integer_json() {
        let record: SensitivityRecord = serde_json::from_str(
            r#"{"general":90,"redDot":85,"scope2x":80,"scope4x":70,"sniperScope":50,"freeLook":60}"#,
        )
        .unwrap();
        assert_eq!(record.general, 90.0);
        assert_eq!(record.free_look, 60.0);
    }

    #[test]
    fn test_play_style_labels() {
        assert_eq!(PlayStyle::Rusher.label(), "Rusher (Aggressive)");
        assert_eq!(PlayStyle::Sniper.label(), "Sniper (Passive)");
        assert_eq!(PlayStyle::Support.label(), "Support (Tactical)");
        assert_eq!(PlayStyle::Balanced.label(), "Balanced (All-rounder)");
        assert_eq!(PlayStyle::default(), PlayStyle::Balanced);
    }

    #[test]
    fn test_play_style_wire_form() {
        let style: PlayStyle = serde_json::from_str("\"support\"").unwrap();
        assert_eq!(style, PlayStyle::Support);
    }

    #[test]
    fn test_outcome_tagging() {
        let record = SensitivityRecord {
            general: 98.0,
            red_dot: 95.0,
            scope_2x: 88.0,
            scope_4x: 78.0,
            sniper_scope: 65.0,
            free_look: 75.0,
        };
        let outcome = GenerationOutcome::Fallback {
            record,
            cause: ErrorKind::Timeout,
        };
        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(json["source"], "fallback");
        assert_eq!(json["cause"], "timeout");
        assert_eq!(json["record"]["redDot"], 95.0);
        assert!(outcome.is_fallback());
        assert_eq!(outcome.record(), record);

        let generated = GenerationOutcome::Generated { record };
        assert_eq!(serde_json::to_value(generated).unwrap()["source"], "generated");
        assert!(!generated.is_fallback());
    }
}
