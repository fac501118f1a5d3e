use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse failure category reported alongside a fallback record.
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

/// Everything that can go wrong between building the prompt and holding a
/// parsed record. The generator never surfaces these to its caller.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No API key configured")]
    MissingCredential,

    #[error("Request to Gemini failed: {0}")]
    Network(String),

    #[error("Gemini request timed out after {0}s")]
    Timeout(u64),

    #[error("Gemini API error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("No data returned from AI")]
    EmptyResponse,

    #[error("Failed to parse AI response as sensitivity JSON: {0}")]
    MalformedJson(String),
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::MissingCredential => ErrorKind::MissingCredential,
            GenerationError::Network(_) => ErrorKind::Network,
            GenerationError::Timeout(_) => ErrorKind::Timeout,
            GenerationError::Upstream { .. } => ErrorKind::Upstream,
            GenerationError::EmptyResponse => ErrorKind::EmptyResponse,
            GenerationError::MalformedJson(_) => ErrorKind::MalformedJson,
        }
    }
}

#[derive(Debug, Error)]
pub enum CobraError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

impl From<CobraError> for String {
    fn from(err: CobraError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(GenerationError::MissingCredential.kind(), ErrorKind::MissingCredential);
        assert_eq!(GenerationError::Timeout(60).kind(), ErrorKind::Timeout);
        assert_eq!(
            GenerationError::Upstream { status: 403, body: "denied".into() }.kind(),
            ErrorKind::Upstream
        );
        assert_eq!(GenerationError::EmptyResponse.kind(), ErrorKind::EmptyResponse);
        assert_eq!(
            GenerationError::MalformedJson("eof".into()).kind(),
            ErrorKind::MalformedJson
        );
    }

    #[test]
    fn test_error_kind_wire_names() {
        let json = serde_json::to_string(&ErrorKind::EmptyResponse).unwrap();
        assert_eq!(json, "\"empty_response\"");
    }

    #[test]
    fn test_cobra_error_into_string() {
        let s: String = CobraError::Config("bad timeout".into()).into();
        assert_eq!(s, "Config error: bad timeout");
    }
}
