use thiserror::Error;

/// Failure taxonomy surfaced to callers. Backend failures are classified
/// once (see [`classify`]) and rethrown; no retry policy lives here.
#[derive(Debug, Error)]
pub enum ExamlensError {
    /// One or more required tags were absent from the raw reply. The
    /// content is fundamentally under-specified; retrying with the same
    /// input will not help.
    #[error("missing required tags in model reply: {}", .missing.join(", "))]
    MissingFields { missing: Vec<&'static str> },

    #[error("provider rejected the credential: {0}")]
    Auth(String),

    #[error("could not reach the provider: {0}")]
    Connection(String),

    #[error("provider returned an unusable payload: {0}")]
    Response(String),

    #[error("provider call failed: {0}")]
    Unknown(String),
}

const CONNECTION_MARKERS: &[&str] = &["network", "connect", "fetch failed", "timed out", "timeout"];
const AUTH_MARKERS: &[&str] = &["api key", "unauthorized", "401", "invalid_api_key", "forbidden"];
const RESPONSE_MARKERS: &[&str] = &["parse", "invalid json", "no choices", "empty response"];

/// Sorts a backend error message into the taxonomy by scanning the
/// lower-cased text for known substrings. Deliberately a heuristic: the
/// providers do not give us a structured error-code contract.
pub fn classify(message: &str) -> ExamlensError {
    let lower = message.to_lowercase();
    if CONNECTION_MARKERS.iter().any(|m| lower.contains(m)) {
        ExamlensError::Connection(message.to_string())
    } else if AUTH_MARKERS.iter().any(|m| lower.contains(m)) {
        ExamlensError::Auth(message.to_string())
    } else if RESPONSE_MARKERS.iter().any(|m| lower.contains(m)) {
        ExamlensError::Response(message.to_string())
    } else {
        ExamlensError::Unknown(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_connection_failures() {
        assert!(matches!(
            classify("error sending request: Network is unreachable"),
            ExamlensError::Connection(_)
        ));
        assert!(matches!(
            classify("fetch failed"),
            ExamlensError::Connection(_)
        ));
        assert!(matches!(
            classify("operation timed out"),
            ExamlensError::Connection(_)
        ));
    }

    #[test]
    fn classifies_auth_failures() {
        assert!(matches!(
            classify("HTTP status client error (401 Unauthorized) for url"),
            ExamlensError::Auth(_)
        ));
        assert!(matches!(
            classify("Incorrect API key provided"),
            ExamlensError::Auth(_)
        ));
    }

    #[test]
    fn classifies_response_failures() {
        assert!(matches!(
            classify("failed to parse provider payload: invalid json"),
            ExamlensError::Response(_)
        ));
        assert!(matches!(
            classify("no choices in completion payload"),
            ExamlensError::Response(_)
        ));
    }

    #[test]
    fn falls_back_to_unknown() {
        assert!(matches!(
            classify("something odd happened"),
            ExamlensError::Unknown(_)
        ));
    }

    #[test]
    fn missing_fields_message_lists_tags() {
        let err = ExamlensError::MissingFields {
            missing: vec!["question_text", "analysis"],
        };
        assert_eq!(
            err.to_string(),
            "missing required tags in model reply: question_text, analysis"
        );
    }
}
