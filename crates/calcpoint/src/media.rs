//! Content negotiation

/// The only media type the endpoint reads or writes
pub const APPLICATION_JSON: &str = "application/json";

/// Whether `media_type` names JSON.
///
/// Parameters such as `charset` are ignored and the type itself is compared
/// case-insensitively.
pub fn is_json(media_type: &str) -> bool {
    essence(media_type).eq_ignore_ascii_case(APPLICATION_JSON)
}

fn essence(media_type: &str) -> &str {
    media_type.split(';').next().unwrap_or_default().trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_json() {
        assert!(is_json("application/json"));
        assert!(is_json("Application/JSON"));
        assert!(is_json("application/json; charset=utf-8"));
    }

    #[test]
    fn test_rejects_everything_else() {
        for media_type in ["text/plain", "text/csv", "application/jsonl", "", "*/*"] {
            assert!(!is_json(media_type), "{media_type} should be rejected");
        }
    }
}
