use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

/// Loose scan pattern: anything in the text that looks like an issue reference.
const ISSUE_TOKEN_PATTERN: &str = r"\b[A-Z][A-Z0-9]+-[0-9]+\b";

/// Strict shape a candidate must have before we hit the API with it.
const ISSUE_KEY_PATTERN: &str = r"^[A-Z][A-Z0-9]{1,9}-[0-9]{1,7}$";

/// Upper bound on key length; anything longer is junk from a table or a URL.
const MAX_KEY_LENGTH: usize = 18;

lazy_static! {
    static ref TOKEN_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(ISSUE_TOKEN_PATTERN).unwrap()
    };
    static ref KEY_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(ISSUE_KEY_PATTERN).unwrap()
    };
}

/// Scans changelog text for Jira issue keys.
///
/// Keys are deduplicated in first-seen order. Candidates that match the loose scan
/// but fail strict validation are discarded with a warning; a malformed reference in
/// a changelog should never abort the run.
pub fn extract_issue_keys(text: &str) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for token in TOKEN_REGEX.find_iter(text) {
        let token = token.as_str();
        if keys.iter().any(|key| key == token) {
            continue;
        }
        if is_valid_key(token) {
            keys.push(token.to_string());
        } else {
            warn!("ignoring invalid-looking issue reference '{}'", token);
        }
    }
    keys
}

/// Whether a candidate token is safe to use as an issue key in an API path.
pub fn is_valid_key(candidate: &str) -> bool {
    candidate.len() <= MAX_KEY_LENGTH && KEY_REGEX.is_match(candidate)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn extraction_finds_uppercase_keys_only() {
        let text = "Fixes KFLUXUI-123 and ROK-818, see also kfluxui-5 (lowercase, ignored)";
        assert_eq!(
            extract_issue_keys(text),
            vec!["KFLUXUI-123".to_string(), "ROK-818".to_string()]
        );
    }

    #[test]
    fn extraction_deduplicates_in_first_seen_order() {
        let text = "ROK-1 then KFLUXUI-2 then ROK-1 again";
        assert_eq!(
            extract_issue_keys(text),
            vec!["ROK-1".to_string(), "KFLUXUI-2".to_string()]
        );
    }

    #[test]
    fn overlong_candidates_are_discarded() {
        let text = "garbage ABCDEFGHIJKLMNOP-12345678 but CM-7 is fine";
        assert_eq!(extract_issue_keys(text), vec!["CM-7".to_string()]);
    }

    #[test]
    fn empty_text_yields_no_keys() {
        assert!(extract_issue_keys("").is_empty());
    }

    #[test]
    fn key_validation() {
        assert!(is_valid_key("KFLUXUI-123"));
        assert!(is_valid_key("ROK-818"));
        assert!(!is_valid_key("rok-818"));
        assert!(!is_valid_key("ROK-"));
        assert!(!is_valid_key("ROK-818-EXTRA"));
        assert!(!is_valid_key("AVERYLONGPROJECT-1"));
    }
}
