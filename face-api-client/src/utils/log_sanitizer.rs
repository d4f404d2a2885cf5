//! Keeps subscription keys and large payloads (landmark dumps, uploaded
//! image bytes) out of debug logs.

/// Byte budget for a logged body.
const LOG_BODY_LIMIT: usize = 256;

/// Leading characters a masked secret keeps.
const MASK_VISIBLE: usize = 4;

/// Cuts a body down to [`LOG_BODY_LIMIT`] bytes for logging.
///
/// The cut never splits a character; the full length is appended so a
/// truncated body is recognizable.
pub fn truncate_for_log(body: &str) -> String {
    if body.len() <= LOG_BODY_LIMIT {
        return body.to_string();
    }
    let cut = body
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|end| *end <= LOG_BODY_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &body[..cut], body.len())
}

/// Masks a secret for logging, keeping only a short prefix.
///
/// Secrets too short to keep a prefix are masked entirely.
pub fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= MASK_VISIBLE * 2 {
        return "****".to_string();
    }
    let prefix: String = secret.chars().take(MASK_VISIBLE).collect();
    format!("{prefix}****")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_body_is_logged_whole() {
        let body = r#"{"faceId":"abc"}"#;
        assert_eq!(truncate_for_log(body), body);
        let full = "x".repeat(LOG_BODY_LIMIT);
        assert_eq!(truncate_for_log(&full), full);
    }

    #[test]
    fn large_body_is_cut_with_length() {
        let body = "x".repeat(LOG_BODY_LIMIT + 44);
        let logged = truncate_for_log(&body);
        assert!(logged.starts_with(&"x".repeat(LOG_BODY_LIMIT)));
        assert!(logged.ends_with("... [truncated, total 300 bytes]"));
    }

    #[test]
    fn cut_respects_char_boundaries() {
        // 3-byte chars: 85 fit in 256 bytes
        let body = "\u{4f60}".repeat(100);
        let logged = truncate_for_log(&body);
        assert!(logged.starts_with(&"\u{4f60}".repeat(85)));
        assert!(logged.ends_with("[truncated, total 300 bytes]"));
    }

    #[test]
    fn secret_keeps_prefix_only() {
        assert_eq!(mask_secret("0123456789abcdef0123456789abcdef"), "0123****");
    }

    #[test]
    fn short_secret_fully_masked() {
        assert_eq!(mask_secret("abc"), "****");
        assert_eq!(mask_secret(""), "****");
    }
}
