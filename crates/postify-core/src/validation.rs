//! # Validation Layer
//!
//! Pure predicates applied on the write path before any persistence.
//! Postify never trims, truncates, or transcodes: invalid input is
//! rejected outright and the store is left untouched.

/// Post titles must be strictly shorter than this many characters.
pub const MAX_NAME_CHARS: usize = 50;

/// Post bodies must be strictly shorter than this many characters.
/// Reply bodies deliberately have no ceiling.
pub const MAX_CONTENT_CHARS: usize = 5000;

/// True iff every character maps into the 0-127 code-point range.
/// Emoji, accented letters, etc. make the whole input invalid.
pub fn is_ascii_encodable(text: &str) -> bool {
    text.is_ascii()
}

/// Validates a new post. Returns the rejection reason on failure.
pub fn validate_post_input(
    name: &str,
    author: &str,
    content: &str,
) -> std::result::Result<(), String> {
    if name.is_empty() || author.is_empty() || content.is_empty() {
        return Err("name, author and content are all required".into());
    }
    if name.chars().count() >= MAX_NAME_CHARS {
        return Err(format!("name must be under {MAX_NAME_CHARS} characters"));
    }
    if content.chars().count() >= MAX_CONTENT_CHARS {
        return Err(format!("content must be under {MAX_CONTENT_CHARS} characters"));
    }
    if !is_ascii_encodable(author) || !is_ascii_encodable(content) {
        return Err("author and content must be plain ASCII".into());
    }
    Ok(())
}

/// Validates a new reply. Same ASCII rule as posts; no content length ceiling.
pub fn validate_reply_input(author: &str, content: &str) -> std::result::Result<(), String> {
    if author.is_empty() || content.is_empty() {
        return Err("author and content are both required".into());
    }
    if !is_ascii_encodable(author) || !is_ascii_encodable(content) {
        return Err("author and content must be plain ASCII".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_predicate_accepts_plain_text() {
        assert!(is_ascii_encodable("Hello, world! 123 ~"));
        assert!(is_ascii_encodable(""));
    }

    #[test]
    fn ascii_predicate_rejects_non_ascii() {
        assert!(!is_ascii_encodable("caf\u{e9}"));
        assert!(!is_ascii_encodable("\u{1f600}"));
        assert!(!is_ascii_encodable("na\u{ef}ve"));
    }

    #[test]
    fn name_boundary_is_strict() {
        let just_under = "a".repeat(MAX_NAME_CHARS - 1);
        let at_limit = "a".repeat(MAX_NAME_CHARS);
        assert!(validate_post_input(&just_under, "a", "b").is_ok());
        assert!(validate_post_input(&at_limit, "a", "b").is_err());
    }

    #[test]
    fn content_boundary_is_strict() {
        let just_under = "a".repeat(MAX_CONTENT_CHARS - 1);
        let at_limit = "a".repeat(MAX_CONTENT_CHARS);
        assert!(validate_post_input("t", "a", &just_under).is_ok());
        assert!(validate_post_input("t", "a", &at_limit).is_err());
    }

    #[test]
    fn missing_fields_are_rejected() {
        assert!(validate_post_input("", "a", "b").is_err());
        assert!(validate_post_input("t", "", "b").is_err());
        assert!(validate_post_input("t", "a", "").is_err());
        assert!(validate_reply_input("", "b").is_err());
        assert!(validate_reply_input("a", "").is_err());
    }

    #[test]
    fn reply_content_has_no_length_ceiling() {
        let long = "a".repeat(MAX_CONTENT_CHARS * 2);
        assert!(validate_reply_input("bob", &long).is_ok());
    }

    #[test]
    fn non_ascii_author_is_rejected_too() {
        assert!(validate_post_input("t", "ren\u{e9}", "body").is_err());
        assert!(validate_reply_input("ren\u{e9}", "body").is_err());
    }
}
