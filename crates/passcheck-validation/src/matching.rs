//! Confirmation matching

use thiserror::Error;

/// How two unequal entries differ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchKind {
    /// Equal when ASCII case is ignored
    Case,
    /// Equal once surrounding whitespace is trimmed
    Whitespace,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("passwords do not match")]
pub struct Mismatch {
    pub kind: MismatchKind,
}

/// Exact, case-sensitive comparison with no trimming.
///
/// The [`MismatchKind`] is informational only; any difference is a mismatch.
pub fn check_match(new_password: &str, confirmation: &str) -> Result<(), Mismatch> {
    if new_password == confirmation {
        tracing::debug!("password confirmation matches");
        return Ok(());
    }

    let kind = if new_password.eq_ignore_ascii_case(confirmation) {
        MismatchKind::Case
    } else if new_password.trim() == confirmation.trim() {
        MismatchKind::Whitespace
    } else {
        MismatchKind::Content
    };

    tracing::debug!(?kind, "password confirmation does not match");
    Err(Mismatch { kind })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_values_match() {
        assert!(check_match("Secret1!", "Secret1!").is_ok());
        assert!(check_match("", "").is_ok());
    }

    #[test]
    fn test_case_sensitive() {
        let err = check_match("Secret1!", "secret1!").unwrap_err();
        assert_eq!(err.kind, MismatchKind::Case);
    }

    #[test]
    fn test_whitespace_not_trimmed() {
        let err = check_match("Secret1!", "Secret1! ").unwrap_err();
        assert_eq!(err.kind, MismatchKind::Whitespace);

        let err = check_match(" Secret1!", "Secret1!").unwrap_err();
        assert_eq!(err.kind, MismatchKind::Whitespace);
    }

    #[test]
    fn test_different_content() {
        let err = check_match("Secret1!", "Other2@").unwrap_err();
        assert_eq!(err.kind, MismatchKind::Content);
        assert_eq!(err.to_string(), "passwords do not match");
    }
}
