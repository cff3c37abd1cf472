use crate::names;

/// Check whether `candidate` is a syntactically valid address.
///
/// The address is trimmed first. It must hold exactly one `@` separating a
/// non-empty local part from a domain made of at least two non-empty,
/// dot-separated labels. Whitespace is rejected anywhere; quote characters
/// are rejected in the local part.
pub fn is_valid(candidate: &str) -> bool {
    let email = candidate.trim();
    if email.is_empty() || email.len() > names::MAX_EMAIL_LENGTH {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    if local
        .chars()
        .any(|c| c.is_whitespace() || c == '"' || c == '\'')
    {
        return false;
    }

    if domain.chars().any(char::is_whitespace) || !domain.contains('.') {
        return false;
    }

    domain.split('.').all(|label| !label.is_empty())
}

/// Session key for an address: trimmed and lowercased.
pub fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}
