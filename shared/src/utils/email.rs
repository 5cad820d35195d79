//! Email address utilities
//!
//! Addresses are accepted as opaque keys; these helpers only shape them for
//! logs.

/// Mask an email address for display (e.g., a****@test.com)
///
/// Keeps the first character of the local part and the whole domain. Values
/// without an `@` keep only their first character.
pub fn mask_email(email: &str) -> String {
    let (local, domain) = match email.rsplit_once('@') {
        Some((local, domain)) => (local, Some(domain)),
        None => (email, None),
    };

    let masked_local = match local.chars().next() {
        Some(first) => format!("{}****", first),
        None => "****".to_string(),
    };

    match domain {
        Some(domain) => format!("{}@{}", masked_local, domain),
        None => masked_local,
    }
}
