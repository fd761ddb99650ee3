// Validation utilities for the submitted URL

/// Schemes accepted as-is; anything else gets `http://` prepended
const KNOWN_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Reject a missing or empty field
///
/// # Arguments
/// * `field` - The optional field as received
///
/// # Returns
/// * `Ok(String)` - The field, unmodified
/// * `Err(String)` - Error message if the field is absent or empty
///
/// Whitespace is not trimmed: `" "` is a (suspicious) URL, not an empty one.
pub fn require_non_empty(field: Option<String>) -> Result<String, String> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err("No URL provided".to_string()),
    }
}

/// Prepend `http://` unless the URL already starts with `http://` or `https://`
pub fn ensure_scheme(url: &str) -> String {
    if KNOWN_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        url.to_string()
    } else {
        format!("http://{}", url)
    }
}
