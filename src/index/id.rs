use base64::{engine::general_purpose::STANDARD, Engine};

/// Derive a project identifier from its absolute path.
///
/// The path is base64 encoded and `/`, `+` and `=` are replaced with `_` so
/// the result fits in a URL path segment. The substitution is lossy, so two
/// crafted paths can map to the same id.
pub fn project_id(path: &str) -> String {
    STANDARD
        .encode(path.as_bytes())
        .chars()
        .map(|c| match c {
            '/' | '+' | '=' => '_',
            other => other,
        })
        .collect()
}
