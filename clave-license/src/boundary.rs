//! PEM-style boundary framing for license artifacts.
//!
//! Framing lets a base64 artifact travel safely through text-only
//! transports (email bodies, config files). Removal is tolerant:
//! input without a boundary passes through unchanged.

const BEGIN_MARKER: &str = "-----BEGIN ";
const END_MARKER: &str = "-----END ";

/// Wraps `data` in begin/end markers carrying an uppercased label.
#[must_use]
pub fn add_boundary(data: &str, label: &str) -> String {
    let label = label.to_uppercase();
    format!(
        "-----BEGIN {label}-----\n{}\n-----END {label}-----\n",
        data.trim()
    )
}

/// Strips boundary framing, if any, returning the payload between the
/// markers. Unframed input is returned unchanged apart from trimming.
#[must_use]
pub fn remove_boundary(data: &str) -> String {
    let trimmed = data.trim();

    let Some(begin) = trimmed.find(BEGIN_MARKER) else {
        return trimmed.to_string();
    };

    // Payload starts on the line after the BEGIN marker.
    let after_begin = match trimmed[begin..].find('\n') {
        Some(newline) => &trimmed[begin + newline + 1..],
        None => return String::new(),
    };

    let body = match after_begin.find(END_MARKER) {
        Some(end) => &after_begin[..end],
        None => after_begin,
    };

    body.trim().to_string()
}
