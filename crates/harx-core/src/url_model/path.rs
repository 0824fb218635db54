//! Base-name extraction from URL path, with host fallback.

use url::Url;

/// Extracts the text after the last `/` of the URL path.
///
/// Returns an empty string when the path ends in `/` (including the
/// root path) or the URL does not parse; callers fall back to the host.
pub fn last_path_segment(parsed: &Url) -> &str {
    let path = parsed.path();
    path.rsplit('/').next().unwrap_or("")
}

/// Host portion of the URL, with `:port` appended when one is present.
///
/// Matches the netloc the original capture tooling reports, so a
/// capture of `https://example.com:8080/` still gets a distinct name.
pub fn host_with_port(parsed: &Url) -> String {
    let host = parsed.host_str().unwrap_or("");
    match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}
