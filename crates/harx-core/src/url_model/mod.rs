//! URL modeling and output filename derivation.
//!
//! Derives a safe, descriptive name for each extracted body from its
//! request URL, with the entry index as a last-resort fallback.

mod path;
mod sanitize;

pub use path::{host_with_port, last_path_segment};
pub use sanitize::{replace_forbidden, strip_forbidden};

use url::Url;

/// Derives the output filename for an entry. Deterministic and pure.
///
/// Steps, in order:
/// 1. base name = text after the last `/` of the URL path, or the host
///    (with `:port`) when that is empty;
/// 2. if a query is present, forbidden characters in it become `_` and
///    it is appended as `?{query}`;
/// 3. every forbidden character is deleted from the composed name —
///    including the `?` joiner from step 2, so `data?id=42` saves as
///    `dataid=42`;
/// 4. an empty result (degenerate or unparseable URL) becomes
///    `default_filename_{index}`, `index` being the entry's zero-based
///    position in the archive.
pub fn derive_output_filename(url: &str, index: usize) -> String {
    let composed = match Url::parse(url) {
        Ok(parsed) => {
            let mut name = {
                let segment = last_path_segment(&parsed);
                if segment.is_empty() {
                    host_with_port(&parsed)
                } else {
                    segment.to_string()
                }
            };
            if let Some(query) = parsed.query().filter(|q| !q.is_empty()) {
                name.push('?');
                name.push_str(&replace_forbidden(query));
            }
            name
        }
        Err(_) => String::new(),
    };

    let sanitized = strip_forbidden(&composed);
    if sanitized.is_empty() {
        format!("default_filename_{index}")
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_path_keeps_last_segment() {
        assert_eq!(
            derive_output_filename("https://example.com/js/app.js", 0),
            "app.js"
        );
    }

    #[test]
    fn query_is_appended_then_joiner_stripped() {
        assert_eq!(
            derive_output_filename("https://api.example.com/data?id=42", 0),
            "dataid=42"
        );
    }

    #[test]
    fn empty_path_uses_host() {
        assert_eq!(
            derive_output_filename("https://example.com/", 0),
            "example.com"
        );
        assert_eq!(
            derive_output_filename("https://example.com:8080/", 0),
            "example.com8080"
        );
    }

    #[test]
    fn forbidden_chars_never_survive() {
        let name = derive_output_filename("https://example.com/file?a:b", 0);
        assert_eq!(name, "filea_b");
        for c in ['\\', '/', '*', '?', ':', '"', '<', '>', '|'] {
            assert!(!name.contains(c));
        }
    }

    #[test]
    fn unparseable_url_falls_back_to_index() {
        assert_eq!(derive_output_filename("not a url", 7), "default_filename_7");
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let a = derive_output_filename("https://example.com/x?q=1", 3);
        let b = derive_output_filename("https://example.com/x?q=1", 3);
        assert_eq!(a, b);
    }
}
