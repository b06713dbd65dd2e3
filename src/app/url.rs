//! URL validation and normalization utilities.

use std::collections::HashSet;

use log::warn;

use crate::config::MAX_URL_LENGTH;

/// Validates and normalizes one URL candidate.
///
/// Adds an `https://` prefix if no scheme is present, then validates that the
/// result is syntactically valid, uses an http/https scheme, and has a
/// non-empty host. Candidates that already carry a non-web scheme (`ftp://`,
/// `file://`, ...) are rejected rather than double-prefixed. Rejects URLs
/// longer than `MAX_URL_LENGTH`. Logs a warning and returns `None` for every
/// dropped candidate.
pub fn validate_and_normalize_url(url: &str) -> Option<String> {
    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Skipping URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            &url[..50.min(url.len())]
        );
        return None;
    }

    // A candidate already carrying some other scheme is not a web URL;
    // prepending https:// would only mangle it further.
    if let Some((scheme, _)) = url.split_once("://") {
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            warn!("Skipping unsupported scheme for URL: {url}");
            return None;
        }
    }

    let normalized = if !url.starts_with("http://") && !url.starts_with("https://") {
        format!("https://{url}")
    } else {
        url.to_string()
    };

    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Skipping normalized URL exceeding maximum length ({} > {}): {}...",
            normalized.len(),
            MAX_URL_LENGTH,
            &normalized[..50.min(normalized.len())]
        );
        return None;
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) => {
            let has_host = parsed.host_str().is_some_and(|host| !host.is_empty());
            match parsed.scheme() {
                "http" | "https" if has_host => Some(normalized),
                "http" | "https" => {
                    warn!("Skipping URL without a host: {url}");
                    None
                }
                _ => {
                    warn!("Skipping unsupported scheme for URL: {url}");
                    None
                }
            }
        }
        Err(_) => {
            warn!("Skipping invalid URL: {url}");
            None
        }
    }
}

/// Normalizes raw input text into an ordered list of unique, valid URLs.
///
/// Pure function of its input: trims each line, skips blanks and `#` comment
/// lines, normalizes each candidate, de-duplicates on the normalized form
/// preserving first-seen order, and silently drops anything that fails
/// validation.
pub fn normalize_url_list(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some(normalized) = validate_and_normalize_url(trimmed) else {
            continue;
        };
        if seen.insert(normalized.clone()) {
            urls.push(normalized);
        }
    }

    urls
}
