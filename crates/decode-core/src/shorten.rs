//! Short-link input handling that needs no network.
//!
//! `normalize_url` validates what a user typed before it is handed to a
//! shortening service. `fallback_short_url` builds a deterministic display
//! slug for when that service is unreachable.

use regex::Regex;
use sha1::{Digest, Sha1};
use std::sync::OnceLock;
use thiserror::Error;
use url::Url;

/// Base used for fallback links when none is configured.
pub const DEFAULT_FALLBACK_BASE: &str = "https://kingsley-a1.github.io/decode";

/// Number of digest bytes rendered into a fallback slug.
const SLUG_BYTES: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenError {
    #[error("enter a URL to shorten")]
    Empty,
    #[error("not a valid URL: {0}")]
    Invalid(#[from] url::ParseError),
    #[error("only http/https URLs can be shortened (got {0}:)")]
    UnsupportedScheme(String),
    #[error("URL must include a host")]
    MissingHost,
}

fn scheme_prefix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)^[a-z][a-z0-9+.-]*:").expect("scheme pattern compiles"))
}

/// Trim, default the scheme to `https://`, and require an http(s) URL with a host.
///
/// # Examples
///
/// - `normalize_url("example.com/a b")` → `"https://example.com/a%20b"`
/// - `normalize_url("ftp://example.com")` → `Err(UnsupportedScheme)`
pub fn normalize_url(raw: &str) -> Result<String, ShortenError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ShortenError::Empty);
    }

    let candidate = if scheme_prefix().is_match(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    let parsed = Url::parse(&candidate)?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ShortenError::UnsupportedScheme(parsed.scheme().to_string()));
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ShortenError::MissingHost);
    }
    Ok(parsed.to_string())
}

/// First bytes of the SHA-1 of `input`, as lowercase hex.
pub fn fallback_slug(input: &str) -> String {
    let digest = Sha1::digest(input.as_bytes());
    hex::encode(&digest[..SLUG_BYTES])
}

/// `<base>/s/<slug>` for the trimmed input.
pub fn fallback_short_url(base: &str, input: &str) -> String {
    format!(
        "{}/s/{}",
        base.trim_end_matches('/'),
        fallback_slug(input.trim())
    )
}
