//! `decode shorten <url>` – validate a link and derive its fallback short URL.

use anyhow::Result;
use decode_core::shorten;

/// An input that fails validation is reported but still gets a fallback link.
pub fn run_shorten(url: &str, fallback_base: &str) -> Result<()> {
    if url.trim().is_empty() {
        anyhow::bail!(shorten::ShortenError::Empty);
    }
    match shorten::normalize_url(url) {
        Ok(normalized) => println!("normalized: {normalized}"),
        Err(err) => {
            tracing::warn!("shorten input rejected: {}", err);
            eprintln!("warning: {err}; using fallback");
        }
    }
    println!(
        "fallback:   {}",
        shorten::fallback_short_url(fallback_base, url)
    );
    Ok(())
}
