//! Link risk analyzer.
//!
//! Parses a candidate string as an absolute URL and runs an ordered battery of
//! local heuristics over it. Nothing is fetched; the verdict is purely lexical.
//!
//! # Examples
//!
//! - `analyze("https://example.com")` → safe, no reasons, confidence 40
//! - `analyze("http://192.168.1.1/login")` → suspicious: raw IP, private
//!   network, high-risk keyword

mod homograph;
mod lists;
mod rules;

use serde::Serialize;
use url::Url;

pub use homograph::skeleton as host_skeleton;
pub use lists::{BrandLookalike, BRAND_LOOKALIKES, RISKY_TLDS, RISK_KEYWORDS};
pub use rules::RuleId;

use rules::{ParsedLink, RULES};

/// Reason reported when the candidate does not parse.
pub const INVALID_URL_REASON: &str = "URL is not valid";

const BASE_CONFIDENCE: usize = 40;
const CONFIDENCE_PER_REASON: usize = 12;
const BRAND_SPOOF_BONUS: usize = 8;
const MAX_CONFIDENCE: usize = 95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Safe,
    Suspicious,
}

/// Outcome of [`analyze`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub verdict: Verdict,
    /// One entry per matched rule, in rule order.
    pub reasons: Vec<String>,
    /// Host as displayed, with `:port` when an explicit non-default port is present.
    pub host: String,
    /// Serialized form of the parsed URL; empty when parsing failed.
    pub normalized_url: String,
    /// Heuristic score in 40..=95; not a probability.
    pub confidence: u8,
}

impl AnalysisResult {
    fn invalid() -> Self {
        let reasons = vec![INVALID_URL_REASON.to_string()];
        Self {
            verdict: Verdict::Suspicious,
            confidence: confidence(reasons.len(), false),
            reasons,
            host: String::new(),
            normalized_url: String::new(),
        }
    }

    pub fn is_safe(&self) -> bool {
        self.verdict == Verdict::Safe
    }

    /// Callers must get explicit user confirmation before opening a link for
    /// which this returns true.
    pub fn requires_confirmation(&self) -> bool {
        self.verdict == Verdict::Suspicious
    }
}

/// `min(95, 40 + 12 * reasons + 8 if a brand spoof matched)`.
pub fn confidence(reason_count: usize, brand_spoof: bool) -> u8 {
    let bonus = if brand_spoof { BRAND_SPOOF_BONUS } else { 0 };
    let score = reason_count
        .saturating_mul(CONFIDENCE_PER_REASON)
        .saturating_add(BASE_CONFIDENCE + bonus)
        .min(MAX_CONFIDENCE);
    score as u8
}

/// Analyze `candidate` as a link.
pub fn analyze(candidate: &str) -> AnalysisResult {
    let url = match Url::parse(candidate) {
        Ok(url) => url,
        Err(err) => {
            tracing::debug!(error = %err, "link candidate did not parse");
            return AnalysisResult::invalid();
        }
    };

    let link = ParsedLink::from_url(&url);
    let mut reasons = Vec::new();
    let mut brand_spoof = false;
    for rule in RULES {
        if let Some(reason) = rule.evaluate(&link) {
            brand_spoof |= rule.id == RuleId::BrandSpoof;
            reasons.push(reason);
        }
    }

    let verdict = if reasons.is_empty() {
        Verdict::Safe
    } else {
        Verdict::Suspicious
    };
    let host = match link.port {
        Some(port) => format!("{}:{}", link.host, port),
        None => link.host,
    };
    let result = AnalysisResult {
        verdict,
        confidence: confidence(reasons.len(), brand_spoof),
        reasons,
        host,
        normalized_url: url.to_string(),
    };
    tracing::debug!(
        host = %result.host,
        verdict = ?result.verdict,
        reasons = result.reasons.len(),
        confidence = result.confidence,
        "link analyzed"
    );
    result
}
