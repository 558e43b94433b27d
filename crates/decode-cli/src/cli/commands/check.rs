//! `decode check <url>` – local link-safety verdict.

use anyhow::Result;
use decode_core::link_risk::{self, AnalysisResult, Verdict};

use crate::cli::EXIT_SUSPICIOUS;

/// Print the analysis and return the exit status (0 safe, 2 suspicious).
pub fn run_check(url: &str, json: bool) -> Result<i32> {
    let result = link_risk::analyze(url.trim());
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render(&result));
    }
    Ok(if result.requires_confirmation() {
        EXIT_SUSPICIOUS
    } else {
        0
    })
}

fn render(result: &AnalysisResult) -> String {
    let verdict = match result.verdict {
        Verdict::Safe => "Looks safe (local checks)",
        Verdict::Suspicious => "Looks suspicious",
    };
    let mut out = format!("{verdict}\nConfidence: {}%\n", result.confidence);
    if !result.normalized_url.is_empty() {
        out.push_str(&format!("URL: {}\n", result.normalized_url));
    }
    if result.reasons.is_empty() {
        out.push_str("No obvious red flags found in local heuristics.\n");
    } else {
        for reason in &result.reasons {
            out.push_str(&format!("  - {reason}\n"));
        }
        out.push_str("Confirm with the user before opening this link.\n");
    }
    out
}
