//! Ordered heuristic rule table.
//!
//! Each rule looks at one aspect of a parsed link and either yields a
//! human-readable reason or nothing. Rules are independent; reasons are
//! reported in table order. New rules are appended to [`RULES`] without
//! touching scoring.

use regex::Regex;
use serde::Serialize;
use std::net::IpAddr;
use std::sync::OnceLock;
use url::{Host, Url};

use super::homograph::looks_like_brand_spoof;
use super::lists::{RISKY_TLDS, RISK_KEYWORDS};

const MAX_PATH_AND_QUERY_LEN: usize = 200;
const MAX_PATH_SLASHES: usize = 6;
const MAX_HOST_LABELS: usize = 4;

/// Identity of a rule, stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    NonHttpScheme,
    RawIp,
    PrivateIp,
    Punycode,
    LongPathOrQuery,
    DeepPath,
    SuspiciousChars,
    RiskyTld,
    TooManySubdomains,
    RiskKeywords,
    BrandSpoof,
    NonStandardPort,
}

/// The parts of a URL the rules look at.
#[derive(Debug)]
pub struct ParsedLink {
    pub scheme: String,
    /// Bare host (IPv6 keeps its brackets); empty for host-less URLs.
    pub host: String,
    pub ip: Option<IpAddr>,
    pub path: String,
    /// Path followed by `?query` when the query is non-empty.
    pub path_and_query: String,
    /// Explicit, non-default port.
    pub port: Option<u16>,
}

impl ParsedLink {
    pub fn from_url(url: &Url) -> Self {
        let host = url.host_str().unwrap_or_default().to_string();
        let ip = match url.host() {
            Some(Host::Ipv4(addr)) => Some(IpAddr::V4(addr)),
            Some(Host::Ipv6(addr)) => Some(IpAddr::V6(addr)),
            // Opaque hosts of non-special schemes are not parsed as addresses.
            Some(Host::Domain(domain)) => domain.parse().ok(),
            None => None,
        };
        let path = url.path().to_string();
        let path_and_query = match url.query() {
            Some(q) if !q.is_empty() => format!("{path}?{q}"),
            _ => path.clone(),
        };
        Self {
            scheme: url.scheme().to_string(),
            host,
            ip,
            path,
            path_and_query,
            port: url.port(),
        }
    }

    fn tld(&self) -> Option<String> {
        let labels: Vec<&str> = self.host.split('.').collect();
        if labels.len() > 1 {
            labels.last().map(|l| l.to_lowercase())
        } else {
            None
        }
    }
}

pub struct Rule {
    pub id: RuleId,
    check: fn(&ParsedLink) -> Option<String>,
}

impl Rule {
    pub fn evaluate(&self, link: &ParsedLink) -> Option<String> {
        (self.check)(link)
    }
}

/// Evaluation order is reporting order.
pub static RULES: &[Rule] = &[
    Rule {
        id: RuleId::NonHttpScheme,
        check: non_http_scheme,
    },
    Rule {
        id: RuleId::RawIp,
        check: raw_ip,
    },
    Rule {
        id: RuleId::PrivateIp,
        check: private_ip,
    },
    Rule {
        id: RuleId::Punycode,
        check: punycode,
    },
    Rule {
        id: RuleId::LongPathOrQuery,
        check: long_path_or_query,
    },
    Rule {
        id: RuleId::DeepPath,
        check: deep_path,
    },
    Rule {
        id: RuleId::SuspiciousChars,
        check: suspicious_chars,
    },
    Rule {
        id: RuleId::RiskyTld,
        check: risky_tld,
    },
    Rule {
        id: RuleId::TooManySubdomains,
        check: too_many_subdomains,
    },
    Rule {
        id: RuleId::RiskKeywords,
        check: risk_keywords,
    },
    Rule {
        id: RuleId::BrandSpoof,
        check: brand_spoof,
    },
    Rule {
        id: RuleId::NonStandardPort,
        check: non_standard_port,
    },
];

fn reason(hit: bool, text: &str) -> Option<String> {
    hit.then(|| text.to_string())
}

fn non_http_scheme(link: &ParsedLink) -> Option<String> {
    reason(
        link.scheme != "http" && link.scheme != "https",
        "Non-HTTP(S) scheme (data/js/mailto/etc.)",
    )
}

fn raw_ip(link: &ParsedLink) -> Option<String> {
    reason(link.ip.is_some(), "URL uses a raw IP address")
}

/// 10/8, 172.16/12, 192.168/16 and 127/8.
fn private_ip(link: &ParsedLink) -> Option<String> {
    let private = match link.ip {
        Some(IpAddr::V4(v4)) => v4.is_private() || v4.is_loopback(),
        _ => false,
    };
    reason(
        private,
        "Private-network IP address is unusual for public links",
    )
}

fn punycode(link: &ParsedLink) -> Option<String> {
    reason(
        link.host.to_lowercase().contains("xn--"),
        "Punycode domain detected (possible homograph)",
    )
}

fn long_path_or_query(link: &ParsedLink) -> Option<String> {
    reason(
        link.path_and_query.chars().count() > MAX_PATH_AND_QUERY_LEN,
        "Unusually long path or query",
    )
}

fn deep_path(link: &ParsedLink) -> Option<String> {
    reason(
        link.path.matches('/').count() > MAX_PATH_SLASHES,
        "Excessive path depth",
    )
}

fn suspicious_char_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)[@<>"'\\]|%0d|%0a|\s{2,}"#).expect("suspicious-char pattern compiles")
    })
}

fn suspicious_chars(link: &ParsedLink) -> Option<String> {
    reason(
        suspicious_char_pattern().is_match(&link.path_and_query),
        "Suspicious characters in path/query",
    )
}

fn risky_tld(link: &ParsedLink) -> Option<String> {
    link.tld()
        .filter(|tld| RISKY_TLDS.contains(&tld.as_str()))
        .map(|tld| format!("High-risk TLD: .{tld}"))
}

fn too_many_subdomains(link: &ParsedLink) -> Option<String> {
    reason(
        link.host.split('.').count() > MAX_HOST_LABELS,
        "Too many subdomains",
    )
}

fn risk_keywords(link: &ParsedLink) -> Option<String> {
    let lower = link.path_and_query.to_lowercase();
    reason(
        RISK_KEYWORDS.iter().any(|word| lower.contains(word)),
        "Contains high-risk keywords (login, verify, payment)",
    )
}

fn brand_spoof(link: &ParsedLink) -> Option<String> {
    reason(
        looks_like_brand_spoof(&link.host),
        "Looks like a spoofed brand domain",
    )
}

fn non_standard_port(link: &ParsedLink) -> Option<String> {
    link.port
        .filter(|port| *port != 80 && *port != 443)
        .map(|port| format!("Non-standard port: {port}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(input: &str) -> ParsedLink {
        ParsedLink::from_url(&Url::parse(input).unwrap())
    }

    fn fired(input: &str) -> Vec<RuleId> {
        let link = link(input);
        RULES
            .iter()
            .filter(|rule| rule.evaluate(&link).is_some())
            .map(|rule| rule.id)
            .collect()
    }

    #[test]
    fn table_has_every_rule_once() {
        let ids: std::collections::HashSet<RuleId> = RULES.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), RULES.len());
        assert_eq!(RULES.len(), 12);
        assert_eq!(RULES[0].id, RuleId::NonHttpScheme);
        assert_eq!(RULES[11].id, RuleId::NonStandardPort);
    }

    #[test]
    fn parsed_link_parts() {
        let l = link("https://Example.COM:8443/a/b?q=1#frag");
        assert_eq!(l.scheme, "https");
        assert_eq!(l.host, "example.com");
        assert_eq!(l.path, "/a/b");
        assert_eq!(l.path_and_query, "/a/b?q=1");
        assert_eq!(l.port, Some(8443));
        assert!(l.ip.is_none());
    }

    #[test]
    fn empty_query_not_appended() {
        assert_eq!(link("https://example.com/a?").path_and_query, "/a");
    }

    #[test]
    fn default_port_is_dropped() {
        assert_eq!(link("https://example.com:443/").port, None);
        assert_eq!(link("http://example.com:443/").port, Some(443));
        assert!(fired("http://example.com:443/").is_empty());
    }

    #[test]
    fn ipv6_is_raw_but_not_private() {
        assert_eq!(fired("http://[::1]/"), vec![RuleId::RawIp]);
    }

    #[test]
    fn public_ipv4_is_not_private() {
        assert_eq!(fired("http://8.8.8.8/"), vec![RuleId::RawIp]);
        assert_eq!(
            fired("http://172.20.1.1/"),
            vec![RuleId::RawIp, RuleId::PrivateIp]
        );
        assert_eq!(fired("http://172.32.1.1/"), vec![RuleId::RawIp]);
        assert_eq!(
            fired("http://127.0.0.1/"),
            vec![RuleId::RawIp, RuleId::PrivateIp]
        );
    }

    #[test]
    fn path_depth_counts_slashes() {
        assert!(fired("https://example.com/a/b/c/d/e/f").is_empty());
        assert_eq!(
            fired("https://example.com/a/b/c/d/e/f/g"),
            vec![RuleId::DeepPath]
        );
    }

    #[test]
    fn long_path_threshold() {
        let ok = format!("https://example.com/{}", "a".repeat(199));
        let long = format!("https://example.com/{}", "a".repeat(200));
        assert!(fired(&ok).is_empty());
        assert_eq!(fired(&long), vec![RuleId::LongPathOrQuery]);
    }

    #[test]
    fn suspicious_characters() {
        assert_eq!(
            fired("https://example.com/redirect?to=a@b"),
            vec![RuleId::SuspiciousChars]
        );
        assert_eq!(
            fired("https://example.com/x%0D%0Ay"),
            vec![RuleId::SuspiciousChars]
        );
        assert_eq!(
            fired("https://example.com/it's"),
            vec![RuleId::SuspiciousChars]
        );
        // Quotes and angle brackets in the path are percent-encoded by the parser.
        assert!(fired("https://example.com/a<b>").is_empty());
    }

    #[test]
    fn tld_and_subdomains() {
        assert_eq!(link("https://example.tk").tld().as_deref(), Some("tk"));
        assert_eq!(fired("https://example.tk/"), vec![RuleId::RiskyTld]);
        assert_eq!(fired("https://localhost/"), Vec::<RuleId>::new());
        assert_eq!(
            fired("https://a.b.c.example.com/"),
            vec![RuleId::TooManySubdomains]
        );
        assert!(fired("https://b.c.example.com/").is_empty());
    }

    #[test]
    fn keywords_case_insensitive() {
        assert_eq!(
            fired("https://example.com/Account/LOGIN"),
            vec![RuleId::RiskKeywords]
        );
        assert_eq!(
            fired("https://example.com/?next=Gift-card"),
            vec![RuleId::RiskKeywords]
        );
    }

    #[test]
    fn keywords_ignore_host() {
        assert!(fired("https://login.example.com/").is_empty());
    }
}
