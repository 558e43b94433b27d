//! Fixed pattern lists consumed by the rule table.

/// Top-level labels abused far more often than they are used legitimately.
pub const RISKY_TLDS: &[&str] = &["zip", "mov", "country", "gq", "tk", "ml", "cf", "ga", "top"];

/// Words phishing pages put in the path or query.
pub const RISK_KEYWORDS: &[&str] = &[
    "login", "verify", "secure", "update", "confirm", "payment", "invoice", "gift",
];

/// A brand and the typosquat fragments seen impersonating it.
#[derive(Debug, Clone, Copy)]
pub struct BrandLookalike {
    pub brand: &'static str,
    pub patterns: &'static [&'static str],
}

pub const BRAND_LOOKALIKES: &[BrandLookalike] = &[
    BrandLookalike {
        brand: "paypal",
        patterns: &["paypa1", "paipal", "pypl", "paypal-secure", "secure-paypal"],
    },
    BrandLookalike {
        brand: "apple",
        patterns: &["app1e", "appleid-verify", "support-appleid", "apple-secure"],
    },
    BrandLookalike {
        brand: "microsoft",
        patterns: &["micros0ft", "office365-secure", "login-live", "m1crosoft"],
    },
    BrandLookalike {
        brand: "google",
        patterns: &["g00gle", "goog1e", "accounts-google", "secure-gmail"],
    },
    BrandLookalike {
        brand: "amazon",
        patterns: &["amaz0n", "arnazon", "amazon-verify", "amazon-login"],
    },
];
