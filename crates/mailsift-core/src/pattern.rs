use regex::Regex;
use std::collections::BTreeSet;

/// Email-shaped substring matcher.
///
/// Deliberately a heuristic, not an RFC 5322 validator: ASCII local part,
/// `@`, a dot-separated domain, and a top-level label of two or more
/// letters. Unanchored, case-insensitive, and matches are kept exactly as
/// found in the text (no lowercasing), so `A@b.com` and `a@b.com` are
/// distinct results.
const EMAIL_PATTERN: &str = r"(?i)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}";

pub struct EmailPattern {
    re: Regex,
}

impl EmailPattern {
    pub fn new() -> Self {
        EmailPattern {
            re: Regex::new(EMAIL_PATTERN).unwrap(),
        }
    }

    /// Insert every match in `text` into `found`. Insertion is idempotent;
    /// duplicates collapse in the set.
    pub fn scan(&self, text: &str, found: &mut BTreeSet<String>) {
        for m in self.re.find_iter(text) {
            found.insert(m.as_str().to_string());
        }
    }
}

impl Default for EmailPattern {
    fn default() -> Self {
        Self::new()
    }
}
