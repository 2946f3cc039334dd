//! Identifier casing for generated Go code.

use heck::ToSnakeCase;

/// Common initialisms that are emitted fully uppercased.
///
/// Kept sorted so membership is a binary search.
pub const INITIALISMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS", "TTL",
    "UDP", "UI", "UID", "URI", "URL", "UTF8", "UUID", "VM", "XML", "XMPP", "XSRF", "XSS",
];

/// Check if an uppercased word is a known initialism.
pub fn is_initialism(word: &str) -> bool {
    INITIALISMS.binary_search(&word).is_ok()
}

/// Convert an identifier to UpperCamelCase, keeping initialisms uppercased.
///
/// The input is first normalized to snake_case, so camelCase, kebab-case and
/// leading underscores are all accepted (e.g. `"userId"` -> `"UserID"`,
/// `"uuid_is_not_url"` -> `"UUIDIsNotURL"`).
pub fn to_upper_camel(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }

    s.to_snake_case()
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let upper = word.to_uppercase();
            if is_initialism(&upper) {
                upper
            } else {
                title_case(word)
            }
        })
        .collect()
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}
