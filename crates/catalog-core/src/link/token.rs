//! Token pattern and URL extraction.

use regex::Regex;
use std::sync::LazyLock;

/// Directive name preceding the parenthesized URL.
pub const GET_FROM_URL: &str = "PA:GET_FROM_URL";

const QUOTE_CLOSE: &str = "\")";
const HTML_QUOTE_CLOSE: &str = "&quot;)";

/// Any run of characters on one line, shortest first. Line terminators are
/// `\n`, `\r`, NEL, LS and PS.
const URL_CHARS: &str = r"([^\n\r\x{85}\x{2028}\x{2029}]*?)";

/// `PA:GET_FROM_URL(` + `"url"` or `&quot;url&quot;` + `)`, URL captured lazily.
pub static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"{prefix}\(("{url}"|&quot;{url}&quot;)\)"#,
        prefix = regex::escape(GET_FROM_URL),
        url = URL_CHARS
    ))
    .expect("link token pattern is valid")
});

/// Returns the URL inside a matched token.
///
/// The closing marker decides the quote style: `")` strips the plain form,
/// anything else the `&quot;` form. Parts that are not present are left in place.
pub fn extract_url_from_token(token: &str) -> &str {
    let (open, close) = if token.ends_with(QUOTE_CLOSE) {
        ("PA:GET_FROM_URL(\"", QUOTE_CLOSE)
    } else {
        ("PA:GET_FROM_URL(&quot;", HTML_QUOTE_CLOSE)
    };
    let inner = token.strip_prefix(open).unwrap_or(token);
    inner.strip_suffix(close).unwrap_or(inner)
}
