//! Replace-first-then-rescan loop over link directives.

use super::token::{extract_url_from_token, TOKEN_PATTERN};

/// Resolves every link directive in `text` using `fetch`.
///
/// The first directive found is replaced by `fetch(url)` as literal text and
/// the scan restarts on the updated text, so directives introduced by fetched
/// content are resolved as well. Stops when no directive is left; there is no
/// iteration bound, so content that references itself never finishes.
/// The first fetch error aborts the loop and is returned as is.
pub fn resolve_links<F, E>(text: String, mut fetch: F) -> Result<String, E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    let mut resolved = text;
    let mut substitutions = 0usize;
    while let Some(token) = TOKEN_PATTERN.find(&resolved) {
        let range = token.range();
        let url = extract_url_from_token(token.as_str()).to_string();
        tracing::debug!("resolving link #{} to {}", substitutions + 1, url);
        let content = fetch(&url)?;
        resolved.replace_range(range, &content);
        substitutions += 1;
    }
    if substitutions > 0 {
        tracing::debug!("resolved {} link(s)", substitutions);
    }
    Ok(resolved)
}
