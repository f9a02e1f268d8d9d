use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

// Whitespace or line edge on both sides; `]` ends the URL.
static BARE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\s|^)(https?://[^\s\]]+)(\s|$)").unwrap());

/// Wrap every bare URL on the line in `<` `>`. Returns the rewritten line and
/// the number of URLs wrapped.
///
/// Matches don't overlap: the separator consumed after one URL can't also
/// lead the next, so `a http://x http://y` only wraps the first.
pub fn wrap_bare_urls(line: &str) -> (Cow<'_, str>, usize) {
    let count = BARE_URL_RE.find_iter(line).count();
    if count == 0 {
        return (Cow::Borrowed(line), 0);
    }
    (BARE_URL_RE.replace_all(line, "${1}<${2}>${3}"), count)
}
