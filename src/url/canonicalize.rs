use url::Url;

/// Resolves a raw link against the page it was found on
///
/// # Resolution Rules
///
/// The first matching rule wins:
///
/// 1. `//host/path` (protocol-relative) → base scheme + `:` + link
/// 2. `/path` (root-relative) → base origin + link
/// 3. `./path` → base origin + link with the leading `./` replaced by `/`
/// 4. `#frag` or `?query` → the base URL itself, link text discarded
/// 5. anything not starting with `http` → base origin + `/` + link
/// 6. otherwise the link is already absolute and returned unchanged
///
/// Rule 4 collapses every same-page anchor onto the page it sits on.
/// Rule 5 applies to the empty string too, so an empty link resolves to the
/// origin root. The function never fails; its output is not validated.
///
/// # Examples
///
/// ```
/// use svg_sweep::url::canonicalize;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/a/b").unwrap();
/// assert_eq!(canonicalize("/c", &base), "https://example.com/c");
/// assert_eq!(canonicalize("./c", &base), "https://example.com/c");
/// assert_eq!(canonicalize("//cdn.example.com/x", &base), "https://cdn.example.com/x");
/// ```
pub fn canonicalize(raw: &str, base: &Url) -> String {
    if raw.starts_with("//") {
        format!("{}:{}", base.scheme(), raw)
    } else if raw.starts_with('/') {
        format!("{}{}", origin(base), raw)
    } else if let Some(rest) = raw.strip_prefix("./") {
        format!("{}/{}", origin(base), rest)
    } else if raw.starts_with('#') || raw.starts_with('?') {
        base.to_string()
    } else if !raw.starts_with("http") {
        format!("{}/{}", origin(base), raw)
    } else {
        raw.to_string()
    }
}

/// Origin followed by path, without query or fragment
///
/// Used to identify a page compactly in log lines.
pub fn origin_and_path(url: &Url) -> String {
    format!("{}{}", origin(url), url.path())
}

/// Scheme and authority of a URL, e.g. `https://example.com:8443`
fn origin(url: &Url) -> String {
    url.origin().ascii_serialization()
}
