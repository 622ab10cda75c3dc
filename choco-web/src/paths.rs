//! Helpers for resolving the catalog URL against the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/shop` for GitHub Pages),
/// relative catalog paths are prefixed accordingly. Builds without
/// `PUBLIC_URL` keep the path relative to the page, like a plain `fetch`.
#[must_use]
pub fn catalog_url(configured: &str) -> String {
    catalog_url_with_base(configured, option_env!("PUBLIC_URL").unwrap_or(""))
}

fn catalog_url_with_base(configured: &str, base: &str) -> String {
    if is_absolute(configured) {
        return configured.to_string();
    }
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        configured.to_string()
    } else {
        format!("{base}/{}", configured.trim_start_matches('/'))
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with('/') || url.contains("://")
}
