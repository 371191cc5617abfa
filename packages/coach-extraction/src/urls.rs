//! URL helpers shared by the classifiers and the navigation planner.

use url::Url;

/// Path component of an absolute or relative href, as written.
pub fn path_of(href: &str) -> String {
    let href = href.trim();

    if let Ok(parsed) = Url::parse(href) {
        return parsed.path().to_string();
    }

    // Protocol-relative: //host/path
    if let Some(rest) = href.strip_prefix("//") {
        if let Ok(parsed) = Url::parse(&format!("https://{}", rest)) {
            return parsed.path().to_string();
        }
    }

    let end = href.find(['?', '#']).unwrap_or(href.len());
    href[..end].to_string()
}

/// Resolve `href` against `base`. Falls back to `href` when `base` is not a
/// valid absolute URL or the join fails.
pub fn resolve(base: &str, href: &str) -> String {
    Url::parse(base)
        .and_then(|base| base.join(href.trim()))
        .map(|joined| joined.to_string())
        .unwrap_or_else(|_| href.trim().to_string())
}

/// Normalize a URL for comparison: scheme added if missing, query and
/// fragment dropped, trailing slash removed.
pub fn normalize_url(raw: &str) -> String {
    let raw = raw.trim();
    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    };

    match Url::parse(&candidate) {
        Ok(parsed) => {
            let path = parsed.path().trim_end_matches('/');
            let path = if path.is_empty() { "/" } else { path };
            let host = parsed.host_str().unwrap_or_default();
            match parsed.port() {
                Some(port) => format!("{}://{}:{}{}", parsed.scheme(), host, port, path),
                None => format!("{}://{}{}", parsed.scheme(), host, path),
            }
        }
        Err(_) => raw.trim_end_matches('/').to_string(),
    }
}
