//! Shared pieces of the preview page: inline CSS, security headers, URL helpers.

/// OG image dimensions advertised to fetchers (standard Open Graph).
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

/// Inline CSS for the fallback body. `--accent` is set from the brand theme color.
pub const INVITE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{background:#000;color:#fff;font-family:Helvetica,Arial,sans-serif;text-align:center;padding:40px}
h1{color:var(--accent);margin-bottom:1rem}
p{margin:.75rem auto;max-width:560px;line-height:1.5}
a{color:var(--accent)}
"#;

/// Content-Security-Policy header value.
///
/// The page has no scripts and only inline styles; images are never embedded.
pub const CSP_HEADER: &str =
    "default-src 'none'; style-src 'unsafe-inline'; form-action 'none'; frame-ancestors 'none'";

/// Whether a URL starts with an RFC 3986 scheme (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`).
pub fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Make a configured URL absolute against the site base URL.
///
/// URLs that already carry a scheme are returned unchanged. Protocol-relative
/// URLs (`//host/path`) borrow the base URL's scheme.
pub fn absolute_url(url: &str, base_url: &str) -> String {
    if has_scheme(url) {
        return url.to_string();
    }

    let base = base_url.trim_end_matches('/');
    if let Some(rest) = url.strip_prefix("//") {
        let scheme = base.split_once("://").map_or("https", |(s, _)| s);
        return format!("{scheme}://{rest}");
    }

    match url.strip_prefix('/') {
        Some(path) => format!("{base}/{path}"),
        None => format!("{base}/{url}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_scheme_http_and_https() {
        assert!(has_scheme("https://cdn.test/a.png"));
        assert!(has_scheme("http://cdn.test/a.png"));
    }

    #[test]
    fn has_scheme_other_schemes() {
        assert!(has_scheme("data:image/png;base64,AAAA"));
        assert!(has_scheme("svn+ssh://host/x"));
    }

    #[test]
    fn has_scheme_relative() {
        assert!(!has_scheme("/img/a.png"));
        assert!(!has_scheme("img/a.png"));
        assert!(!has_scheme("//cdn.test/a.png"));
        assert!(!has_scheme(""));
    }

    #[test]
    fn has_scheme_rejects_bad_scheme_chars() {
        assert!(!has_scheme("1http://x"));
        assert!(!has_scheme(":nothing"));
        assert!(!has_scheme("img/a:b.png"));
    }

    #[test]
    fn absolute_url_keeps_absolute() {
        assert_eq!(
            absolute_url("https://cdn.test/a.png", "https://oga.test"),
            "https://cdn.test/a.png"
        );
    }

    #[test]
    fn absolute_url_joins_root_relative() {
        assert_eq!(
            absolute_url("/img/a.png", "https://oga.test"),
            "https://oga.test/img/a.png"
        );
    }

    #[test]
    fn absolute_url_joins_bare_relative() {
        assert_eq!(
            absolute_url("img/a.png", "https://oga.test/"),
            "https://oga.test/img/a.png"
        );
    }

    #[test]
    fn absolute_url_protocol_relative() {
        assert_eq!(
            absolute_url("//cdn.test/a.png", "http://oga.test"),
            "http://cdn.test/a.png"
        );
    }
}
