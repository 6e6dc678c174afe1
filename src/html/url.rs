const UNSAFE_SCHEMES: [&str; 4] = ["javascript:", "vbscript:", "file:", "data:"];
const SAFE_DATA_IMAGE_TYPES: [&str; 4] = ["png", "gif", "jpeg", "webp"];

/// Returns whether `url` uses a scheme which could execute script or read
/// local files when followed.
///
/// Inline `data:image/` URLs of the common raster formats are allowed.
///
/// ```rust
/// # use styledmark::html::is_potentially_unsafe;
/// assert!(is_potentially_unsafe("JavaScript:alert(1)"));
/// assert!(is_potentially_unsafe("data:text/html,<script>"));
/// assert!(!is_potentially_unsafe("data:image/png;base64,AAAA"));
/// assert!(!is_potentially_unsafe("https://example.com/"));
/// ```
pub fn is_potentially_unsafe(url: &str) -> bool {
    UNSAFE_SCHEMES
        .iter()
        .any(|scheme| starts_with_ignore_ascii_case(url, scheme))
        && !is_safe_data_image(url)
}

fn is_safe_data_image(url: &str) -> bool {
    const PREFIX: &str = "data:image/";
    if !starts_with_ignore_ascii_case(url, PREFIX) {
        return false;
    }
    let rest = &url[PREFIX.len()..];
    SAFE_DATA_IMAGE_TYPES
        .iter()
        .any(|ty| starts_with_ignore_ascii_case(rest, ty))
}

fn starts_with_ignore_ascii_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::is_potentially_unsafe;

    #[test]
    fn flags_each_dangerous_scheme() {
        for url in &[
            "javascript:alert(1)",
            "vbscript:msgbox",
            "file:///etc/passwd",
            "data:text/html;base64,PHNjcmlwdD4=",
            "DATA:image/svg+xml,<svg/>",
            "data:image/",
        ] {
            assert!(is_potentially_unsafe(url), "{} should be unsafe", url);
        }
    }

    #[test]
    fn allows_safe_listed_data_images_in_any_case() {
        for url in &[
            "data:image/png;base64,AAAA",
            "data:image/gif;base64,R0lG",
            "Data:Image/JPEG;base64,/9j/",
            "data:image/webp;base64,UklG",
        ] {
            assert!(!is_potentially_unsafe(url), "{} should be allowed", url);
        }
    }

    #[test]
    fn only_matches_at_the_start() {
        assert!(!is_potentially_unsafe("http://example.com/?q=javascript:"));
        assert!(!is_potentially_unsafe(" javascript:alert(1)"));
        assert!(!is_potentially_unsafe("/relative/path"));
        assert!(!is_potentially_unsafe(""));
        assert!(!is_potentially_unsafe("jav"));
        assert!(!is_potentially_unsafe("https://x/?q=data:text/html"));
        assert!(!is_potentially_unsafe("https://x/file:///etc/passwd"));
        assert!(!is_potentially_unsafe("/go?to=vbscript:msgbox"));
    }
}
