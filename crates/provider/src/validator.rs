use url::Url;

/// Validates whether the image can be shown on the results screen. Only
/// absolute `http` and `https` URLs with a host are accepted.
pub fn is_allowed_image(image: &str) -> bool {
    let url = match Url::parse(image) {
        Ok(url) => url,
        _ => return false,
    };

    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }

    url.host_str().is_some_and(|host| !host.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_relative_paths() {
        assert!(!is_allowed_image(""));
        assert!(!is_allowed_image("overcoat.jpg"));
        assert!(!is_allowed_image("/images/overcoat.jpg"));
        assert!(!is_allowed_image("//cdn.example.com/overcoat.jpg"));
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(!is_allowed_image("file:///etc/passwd"));
        assert!(!is_allowed_image("ftp://example.com/overcoat.jpg"));
        assert!(!is_allowed_image("data:image/png;base64,AAAA"));
        assert!(!is_allowed_image("javascript:alert(1)"));
    }

    #[test]
    fn accepts_web_urls() {
        assert!(is_allowed_image("https://example.com/overcoat.jpg"));
        assert!(is_allowed_image("http://localhost:8080/images/1.png"));
        assert!(is_allowed_image("https://cdn.example.com/a/b/c.webp?size=large"));
    }
}
