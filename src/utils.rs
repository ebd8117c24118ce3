use url::Url;

/// File name for a downloaded image: the last non-empty path segment.
///
/// The query string is never part of the name.
pub fn local_file_name(url: &Url) -> Option<String> {
    url.path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()
        .map(sanitize_filename)
}

/// Site-relative path under which a downloaded image is served
pub fn local_image_path(file_name: &str) -> String {
    format!("/images/{file_name}")
}

/// Replace characters that are unsafe in a file name
pub fn sanitize_filename(name: &str) -> String {
    name.replace(['/', '\\', ':', '?', '&', '=', '#'], "_")
}

/// First `n` characters of `s`, never splitting a code point
pub fn prefix_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((index, _)) => &s[..index],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_file_name() {
        let url = Url::parse("https://images.example.com/content/abc/photo.jpg?format=1500w").unwrap();
        assert_eq!(local_file_name(&url).as_deref(), Some("photo.jpg"));

        let trailing = Url::parse("https://example.com/gallery/cover/").unwrap();
        assert_eq!(local_file_name(&trailing).as_deref(), Some("cover"));

        let root = Url::parse("https://example.com/").unwrap();
        assert_eq!(local_file_name(&root), None);
    }

    #[test]
    fn test_local_image_path() {
        assert_eq!(local_image_path("photo.jpg"), "/images/photo.jpg");
    }

    #[test]
    fn test_prefix_chars() {
        assert_eq!(prefix_chars("elsewhere-galerie", 10), "elsewhere-");
        assert_eq!(prefix_chars("short", 10), "short");
        assert_eq!(prefix_chars("åååååååååååå", 10), "åååååååååå");
        assert_eq!(prefix_chars("", 10), "");
    }
}
