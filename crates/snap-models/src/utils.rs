//! Link detection and id helpers.
//!
//! These are intentionally loose: the text a user pastes is untrusted and is
//! never validated beyond "looks like it contains an http(s) link". Deciding
//! what the link actually points at is left to the resolver.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

/// First `http://` or `https://` run of non-whitespace characters.
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s]+").expect("link pattern is valid"));

/// `v=` or a path separator followed by an 11-character video id.
static THUMBNAIL_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("thumbnail id pattern is valid")
});

const BASE36_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of ids produced by [`generate_local_id`].
pub const LOCAL_ID_LEN: usize = 6;

/// Return the first http(s) link contained in `text`, if any.
pub fn find_link(text: &str) -> Option<&str> {
    LINK_PATTERN.find(text).map(|m| m.as_str())
}

/// Extract the 11-character token used to build a YouTube thumbnail URL.
///
/// This mirrors the loose matching used for thumbnails only: the first `v=`
/// or `/` followed by 11 id characters wins, so it is only meaningful once
/// the link is already known to be a YouTube link.
pub fn extract_thumbnail_video_id(url: &str) -> Option<&str> {
    THUMBNAIL_ID_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Generate a short random base-36 id.
///
/// Unique enough to key a single resolution; collisions are possible and
/// accepted.
pub fn generate_local_id() -> String {
    let mut rng = rand::rng();
    (0..LOCAL_ID_LEN)
        .map(|_| BASE36_ALPHABET[rng.random_range(0..BASE36_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_link() {
        assert_eq!(
            find_link("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        );
        assert_eq!(
            find_link("look at this http://instagram.com/reel/abc please"),
            Some("http://instagram.com/reel/abc")
        );
        assert_eq!(find_link("not a link"), None);
        assert_eq!(find_link("www.youtube.com/watch?v=dQw4w9WgXcQ"), None);
        assert_eq!(find_link("https://"), None);
    }

    #[test]
    fn test_extract_thumbnail_video_id_watch_url() {
        assert_eq!(
            extract_thumbnail_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_thumbnail_video_id("https://youtube.com/watch?feature=share&v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_extract_thumbnail_video_id_path_segment() {
        assert_eq!(
            extract_thumbnail_video_id("https://youtu.be/dQw4w9WgXcQ?t=30"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_thumbnail_video_id("https://youtube.com/shorts/a1B2c3D4e5_"),
            Some("a1B2c3D4e5_")
        );
        assert_eq!(
            extract_thumbnail_video_id("https://youtube.com/embed/Ab-_cdEFghI"),
            Some("Ab-_cdEFghI")
        );
    }

    #[test]
    fn test_extract_thumbnail_video_id_no_match() {
        assert_eq!(extract_thumbnail_video_id("https://youtube.com/"), None);
        assert_eq!(extract_thumbnail_video_id("https://youtu.be/short"), None);
        assert_eq!(extract_thumbnail_video_id("no separators here"), None);
    }

    #[test]
    fn test_generate_local_id() {
        let id = generate_local_id();
        assert_eq!(id.len(), LOCAL_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generate_local_id_varies() {
        let ids: std::collections::HashSet<String> = (0..32).map(|_| generate_local_id()).collect();
        assert!(ids.len() > 1);
    }
}
