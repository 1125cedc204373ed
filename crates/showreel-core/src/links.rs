//! Link canonicalization for video and image URLs.
//!
//! Share links pasted into the admin form arrive in many shapes; the catalog
//! stores one canonical form per kind:
//! - video: `https://www.youtube.com/embed/<id>`
//! - image: `https://lh3.googleusercontent.com/d/<id>`
//!
//! Both normalizers are total and idempotent. Unrecognized input passes
//! through unchanged, so foreign hosts, hand-written embed URLs, and inline
//! `data:` payloads keep working.

use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix of the canonical video embed form.
pub const VIDEO_EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Prefix of the canonical direct-serving image form.
pub const IMAGE_DIRECT_BASE: &str = "https://lh3.googleusercontent.com/d/";

/// Playback parameters applied by [`player_embed_url`].
pub const PLAYER_PARAMS: &str = "autoplay=1&rel=0&modestbranding=1&enablejsapi=1";

/// Video IDs are exactly this many characters of `[A-Za-z0-9_-]`.
const VIDEO_ID_LEN: usize = 11;

/// Drive file IDs are at least this many characters of `[A-Za-z0-9_-]`.
const IMAGE_ID_MIN_LEN: usize = 20;

/// Path and query markers that precede a video ID in known share-link shapes
/// (short links, watch pages, embeds, shorts, legacy `/v/` and `/u/` paths).
static VIDEO_ID_AFTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=|shorts/)([^#&?]*)").unwrap()
});

/// Markers that precede a file ID in drive share links (`?id=`, `/d/`,
/// `/file/d/`).
static IMAGE_ID_AFTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:id=|/d/|/file/d/)([a-zA-Z0-9_-]{20,})").unwrap());

fn is_video_id(token: &str) -> bool {
    token.len() == VIDEO_ID_LEN
        && token
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Canonicalize a video share link to its embed form.
///
/// Recognizes the common share-link shapes (short links, watch pages, shorts,
/// existing embeds) and rewrites them to `https://www.youtube.com/embed/<id>`.
/// The first marker followed by a well-formed ID wins. Anything else is
/// returned verbatim rather than rejected, so links from unrecognized hosts
/// survive normalization.
pub fn normalize_video_url(url: &str) -> String {
    for caps in VIDEO_ID_AFTER.captures_iter(url) {
        let token = &caps[1];
        if is_video_id(token) {
            return format!("{VIDEO_EMBED_BASE}{token}");
        }
    }
    url.to_string()
}

/// Canonicalize an image link to its direct-serving form.
///
/// Drive share links (`/file/d/<id>/view`, `?id=<id>`, and friends) do not
/// serve image bytes; they are rewritten to
/// `https://lh3.googleusercontent.com/d/<id>`, which does. Inline `data:`
/// payloads and every other URL pass through verbatim.
pub fn normalize_image_url(url: &str) -> String {
    if url.starts_with("data:") {
        return url.to_string();
    }
    if let Some(caps) = IMAGE_ID_AFTER.captures(url) {
        return format!("{IMAGE_DIRECT_BASE}{}", &caps[1]);
    }
    url.to_string()
}

/// Build the URL the player iframe loads: the canonical embed form plus
/// playback parameters, and an `origin` restriction when the embedding page
/// supplies one. Links that do not normalize to the embed form are returned
/// as-is, without parameters.
pub fn player_embed_url(url: &str, origin: Option<&str>) -> String {
    let normalized = normalize_video_url(url);
    if !normalized.starts_with(VIDEO_EMBED_BASE) {
        return normalized;
    }
    match origin {
        Some(origin) => format!(
            "{normalized}?{PLAYER_PARAMS}&origin={}",
            urlencoding::encode(origin)
        ),
        None => format!("{normalized}?{PLAYER_PARAMS}"),
    }
}

/// Attach a width hint to a direct-serving image URL.
///
/// The catalog stores the width-less canonical form; views ask for the size
/// they render at. URLs that are not in the direct-serving form (or already
/// carry a hint) pass through unchanged.
pub fn display_image_url(url: &str, width: u32) -> String {
    if url.starts_with(IMAGE_DIRECT_BASE) && !url.contains('=') {
        return format!("{url}=w{width}");
    }
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link_becomes_embed() {
        assert_eq!(
            normalize_video_url("https://youtu.be/dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_watch_page_becomes_embed() {
        assert_eq!(
            normalize_video_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_watch_page_with_extra_params_becomes_embed() {
        assert_eq!(
            normalize_video_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s&list=PL123"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_shorts_link_becomes_embed() {
        assert_eq!(
            normalize_video_url("https://www.youtube.com/shorts/aB3_x-Y9zQ1"),
            "https://www.youtube.com/embed/aB3_x-Y9zQ1"
        );
    }

    #[test]
    fn test_legacy_v_path_becomes_embed() {
        assert_eq!(
            normalize_video_url("https://www.youtube.com/v/dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_short_link_with_fragment_becomes_embed() {
        assert_eq!(
            normalize_video_url("https://youtu.be/dQw4w9WgXcQ#t=10"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_embed_form_is_idempotent() {
        let canonical = "https://www.youtube.com/embed/dQw4w9WgXcQ";
        assert_eq!(normalize_video_url(canonical), canonical);
    }

    #[test]
    fn test_foreign_video_host_passes_through() {
        let url = "https://vimeo.com/76979871";
        assert_eq!(normalize_video_url(url), url);
        let url = "https://example.com/not-a-video";
        assert_eq!(normalize_video_url(url), url);
    }

    #[test]
    fn test_overlong_token_passes_through() {
        // Twelve characters after the marker is not an ID; the input must
        // come back whole, not truncated to eleven.
        let url = "https://youtu.be/dQw4w9WgXcQx";
        assert_eq!(normalize_video_url(url), url);
    }

    #[test]
    fn test_short_token_passes_through() {
        let url = "https://youtu.be/abc";
        assert_eq!(normalize_video_url(url), url);
    }

    #[test]
    fn test_empty_video_input_passes_through() {
        assert_eq!(normalize_video_url(""), "");
    }

    #[test]
    fn test_bare_text_passes_through() {
        assert_eq!(normalize_video_url("not a url at all"), "not a url at all");
    }

    #[test]
    fn test_drive_file_link_becomes_direct() {
        assert_eq!(
            normalize_image_url(
                "https://drive.google.com/file/d/1AbCdEfGhIjKlMnOpQrStUvWxYz12345/view?usp=sharing"
            ),
            "https://lh3.googleusercontent.com/d/1AbCdEfGhIjKlMnOpQrStUvWxYz12345"
        );
    }

    #[test]
    fn test_drive_open_id_link_becomes_direct() {
        assert_eq!(
            normalize_image_url(
                "https://drive.google.com/open?id=1AbCdEfGhIjKlMnOpQrStUvWxYz12345"
            ),
            "https://lh3.googleusercontent.com/d/1AbCdEfGhIjKlMnOpQrStUvWxYz12345"
        );
    }

    #[test]
    fn test_drive_uc_export_link_becomes_direct() {
        assert_eq!(
            normalize_image_url(
                "https://drive.google.com/uc?export=view&id=1AbCdEfGhIjKlMnOpQrStUvWxYz12345"
            ),
            "https://lh3.googleusercontent.com/d/1AbCdEfGhIjKlMnOpQrStUvWxYz12345"
        );
    }

    #[test]
    fn test_direct_form_is_idempotent() {
        let canonical = "https://lh3.googleusercontent.com/d/1AbCdEfGhIjKlMnOpQrStUvWxYz12345";
        assert_eq!(normalize_image_url(canonical), canonical);
    }

    #[test]
    fn test_sized_direct_form_normalizes_to_widthless() {
        assert_eq!(
            normalize_image_url(
                "https://lh3.googleusercontent.com/d/1AbCdEfGhIjKlMnOpQrStUvWxYz12345=w1920"
            ),
            "https://lh3.googleusercontent.com/d/1AbCdEfGhIjKlMnOpQrStUvWxYz12345"
        );
    }

    #[test]
    fn test_data_payload_passes_through() {
        let data = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUg==";
        assert_eq!(normalize_image_url(data), data);
    }

    #[test]
    fn test_short_drive_id_passes_through() {
        // Tokens under twenty characters are path segments, not file IDs.
        let url = "https://drive.google.com/file/d/tooshort/view";
        assert_eq!(normalize_image_url(url), url);
    }

    #[test]
    fn test_foreign_image_host_passes_through() {
        let url = "https://images.unsplash.com/photo-1618005182384?q=80&w=1364";
        assert_eq!(normalize_image_url(url), url);
        assert_eq!(normalize_image_url(""), "");
    }

    #[test]
    fn test_player_url_carries_playback_params() {
        assert_eq!(
            player_embed_url("https://youtu.be/dQw4w9WgXcQ", None),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&rel=0&modestbranding=1&enablejsapi=1"
        );
    }

    #[test]
    fn test_player_url_encodes_origin() {
        assert_eq!(
            player_embed_url("https://youtu.be/dQw4w9WgXcQ", Some("https://inv-film.studio")),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&rel=0&modestbranding=1&enablejsapi=1&origin=https%3A%2F%2Finv-film.studio"
        );
    }

    #[test]
    fn test_player_url_leaves_foreign_links_bare() {
        assert_eq!(
            player_embed_url("https://vimeo.com/76979871", Some("https://inv-film.studio")),
            "https://vimeo.com/76979871"
        );
    }

    #[test]
    fn test_display_url_gains_width_hint() {
        assert_eq!(
            display_image_url(
                "https://lh3.googleusercontent.com/d/1AbCdEfGhIjKlMnOpQrStUvWxYz12345",
                1920
            ),
            "https://lh3.googleusercontent.com/d/1AbCdEfGhIjKlMnOpQrStUvWxYz12345=w1920"
        );
    }

    #[test]
    fn test_display_url_keeps_existing_hint() {
        let sized = "https://lh3.googleusercontent.com/d/1AbCdEfGhIjKlMnOpQrStUvWxYz12345=w800";
        assert_eq!(display_image_url(sized, 1920), sized);
    }

    #[test]
    fn test_display_url_leaves_foreign_hosts_alone() {
        let url = "https://images.unsplash.com/photo-1618005182384";
        assert_eq!(display_image_url(url, 1920), url);
    }
}
