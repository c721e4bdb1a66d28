//! Thumbnail URL conventions.
//!
//! These strings are consumed by the card renderer and must stay byte-exact.

/// Generic stock image used for Instagram links and every fallback record.
pub const STOCK_THUMBNAIL_URL: &str =
    "https://images.unsplash.com/photo-1611162617474-5b21e879e113?q=80&w=640";

/// Canonical max-resolution thumbnail for a YouTube video id.
pub fn youtube_thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", video_id)
}

/// Deterministic placeholder image keyed by a locally generated id.
pub fn placeholder_thumbnail_url(local_id: &str) -> String {
    format!("https://picsum.photos/seed/{}/640/360", local_id)
}
