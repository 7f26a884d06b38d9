// Identifier extraction from raw URLs
//
// Every function here is total: any input string yields Some or None,
// never a panic.

use regex::Regex;

use super::models::{PlaylistId, VideoId};

lazy_static::lazy_static! {
    // The greedy prefix makes the last recognised marker win, so
    // `.../embed/<id>` inside a longer path still resolves to <id>.
    static ref VIDEO_ID_RE: Regex = Regex::new(
        r"^.*(?:youtu\.be/|v/|u/\w/|embed/|\?v=|&v=)([^#&?]*).*"
    ).unwrap();
    static ref PLAYLIST_ID_RE: Regex = Regex::new(r"[?&]list=([^#&?]+)").unwrap();
}

/// Extract an 11-character video id from any supported URL shape.
///
/// Recognised: `youtu.be/<id>`, `.../v/<id>`, `.../u/<x>/<id>`,
/// `.../embed/<id>`, `?v=<id>`, `&v=<id>`. The captured token stops at the
/// first `#`, `&` or `?`.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    let caps = VIDEO_ID_RE.captures(url)?;
    VideoId::parse(caps.get(1)?.as_str())
}

/// Extract the value of the `list=` query parameter; a value that is not a
/// well-formed playlist id counts as absent
pub fn extract_playlist_id(url: &str) -> Option<PlaylistId> {
    let caps = PLAYLIST_ID_RE.captures(url)?;
    PlaylistId::parse(caps.get(1)?.as_str())
}

/// Video id from the url field of a listing item.
///
/// Listing providers hand out `/watch?v=<id>` or full watch URLs, sometimes
/// with extra parameters such as `&index=3` appended.
pub fn video_id_from_stream_url(url: &str) -> Option<VideoId> {
    let (_, tail) = url.split_once("v=")?;
    let token = tail.split(['&', '#']).next().unwrap_or(tail);
    VideoId::parse(token)
}
