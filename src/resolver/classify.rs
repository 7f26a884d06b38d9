// URL classification

use super::extract::{extract_playlist_id, extract_video_id};
use super::models::{Classification, PlaylistId, VideoId};

/// Classify a raw URL. Total over every input, including the empty string.
pub fn classify(url: &str) -> Classification {
    let url = url.trim();
    combine(extract_video_id(url), extract_playlist_id(url))
}

/// Combine extractor outputs; a playlist id takes precedence over a bare video.
pub fn combine(video: Option<VideoId>, playlist: Option<PlaylistId>) -> Classification {
    match (video, playlist) {
        (Some(v), Some(p)) => Classification::VideoInPlaylist(v, p),
        (None, Some(p)) => Classification::Playlist(p),
        (Some(v), None) => Classification::Video(v),
        (None, None) => Classification::Invalid,
    }
}
