// Common data models for URL resolution

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::ResolveError;

/// Canonical watch page for a video id
pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Opaque 11-character token naming a single video
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoId(String);

impl VideoId {
    pub const LEN: usize = 11;

    /// Accepts the token only if it is exactly [`VideoId::LEN`] characters long
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.chars().count() == Self::LEN {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical source URL for this video
    pub fn watch_url(&self) -> String {
        format!("{}{}", WATCH_URL_PREFIX, self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for VideoId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("not an 11-character video id: {}", value))
    }
}

impl From<VideoId> for String {
    fn from(id: VideoId) -> Self {
        id.0
    }
}

/// Opaque token naming an ordered collection of videos
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlaylistId(String);

impl PlaylistId {
    /// Accepts a non-empty token of `[A-Za-z0-9_-]` only, so the id is
    /// always a single URL path segment
    pub fn parse(raw: &str) -> Option<Self> {
        let valid = !raw.is_empty()
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        valid.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PlaylistId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("not a playlist id: {}", value))
    }
}

impl From<PlaylistId> for String {
    fn from(id: PlaylistId) -> Self {
        id.0
    }
}

/// What a submitted URL points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Video(VideoId),
    Playlist(PlaylistId),
    VideoInPlaylist(VideoId, PlaylistId),
    Invalid,
}

impl Classification {
    pub fn video_id(&self) -> Option<&VideoId> {
        match self {
            Self::Video(v) | Self::VideoInPlaylist(v, _) => Some(v),
            _ => None,
        }
    }

    pub fn playlist_id(&self) -> Option<&PlaylistId> {
        match self {
            Self::Playlist(p) | Self::VideoInPlaylist(_, p) => Some(p),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

/// One item of a playlist listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    pub video_id: VideoId,
    pub title: String,
    pub source_url: String,
}

impl PlaylistEntry {
    pub fn new(video_id: VideoId, title: impl Into<String>) -> Self {
        let source_url = video_id.watch_url();
        Self {
            video_id,
            title: title.into(),
            source_url,
        }
    }
}

/// Output format requested from the conversion provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatHint {
    /// Audio only (mp3)
    Audio,
    /// Video with audio (mp4)
    Video,
}

impl FormatHint {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Audio => "MP3",
            Self::Video => "MP4",
        }
    }

    pub fn is_audio_only(&self) -> bool {
        matches!(self, Self::Audio)
    }
}

impl fmt::Display for FormatHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How results are turned into something downloadable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStrategy {
    /// Templated direct link, no provider call
    CanonicalLink,
    /// Templated widget page the UI embeds
    #[default]
    EmbedWidget,
    /// Audio and video actions resolved on demand by the conversion provider
    ProviderConversion,
}

impl fmt::Display for ResolutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CanonicalLink => write!(f, "canonical-link"),
            Self::EmbedWidget => write!(f, "embed-widget"),
            Self::ProviderConversion => write!(f, "provider-conversion"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLink {
    pub label: String,
    pub href: String,
}

/// Async status of one conversion action
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DownloadStatus {
    /// Not triggered yet
    #[default]
    Idle,
    Pending,
    Ready(DownloadLink),
    Failed(ResolveError),
}

impl DownloadStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatAction {
    pub format: FormatHint,
    pub status: DownloadStatus,
    /// Bumped on every trigger; only the latest attempt may set `status`
    pub attempt: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultContent {
    Links(Vec<DownloadLink>),
    Embed { widget_url: String },
    Actions(Vec<FormatAction>),
}

/// Renderer-ready representation of one downloadable result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultDescriptor {
    /// Session-unique id, fresh for every built descriptor
    pub id: u64,
    pub video_id: VideoId,
    pub source_url: String,
    pub title: String,
    pub content: ResultContent,
}

impl ResultDescriptor {
    pub fn action(&self, format: FormatHint) -> Option<&FormatAction> {
        match &self.content {
            ResultContent::Actions(actions) => actions.iter().find(|a| a.format == format),
            _ => None,
        }
    }

    pub fn action_mut(&mut self, format: FormatHint) -> Option<&mut FormatAction> {
        match &mut self.content {
            ResultContent::Actions(actions) => actions.iter_mut().find(|a| a.format == format),
            _ => None,
        }
    }

    /// Equality over every field except the generated id
    pub fn same_content(&self, other: &Self) -> bool {
        self.video_id == other.video_id
            && self.source_url == other.source_url
            && self.title == other.title
            && self.content == other.content
    }
}
