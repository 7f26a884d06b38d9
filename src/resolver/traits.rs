// Provider traits and the outbound conversion request

use async_trait::async_trait;
use serde::Serialize;

use super::config::ProviderConfig;
use super::errors::ResolveError;
use super::extract::extract_video_id;
use super::models::{DownloadLink, FormatHint, PlaylistEntry, PlaylistId, VideoId};

/// Remote service that lists the entries of a playlist
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    /// Name of the provider (for logging)
    fn name(&self) -> &str;

    /// Fetch and parse the listing. Any transport, status or shape problem
    /// is an `Err`; an empty playlist is `Ok(vec![])`.
    async fn fetch_playlist(&self, id: &PlaylistId) -> Result<Vec<PlaylistEntry>, ResolveError>;
}

/// Remote service that converts a video into a downloadable file
#[async_trait]
pub trait ConversionService: Send + Sync {
    /// Name of the provider (for logging)
    fn name(&self) -> &str;

    async fn convert(&self, request: &ConversionRequest) -> Result<DownloadLink, ResolveError>;
}

/// Validated conversion request, serialized as the provider's JSON body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    pub url: String,
    pub v_codec: String,
    pub v_quality: String,
    pub a_format: String,
    pub is_audio_only: bool,
    #[serde(skip)]
    pub format: FormatHint,
}

impl ConversionRequest {
    pub fn for_video(id: &VideoId, format: FormatHint, config: &ProviderConfig) -> Self {
        Self {
            url: id.watch_url(),
            v_codec: config.video_codec.clone(),
            v_quality: config.video_quality.clone(),
            a_format: config.audio_format.clone(),
            is_audio_only: format.is_audio_only(),
            format,
        }
    }

    /// Build from a raw URL; the URL must carry a recognisable video id
    pub fn for_url(url: &str, format: FormatHint, config: &ProviderConfig) -> Result<Self, ResolveError> {
        let id = extract_video_id(url.trim()).ok_or_else(|| ResolveError::InvalidUrl(url.to_string()))?;
        Ok(Self::for_video(&id, format, config))
    }
}
