// Provider configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::errors::ResolveError;
use super::models::{ResolutionStrategy, VideoId};

/// Placeholder substituted with the video id in link templates
pub const ID_PLACEHOLDER: &str = "{id}";

/// Configuration for listing/conversion providers and result building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Primary playlist listing host
    pub playlist_primary: String,
    /// Listing host tried once when the primary fails
    pub playlist_fallback: Option<String>,
    /// Conversion endpoint (POST)
    pub conversion_endpoint: String,
    /// Direct download link, `{id}` is replaced by the video id
    pub direct_link_template: String,
    /// Embeddable download widget, `{id}` is replaced by the video id
    pub embed_template: String,
    pub strategy: ResolutionStrategy,
    /// Video codec requested from the converter (h264, av1, vp9)
    pub video_codec: String,
    /// Video quality requested from the converter (e.g. "720")
    pub video_quality: String,
    /// Audio format requested from the converter (mp3, ogg, wav)
    pub audio_format: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// SOCKS5/HTTP proxy URL
    pub proxy: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            playlist_primary: "https://api.piped.co".to_string(),
            playlist_fallback: Some("https://pipedapi.kavin.rocks".to_string()),
            conversion_endpoint: "https://api.cobalt.tools/api/json".to_string(),
            direct_link_template: "https://api.vevioz.com/api/button/mp3/{id}".to_string(),
            embed_template: "https://api.vevioz.com/@api/button/mp3/{id}".to_string(),
            strategy: ResolutionStrategy::EmbedWidget,
            video_codec: "h264".to_string(),
            video_quality: "720".to_string(),
            audio_format: "mp3".to_string(),
            timeout_seconds: 30,
            proxy: None,
        }
    }
}

impl ProviderConfig {
    /// Parse a JSON settings blob; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ResolveError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ResolveError::InvalidConfig(format!("JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ResolveError> {
        if self.playlist_primary.trim().is_empty() {
            return Err(ResolveError::InvalidConfig("playlist_primary is empty".to_string()));
        }
        if matches!(&self.playlist_fallback, Some(host) if host.trim().is_empty()) {
            return Err(ResolveError::InvalidConfig("playlist_fallback is empty".to_string()));
        }
        if self.conversion_endpoint.trim().is_empty() {
            return Err(ResolveError::InvalidConfig("conversion_endpoint is empty".to_string()));
        }
        for (name, template) in [
            ("direct_link_template", &self.direct_link_template),
            ("embed_template", &self.embed_template),
        ] {
            if !template.contains(ID_PLACEHOLDER) {
                return Err(ResolveError::InvalidConfig(format!(
                    "{} has no {} placeholder",
                    name, ID_PLACEHOLDER
                )));
            }
        }
        if self.timeout_seconds == 0 {
            return Err(ResolveError::InvalidConfig("timeout_seconds must be > 0".to_string()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn direct_link(&self, id: &VideoId) -> String {
        self.direct_link_template.replace(ID_PLACEHOLDER, id.as_str())
    }

    pub fn embed_link(&self, id: &VideoId) -> String {
        self.embed_template.replace(ID_PLACEHOLDER, id.as_str())
    }

    pub fn with_playlist_hosts(mut self, primary: impl Into<String>, fallback: Option<String>) -> Self {
        self.playlist_primary = primary.into();
        self.playlist_fallback = fallback;
        self
    }

    pub fn with_conversion_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.conversion_endpoint = endpoint.into();
        self
    }

    pub fn with_strategy(mut self, strategy: ResolutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_direct_link_template(mut self, template: impl Into<String>) -> Self {
        self.direct_link_template = template.into();
        self
    }

    pub fn with_embed_template(mut self, template: impl Into<String>) -> Self {
        self.embed_template = template.into();
        self
    }

    pub fn with_video_options(mut self, codec: impl Into<String>, quality: impl Into<String>) -> Self {
        self.video_codec = codec.into();
        self.video_quality = quality.into();
        self
    }

    pub fn with_audio_format(mut self, format: impl Into<String>) -> Self {
        self.audio_format = format.into();
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn with_proxy(mut self, proxy: Option<String>) -> Self {
        self.proxy = proxy;
        self
    }
}
