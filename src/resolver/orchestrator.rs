// Provider client with listing fallback
//
// Strategy:
// 1. Playlist listing: primary host, then exactly one fallback host, strictly in order
// 2. Conversion: single provider, single attempt

use super::config::ProviderConfig;
use super::errors::ResolveError;
use super::models::{DownloadLink, FormatHint, PlaylistEntry, PlaylistId, VideoId};
use super::providers::{CobaltConverter, PipedPlaylistSource};
use super::traits::{ConversionRequest, ConversionService, PlaylistSource};
use super::utils::build_http_client;

pub struct ProviderClient {
    config: ProviderConfig,
    primary: Box<dyn PlaylistSource>,
    fallback: Option<Box<dyn PlaylistSource>>,
    converter: Box<dyn ConversionService>,
}

impl ProviderClient {
    /// Wire the HTTP providers named in `config`
    pub fn from_config(config: ProviderConfig) -> Result<Self, ResolveError> {
        config.validate()?;
        let client = build_http_client(&config)?;

        let primary = PipedPlaylistSource::new(config.playlist_primary.clone(), client.clone());
        let fallback = config
            .playlist_fallback
            .clone()
            .map(|host| Box::new(PipedPlaylistSource::new(host, client.clone())) as Box<dyn PlaylistSource>);
        let converter = CobaltConverter::new(config.conversion_endpoint.clone(), client);

        Ok(Self::new(config, Box::new(primary), fallback, Box::new(converter)))
    }

    pub fn new(
        config: ProviderConfig,
        primary: Box<dyn PlaylistSource>,
        fallback: Option<Box<dyn PlaylistSource>>,
        converter: Box<dyn ConversionService>,
    ) -> Self {
        Self {
            config,
            primary,
            fallback,
            converter,
        }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// List a playlist, falling back to the alternate host once.
    ///
    /// The fallback attempt starts only after the primary has settled.
    pub async fn list_playlist(&self, id: &PlaylistId) -> Result<Vec<PlaylistEntry>, ResolveError> {
        log::info!("[Providers] Listing playlist {} via {}", id, self.primary.name());

        let primary_err = match self.primary.fetch_playlist(id).await {
            Ok(entries) => {
                log::info!("[Providers] ✓ {} returned {} entries", self.primary.name(), entries.len());
                return Ok(entries);
            }
            Err(e) => {
                log::warn!("[Providers] ✗ {} failed: {}", self.primary.name(), e);
                e
            }
        };

        let Some(fallback) = &self.fallback else {
            return Err(ResolveError::PlaylistUnavailable {
                primary: primary_err.to_string(),
                fallback: "no fallback configured".to_string(),
            });
        };

        log::info!("[Providers] Trying fallback: {}", fallback.name());
        match fallback.fetch_playlist(id).await {
            Ok(entries) => {
                log::info!("[Providers] ✓ Fallback {} returned {} entries", fallback.name(), entries.len());
                Ok(entries)
            }
            Err(e) => {
                log::warn!("[Providers] ✗ Fallback {} failed: {}", fallback.name(), e);
                Err(ResolveError::PlaylistUnavailable {
                    primary: primary_err.to_string(),
                    fallback: e.to_string(),
                })
            }
        }
    }

    /// Resolve a download link for a bare video id or any supported URL.
    ///
    /// Single attempt: `ConversionFailed` when the provider reports an
    /// error, `ProviderUnreachable` for transport or parse failures.
    pub async fn resolve_download(
        &self,
        identifier_or_url: &str,
        format: FormatHint,
    ) -> Result<DownloadLink, ResolveError> {
        let raw = identifier_or_url.trim();
        let bare_id = if raw.contains(['/', ':', '?', '&', '=']) {
            None
        } else {
            VideoId::parse(raw)
        };
        let request = match bare_id {
            Some(id) => ConversionRequest::for_video(&id, format, &self.config),
            None => ConversionRequest::for_url(raw, format, &self.config)?,
        };
        self.convert(&request).await
    }

    pub async fn convert(&self, request: &ConversionRequest) -> Result<DownloadLink, ResolveError> {
        log::info!("[Providers] Converting {} as {} via {}", request.url, request.format, self.converter.name());
        let result = self.converter.convert(request).await.map_err(|e| match e {
            ResolveError::MalformedResponse(msg) => ResolveError::ProviderUnreachable(msg),
            other => other,
        });
        match &result {
            Ok(_) => log::info!("[Providers] ✓ {} ready", request.format),
            Err(e) => log::warn!("[Providers] ✗ {} failed: {}", request.format, e),
        }
        result
    }
}
