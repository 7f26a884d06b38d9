use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::resolver::errors::ResolveError;
use crate::resolver::extract::video_id_from_stream_url;
use crate::resolver::models::{PlaylistEntry, PlaylistId};
use crate::resolver::traits::PlaylistSource;
use crate::resolver::utils::{join_url, snippet};

/// Piped-compatible listing service: `GET {base}/playlists/{id}`
pub struct PipedPlaylistSource {
    name: String,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistResponse {
    // Items stay untyped so one bad item cannot fail the whole listing
    related_streams: Option<Vec<Value>>,
}

impl PipedPlaylistSource {
    pub fn new(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into();
        let name = reqwest::Url::parse(&base_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| base_url.clone());
        Self { name, base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PlaylistSource for PipedPlaylistSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_playlist(&self, id: &PlaylistId) -> Result<Vec<PlaylistEntry>, ResolveError> {
        let url = join_url(&self.base_url, &format!("playlists/{}", id));
        log::debug!("[Piped] GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ResolveError::ProviderUnreachable(format!(
                "{} answered HTTP {}: {}",
                self.name,
                status.as_u16(),
                snippet(&body)
            )));
        }

        parse_listing(&body)
    }
}

/// Parse a listing body into entries.
///
/// A missing `relatedStreams` is a failure; items without a parsable video
/// id are skipped; an item without a title gets an empty one.
pub fn parse_listing(body: &str) -> Result<Vec<PlaylistEntry>, ResolveError> {
    let parsed: PlaylistResponse = serde_json::from_str(body)?;
    let items = parsed
        .related_streams
        .ok_or_else(|| ResolveError::MalformedResponse("relatedStreams missing".to_string()))?;

    let total = items.len();
    let entries: Vec<PlaylistEntry> = items
        .iter()
        .filter_map(|item| {
            let url = item["url"].as_str()?;
            match video_id_from_stream_url(url) {
                Some(id) => {
                    let title = item["title"].as_str().unwrap_or_default();
                    Some(PlaylistEntry::new(id, title))
                }
                None => {
                    log::warn!("[Piped] Skipping item with unparsable url: {}", url);
                    None
                }
            }
        })
        .collect();

    if entries.len() < total {
        log::warn!("[Piped] Kept {} of {} playlist items", entries.len(), total);
    }
    Ok(entries)
}
