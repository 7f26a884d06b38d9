// Result assembly
//
// One pipeline for every resolution strategy: the strategy only decides
// what goes into `ResultContent`.

use super::config::ProviderConfig;
use super::models::{
    DownloadLink, DownloadStatus, FormatAction, FormatHint, PlaylistEntry, ResolutionStrategy,
    ResultContent, ResultDescriptor, VideoId,
};

/// Title used when the provider gave none
pub const DEFAULT_TITLE: &str = "Download available";

pub struct ResultAssembler {
    config: ProviderConfig,
    next_id: u64,
}

impl ResultAssembler {
    pub fn new(config: ProviderConfig) -> Self {
        Self { config, next_id: 1 }
    }

    pub fn strategy(&self) -> ResolutionStrategy {
        self.config.strategy
    }

    /// Descriptor for one video. Only the `id` differs between two calls
    /// with the same input.
    pub fn build_single_result(&mut self, video_id: &VideoId, title: &str) -> ResultDescriptor {
        self.build(video_id, video_id.watch_url(), title)
    }

    /// One descriptor per entry, in the given order
    pub fn build_batch_results(&mut self, entries: &[PlaylistEntry]) -> Vec<ResultDescriptor> {
        entries
            .iter()
            .map(|e| self.build(&e.video_id, e.source_url.clone(), &e.title))
            .collect()
    }

    fn build(&mut self, video_id: &VideoId, source_url: String, title: &str) -> ResultDescriptor {
        let content = match self.config.strategy {
            ResolutionStrategy::CanonicalLink => ResultContent::Links(vec![DownloadLink {
                label: FormatHint::Audio.label().to_string(),
                href: self.config.direct_link(video_id),
            }]),
            ResolutionStrategy::EmbedWidget => ResultContent::Embed {
                widget_url: self.config.embed_link(video_id),
            },
            ResolutionStrategy::ProviderConversion => ResultContent::Actions(
                [FormatHint::Audio, FormatHint::Video]
                    .into_iter()
                    .map(|format| FormatAction {
                        format,
                        status: DownloadStatus::Idle,
                        attempt: 0,
                    })
                    .collect(),
            ),
        };

        let title = title.trim();
        let id = self.next_id;
        self.next_id += 1;

        ResultDescriptor {
            id,
            video_id: video_id.clone(),
            source_url,
            title: if title.is_empty() { DEFAULT_TITLE } else { title }.to_string(),
            content,
        }
    }
}
