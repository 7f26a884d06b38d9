// Query session: one active query, generation-guarded async completions
//
// Remote calls never borrow the session. A `begin_*` call hands out a
// ticket stamped with the current generation, the caller awaits the
// provider, and the matching `complete_*` call applies the outcome only if
// no newer query was submitted in between.

use std::fmt;

use super::assembler::ResultAssembler;
use super::classify::classify;
use super::config::ProviderConfig;
use super::errors::ResolveError;
use super::models::{
    Classification, DownloadLink, DownloadStatus, FormatHint, PlaylistEntry, PlaylistId,
    ResultContent, ResultDescriptor, VideoId,
};
use super::orchestrator::ProviderClient;
use super::renderer::Renderer;
use super::selection::SelectionTracker;

pub const TITLE_VIDEO_FOUND: &str = "Video found";
pub const TITLE_CURRENT_VIDEO: &str = "Current video";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Classified,
    PlaylistLoading,
    PlaylistLoaded,
    DownloadPending,
    DownloadReady,
    DownloadFailed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Classified => "classified",
            Self::PlaylistLoading => "playlist-loading",
            Self::PlaylistLoaded => "playlist-loaded",
            Self::DownloadPending => "download-pending",
            Self::DownloadReady => "download-ready",
            Self::DownloadFailed => "download-failed",
        };
        f.write_str(s)
    }
}

/// Whether an async outcome was applied or dropped as superseded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub generation: u64,
    pub classification: Classification,
    /// Set when the URL is a pure playlist; the load has already started
    pub playlist_load: Option<PlaylistLoad>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistLoad {
    generation: u64,
    playlist_id: PlaylistId,
}

impl PlaylistLoad {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn playlist_id(&self) -> &PlaylistId {
        &self.playlist_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTicket {
    generation: u64,
    result_id: u64,
    format: FormatHint,
    attempt: u64,
    target: String,
}

impl DownloadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn result_id(&self) -> u64 {
        self.result_id
    }

    pub fn format(&self) -> FormatHint {
        self.format
    }

    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// Identifier or URL to hand to `ProviderClient::resolve_download`
    pub fn target(&self) -> &str {
        &self.target
    }
}

pub struct Session<R: Renderer> {
    renderer: R,
    assembler: ResultAssembler,
    generation: u64,
    state: SessionState,
    classification: Option<Classification>,
    pending_playlist: Option<PlaylistId>,
    playlist_loading: bool,
    playlist: Option<SelectionTracker>,
    results: Vec<ResultDescriptor>,
}

impl<R: Renderer> Session<R> {
    pub fn new(config: ProviderConfig, renderer: R) -> Self {
        Self {
            renderer,
            assembler: ResultAssembler::new(config),
            generation: 0,
            state: SessionState::Idle,
            classification: None,
            pending_playlist: None,
            playlist_loading: false,
            playlist: None,
            results: Vec::new(),
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn classification(&self) -> Option<&Classification> {
        self.classification.as_ref()
    }

    /// Playlist known from the URL but not loaded yet
    pub fn pending_playlist(&self) -> Option<&PlaylistId> {
        self.pending_playlist.as_ref()
    }

    /// Loaded playlist; `None` means no playlist, not an empty selection
    pub fn playlist(&self) -> Option<&SelectionTracker> {
        self.playlist.as_ref()
    }

    pub fn playlist_mut(&mut self) -> Option<&mut SelectionTracker> {
        self.playlist.as_mut()
    }

    pub fn results(&self) -> &[ResultDescriptor] {
        &self.results
    }

    pub fn result(&self, id: u64) -> Option<&ResultDescriptor> {
        self.results.iter().find(|d| d.id == id)
    }

    fn set_state(&mut self, state: SessionState) {
        if self.state != state {
            log::debug!("[Session] {} -> {} (gen {})", self.state, state, self.generation);
            self.state = state;
        }
    }

    fn any_download_pending(&self) -> bool {
        self.results.iter().any(|d| match &d.content {
            ResultContent::Actions(actions) => actions.iter().any(|a| a.status.is_pending()),
            _ => false,
        })
    }

    /// Move to `settled` unless some download is still in flight
    fn settle_state(&mut self, settled: SessionState) {
        if self.any_download_pending() {
            self.set_state(SessionState::DownloadPending);
        } else {
            self.set_state(settled);
        }
    }

    fn reset(&mut self) {
        self.generation += 1;
        self.classification = None;
        self.pending_playlist = None;
        self.playlist_loading = false;
        self.playlist = None;
        self.results.clear();
        self.renderer.clear_results();
        self.renderer.show_playlist_loading(false);
    }

    fn show_single(&mut self, video_id: &VideoId, title: &str) {
        let descriptor = self.assembler.build_single_result(video_id, title);
        self.renderer.render_result(&descriptor);
        self.results.push(descriptor);
    }

    /// Start a new query. Everything from the previous query is discarded
    /// and its in-flight completions become stale.
    pub fn submit(&mut self, url: &str) -> Submission {
        self.reset();
        let classification = classify(url);
        log::info!("[Session] Query #{} classified as {:?}", self.generation, classification);

        let mut playlist_load = None;
        match &classification {
            Classification::Invalid => {
                self.set_state(SessionState::Idle);
                self.renderer.show_error(&ResolveError::InvalidUrl(url.trim().to_string()));
            }
            Classification::Video(v) => {
                self.set_state(SessionState::Classified);
                self.show_single(v, TITLE_VIDEO_FOUND);
            }
            Classification::VideoInPlaylist(v, p) => {
                self.set_state(SessionState::Classified);
                self.show_single(v, TITLE_CURRENT_VIDEO);
                self.pending_playlist = Some(p.clone());
            }
            Classification::Playlist(p) => {
                self.set_state(SessionState::Classified);
                self.pending_playlist = Some(p.clone());
                playlist_load = self.begin_playlist_load();
            }
        }

        self.classification = Some(classification.clone());
        Submission {
            generation: self.generation,
            classification,
            playlist_load,
        }
    }

    /// Start loading the pending playlist. `None` if there is nothing to
    /// load or a load is already running.
    pub fn begin_playlist_load(&mut self) -> Option<PlaylistLoad> {
        if self.playlist_loading {
            return None;
        }
        let playlist_id = self.pending_playlist.clone()?;
        self.playlist_loading = true;
        self.set_state(SessionState::PlaylistLoading);
        self.renderer.show_playlist_loading(true);
        Some(PlaylistLoad {
            generation: self.generation,
            playlist_id,
        })
    }

    pub fn complete_playlist_load(
        &mut self,
        load: PlaylistLoad,
        outcome: Result<Vec<PlaylistEntry>, ResolveError>,
    ) -> Completion {
        if load.generation != self.generation || !self.playlist_loading {
            log::debug!(
                "[Session] Dropping stale playlist {} (gen {}, current {})",
                load.playlist_id,
                load.generation,
                self.generation
            );
            return Completion::Stale;
        }

        self.playlist_loading = false;
        self.renderer.show_playlist_loading(false);
        match outcome {
            Ok(entries) => {
                log::info!("[Session] Playlist {} loaded with {} entries", load.playlist_id, entries.len());
                self.pending_playlist = None;
                self.renderer.render_playlist(&entries);
                self.playlist = Some(SelectionTracker::new(entries));
                self.set_state(SessionState::PlaylistLoaded);
            }
            Err(e) => {
                self.renderer.show_error(&e);
                if self.results.is_empty() {
                    // Nothing else came from this query: back to square one
                    self.classification = None;
                    self.pending_playlist = None;
                    self.set_state(SessionState::Idle);
                } else {
                    self.settle_state(SessionState::Classified);
                }
            }
        }
        Completion::Applied
    }

    /// Turn the selected playlist entries into results, replacing the listing
    pub fn confirm_selection(&mut self) -> Result<&[ResultDescriptor], ResolveError> {
        let selected = match &self.playlist {
            Some(tracker) => tracker.selected(),
            None => return Err(ResolveError::NoPlaylistLoaded),
        };
        if selected.is_empty() {
            let err = ResolveError::EmptySelection;
            self.renderer.show_error(&err);
            return Err(err);
        }

        let descriptors = self.assembler.build_batch_results(&selected);
        self.playlist = None;
        self.renderer.clear_results();
        for descriptor in &descriptors {
            self.renderer.render_result(descriptor);
        }
        self.results = descriptors;
        self.set_state(SessionState::Classified);
        Ok(&self.results)
    }

    /// Mark one action of a result as pending and hand out the ticket
    pub fn begin_download(&mut self, result_id: u64, format: FormatHint) -> Result<DownloadTicket, ResolveError> {
        let descriptor = self
            .results
            .iter_mut()
            .find(|d| d.id == result_id)
            .ok_or(ResolveError::UnknownResult(result_id))?;
        let target = descriptor.source_url.clone();
        let action = descriptor
            .action_mut(format)
            .ok_or_else(|| ResolveError::UnsupportedAction(format.to_string()))?;
        action.status = DownloadStatus::Pending;
        action.attempt += 1;
        let attempt = action.attempt;

        self.renderer.render_result(descriptor);
        self.set_state(SessionState::DownloadPending);
        Ok(DownloadTicket {
            generation: self.generation,
            result_id,
            format,
            attempt,
            target,
        })
    }

    pub fn complete_download(
        &mut self,
        ticket: DownloadTicket,
        outcome: Result<DownloadLink, ResolveError>,
    ) -> Completion {
        if ticket.generation != self.generation {
            log::debug!("[Session] Dropping stale download for result #{}", ticket.result_id);
            return Completion::Stale;
        }
        let Some(descriptor) = self.results.iter_mut().find(|d| d.id == ticket.result_id) else {
            log::debug!("[Session] Result #{} is gone, dropping download", ticket.result_id);
            return Completion::Stale;
        };
        let Some(action) = descriptor.action_mut(ticket.format) else {
            return Completion::Stale;
        };
        if action.attempt != ticket.attempt {
            log::debug!(
                "[Session] Dropping superseded {} attempt {} for result #{}",
                ticket.format,
                ticket.attempt,
                ticket.result_id
            );
            return Completion::Stale;
        }

        let next_state = match outcome {
            Ok(link) => {
                action.status = DownloadStatus::Ready(link);
                SessionState::DownloadReady
            }
            Err(e) => {
                log::warn!("[Session] Result #{} {} failed: {}", ticket.result_id, ticket.format, e);
                action.status = DownloadStatus::Failed(e);
                SessionState::DownloadFailed
            }
        };
        self.renderer.render_result(descriptor);
        self.settle_state(next_state);
        Completion::Applied
    }

    /// Load the pending playlist through `client`
    pub async fn load_playlist(&mut self, client: &ProviderClient) -> Option<Completion> {
        let load = self.begin_playlist_load()?;
        let outcome = client.list_playlist(load.playlist_id()).await;
        Some(self.complete_playlist_load(load, outcome))
    }

    /// Submit a URL and, for a pure playlist, wait for its listing
    pub async fn submit_and_load(&mut self, url: &str, client: &ProviderClient) -> Classification {
        let submission = self.submit(url);
        if let Some(load) = submission.playlist_load {
            let outcome = client.list_playlist(load.playlist_id()).await;
            self.complete_playlist_load(load, outcome);
        }
        submission.classification
    }

    /// Resolve one action of a result through `client`
    pub async fn download(
        &mut self,
        client: &ProviderClient,
        result_id: u64,
        format: FormatHint,
    ) -> Result<Completion, ResolveError> {
        let ticket = self.begin_download(result_id, format)?;
        let outcome = client.resolve_download(ticket.target(), ticket.format()).await;
        Ok(self.complete_download(ticket, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::models::ResolutionStrategy;

    #[derive(Debug, Default)]
    struct Recorder {
        events: Vec<String>,
        playlists: Vec<usize>,
        errors: Vec<ResolveError>,
    }

    impl Renderer for Recorder {
        fn show_error(&mut self, error: &ResolveError) {
            self.errors.push(error.clone());
            self.events.push("error".into());
        }

        fn clear_results(&mut self) {
            self.events.push("clear".into());
        }

        fn render_result(&mut self, descriptor: &ResultDescriptor) {
            self.events.push(format!("result:{}", descriptor.title));
        }

        fn render_playlist(&mut self, entries: &[PlaylistEntry]) {
            self.playlists.push(entries.len());
            self.events.push("playlist".into());
        }

        fn show_playlist_loading(&mut self, loading: bool) {
            self.events.push(format!("loading:{}", loading));
        }
    }

    fn session(strategy: ResolutionStrategy) -> Session<Recorder> {
        Session::new(ProviderConfig::default().with_strategy(strategy), Recorder::default())
    }

    fn entries(ids: &[&str]) -> Vec<PlaylistEntry> {
        ids.iter()
            .map(|id| PlaylistEntry::new(VideoId::parse(id).unwrap(), format!("t-{}", &id[..1])))
            .collect()
    }

    fn link() -> DownloadLink {
        DownloadLink {
            label: "MP3".into(),
            href: "https://cdn.example/a".into(),
        }
    }

    #[test]
    fn test_invalid_url_shows_error() {
        let mut s = session(ResolutionStrategy::EmbedWidget);
        let sub = s.submit("not a url");
        assert_eq!(sub.classification, Classification::Invalid);
        assert_eq!(s.state(), SessionState::Idle);
        assert!(matches!(s.renderer().errors[0], ResolveError::InvalidUrl(_)));
        assert!(s.results().is_empty());
    }

    #[test]
    fn test_single_video_renders_result() {
        let mut s = session(ResolutionStrategy::EmbedWidget);
        let sub = s.submit("https://youtu.be/AAAAAAAAAAA");
        assert!(sub.playlist_load.is_none());
        assert_eq!(s.state(), SessionState::Classified);
        assert_eq!(s.results().len(), 1);
        assert_eq!(s.results()[0].title, TITLE_VIDEO_FOUND);
    }

    #[test]
    fn test_video_in_playlist_defers_listing() {
        let mut s = session(ResolutionStrategy::EmbedWidget);
        let sub = s.submit("https://www.youtube.com/watch?v=AAAAAAAAAAA&list=PL1");
        assert!(sub.playlist_load.is_none());
        assert_eq!(s.results()[0].title, TITLE_CURRENT_VIDEO);
        assert_eq!(s.pending_playlist().unwrap().as_str(), "PL1");

        let load = s.begin_playlist_load().unwrap();
        assert_eq!(s.state(), SessionState::PlaylistLoading);
        assert!(s.begin_playlist_load().is_none());
        assert_eq!(s.complete_playlist_load(load, Ok(entries(&["BBBBBBBBBBB"]))), Completion::Applied);
        assert_eq!(s.state(), SessionState::PlaylistLoaded);
        assert!(s.pending_playlist().is_none());
        assert_eq!(s.results().len(), 1);
    }

    #[test]
    fn test_playlist_starts_loading_immediately() {
        let mut s = session(ResolutionStrategy::EmbedWidget);
        let sub = s.submit("https://www.youtube.com/playlist?list=PL1");
        let load = sub.playlist_load.unwrap();
        assert_eq!(load.playlist_id().as_str(), "PL1");
        assert_eq!(s.state(), SessionState::PlaylistLoading);
        assert!(s.renderer().events.contains(&"loading:true".to_string()));

        s.complete_playlist_load(load, Ok(entries(&["AAAAAAAAAAA", "BBBBBBBBBBB"])));
        assert_eq!(s.renderer().playlists, vec![2]);
        assert_eq!(s.playlist().unwrap().heading(), "Playlist: 2 videos");
    }

    #[test]
    fn test_stale_playlist_response_is_dropped() {
        let mut s = session(ResolutionStrategy::EmbedWidget);
        let old = s.submit("https://www.youtube.com/playlist?list=PL1").playlist_load.unwrap();
        s.submit("https://youtu.be/AAAAAAAAAAA");

        let completion = s.complete_playlist_load(old, Ok(entries(&["BBBBBBBBBBB"])));
        assert_eq!(completion, Completion::Stale);
        assert!(s.renderer().playlists.is_empty());
        assert!(s.playlist().is_none());
        assert_eq!(s.state(), SessionState::Classified);
    }

    #[test]
    fn test_stale_across_two_playlist_queries() {
        let mut s = session(ResolutionStrategy::EmbedWidget);
        let first = s.submit("https://www.youtube.com/playlist?list=PL1").playlist_load.unwrap();
        let second = s.submit("https://www.youtube.com/playlist?list=PL2").playlist_load.unwrap();

        assert_eq!(s.complete_playlist_load(second, Ok(entries(&["AAAAAAAAAAA"]))), Completion::Applied);
        assert_eq!(
            s.complete_playlist_load(first, Ok(entries(&["BBBBBBBBBBB", "CCCCCCCCCCC"]))),
            Completion::Stale
        );
        assert_eq!(s.playlist().unwrap().len(), 1);
    }

    #[test]
    fn test_playlist_failure_without_results_returns_to_idle() {
        let mut s = session(ResolutionStrategy::EmbedWidget);
        let load = s.submit("https://www.youtube.com/playlist?list=PL1").playlist_load.unwrap();
        let err = ResolveError::PlaylistUnavailable {
            primary: "a".into(),
            fallback: "b".into(),
        };
        s.complete_playlist_load(load, Err(err.clone()));
        assert_eq!(s.state(), SessionState::Idle);
        assert!(s.classification().is_none());
        assert_eq!(s.renderer().errors, vec![err]);
        assert!(s.renderer().events.contains(&"loading:false".to_string()));
    }

    #[test]
    fn test_playlist_failure_keeps_current_video() {
        let mut s = session(ResolutionStrategy::EmbedWidget);
        s.submit("https://www.youtube.com/watch?v=AAAAAAAAAAA&list=PL1");
        let load = s.begin_playlist_load().unwrap();
        s.complete_playlist_load(
            load,
            Err(ResolveError::PlaylistUnavailable {
                primary: "a".into(),
                fallback: "b".into(),
            }),
        );
        assert_eq!(s.state(), SessionState::Classified);
        assert_eq!(s.results().len(), 1);
        assert!(s.pending_playlist().is_some());
    }

    #[test]
    fn test_confirm_selection() {
        let mut s = session(ResolutionStrategy::EmbedWidget);
        let load = s.submit("https://www.youtube.com/playlist?list=PL1").playlist_load.unwrap();
        s.complete_playlist_load(load, Ok(entries(&["AAAAAAAAAAA", "BBBBBBBBBBB", "CCCCCCCCCCC"])));

        assert_eq!(s.confirm_selection().unwrap_err(), ResolveError::EmptySelection);
        assert!(s.playlist().is_some());

        let tracker = s.playlist_mut().unwrap();
        tracker.toggle(&VideoId::parse("CCCCCCCCCCC").unwrap());
        tracker.toggle(&VideoId::parse("AAAAAAAAAAA").unwrap());

        let titles: Vec<String> = s.confirm_selection().unwrap().iter().map(|d| d.title.clone()).collect();
        assert_eq!(titles, vec!["t-A", "t-C"]);
        assert!(s.playlist().is_none());
        assert_eq!(s.confirm_selection().unwrap_err(), ResolveError::NoPlaylistLoaded);
    }

    #[test]
    fn test_download_lifecycle() {
        let mut s = session(ResolutionStrategy::ProviderConversion);
        s.submit("https://youtu.be/AAAAAAAAAAA");
        let id = s.results()[0].id;

        let audio = s.begin_download(id, FormatHint::Audio).unwrap();
        let video = s.begin_download(id, FormatHint::Video).unwrap();
        assert_eq!(audio.target(), "https://www.youtube.com/watch?v=AAAAAAAAAAA");
        assert_eq!(s.state(), SessionState::DownloadPending);

        s.complete_download(video, Err(ResolveError::ConversionFailed("too long".into())));
        assert_eq!(s.state(), SessionState::DownloadPending);
        s.complete_download(audio, Ok(link()));
        assert_eq!(s.state(), SessionState::DownloadReady);

        let d = s.result(id).unwrap();
        assert_eq!(d.action(FormatHint::Audio).unwrap().status, DownloadStatus::Ready(link()));
        assert!(matches!(
            d.action(FormatHint::Video).unwrap().status,
            DownloadStatus::Failed(ResolveError::ConversionFailed(_))
        ));
    }

    #[test]
    fn test_download_while_playlist_loads() {
        let mut s = session(ResolutionStrategy::ProviderConversion);
        s.submit("https://www.youtube.com/watch?v=AAAAAAAAAAA&list=PL1");
        let load = s.begin_playlist_load().unwrap();
        let ticket = s.begin_download(s.results()[0].id, FormatHint::Audio).unwrap();

        assert_eq!(s.complete_playlist_load(load, Ok(entries(&["BBBBBBBBBBB"]))), Completion::Applied);
        assert_eq!(s.complete_download(ticket, Ok(link())), Completion::Applied);
        assert_eq!(s.playlist().unwrap().len(), 1);
        assert_eq!(s.state(), SessionState::DownloadReady);
    }

    #[test]
    fn test_superseded_attempt_cannot_overwrite_retry() {
        let mut s = session(ResolutionStrategy::ProviderConversion);
        s.submit("https://youtu.be/AAAAAAAAAAA");
        let id = s.results()[0].id;

        let first = s.begin_download(id, FormatHint::Audio).unwrap();
        let retry = s.begin_download(id, FormatHint::Audio).unwrap();
        assert_eq!(retry.attempt(), first.attempt() + 1);

        assert_eq!(s.complete_download(retry, Ok(link())), Completion::Applied);
        assert_eq!(
            s.complete_download(first, Err(ResolveError::ProviderUnreachable("timed out".into()))),
            Completion::Stale
        );
        let d = s.result(id).unwrap();
        assert_eq!(d.action(FormatHint::Audio).unwrap().status, DownloadStatus::Ready(link()));
        assert_eq!(s.state(), SessionState::DownloadReady);
    }

    #[test]
    fn test_retry_keeps_pending_until_latest_attempt_settles() {
        let mut s = session(ResolutionStrategy::ProviderConversion);
        s.submit("https://youtu.be/AAAAAAAAAAA");
        let id = s.results()[0].id;

        let first = s.begin_download(id, FormatHint::Video).unwrap();
        let retry = s.begin_download(id, FormatHint::Video).unwrap();
        assert_eq!(s.complete_download(first, Ok(link())), Completion::Stale);
        assert!(s.result(id).unwrap().action(FormatHint::Video).unwrap().status.is_pending());
        assert_eq!(s.state(), SessionState::DownloadPending);

        s.complete_download(retry, Err(ResolveError::ConversionFailed("too long".into())));
        assert_eq!(s.state(), SessionState::DownloadFailed);
    }

    #[test]
    fn test_playlist_failure_during_download_stays_pending() {
        let mut s = session(ResolutionStrategy::ProviderConversion);
        s.submit("https://www.youtube.com/watch?v=AAAAAAAAAAA&list=PL1");
        let load = s.begin_playlist_load().unwrap();
        let ticket = s.begin_download(s.results()[0].id, FormatHint::Audio).unwrap();

        let err = ResolveError::PlaylistUnavailable {
            primary: "a".into(),
            fallback: "b".into(),
        };
        assert_eq!(s.complete_playlist_load(load, Err(err)), Completion::Applied);
        assert_eq!(s.state(), SessionState::DownloadPending);

        s.complete_download(ticket, Ok(link()));
        assert_eq!(s.state(), SessionState::DownloadReady);
    }

    #[test]
    fn test_stale_download_is_dropped() {
        let mut s = session(ResolutionStrategy::ProviderConversion);
        s.submit("https://youtu.be/AAAAAAAAAAA");
        let ticket = s.begin_download(s.results()[0].id, FormatHint::Audio).unwrap();
        s.submit("https://youtu.be/BBBBBBBBBBB");

        assert_eq!(s.complete_download(ticket, Ok(link())), Completion::Stale);
        let d = &s.results()[0];
        assert_eq!(d.action(FormatHint::Audio).unwrap().status, DownloadStatus::Idle);
    }

    #[test]
    fn test_download_errors() {
        let mut s = session(ResolutionStrategy::EmbedWidget);
        s.submit("https://youtu.be/AAAAAAAAAAA");
        let id = s.results()[0].id;
        assert!(matches!(s.results()[0].content, ResultContent::Embed { .. }));
        assert!(matches!(
            s.begin_download(id, FormatHint::Audio),
            Err(ResolveError::UnsupportedAction(_))
        ));
        assert_eq!(
            s.begin_download(999, FormatHint::Audio).unwrap_err(),
            ResolveError::UnknownResult(999)
        );
    }

    #[test]
    fn test_submit_resets_everything() {
        let mut s = session(ResolutionStrategy::EmbedWidget);
        let load = s.submit("https://www.youtube.com/watch?v=AAAAAAAAAAA&list=PL1");
        assert!(load.playlist_load.is_none());
        let before = s.generation();
        s.submit("");
        assert_eq!(s.generation(), before + 1);
        assert!(s.results().is_empty());
        assert!(s.pending_playlist().is_none());
        assert_eq!(s.classification(), Some(&Classification::Invalid));
    }
}
