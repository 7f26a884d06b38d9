// Resolver module - URL classification and multi-provider resolution

pub mod assembler;
pub mod classify;
pub mod config;
pub mod errors;
pub mod extract;
pub mod models;
pub mod orchestrator;
pub mod providers;
pub mod renderer;
pub mod selection;
pub mod session;
pub mod traits;
pub mod utils;

pub use assembler::ResultAssembler;
pub use classify::classify;
pub use config::ProviderConfig;
pub use errors::ResolveError;
pub use extract::{extract_playlist_id, extract_video_id};
pub use models::{
    Classification, DownloadLink, DownloadStatus, FormatAction, FormatHint, PlaylistEntry, PlaylistId,
    ResolutionStrategy, ResultContent, ResultDescriptor, VideoId,
};
pub use orchestrator::ProviderClient;
pub use renderer::{LogRenderer, Renderer};
pub use selection::SelectionTracker;
pub use session::{Completion, DownloadTicket, PlaylistLoad, Session, SessionState, Submission};
pub use traits::{ConversionRequest, ConversionService, PlaylistSource};
