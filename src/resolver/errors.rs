// Error types for URL resolution and provider calls

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Neither a video nor a playlist identifier could be extracted
    InvalidUrl(String),

    /// Both the primary and the fallback listing providers failed
    PlaylistUnavailable { primary: String, fallback: String },

    /// Network or parse failure while talking to a provider
    ProviderUnreachable(String),

    /// The conversion provider answered with an error status
    ConversionFailed(String),

    /// Provider answered, but the payload lacks expected fields
    MalformedResponse(String),

    /// A batch was confirmed with no playlist entry selected
    EmptySelection,

    /// A batch was confirmed while no playlist is loaded
    NoPlaylistLoaded,

    /// The result offers no on-demand action for this format
    UnsupportedAction(String),

    /// No displayed result carries this id
    UnknownResult(u64),

    /// Provider configuration is unusable
    InvalidConfig(String),
}

impl ResolveError {
    /// Whether re-triggering the same user action could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ProviderUnreachable(_) | Self::ConversionFailed(_) | Self::PlaylistUnavailable { .. }
        )
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            Self::PlaylistUnavailable { primary, fallback } => write!(
                f,
                "Could not read the playlist. Check that it is public.\n\
                 primary: {}\n\
                 fallback: {}",
                primary, fallback
            ),
            Self::ProviderUnreachable(msg) => write!(f, "Provider unreachable: {}", msg),
            Self::ConversionFailed(msg) => write!(f, "Conversion failed: {}", msg),
            Self::MalformedResponse(msg) => write!(f, "Malformed provider response: {}", msg),
            Self::EmptySelection => write!(f, "Select at least one video"),
            Self::NoPlaylistLoaded => write!(f, "No playlist loaded"),
            Self::UnsupportedAction(what) => write!(f, "No {} action on this result", what),
            Self::UnknownResult(id) => write!(f, "No result with id {}", id),
            Self::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ResolveError {}

// Transport failures never carry a domain meaning
impl From<reqwest::Error> for ResolveError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return Self::ProviderUnreachable(format!("timed out: {}", e));
        }
        if e.is_connect() {
            return Self::ProviderUnreachable(format!("connection failed: {}", e));
        }
        if e.is_decode() {
            return Self::MalformedResponse(e.to_string());
        }
        Self::ProviderUnreachable(e.to_string())
    }
}

impl From<serde_json::Error> for ResolveError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedResponse(format!("JSON parse error: {}", e))
    }
}
