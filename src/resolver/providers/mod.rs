// Remote provider implementations

pub mod cobalt;
pub mod piped;

pub use cobalt::CobaltConverter;
pub use piped::{parse_listing, PipedPlaylistSource};
