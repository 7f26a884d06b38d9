// Renderer collaborator
//
// The session calls these on every transition; the UI layer owns all
// presentation.

use super::errors::ResolveError;
use super::models::{PlaylistEntry, ResultDescriptor};

pub trait Renderer {
    fn show_error(&mut self, error: &ResolveError);

    /// Drop every displayed result and playlist
    fn clear_results(&mut self);

    /// Show a result, or redraw it after its status changed
    fn render_result(&mut self, descriptor: &ResultDescriptor);

    fn render_playlist(&mut self, entries: &[PlaylistEntry]);

    fn show_playlist_loading(&mut self, loading: bool);
}

/// Renderer that only writes log lines, for headless use
#[derive(Debug, Default)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn show_error(&mut self, error: &ResolveError) {
        log::warn!("[Render] error: {}", error);
    }

    fn clear_results(&mut self) {
        log::debug!("[Render] clear");
    }

    fn render_result(&mut self, descriptor: &ResultDescriptor) {
        log::info!("[Render] result #{} {} ({})", descriptor.id, descriptor.title, descriptor.video_id);
    }

    fn render_playlist(&mut self, entries: &[PlaylistEntry]) {
        log::info!("[Render] playlist with {} entries", entries.len());
    }

    fn show_playlist_loading(&mut self, loading: bool) {
        log::debug!("[Render] playlist loading: {}", loading);
    }
}
