// Playlist selection tracking

use std::collections::HashSet;

use super::models::{PlaylistEntry, VideoId};

/// Loaded playlist entries plus the set the user has ticked
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    entries: Vec<PlaylistEntry>,
    selected: HashSet<VideoId>,
}

impl SelectionTracker {
    /// Start with every entry unselected
    pub fn new(entries: Vec<PlaylistEntry>) -> Self {
        Self {
            entries,
            selected: HashSet::new(),
        }
    }

    pub fn entries(&self) -> &[PlaylistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// "Playlist: N videos"
    pub fn heading(&self) -> String {
        format!("Playlist: {} videos", self.entries.len())
    }

    pub fn is_selected(&self, id: &VideoId) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.entries.iter().filter(|e| self.selected.contains(&e.video_id)).count()
    }

    fn all_selected(&self) -> bool {
        self.entries.iter().all(|e| self.selected.contains(&e.video_id))
    }

    /// Unselect everything if everything is selected, otherwise select everything
    pub fn toggle_all(&mut self) {
        if self.all_selected() {
            self.selected.clear();
        } else {
            self.selected = self.entries.iter().map(|e| e.video_id.clone()).collect();
        }
    }

    /// Flip one entry; ids not in the listing are ignored
    pub fn toggle(&mut self, id: &VideoId) {
        if !self.entries.iter().any(|e| &e.video_id == id) {
            return;
        }
        if !self.selected.remove(id) {
            self.selected.insert(id.clone());
        }
    }

    /// Selected entries in listing order
    pub fn selected(&self) -> Vec<PlaylistEntry> {
        self.entries
            .iter()
            .filter(|e| self.selected.contains(&e.video_id))
            .cloned()
            .collect()
    }
}
