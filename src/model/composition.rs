//! Compositions (musical works) and their listing projection.

use serde::{Deserialize, Serialize};

use super::{Credited, Identified, Movement};
use crate::sort_key::{sorted_person, sorted_title};

/// A musical work grouping one or more movements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conductor: Option<String>,
    /// Track of the first movement
    pub start_track: u32,
    /// Disk of the first movement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_disk: Option<u32>,
    #[serde(default)]
    pub movements: Vec<Movement>,
}

impl Composition {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            album_id: None,
            title: title.into(),
            subtitle: None,
            artist: None,
            composer: None,
            conductor: None,
            start_track: 0,
            start_disk: None,
            movements: Vec::new(),
        }
    }

    /// Recompute `start_track`/`start_disk` from the earliest movement.
    ///
    /// Movements order by `(disk, track)` with an absent disk first. A
    /// composition without movements keeps its current values.
    pub fn refresh_start(&mut self) {
        if let Some(first) = self.movements.iter().min_by_key(|m| (m.disk, m.track)) {
            self.start_track = first.track;
            self.start_disk = first.disk;
        }
    }

    /// Lightweight projection with freshly computed sort keys.
    pub fn summary(&self) -> CompositionSummary {
        let mut summary = CompositionSummary {
            id: self.id.clone(),
            album_id: self.album_id.clone(),
            title: self.title.clone(),
            artist: self.artist.clone(),
            composer: self.composer.clone(),
            conductor: self.conductor.clone(),
            sort_title: String::new(),
            sort_artist: None,
            sort_composer: None,
        };
        summary.refresh_sort_keys();
        summary
    }
}

impl Identified for Composition {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Listing/sorting projection of a [`Composition`].
///
/// The `sort_*` fields are derived. They go stale when `title`, `artist`
/// or `composer` change and are only rebuilt by [`refresh_sort_keys`] or
/// [`attach_to_album`].
///
/// [`refresh_sort_keys`]: CompositionSummary::refresh_sort_keys
/// [`attach_to_album`]: CompositionSummary::attach_to_album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionSummary {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conductor: Option<String>,
    #[serde(default)]
    pub sort_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_composer: Option<String>,
}

impl CompositionSummary {
    /// Rebuild the sort keys from this summary's own fields.
    pub fn refresh_sort_keys(&mut self) {
        self.sort_title = sorted_title(&self.title);
        self.sort_artist = self.artist.as_deref().map(sorted_person);
        self.sort_composer = self.composer.as_deref().map(sorted_person);
    }

    /// Move this composition under `album` and rebuild its sort keys.
    ///
    /// Artist and composer keys fall back to the album's credits when the
    /// composition has none of its own. Only the derived keys use the
    /// fallback; `artist` and `composer` themselves are left untouched.
    pub fn attach_to_album(&mut self, album: &impl Credited) {
        self.sort_title = sorted_title(&self.title);
        self.sort_artist = self.artist.as_deref().or(album.artist()).map(sorted_person);
        self.sort_composer = self
            .composer
            .as_deref()
            .or(album.composer())
            .map(sorted_person);

        tracing::debug!(composition = %self.id, album = album.id(), "Attaching composition to album");
        self.album_id = Some(album.id().to_string());
    }
}

impl Identified for CompositionSummary {
    fn id(&self) -> &str {
        &self.id
    }
}
