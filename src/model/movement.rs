//! A single movement of a composition.

use serde::{Deserialize, Serialize};

use super::{IdGenerator, Identified};

/// One playable section of a [`Composition`](super::Composition).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    /// Opaque unique id, fixed at creation
    pub id: String,
    /// Denormalized id of the owning composition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition_id: Option<String>,
    /// Denormalized id of the owning album
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_id: Option<String>,
    /// Disk number (absent for single-disk releases)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk: Option<u32>,
    /// Track number on the disk
    pub track: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Duration in seconds
    pub duration: u32,
    /// Reference to the audio asset
    pub filename: String,
}

/// Patch describing which parent references to rewrite on a child.
///
/// Fields left as `None` leave the child's corresponding foreign key alone.
///
/// ```ignore
/// movement.update_parents(ParentRefs::new().album(&album).composition(&work));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParentRefs<'a> {
    pub album_id: Option<&'a str>,
    pub composition_id: Option<&'a str>,
}

impl<'a> ParentRefs<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn album(mut self, album: &'a impl Identified) -> Self {
        self.album_id = Some(album.id());
        self
    }

    #[must_use]
    pub fn composition(mut self, composition: &'a impl Identified) -> Self {
        self.composition_id = Some(composition.id());
        self
    }
}

impl Movement {
    /// Create a movement with a fresh id, zero duration and no parents.
    pub fn new(
        ids: &impl IdGenerator,
        title: impl Into<String>,
        filename: impl Into<String>,
        track: u32,
        disk: Option<u32>,
    ) -> Self {
        Self {
            id: ids.next(),
            composition_id: None,
            album_id: None,
            disk,
            track,
            title: title.into(),
            subtitle: None,
            duration: 0,
            filename: filename.into(),
        }
    }

    /// Re-point the album and/or composition foreign keys.
    pub fn update_parents(&mut self, parents: ParentRefs<'_>) {
        if let Some(album_id) = parents.album_id {
            tracing::debug!(movement = %self.id, album = album_id, "Attaching movement to album");
            self.album_id = Some(album_id.to_string());
        }
        if let Some(composition_id) = parents.composition_id {
            tracing::debug!(
                movement = %self.id,
                composition = composition_id,
                "Attaching movement to composition"
            );
            self.composition_id = Some(composition_id.to_string());
        }
    }

    /// Set the disk, including clearing it with `None`.
    pub fn update_disk(&mut self, disk: Option<u32>) {
        self.disk = disk;
    }

    /// Set the track; the disk only changes when one is given.
    pub fn update_position(&mut self, track: u32, disk: Option<u32>) {
        self.track = track;
        if disk.is_some() {
            self.disk = disk;
        }
    }
}

impl Identified for Movement {
    fn id(&self) -> &str {
        &self.id
    }
}
