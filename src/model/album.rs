//! Albums and their listing projection.

use serde::{Deserialize, Serialize};

use super::{AlbumContent, Credited, Identified};

/// An album in the music library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composer: Option<String>,
    /// Genre classification, e.g. "Classical" or "Jazz"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default)]
    pub contents: Vec<AlbumContent>,
}

impl Album {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: None,
            composer: None,
            genre: None,
            contents: Vec::new(),
        }
    }

    /// Projection used for listing and sorting.
    pub fn summary(&self) -> AlbumSummary {
        AlbumSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            artist: self.artist.clone(),
            composer: self.composer.clone(),
            genre: self.genre.clone(),
        }
    }

    /// Sort entries by `(disk, track)`. Entries without a disk come first.
    pub fn order_contents(&mut self) {
        self.contents.sort_by_key(|c| (c.disk, c.track));
    }
}

impl Identified for Album {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Credited for Album {
    fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    fn composer(&self) -> Option<&str> {
        self.composer.as_deref()
    }
}

/// Lightweight album projection without contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumSummary {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl AlbumSummary {
    /// Short display label, see [`crate::describe::describe`].
    pub fn description(&self) -> String {
        crate::describe::describe(self)
    }
}

impl Identified for AlbumSummary {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Credited for AlbumSummary {
    fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    fn composer(&self) -> Option<&str> {
        self.composer.as_deref()
    }
}
