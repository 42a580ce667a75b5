//! Standalone tracks that belong to an album but not to a composition.

use serde::{Deserialize, Serialize};

use super::Identified;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Single {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk: Option<u32>,
    pub track: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composer: Option<String>,
    /// Duration in seconds
    #[serde(default)]
    pub duration: u32,
    pub filename: String,
}

impl Single {
    /// Re-point the album foreign key.
    pub fn update_album(&mut self, album: &impl Identified) {
        self.album_id = Some(album.id().to_string());
    }
}

impl Identified for Single {
    fn id(&self) -> &str {
        &self.id
    }
}
