//! Ordering wrapper for the entries of an album.
//!
//! An [`AlbumContent`] holds exactly one payload, a composition or a
//! single, plus a copy of that payload's id and position so album
//! entries can be ordered uniformly. The payload is a [`ContentItem`]
//! variant, so an entry with both or neither payload cannot be built.
//!
//! On the wire the payload is flattened into two optional fields,
//! `composition` and `single`. Decoding a record that fills both or
//! neither is rejected with a [`ContentError`].

use serde::{Deserialize, Serialize};

use super::{Composition, Identified, Single};

/// The one payload carried by an album entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    Composition(Composition),
    Single(Single),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AlbumContentRecord", into = "AlbumContentRecord")]
pub struct AlbumContent {
    pub id: String,
    pub disk: Option<u32>,
    pub track: u32,
    pub item: ContentItem,
}

impl AlbumContent {
    pub fn composition(&self) -> Option<&Composition> {
        match &self.item {
            ContentItem::Composition(c) => Some(c),
            ContentItem::Single(_) => None,
        }
    }

    pub fn single(&self) -> Option<&Single> {
        match &self.item {
            ContentItem::Single(s) => Some(s),
            ContentItem::Composition(_) => None,
        }
    }

    /// Title of whichever payload this entry carries.
    pub fn title(&self) -> &str {
        match &self.item {
            ContentItem::Composition(c) => &c.title,
            ContentItem::Single(s) => &s.title,
        }
    }
}

impl From<Composition> for AlbumContent {
    fn from(composition: Composition) -> Self {
        Self {
            id: composition.id.clone(),
            disk: composition.start_disk,
            track: composition.start_track,
            item: ContentItem::Composition(composition),
        }
    }
}

impl From<Single> for AlbumContent {
    fn from(single: Single) -> Self {
        Self {
            id: single.id.clone(),
            disk: single.disk,
            track: single.track,
            item: ContentItem::Single(single),
        }
    }
}

impl Identified for AlbumContent {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Album entry payloads that violate the one-payload rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("Album content {0} carries both a composition and a single")]
    BothPayloads(String),

    #[error("Album content {0} carries neither a composition nor a single")]
    NoPayload(String),
}

/// Wire shape of [`AlbumContent`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AlbumContentRecord {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    disk: Option<u32>,
    track: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    composition: Option<Composition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    single: Option<Single>,
}

impl TryFrom<AlbumContentRecord> for AlbumContent {
    type Error = ContentError;

    fn try_from(record: AlbumContentRecord) -> Result<Self, Self::Error> {
        let item = match (record.composition, record.single) {
            (Some(composition), None) => ContentItem::Composition(composition),
            (None, Some(single)) => ContentItem::Single(single),
            (Some(_), Some(_)) => return Err(ContentError::BothPayloads(record.id)),
            (None, None) => return Err(ContentError::NoPayload(record.id)),
        };

        Ok(Self {
            id: record.id,
            disk: record.disk,
            track: record.track,
            item,
        })
    }
}

impl From<AlbumContent> for AlbumContentRecord {
    fn from(content: AlbumContent) -> Self {
        let (composition, single) = match content.item {
            ContentItem::Composition(c) => (Some(c), None),
            ContentItem::Single(s) => (None, Some(s)),
        };

        Self {
            id: content.id,
            disk: content.disk,
            track: content.track,
            composition,
            single,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mock_composition, mock_single};

    #[test]
    fn test_from_composition_mirrors_start_position() {
        let mut composition = mock_composition();
        composition.id = "c1".to_string();
        composition.start_track = 3;
        composition.start_disk = Some(1);

        let content = AlbumContent::from(composition.clone());

        assert_eq!(content.id, "c1");
        assert_eq!(content.track, 3);
        assert_eq!(content.disk, Some(1));
        assert_eq!(content.composition(), Some(&composition));
        assert!(content.single().is_none());
    }

    #[test]
    fn test_from_single_mirrors_position() {
        let single = mock_single();
        let content = AlbumContent::from(single.clone());

        assert_eq!(content.id, single.id);
        assert_eq!(content.track, single.track);
        assert_eq!(content.disk, single.disk);
        assert_eq!(content.single(), Some(&single));
        assert!(content.composition().is_none());
        assert_eq!(content.title(), single.title);
    }

    #[test]
    fn test_serializes_flat_record() {
        let content = AlbumContent::from(mock_single());
        let json = serde_json::to_value(&content).unwrap();

        assert_eq!(json["id"], content.id.as_str());
        assert_eq!(json["track"], content.track);
        assert!(json.get("single").is_some());
        assert!(json.get("composition").is_none());
        assert!(json.get("item").is_none());
    }

    #[test]
    fn test_roundtrip_composition_entry() {
        let content = AlbumContent::from(mock_composition());
        let json = serde_json::to_string(&content).unwrap();
        let decoded: AlbumContent = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, content);
    }

    #[test]
    fn test_roundtrip_single_entry_without_disk() {
        let mut single = mock_single();
        single.disk = None;
        let content = AlbumContent::from(single);

        let json = serde_json::to_string(&content).unwrap();
        assert!(!json.contains("\"disk\""));
        let decoded: AlbumContent = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, content);
    }

    #[test]
    fn test_decode_rejects_both_payloads() {
        let mut value = serde_json::to_value(AlbumContent::from(mock_single())).unwrap();
        value["composition"] = serde_json::to_value(mock_composition()).unwrap();

        let err = serde_json::from_value::<AlbumContent>(value).unwrap_err();
        assert!(err.to_string().contains("both a composition and a single"));
    }

    #[test]
    fn test_decode_rejects_missing_payload() {
        let json = r#"{"id":"x","track":1}"#;
        let err = serde_json::from_str::<AlbumContent>(json).unwrap_err();
        assert!(err.to_string().contains("neither"));
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let mut value = serde_json::to_value(AlbumContent::from(mock_single())).unwrap();
        value["addedAt"] = serde_json::json!("2024-01-01");
        let decoded: AlbumContent = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, AlbumContent::from(mock_single()));
    }
}
