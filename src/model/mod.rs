//! Core data models for the music library.
//!
//! Defines the entity graph: an [`Album`] holds ordered [`AlbumContent`]
//! entries, each wrapping either a [`Composition`] (a work made of
//! [`Movement`]s) or a standalone [`Single`].
//!
//! # Denormalized fields
//!
//! Foreign keys (`album_id`, `composition_id`) and sort keys
//! (`sort_title`, `sort_artist`, `sort_composer`) are copies, not live
//! references. Nothing recomputes them when a parent changes: after
//! reassigning or editing a parent, call the relevant `update_*`,
//! `attach_*` or `refresh_*` method on the child.
//!
//! # Wire format
//!
//! All entities serialize with camelCase field names. Absent optional
//! fields are omitted on encode and default to `None` on decode; unknown
//! fields are ignored.

pub mod album;
pub mod composition;
pub mod content;
pub mod ids;
pub mod movement;
pub mod single;

pub use album::{Album, AlbumSummary};
pub use composition::{Composition, CompositionSummary};
pub use content::{AlbumContent, ContentItem};
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use movement::{Movement, ParentRefs};
pub use single::Single;

/// An entity with a stable identity that children can point at.
pub trait Identified {
    fn id(&self) -> &str;
}

/// A parent whose credits children fall back to when their own are absent.
pub trait Credited: Identified {
    fn artist(&self) -> Option<&str>;
    fn composer(&self) -> Option<&str>;
}
