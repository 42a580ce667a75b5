//! Short display labels for albums.
//!
//! Classical albums lead with the composer, everything else leads with
//! the title:
//!
//! | genre       | first choice          | fallback              | last resort |
//! |-------------|-----------------------|-----------------------|-------------|
//! | `Classical` | `{composer}: {title}` | `{artist}: {title}`   | `{title}`   |
//! | other       | `{title} - {artist}`  | `{title} - {composer}`| `{title}`   |

use crate::model::AlbumSummary;

/// Genre string that switches to composer-first labels. Matched exactly.
pub const CLASSICAL_GENRE: &str = "Classical";

/// Human-readable one-line label for an album.
pub fn describe(summary: &AlbumSummary) -> String {
    let title = &summary.title;
    let artist = summary.artist.as_deref();
    let composer = summary.composer.as_deref();

    if summary.genre.as_deref() == Some(CLASSICAL_GENRE) {
        match composer.or(artist) {
            Some(credit) => format!("{credit}: {title}"),
            None => title.clone(),
        }
    } else {
        match artist.or(composer) {
            Some(credit) => format!("{title} - {credit}"),
            None => title.clone(),
        }
    }
}
