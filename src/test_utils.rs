//! Test utilities and fixtures for music-catalog tests.
//!
//! Fixtures return fully populated values; customize them with struct
//! update syntax:
//!
//! ```ignore
//! let album = Album {
//!     genre: Some("Jazz".to_string()),
//!     ..mock_album()
//! };
//! ```

use crate::model::{Album, Composition, Movement, SequentialIds, Single};

/// A classical album with a composer and performer set.
pub fn mock_album() -> Album {
    Album {
        id: "album-1".to_string(),
        title: "Mass in B Minor".to_string(),
        artist: Some("Monteverdi Choir".to_string()),
        composer: Some("Johann Sebastian Bach".to_string()),
        genre: Some("Classical".to_string()),
        contents: Vec::new(),
    }
}

/// A three-movement composition on disk 1, starting at track 1.
pub fn mock_composition() -> Composition {
    let ids = SequentialIds::new("mv");
    let movements = ["Allegro", "Largo", "Presto"]
        .iter()
        .zip(1u32..)
        .map(|(title, track)| {
            let mut m = Movement::new(&ids, *title, format!("{:02}.flac", track), track, Some(1));
            m.composition_id = Some("comp-1".to_string());
            m.duration = 180;
            m
        })
        .collect();

    Composition {
        id: "comp-1".to_string(),
        album_id: Some("album-1".to_string()),
        title: "Concerto No. 1".to_string(),
        subtitle: None,
        artist: None,
        composer: Some("Antonio Vivaldi".to_string()),
        conductor: Some("Trevor Pinnock".to_string()),
        start_track: 1,
        start_disk: Some(1),
        movements,
    }
}

/// A standalone track on disk 1, track 4.
pub fn mock_single() -> Single {
    Single {
        id: "single-1".to_string(),
        album_id: Some("album-1".to_string()),
        disk: Some(1),
        track: 4,
        title: "Air on the G String".to_string(),
        subtitle: None,
        artist: Some("Academy of St Martin in the Fields".to_string()),
        composer: Some("Johann Sebastian Bach".to_string()),
        duration: 320,
        filename: "04.flac".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_composition_is_consistent() {
        let mut c = mock_composition();
        assert_eq!(c.movements.len(), 3);
        assert!(c.movements.iter().all(|m| m.composition_id.as_deref() == Some("comp-1")));

        let (track, disk) = (c.start_track, c.start_disk);
        c.refresh_start();
        assert_eq!((c.start_track, c.start_disk), (track, disk));
    }

    #[test]
    fn test_mock_album_is_classical() {
        assert_eq!(mock_album().genre.as_deref(), Some("Classical"));
    }
}
