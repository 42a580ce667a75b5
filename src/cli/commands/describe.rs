//! Album description command.

use std::path::Path;

use crate::error::{Result, ResultExt};
use crate::model::AlbumSummary;
use crate::sort_key::sorted_title;

/// Print a label for every album in a JSON listing, ordered by title
pub fn cmd_describe(path: &Path) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(format!("reading {}", path.display()))?;

    let labels = describe_listing(&json)?;
    println!("{} albums", labels.len());
    for label in labels {
        println!("  {}", label);
    }
    Ok(())
}

/// Decode a JSON array of album summaries and label them in title order.
fn describe_listing(json: &str) -> Result<Vec<String>> {
    let mut albums = serde_json::from_str::<Vec<AlbumSummary>>(json)
        .with_context("decoding album listing")?;
    albums.sort_by_cached_key(|a| sorted_title(&a.title));
    Ok(albums.iter().map(AlbumSummary::description).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_listing_orders_by_sort_title() {
        let json = r#"[
            {"id": "1", "title": "Kind of Blue", "artist": "Miles Davis", "genre": "Jazz"},
            {"id": "2", "title": "The Art of Fugue", "composer": "Bach", "genre": "Classical"},
            {"id": "3", "title": "Blue Train", "artist": "John Coltrane"}
        ]"#;

        let labels = describe_listing(json).unwrap();
        assert_eq!(
            labels,
            vec![
                "Bach: The Art of Fugue".to_string(),
                "Blue Train - John Coltrane".to_string(),
                "Kind of Blue - Miles Davis".to_string(),
            ]
        );
    }

    #[test]
    fn test_describe_listing_rejects_bad_json() {
        let err = describe_listing("{").unwrap_err();
        assert!(err.to_string().contains("decoding album listing"));
    }

    #[test]
    fn test_cmd_describe_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("albums.json");
        std::fs::write(&path, r#"[{"id": "1", "title": "Mass"}]"#).unwrap();
        assert!(cmd_describe(&path).is_ok());
    }

    #[test]
    fn test_cmd_describe_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(cmd_describe(&dir.path().join("absent.json")).is_err());
    }
}
