//! Remote album lookup command.

use tokio::runtime::Runtime;

use crate::config::CatalogConfig;
use crate::error::{Result, ResultExt};
use crate::model::ContentItem;
use crate::remote::{CatalogApi, CatalogClient};

/// Fetch an album and print its label and contents
pub fn cmd_fetch_album(rt: &Runtime, config: &CatalogConfig, album_id: &str) -> anyhow::Result<()> {
    let client = CatalogClient::new(config);
    println!("Fetching album {} from {}", album_id, client.base_url());

    let lines = rt.block_on(album_lines(&client, album_id))?;
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

/// Render an album as a header line followed by one line per entry.
async fn album_lines(api: &dyn CatalogApi, album_id: &str) -> Result<Vec<String>> {
    let mut album = api
        .album(album_id)
        .await
        .with_context(format!("fetching album {}", album_id))?;
    album.order_contents();

    let mut lines = vec![album.summary().description()];
    for content in &album.contents {
        let position = match content.disk {
            Some(disk) => format!("{}-{:02}", disk, content.track),
            None => format!("{:02}", content.track),
        };
        let detail = match &content.item {
            ContentItem::Composition(c) => format!("{} ({} movements)", c.title, c.movements.len()),
            ContentItem::Single(s) => s.title.clone(),
        };
        lines.push(format!("  {}  {}", position, detail));
    }
    Ok(lines)
}
