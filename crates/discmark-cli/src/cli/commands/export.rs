//! `discmark export --folder <path>` – export a folder's Discogs items to CSV.

use anyhow::{Context, Result};
use discmark_core::bookmarks::count_qualifying_urls;
use discmark_core::catalog::{CatalogClient, ClientOptions};
use discmark_core::config::DiscmarkConfig;
use discmark_core::export::{self, CSV_MEDIA_TYPE};
use std::path::Path;

pub async fn run_export(
    cfg: &DiscmarkConfig,
    bookmarks: Option<&Path>,
    folder_path: &str,
    recursive: bool,
    output: Option<&str>,
    dir: &Path,
) -> Result<()> {
    let root = super::load_tree(cfg, bookmarks)?;
    let folder = root
        .find_folder(folder_path)
        .with_context(|| format!("bookmark folder not found: {folder_path}"))?;

    if count_qualifying_urls(folder, recursive) == 0 {
        anyhow::bail!(
            "folder {:?} has no Discogs release/master links{}",
            folder.display_title(),
            if recursive { "" } else { " (direct children only)" }
        );
    }

    let client = CatalogClient::new(ClientOptions::from(cfg))?;
    let outcome = export::export_folder(&client, folder, recursive).await?;

    let filename = export::suggest_filename(output, folder.title());
    let path = export::save_csv(dir, &filename, &outcome.csv)?;
    tracing::debug!(media_type = CSV_MEDIA_TYPE, "wrote {}", path.display());

    println!(
        "Exported {} of {} item(s) to {}",
        outcome.exported,
        outcome.qualifying,
        path.display()
    );
    if outcome.failed() > 0 {
        println!("  {} item(s) could not be fetched (see log)", outcome.failed());
    }
    Ok(())
}
