//! `discmark lookup <url>` – fetch one release/master and print it.

use anyhow::Result;
use discmark_core::catalog::{CatalogClient, ClientOptions};
use discmark_core::config::DiscmarkConfig;

pub async fn run_lookup(cfg: &DiscmarkConfig, url: &str) -> Result<()> {
    let client = CatalogClient::new(ClientOptions::from(cfg))?;
    let record = client.fetch_url(url).await?;
    println!("artist: {}", record.artist);
    println!("title:  {}", record.title);
    println!("genre:  {}", record.genre);
    println!("style:  {}", record.style);
    println!("year:   {}", record.year);
    println!("url:    {}", record.source_url);
    Ok(())
}
