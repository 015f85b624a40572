//! CLI for discmark.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use discmark_core::config;
use std::path::PathBuf;

use commands::{run_completions, run_export, run_lookup, run_tree};

/// Top-level CLI for discmark.
#[derive(Debug, Parser)]
#[command(name = "discmark")]
#[command(about = "Export Discogs release/master bookmarks to CSV", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List bookmark folders with their Discogs item counts.
    Tree {
        /// Bookmarks file (Chromium JSON). Defaults to config, then the Chrome profile.
        #[arg(long, value_name = "PATH")]
        bookmarks: Option<PathBuf>,
    },

    /// Export a folder's Discogs bookmarks to CSV.
    Export {
        /// Folder path by titles, e.g. "Bookmarks bar/Music/Vinyl".
        #[arg(long)]
        folder: String,
        /// Only direct links in the folder, not subfolders.
        #[arg(long)]
        no_recursive: bool,
        /// Output file name (".csv" appended if missing). Defaults to the folder title.
        #[arg(long, short)]
        output: Option<String>,
        /// Directory to save into (default: current directory).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
        /// Bookmarks file (Chromium JSON). Defaults to config, then the Chrome profile.
        #[arg(long, value_name = "PATH")]
        bookmarks: Option<PathBuf>,
    },

    /// Fetch and print metadata for one Discogs release/master URL.
    Lookup {
        /// Discogs release or master page URL.
        url: String,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell);
            return Ok(());
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Tree { bookmarks } => run_tree(&cfg, bookmarks.as_deref())?,
            CliCommand::Export {
                folder,
                no_recursive,
                output,
                dir,
                bookmarks,
            } => {
                let dir = match dir {
                    Some(d) => d,
                    None => std::env::current_dir()?,
                };
                run_export(
                    &cfg,
                    bookmarks.as_deref(),
                    &folder,
                    !no_recursive,
                    output.as_deref(),
                    &dir,
                )
                .await?
            }
            CliCommand::Lookup { url } => run_lookup(&cfg, &url).await?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
