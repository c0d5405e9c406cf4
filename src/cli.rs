// src/cli.rs
//
// Headless front end: the same service calls as the GUI, one per run.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{eyre, Result};

use crate::{
    api::{Backend, HttpBackend, RedditParams, ScrapeRequest, YoutubeParams},
    charts::ChartSnapshots,
    config::{consts::*, options::AppOptions},
    csv, file,
    platform::Platform,
};

#[derive(Parser, Debug)]
#[command(name = "social_dash", version, about = "Scrape and analyse social media comments")]
pub struct Cli {
    /// Scrape service base URL
    #[arg(long, global = true, value_name = "URL")]
    pub scrape_url: Option<String>,

    /// Analysis service base URL
    #[arg(long, global = true, value_name = "URL")]
    pub analysis_url: Option<String>,

    /// Output folder for reports
    #[arg(short, long, global = true, value_name = "DIR")]
    pub out: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask the scrape service to collect comments
    Scrape {
        #[command(subcommand)]
        target: ScrapeTarget,
    },

    /// Print the first rows of a platform's scraped CSV
    Preview {
        platform: Platform,

        /// Rows to request
        #[arg(short, long, default_value_t = PREVIEW_LIMIT)]
        limit: usize,
    },

    /// Delete a platform's scraped CSV on the server
    Delete { platform: Platform },

    /// Run the analysis and write <platform>_analysis_report.csv
    Analyze { platform: Platform },

    /// Run the analysis and write the HTML report (no chart images)
    Report { platform: Platform },
}

#[derive(Subcommand, Debug)]
pub enum ScrapeTarget {
    Youtube(YoutubeArgs),
    Reddit(RedditArgs),
}

#[derive(Args, Debug)]
pub struct YoutubeArgs {
    /// Comma-separated video ids
    #[arg(long, default_value = "")]
    pub video_ids: String,
    #[arg(long, default_value = "")]
    pub query: String,
    #[arg(long, default_value = YT_COMMENT_LIMIT)]
    pub comment_limit: String,
    #[arg(long, default_value = YT_SEARCH_LIMIT)]
    pub search_limit: String,
}

#[derive(Args, Debug)]
pub struct RedditArgs {
    #[arg(long, default_value = "")]
    pub query: String,
    #[arg(long, default_value = REDDIT_COMMENT_LIMIT)]
    pub comment_limit: String,
    #[arg(long, default_value = REDDIT_SEARCH_LIMIT)]
    pub search_limit: String,
}

impl Cli {
    /// Defaults overlaid with whatever flags were given.
    pub fn options(&self) -> AppOptions {
        let mut options = AppOptions::default();
        if let Some(u) = &self.scrape_url {
            options.endpoints.scrape_base = u.clone();
        }
        if let Some(u) = &self.analysis_url {
            options.endpoints.analysis_base = u.clone();
        }
        if let Some(dir) = &self.out {
            options.export.set_dir(&dir.to_string_lossy());
        }
        if let Command::Preview { limit, .. } = &self.command {
            options.preview_limit = *limit;
        }
        options
    }
}

impl ScrapeTarget {
    fn into_request(self) -> ScrapeRequest {
        match self {
            ScrapeTarget::Youtube(a) => ScrapeRequest::Youtube(YoutubeParams {
                video_ids: a.video_ids,
                query: a.query,
                comment_limit: a.comment_limit,
                search_limit: a.search_limit,
            }),
            ScrapeTarget::Reddit(a) => ScrapeRequest::Reddit(RedditParams {
                query: a.query,
                comment_limit: a.comment_limit,
                search_limit: a.search_limit,
            }),
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let options = cli.options();
    let backend = HttpBackend::new(&options)?;
    logf!("CLI: {:?} (scrape={}, analysis={})",
        cli.command, backend.endpoints().scrape_base, backend.endpoints().analysis_base);
    execute(cli.command, &backend, &options)
}

/// Run one command against `backend`. Output goes to stdout.
pub fn execute(command: Command, backend: &dyn Backend, options: &AppOptions) -> Result<()> {
    match command {
        Command::Scrape { target } => {
            let req = target.into_request();
            let platform = req.platform();
            let ack = backend
                .scrape(&req)
                .map_err(|e| eyre!("Error scraping {platform}: {e}"))?;
            println!("{} scrape success: {}", platform.label(), ack.message);
        }

        Command::Preview { platform, .. } => {
            let rows = backend
                .preview(platform, options.preview_limit)
                .map_err(|e| eyre!("Error fetching CSV head: {e}"))?;
            let cols = platform.preview_columns();
            let table: Vec<Vec<String>> = rows.iter().map(|r| r.cells(cols)).collect();
            print!("{}", csv::rows_to_string(Some(cols), &table, ','));
        }

        Command::Delete { platform } => {
            backend
                .delete_artifact(platform)
                .map_err(|e| eyre!("Error deleting file: {e}"))?;
            println!("Deleted {platform} CSV file successfully!");
        }

        Command::Analyze { platform } => {
            let bundle = backend
                .analyze(platform)
                .map_err(|e| eyre!("Error fetching analysis: {e}"))?;
            let path = file::write_analysis_report(&options.export, platform, &bundle)?;
            println!("{}", path.display());
        }

        Command::Report { platform } => {
            let bundle = backend
                .analyze(platform)
                .map_err(|e| eyre!("Error fetching analysis: {e}"))?;
            let path = file::write_visual_report(
                &options.export,
                platform,
                &bundle,
                &ChartSnapshots::default(),
            )?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
