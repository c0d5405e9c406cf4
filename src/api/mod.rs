// src/api/mod.rs
//
// Service seam. Pages talk to a `Backend`; the HTTP client is one
// implementation, tests plug in their own.

mod client;
pub mod types;

pub use client::HttpBackend;
pub use types::*;

use crate::{error::ApiError, platform::Platform};

pub trait Backend: Send + Sync + 'static {
    /// Start a server-side scrape job. Returns the service's ack.
    fn scrape(&self, req: &ScrapeRequest) -> Result<Ack, ApiError>;

    /// First `limit` rows of the platform's scraped CSV.
    fn preview(&self, platform: Platform, limit: usize) -> Result<Vec<PreviewRow>, ApiError>;

    /// Delete the platform's scraped CSV on the server.
    fn delete_artifact(&self, platform: Platform) -> Result<Ack, ApiError>;

    /// Full analysis bundle for the platform's scraped data.
    fn analyze(&self, platform: Platform) -> Result<AnalysisBundle, ApiError>;
}
