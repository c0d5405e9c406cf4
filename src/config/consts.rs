// src/config/consts.rs

// Services
pub const SCRAPE_BASE: &str = "http://127.0.0.1:5001";
pub const ANALYSIS_BASE: &str = "http://localhost:5002";

// Scrape service paths
pub const PATH_SCRAPE_YOUTUBE: &str = "/scrape-comments";
pub const PATH_SCRAPE_REDDIT: &str = "/scrape-reddit";
pub const PATH_PREVIEW_YOUTUBE: &str = "/get-csv-head";
pub const PATH_PREVIEW_REDDIT: &str = "/get-reddit-csv-head";
pub const PATH_DELETE: &str = "/delete-file";

// Analysis service paths
pub const PATH_ANALYZE: &str = "/analyze";

// Requests
pub const REQUEST_TIMEOUT_SECS: u64 = 300; // scrapes and LDA can be slow
pub const USER_AGENT: &str = concat!("social_dash/", env!("CARGO_PKG_VERSION"));

// Preview
pub const PREVIEW_LIMIT: usize = 10;

// Notices
pub const NOTICE_TTL_MS: u64 = 3_000;

// Scrape form defaults
pub const YT_COMMENT_LIMIT: &str = "100";
pub const YT_SEARCH_LIMIT: &str = "5";
pub const REDDIT_COMMENT_LIMIT: &str = "300";
pub const REDDIT_SEARCH_LIMIT: &str = "100";

// Local store (logs)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const ANALYSIS_REPORT_SUFFIX: &str = "_analysis_report.csv";
pub const VISUAL_REPORT_FILE: &str = "SocialMediaAnalysis_Report.doc";

// Charts
pub const PIE_PALETTE: [[u8; 3]; 3] = [
    [0x00, 0xC4, 0x9F],
    [0xFF, 0xBB, 0x28],
    [0xFF, 0x4D, 0x4F],
];
pub const TFIDF_BAR_COLOR: [u8; 3] = [0x88, 0x84, 0xD8];
pub const TOPIC_BAR_COLOR: [u8; 3] = [0x82, 0xCA, 0x9D];
