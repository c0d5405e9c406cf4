// src/api/types.rs
//
// Wire models for both services. Every analysis field is optional on the
// wire; a missing field deserializes to an empty collection.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::platform::Platform;

/* ---------------- Scrape ---------------- */

/// Free-text parameter bag. Values go out exactly as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrapeRequest {
    Youtube(YoutubeParams),
    Reddit(RedditParams),
}

impl ScrapeRequest {
    pub fn platform(&self) -> Platform {
        match self {
            ScrapeRequest::Youtube(_) => Platform::Youtube,
            ScrapeRequest::Reddit(_) => Platform::Reddit,
        }
    }

    /// Query string pairs, in the order the service documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        match self {
            ScrapeRequest::Youtube(p) => vec![
                ("video_ids", p.video_ids.as_str()),
                ("query", p.query.as_str()),
                ("comment_limit", p.comment_limit.as_str()),
                ("search_limit", p.search_limit.as_str()),
            ],
            ScrapeRequest::Reddit(p) => vec![
                ("query", p.query.as_str()),
                ("comment_limit", p.comment_limit.as_str()),
                ("search_limit", p.search_limit.as_str()),
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YoutubeParams {
    /// Comma-separated, e.g. "gQc58vGHlvs,p4ldj_c8yIQ"
    pub video_ids: String,
    pub query: String,
    pub comment_limit: String,
    pub search_limit: String,
}

impl Default for YoutubeParams {
    fn default() -> Self {
        use crate::config::consts::{YT_COMMENT_LIMIT, YT_SEARCH_LIMIT};
        Self {
            video_ids: s!(),
            query: s!(),
            comment_limit: s!(YT_COMMENT_LIMIT),
            search_limit: s!(YT_SEARCH_LIMIT),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedditParams {
    pub query: String,
    pub comment_limit: String,
    pub search_limit: String,
}

impl Default for RedditParams {
    fn default() -> Self {
        use crate::config::consts::{REDDIT_COMMENT_LIMIT, REDDIT_SEARCH_LIMIT};
        Self {
            query: s!(),
            comment_limit: s!(REDDIT_COMMENT_LIMIT),
            search_limit: s!(REDDIT_SEARCH_LIMIT),
        }
    }
}

/// Both forms are kept so switching platforms doesn't lose typed input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrapeForm {
    pub youtube: YoutubeParams,
    pub reddit: RedditParams,
}

impl ScrapeForm {
    pub fn request_for(&self, platform: Platform) -> ScrapeRequest {
        match platform {
            Platform::Youtube => ScrapeRequest::Youtube(self.youtube.clone()),
            Platform::Reddit => ScrapeRequest::Reddit(self.reddit.clone()),
        }
    }
}

/// `{ message }` reply from scrape and delete endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// Error body shape used by both services.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn text(self) -> Option<String> {
        self.error.or(self.message)
    }
}

/* ---------------- Preview ---------------- */

/// One row of the scraped CSV, keyed by column name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreviewRow(pub Map<String, Value>);

impl PreviewRow {
    /// Cell text for display/export. Missing and null cells are empty.
    pub fn cell(&self, column: &str) -> String {
        match self.0.get(column) {
            None | Some(Value::Null) => s!(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn cells(&self, columns: &[&str]) -> Vec<String> {
        columns.iter().map(|c| self.cell(c)).collect()
    }
}

/* ---------------- Analysis ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisBundle {
    #[serde(default)]
    pub sentiments: Vec<f64>,
    #[serde(default)]
    pub sentiment_summary: SentimentSummary,
    #[serde(default)]
    pub topics: Vec<Vec<String>>,
    #[serde(default)]
    pub tfidf: Vec<(String, f64)>,
    #[serde(default)]
    pub centralities: Vec<(String, f64)>,
    /// Base64 PNG
    #[serde(default)]
    pub wordcloud: String,
    /// Base64 PNG
    #[serde(default)]
    pub cooccurrence_img: String,
    #[serde(default)]
    pub network: Network,
}

impl AnalysisBundle {
    /// True when any tabular section would render.
    pub fn has_any_section(&self) -> bool {
        !self.sentiments.is_empty()
            || !self.tfidf.is_empty()
            || !self.topics.is_empty()
            || !self.centralities.is_empty()
    }

    /// Mean of the scores, if there are any.
    pub fn average_sentiment(&self) -> Option<f64> {
        average(&self.sentiments)
    }

    /// Display form: three decimals, or "N/A" with no scores.
    pub fn average_sentiment_text(&self) -> String {
        match self.average_sentiment() {
            Some(avg) => fmt_score(avg),
            None => s!("N/A"),
        }
    }

    pub fn wordcloud_b64(&self) -> Option<&str> {
        non_empty(&self.wordcloud)
    }

    pub fn cooccurrence_b64(&self) -> Option<&str> {
        non_empty(&self.cooccurrence_img)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(t) }
}

pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Scores are always shown with three decimals, ties rounded up (away from
/// zero). Decided on the exact binary value, so 0.0625 is "0.063" while
/// 1.0005 (stored just below the tie) stays "1.000".
pub fn fmt_score(v: f64) -> String {
    fmt_fixed_half_up(v, 3)
}

// Every finite f64 has at most 1074 fractional digits, so this expansion is
// exact and no rounding happens before we look at the digits.
const EXACT_DIGITS: usize = 1074;

fn fmt_fixed_half_up(v: f64, places: usize) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let exact = format!("{:.*}", EXACT_DIGITS, v.abs());
    let (int, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int
        .bytes()
        .chain(frac.bytes().take(places))
        .map(|b| b - b'0')
        .collect();

    if frac.as_bytes().get(places).is_some_and(|&d| d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - places;
    let mut out = String::with_capacity(digits.len() + 2);
    if v < 0.0 {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|d| char::from(b'0' + d)));
    if places > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|d| char::from(b'0' + d)));
    }
    out
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentSummary {
    #[serde(default)]
    pub positive: u64,
    #[serde(default)]
    pub neutral: u64,
    #[serde(default)]
    pub negative: u64,
}

impl SentimentSummary {
    pub fn entries(&self) -> [(&'static str, u64); 3] {
        [
            ("positive", self.positive),
            ("neutral", self.neutral),
            ("negative", self.negative),
        ]
    }

    pub fn total(&self) -> u64 {
        self.positive + self.neutral + self.negative
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    #[serde(default)]
    pub nodes: Vec<NetworkNode>,
    #[serde(default)]
    pub edges: Vec<NetworkEdge>,
}

impl Network {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkEdge {
    pub source: String,
    pub target: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

/// POST body for /analyze
#[derive(Clone, Copy, Debug, Serialize)]
pub struct AnalyzeBody {
    pub platform: Platform,
}
