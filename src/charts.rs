// src/charts.rs
//
// Chart series derived from an analysis bundle. Pure data: the GUI paints
// these, the report lists them.

use crate::api::types::{fmt_score, AnalysisBundle, SentimentSummary};
use crate::config::consts::PIE_PALETTE;

pub type Rgb = [u8; 3];

/// Pie colours cycle through a fixed palette by slice index.
pub fn palette_color(index: usize) -> Rgb {
    PIE_PALETTE[index % PIE_PALETTE.len()]
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: u64,
    /// Share of the whole, 0..=1
    pub fraction: f64,
    pub color: Rgb,
}

/// One slice per non-zero sentiment count.
pub fn sentiment_slices(summary: &SentimentSummary) -> Vec<Slice> {
    let total = summary.total();
    if total == 0 {
        return Vec::new();
    }
    summary
        .entries()
        .into_iter()
        .filter(|(_, v)| *v > 0)
        .enumerate()
        .map(|(i, (label, value))| Slice {
            label,
            value,
            fraction: value as f64 / total as f64,
            color: palette_color(i),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    /// Grouping label (topic bars); empty otherwise
    pub group: String,
    pub value: f64,
}

/// TF-IDF bars, scores rounded to three decimals.
pub fn tfidf_bars(tfidf: &[(String, f64)]) -> Vec<Bar> {
    tfidf
        .iter()
        .map(|(term, score)| Bar {
            label: term.clone(),
            group: s!(),
            value: round3(*score),
        })
        .collect()
}

/// One bar per topic word; earlier words in a topic get taller bars.
pub fn topic_bars(topics: &[Vec<String>]) -> Vec<Bar> {
    topics
        .iter()
        .enumerate()
        .flat_map(|(ti, words)| {
            let n = words.len();
            words.iter().enumerate().map(move |(wi, word)| Bar {
                label: word.clone(),
                group: format!("Topic {}", ti + 1),
                value: (n - wi) as f64,
            })
        })
        .collect()
}

/// Same rounding as the score display, as a number.
pub fn round3(v: f64) -> f64 {
    fmt_score(v).parse().unwrap_or(v)
}

/// Chart areas that get captured for the visual report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartRegion {
    Sentiment,
    Tfidf,
    Topics,
}

pub const CHART_REGIONS: [ChartRegion; 3] =
    [ChartRegion::Sentiment, ChartRegion::Tfidf, ChartRegion::Topics];

impl ChartRegion {
    /// Whether this chart renders at all for `bundle`.
    pub fn is_drawn_for(self, bundle: &AnalysisBundle) -> bool {
        match self {
            ChartRegion::Sentiment => !bundle.sentiment_summary.is_empty(),
            ChartRegion::Tfidf => !bundle.tfidf.is_empty(),
            ChartRegion::Topics => bundle.topics.iter().any(|t| !t.is_empty()),
        }
    }
}

/// Captured chart images as `data:image/png;base64,…` URLs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartSnapshots {
    pub sentiment: Option<String>,
    pub tfidf: Option<String>,
    pub topics: Option<String>,
}

impl ChartSnapshots {
    pub fn get(&self, region: ChartRegion) -> Option<&str> {
        match region {
            ChartRegion::Sentiment => self.sentiment.as_deref(),
            ChartRegion::Tfidf => self.tfidf.as_deref(),
            ChartRegion::Topics => self.topics.as_deref(),
        }
    }

    pub fn set(&mut self, region: ChartRegion, data_url: String) {
        let slot = match region {
            ChartRegion::Sentiment => &mut self.sentiment,
            ChartRegion::Tfidf => &mut self.tfidf,
            ChartRegion::Topics => &mut self.topics,
        };
        *slot = Some(data_url);
    }

    pub fn count(&self) -> usize {
        CHART_REGIONS.iter().filter(|r| self.get(**r).is_some()).count()
    }
}
