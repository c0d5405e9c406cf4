// src/report/analysis.rs
use crate::{
    api::types::{fmt_score, AnalysisBundle},
    csv::rows_to_string,
};

pub const ANALYSIS_HEADERS: [&str; 3] = ["Section", "Key", "Value"];

/// Section/Key/Value rows for every section currently on screen.
/// Sections with no data contribute nothing.
pub fn analysis_rows(bundle: &AnalysisBundle) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();

    if !bundle.sentiments.is_empty() {
        let section = "Sentiment Summary";
        rows.push(vec![s!(section), s!("Average Sentiment"), bundle.average_sentiment_text()]);
        let summary = &bundle.sentiment_summary;
        for (key, count) in [
            ("Positive", summary.positive),
            ("Neutral", summary.neutral),
            ("Negative", summary.negative),
        ] {
            rows.push(vec![s!(section), s!(key), count.to_string()]);
        }
    }

    for (term, score) in &bundle.tfidf {
        rows.push(vec![s!("TF-IDF"), term.clone(), fmt_score(*score)]);
    }

    for (i, words) in bundle.topics.iter().enumerate() {
        rows.push(vec![format!("Topic {}", i + 1), s!("Words"), words.join(", ")]);
    }

    for (word, score) in &bundle.centralities {
        rows.push(vec![s!("Centrality"), word.clone(), fmt_score(*score)]);
    }

    rows
}

/// Full CSV text, header line included.
pub fn analysis_csv(bundle: &AnalysisBundle) -> String {
    rows_to_string(Some(&ANALYSIS_HEADERS[..]), &analysis_rows(bundle), ',')
}
