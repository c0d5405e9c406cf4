// src/report/visual.rs
//
// Word-compatible HTML report. Saved with a .doc extension so office
// suites open it directly.

use std::fmt::Write;

use crate::{
    api::types::{fmt_score, AnalysisBundle},
    charts::ChartSnapshots,
    platform::Platform,
};

pub const REPORT_TITLE: &str = "Social Media Analysis Report";

const IMG_STYLE: &str = "max-width:100%; height:auto;";

pub fn visual_report_html(
    platform: Platform,
    bundle: &AnalysisBundle,
    snapshots: &ChartSnapshots,
) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<html>\n<head><meta charset=\"utf-8\"><title>Report</title></head>\n<body>\n");
    let _ = writeln!(html, "<h1>{}</h1>", REPORT_TITLE);
    let _ = writeln!(html, "<h2>Platform: {}</h2>", escape(platform.as_str()));

    // Sentiment
    html.push_str("<h3>Sentiment Summary:</h3>\n<ul>\n");
    if !bundle.sentiment_summary.is_empty() {
        for (label, count) in bundle.sentiment_summary.entries() {
            let _ = writeln!(html, "<li>{}: {}</li>", label, count);
        }
    }
    html.push_str("</ul>\n");
    push_image(&mut html, "Sentiment Chart:", snapshots.sentiment.as_deref());

    // TF-IDF
    html.push_str("<h3>Top TF-IDF Terms:</h3>\n<ul>\n");
    for (term, score) in &bundle.tfidf {
        let _ = writeln!(html, "<li>{}: {}</li>", escape(term), fmt_score(*score));
    }
    html.push_str("</ul>\n");
    push_image(&mut html, "TF-IDF Chart:", snapshots.tfidf.as_deref());

    // Topics
    html.push_str("<h3>Topics Discovered:</h3>\n<ul>\n");
    for (i, words) in bundle.topics.iter().enumerate() {
        let _ = writeln!(html, "<li>Topic {}: {}</li>", i + 1, escape(&words.join(", ")));
    }
    html.push_str("</ul>\n");
    push_image(&mut html, "Topic Chart:", snapshots.topics.as_deref());

    // Server rasters
    let wordcloud = bundle.wordcloud_b64().map(png_data_url);
    push_image(&mut html, "Word Cloud:", wordcloud.as_deref());
    let cooc = bundle.cooccurrence_b64().map(png_data_url);
    push_image(&mut html, "Word Co-occurrence Network:", cooc.as_deref());

    html.push_str("</body>\n</html>\n");
    html
}

fn push_image(html: &mut String, heading: &str, src: Option<&str>) {
    if let Some(src) = src {
        let _ = writeln!(
            html,
            "<h3>{}</h3><img src=\"{}\" style=\"{}\" />",
            heading,
            escape(src),
            IMG_STYLE
        );
    }
}

fn png_data_url(b64: &str) -> String {
    join!("data:image/png;base64,", b64)
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
