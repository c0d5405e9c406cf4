// tests/platform_charts.rs
//
// Platform parsing, preview columns, and the chart series derived from a bundle.

mod common;

use serde_json::json;
use social_dash::{
    api::types::SentimentSummary,
    charts::{self, palette_color, ChartRegion, ChartSnapshots},
    platform::{self, Platform},
};

use common::{row, sample_bundle};

#[test]
fn only_two_platforms_parse() {
    assert_eq!("youtube".parse::<Platform>().unwrap(), Platform::Youtube);
    assert_eq!(" Reddit ".parse::<Platform>().unwrap(), Platform::Reddit);
    assert!("twitter".parse::<Platform>().is_err());
    assert!("".parse::<Platform>().is_err());
    assert!("tiktok".parse::<Platform>().is_err());
}

#[test]
fn preview_columns_per_platform() {
    assert_eq!(
        platform::preview_columns(Some(Platform::Youtube)),
        &["video_id", "author_name", "comment", "published_at", "likes", "reply_count"]
    );
    assert_eq!(platform::preview_columns(Some(Platform::Reddit)), &["Post URL", "Comment"]);
    assert!(platform::preview_columns(None).is_empty());
}

#[test]
fn cells_render_scalars_as_text() {
    let r = row(&[
        ("comment", json!("hello, world")),
        ("likes", json!(12)),
        ("score", json!(0.5)),
        ("reply_count", json!(null)),
    ]);
    assert_eq!(r.cells(&["comment", "likes", "score", "reply_count", "missing"]),
        vec!["hello, world", "12", "0.5", "", ""]);
}

#[test]
fn platform_wire_names() {
    assert_eq!(serde_json::to_value(Platform::Youtube).unwrap(), json!("youtube"));
    assert_eq!(Platform::Reddit.to_string(), "reddit");
    assert_eq!(Platform::Youtube.label(), "YouTube");
}

#[test]
fn palette_cycles_by_index() {
    let p: [[u8; 3]; 3] = [[0x00, 0xC4, 0x9F], [0xFF, 0xBB, 0x28], [0xFF, 0x4D, 0x4F]];
    for i in 0..9 {
        assert_eq!(palette_color(i), p[i % 3]);
    }
}

#[test]
fn pie_skips_zero_counts() {
    let s = charts::sentiment_slices(&SentimentSummary { positive: 3, neutral: 0, negative: 1 });
    assert_eq!(s.len(), 2);
    assert_eq!(s[0].label, "positive");
    assert_eq!(s[1].label, "negative");
    assert!((s[0].fraction - 0.75).abs() < 1e-9);
    assert_eq!(s[1].color, palette_color(1));

    assert!(charts::sentiment_slices(&SentimentSummary::default()).is_empty());
}

#[test]
fn tfidf_bars_round_to_three_places() {
    let bars = charts::tfidf_bars(&[("rust".into(), 0.8231), ("async".into(), 0.5)]);
    assert_eq!(bars[0].value, 0.823);
    assert_eq!(bars[1].value, 0.5);
    assert_eq!(bars[0].label, "rust");

    let tie = charts::tfidf_bars(&[("x".into(), 0.3125)]);
    assert_eq!(tie[0].value, 0.313);
}

#[test]
fn topic_bar_height_counts_down() {
    let bars = charts::topic_bars(&[vec!["a".into(), "b".into(), "c".into()], vec!["x".into()]]);
    let heights: Vec<f64> = bars.iter().map(|b| b.value).collect();
    assert_eq!(heights, vec![3.0, 2.0, 1.0, 1.0]);
    assert_eq!(bars[0].group, "Topic 1");
    assert_eq!(bars[3].group, "Topic 2");
}

#[test]
fn chart_regions_follow_data() {
    let mut b = sample_bundle();
    assert!(ChartRegion::Sentiment.is_drawn_for(&b));
    assert!(ChartRegion::Topics.is_drawn_for(&b));

    b.sentiment_summary = SentimentSummary::default();
    b.topics = vec![vec![]];
    assert!(!ChartRegion::Sentiment.is_drawn_for(&b));
    assert!(!ChartRegion::Topics.is_drawn_for(&b));
    assert!(ChartRegion::Tfidf.is_drawn_for(&b));
}

#[test]
fn snapshots_count_what_was_set() {
    let mut s = ChartSnapshots::default();
    assert_eq!(s.count(), 0);
    s.set(ChartRegion::Topics, "data:x".into());
    assert_eq!(s.get(ChartRegion::Topics), Some("data:x"));
    assert_eq!(s.count(), 1);
}
