// tests/visual_report.rs

mod common;

use social_dash::{
    api::AnalysisBundle,
    charts::{ChartRegion, ChartSnapshots},
    config::options::ExportOptions,
    file,
    platform::Platform,
    report::{visual_report_html, REPORT_TITLE},
};

use common::sample_bundle;

#[test]
fn report_lists_every_section() {
    let html = visual_report_html(Platform::Youtube, &sample_bundle(), &ChartSnapshots::default());

    assert!(html.contains(&format!("<h1>{REPORT_TITLE}</h1>")));
    assert!(html.contains("<h2>Platform: youtube</h2>"));
    assert!(html.contains("<li>positive: 2</li>"));
    assert!(html.contains("<li>negative: 1</li>"));
    assert!(html.contains("<li>rust: 0.823</li>"));
    assert!(html.contains("<li>async: 0.500</li>"));
    assert!(html.contains("<li>Topic 1: rust, cargo, crate</li>"));
    assert!(!html.contains("<img"));
}

#[test]
fn snapshots_and_rasters_become_images() {
    let mut b = sample_bundle();
    b.wordcloud = "iVBORw0KGgo=".into();

    let mut shots = ChartSnapshots::default();
    shots.set(ChartRegion::Tfidf, "data:image/png;base64,AAAA".into());

    let html = visual_report_html(Platform::Reddit, &b, &shots);

    assert!(html.contains("<h3>TF-IDF Chart:</h3><img src=\"data:image/png;base64,AAAA\""));
    assert!(html.contains("<h3>Word Cloud:</h3><img src=\"data:image/png;base64,iVBORw0KGgo=\""));
    assert!(!html.contains("Sentiment Chart:"));
    assert!(!html.contains("Word Co-occurrence Network:"));
}

#[test]
fn text_is_escaped() {
    let b = AnalysisBundle {
        tfidf: vec![("<script>".into(), 1.0)],
        topics: vec![vec!["a&b".into()]],
        ..AnalysisBundle::default()
    };
    let html = visual_report_html(Platform::Youtube, &b, &ChartSnapshots::default());

    assert!(html.contains("<li>&lt;script&gt;: 1.000</li>"));
    assert!(html.contains("<li>Topic 1: a&amp;b</li>"));
    assert!(!html.contains("<script>"));
}

#[test]
fn empty_summary_lists_nothing() {
    let html = visual_report_html(Platform::Youtube, &AnalysisBundle::default(), &ChartSnapshots::default());
    assert!(html.contains("<h3>Sentiment Summary:</h3>\n<ul>\n</ul>"));
}

#[test]
fn visual_report_lands_in_export_folder() {
    let tmp = tempfile::tempdir().unwrap();
    let mut export = ExportOptions::default();
    export.set_dir(&tmp.path().join("docs").to_string_lossy());

    let path = file::write_visual_report(&export, Platform::Youtube, &sample_bundle(), &ChartSnapshots::default())
        .unwrap();

    assert_eq!(path.file_name().unwrap(), "SocialMediaAnalysis_Report.doc");
    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.starts_with("<html>"));
}

#[test]
fn empty_bundle_gets_no_visual_report() {
    let tmp = tempfile::tempdir().unwrap();
    let mut export = ExportOptions::default();
    export.set_dir(&tmp.path().to_string_lossy());

    let err = file::write_visual_report(&export, Platform::Reddit, &AnalysisBundle::default(), &ChartSnapshots::default())
        .unwrap_err();
    assert!(matches!(err, social_dash::error::ExportError::Empty));
    assert!(!tmp.path().join("SocialMediaAnalysis_Report.doc").exists());
}
