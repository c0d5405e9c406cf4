// tests/analysis_export.rs
//
// CSV report text and where it lands on disk.

mod common;

use social_dash::{
    api::{fmt_score, AnalysisBundle},
    config::options::ExportOptions,
    error::ExportError,
    file,
    platform::Platform,
    report::{analysis_csv, analysis_rows},
};

use common::sample_bundle;

#[test]
fn csv_has_header_and_every_section() {
    let csv = analysis_csv(&sample_bundle());
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "Section,Key,Value");
    assert_eq!(lines[1], "Sentiment Summary,Average Sentiment,0.217");
    assert_eq!(lines[2], "Sentiment Summary,Positive,2");
    assert_eq!(lines[3], "Sentiment Summary,Neutral,0");
    assert_eq!(lines[4], "Sentiment Summary,Negative,1");
    assert_eq!(lines[5], "TF-IDF,rust,0.823");
    assert_eq!(lines[6], "TF-IDF,async,0.500");
    assert_eq!(lines[7], "Topic 1,Words,\"rust, cargo, crate\"");
    assert_eq!(lines[8], "Topic 2,Words,\"egui, ui\"");
    assert_eq!(lines[9], "Centrality,rust,0.912");
    assert_eq!(lines.len(), 10);
}

#[test]
fn sentiment_rows_need_scores() {
    let mut b = sample_bundle();
    b.sentiments.clear();

    let rows = analysis_rows(&b);
    assert!(rows.iter().all(|r| r[0] != "Sentiment Summary"));
    assert_eq!(rows[0][0], "TF-IDF");
}

#[test]
fn empty_bundle_has_only_header() {
    let csv = analysis_csv(&AnalysisBundle::default());
    assert_eq!(csv, "Section,Key,Value\n");
}

#[test]
fn awkward_terms_are_quoted() {
    let b = AnalysisBundle {
        tfidf: vec![("say \"hi\"".into(), 0.1), ("a,b".into(), 0.2)],
        ..AnalysisBundle::default()
    };
    let csv = analysis_csv(&b);
    assert!(csv.contains("TF-IDF,\"say \"\"hi\"\"\",0.100"));
    assert!(csv.contains("TF-IDF,\"a,b\",0.200"));
}

#[test]
fn average_never_divides_by_zero() {
    assert_eq!(AnalysisBundle::default().average_sentiment_text(), "N/A");
    assert_eq!(AnalysisBundle::default().average_sentiment(), None);
}

#[test]
fn exact_ties_round_up() {
    let b = AnalysisBundle {
        sentiments: vec![0.125, 0.0],
        tfidf: vec![("x".into(), 0.3125)],
        ..AnalysisBundle::default()
    };
    assert_eq!(b.average_sentiment_text(), "0.063");
    assert!(analysis_csv(&b).contains("TF-IDF,x,0.313\n"));
}

#[test]
fn score_text_follows_the_stored_value() {
    assert_eq!(fmt_score(0.0625), "0.063");
    assert_eq!(fmt_score(0.3125), "0.313");
    assert_eq!(fmt_score(-0.0625), "-0.063");
    // stored just above / below the decimal tie
    assert_eq!(fmt_score(0.0005), "0.001");
    assert_eq!(fmt_score(1.0005), "1.000");
    assert_eq!(fmt_score(0.9999), "1.000");
    assert_eq!(fmt_score(99.9996), "100.000");
    assert_eq!(fmt_score(0.0), "0.000");
    assert_eq!(fmt_score(0.5), "0.500");
}

#[test]
fn report_is_written_into_missing_folder() {
    let tmp = tempfile::tempdir().unwrap();
    let mut export = ExportOptions::default();
    let out = tmp.path().join("nested").join("reports");
    export.set_dir(&out.to_string_lossy());

    let path = file::write_analysis_report(&export, Platform::Reddit, &sample_bundle()).unwrap();

    assert_eq!(path, out.join("reddit_analysis_report.csv"));
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Section,Key,Value\n"));
}

#[test]
fn empty_bundle_is_not_written() {
    let tmp = tempfile::tempdir().unwrap();
    let mut export = ExportOptions::default();
    export.set_dir(&tmp.path().to_string_lossy());

    let err = file::write_analysis_report(&export, Platform::Youtube, &AnalysisBundle::default())
        .unwrap_err();
    assert!(matches!(err, ExportError::Empty));
    assert!(!tmp.path().join("youtube_analysis_report.csv").exists());
}

#[test]
fn file_in_place_of_folder_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("out");
    std::fs::write(&blocker, "not a dir").unwrap();

    let mut export = ExportOptions::default();
    export.set_dir(&blocker.to_string_lossy());

    let err = file::write_analysis_report(&export, Platform::Youtube, &sample_bundle()).unwrap_err();
    assert!(matches!(err, ExportError::NotADirectory(_)));
}

#[test]
fn blank_folder_text_means_default() {
    let mut export = ExportOptions::default();
    export.set_dir("   ");
    assert_eq!(export.out_dir(), std::path::Path::new("out"));
    assert!(export.visual_report_path().ends_with("SocialMediaAnalysis_Report.doc"));
}
