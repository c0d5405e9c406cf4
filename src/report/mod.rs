// src/report/mod.rs
//
// Export builders. Pure: bundle in, text out. Writing files is `file`'s job.

pub mod analysis;
pub mod visual;

pub use analysis::{analysis_csv, analysis_rows, ANALYSIS_HEADERS};
pub use visual::{visual_report_html, REPORT_TITLE};
