// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    api::types::AnalysisBundle,
    charts::ChartSnapshots,
    config::options::ExportOptions,
    error::ExportError,
    platform::Platform,
    report,
};

/// Write `<out>/<platform>_analysis_report.csv`. Refuses an empty bundle.
pub fn write_analysis_report(
    export: &ExportOptions,
    platform: Platform,
    bundle: &AnalysisBundle,
) -> Result<PathBuf, ExportError> {
    if !bundle.has_any_section() {
        return Err(ExportError::Empty);
    }
    let path = export.analysis_report_path(platform.as_str());
    write_text(&path, &report::analysis_csv(bundle))?;
    Ok(path)
}

/// Write `<out>/SocialMediaAnalysis_Report.doc`. Refuses an empty bundle.
pub fn write_visual_report(
    export: &ExportOptions,
    platform: Platform,
    bundle: &AnalysisBundle,
    snapshots: &ChartSnapshots,
) -> Result<PathBuf, ExportError> {
    if !bundle.has_any_section() {
        return Err(ExportError::Empty);
    }
    let path = export.visual_report_path();
    write_text(&path, &report::visual_report_html(platform, bundle, snapshots))?;
    Ok(path)
}

/// Create parent dirs as needed, then overwrite.
pub fn write_text(path: &Path, contents: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    logd!("Export: wrote {} bytes → {}", contents.len(), path.display());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Find the nearest existing parent folder by walking up the directory tree.
pub fn find_nearest_existing_parent(path: &Path) -> PathBuf {
    let mut current = path.to_path_buf();

    loop {
        if current.is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => return PathBuf::from("."),
        }
    }
}
