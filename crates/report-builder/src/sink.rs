use chrono::NaiveDate;
use screener_core::ScreenerError;
use std::fs;
use std::path::{Path, PathBuf};

/// Write the rendered report to `<dir>/analysis_report_YYYYMMDD.md`,
/// creating the directory first. The results are already computed when
/// this runs, so a write failure surfaces to the caller instead of being
/// swallowed.
pub fn write_dated_report(
    dir: &Path,
    markdown: &str,
    date: NaiveDate,
) -> Result<PathBuf, ScreenerError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("analysis_report_{}.md", date.format("%Y%m%d")));
    fs::write(&path, markdown)?;
    Ok(path)
}
