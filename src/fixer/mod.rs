pub mod collapse;
pub mod lines;
pub mod spacing;
pub mod urls;

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use crate::document;

/// Counters gathered while fixing one document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FixReport {
    pub lines_read: usize,
    pub lines_written: usize,
    pub headings: usize,
    pub list_blocks: usize,
    pub code_fences: usize,
    pub urls_wrapped: usize,
    pub blank_lines_inserted: usize,
    pub blank_lines_removed: usize,
}

impl FixReport {
    pub fn log(&self, path: &str) {
        info!(
            "{}: {} -> {} lines ({} blank inserted, {} blank removed, {} URLs wrapped)",
            path,
            self.lines_read,
            self.lines_written,
            self.blank_lines_inserted,
            self.blank_lines_removed,
            self.urls_wrapped,
        );
    }
}

/// Two-pass pipeline: spacing insertion, then blank-run collapsing.
pub fn fix_lines(lines: &[String]) -> (Vec<String>, FixReport) {
    let mut report = FixReport {
        lines_read: lines.len(),
        ..FixReport::default()
    };

    let spaced = spacing::insert_spacing(lines, &mut report);
    debug!(
        "Spacing pass: {} headings, {} list blocks, {} fences, {} blank lines inserted",
        report.headings, report.list_blocks, report.code_fences, report.blank_lines_inserted
    );

    let (fixed, removed) = collapse::collapse_blank_runs(spaced);
    debug!("Collapse pass: {} blank lines removed", removed);

    report.blank_lines_removed = removed;
    report.lines_written = fixed.len();
    (fixed, report)
}

pub fn fix_text(markdown: &str) -> (String, FixReport) {
    let (fixed, report) = fix_lines(&document::split_lines(markdown));
    (fixed.concat(), report)
}

/// Fix the file at `path` in place. Nothing is written if reading fails.
pub fn fix_file(path: impl AsRef<Path>) -> Result<FixReport> {
    let path = path.as_ref();
    let markdown = document::read(path)?;
    let (fixed, report) = fix_text(&markdown);
    document::write(path, &fixed)?;
    Ok(report)
}

// ── Tests ──
