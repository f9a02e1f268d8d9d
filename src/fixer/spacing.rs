use tracing::debug;

use super::lines::{classify, is_balanced_fence, is_blank, LineKind};
use super::urls::wrap_bare_urls;
use super::FixReport;

const BLANK: &str = "\n";

/// First pass: insert blank separators around headings, list blocks and code
/// fences, and wrap bare URLs. Never drops a line.
pub fn insert_spacing(lines: &[String], report: &mut FixReport) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len() + lines.len() / 4);
    let mut in_fence = false;

    for (i, line) in lines.iter().enumerate() {
        let next = lines.get(i + 1);

        match classify(line, i == 0) {
            LineKind::Heading => {
                report.headings += 1;
                // Runs of headings stay packed together.
                if !out.last().is_some_and(|prev| prev.starts_with('#')) {
                    separate_from_previous(&mut out, report);
                }
                out.push(line.clone());
                if next.is_some_and(|n| !is_blank(n) && !n.starts_with('#')) {
                    push_blank(&mut out, report);
                }
            }

            LineKind::ListItem => {
                let starts_block = out
                    .last()
                    .map(|prev| prev.trim())
                    .is_some_and(|prev| !prev.is_empty() && !prev.starts_with('-'));
                if starts_block {
                    report.list_blocks += 1;
                    push_blank(&mut out, report);
                }
                out.push(line.clone());
            }

            LineKind::CodeFence => {
                report.code_fences += 1;
                let closes = if is_balanced_fence(line) {
                    // Self-contained: spaced on both sides, state untouched.
                    separate_from_previous(&mut out, report);
                    true
                } else if in_fence {
                    in_fence = false;
                    true
                } else {
                    separate_from_previous(&mut out, report);
                    in_fence = true;
                    false
                };
                out.push(line.clone());
                if closes && next.is_some_and(|n| !is_blank(n)) {
                    push_blank(&mut out, report);
                }
            }

            LineKind::BareUrl => {
                let (fixed, wrapped) = wrap_bare_urls(line);
                if wrapped > 0 {
                    debug!("Line {}: wrapped {} bare URL(s)", i + 1, wrapped);
                    report.urls_wrapped += wrapped;
                }
                out.push(fixed.into_owned());
            }

            LineKind::Text => out.push(line.clone()),
        }
    }

    if in_fence {
        debug!("Document ends inside an unclosed code fence");
    }

    out
}

fn separate_from_previous(out: &mut Vec<String>, report: &mut FixReport) {
    if out.last().is_some_and(|prev| !is_blank(prev)) {
        push_blank(out, report);
    }
}

fn push_blank(out: &mut Vec<String>, report: &mut FixReport) {
    out.push(BLANK.to_string());
    report.blank_lines_inserted += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::split_lines;

    fn spaced(md: &str) -> String {
        let mut report = FixReport::default();
        insert_spacing(&split_lines(md), &mut report).concat()
    }

    #[test]
    fn heading_gets_blank_before_and_after() {
        assert_eq!(spaced("Title\n# Heading\nBody\n"), "Title\n\n# Heading\n\nBody\n");
    }

    #[test]
    fn first_line_heading_has_no_blank_before() {
        assert_eq!(spaced("# Heading\nBody\n"), "# Heading\n\nBody\n");
    }

    #[test]
    fn last_line_heading_has_no_blank_after() {
        assert_eq!(spaced("Body\n# End\n"), "Body\n\n# End\n");
    }

    #[test]
    fn adjacent_headings() {
        assert_eq!(spaced("# A\n# B\n"), "# A\n# B\n");
        assert_eq!(spaced("Intro\n# A\n## B\nText\n"), "Intro\n\n# A\n## B\n\nText\n");
    }

    #[test]
    fn heading_next_to_existing_blanks() {
        assert_eq!(spaced("Text\n\n# H\n\nBody\n"), "Text\n\n# H\n\nBody\n");
        assert_eq!(spaced("# H\n \nBody\n"), "# H\n \nBody\n");
    }

    #[test]
    fn list_block_gets_one_blank() {
        assert_eq!(spaced("Text\n- item1\n- item2\n"), "Text\n\n- item1\n- item2\n");
    }

    #[test]
    fn list_after_blank_or_heading_unchanged() {
        assert_eq!(spaced("Text\n\n- a\n"), "Text\n\n- a\n");
        assert_eq!(spaced("# H\n- a\n- b\n"), "# H\n\n- a\n- b\n");
    }

    #[test]
    fn list_as_first_line() {
        assert_eq!(spaced("- a\n- b\n"), "- a\n- b\n");
    }

    #[test]
    fn code_fence_spacing() {
        assert_eq!(
            spaced("Text\n```\ncode\n```\nMore\n"),
            "Text\n\n```\ncode\n```\n\nMore\n"
        );
    }

    #[test]
    fn code_fence_with_language() {
        assert_eq!(
            spaced("Run:\n```bash\nmake\n```\nDone\n"),
            "Run:\n\n```bash\nmake\n```\n\nDone\n"
        );
    }

    #[test]
    fn balanced_fence_line() {
        assert_eq!(spaced("a\n```x```\nb\n"), "a\n\n```x```\n\nb\n");
    }

    #[test]
    fn fence_at_end_of_document() {
        assert_eq!(spaced("```\ncode\n```\n"), "```\ncode\n```\n");
    }

    #[test]
    fn url_wrapped() {
        assert_eq!(
            spaced("See https://example.com for details.\n"),
            "See <https://example.com> for details.\n"
        );
    }

    #[test]
    fn linked_url_unchanged() {
        assert_eq!(spaced("[text](https://example.com)\n"), "[text](https://example.com)\n");
    }

    #[test]
    fn report_counts() {
        let mut report = FixReport::default();
        let md = "Intro\n# H\nSee http://a.io\n- x\n```\nc\n```\nEnd\n";
        insert_spacing(&split_lines(md), &mut report);
        assert_eq!(report.headings, 1);
        assert_eq!(report.list_blocks, 1);
        assert_eq!(report.code_fences, 2);
        assert_eq!(report.urls_wrapped, 1);
        // before H, after H, before list, before fence, after fence
        assert_eq!(report.blank_lines_inserted, 5);
    }
}
