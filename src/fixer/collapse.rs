use super::lines::is_blank;

/// Second pass: reduce every run of blank lines to its first line.
/// Returns the kept lines and how many blanks were dropped.
pub fn collapse_blank_runs(lines: Vec<String>) -> (Vec<String>, usize) {
    let before = lines.len();
    let mut prev_blank = false;

    let kept: Vec<String> = lines
        .into_iter()
        .filter(|line| {
            let blank = is_blank(line);
            let keep = !(blank && prev_blank);
            prev_blank = blank;
            keep
        })
        .collect();

    let removed = before - kept.len();
    (kept, removed)
}
