pub const FENCE: &str = "```";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    ListItem,
    CodeFence,
    BareUrl,
    Text,
}

/// Classify a raw line. Order matters: a line starting with `#` is a heading
/// even if it also contains a URL.
///
/// `first` is true for the first line of the document, which is never
/// treated as a list item.
pub fn classify(line: &str, first: bool) -> LineKind {
    let trimmed = line.trim();

    if line.starts_with('#') {
        LineKind::Heading
    } else if trimmed.starts_with('-') && !first {
        LineKind::ListItem
    } else if trimmed.starts_with(FENCE) {
        LineKind::CodeFence
    } else if line.contains("http://") || line.contains("https://") {
        LineKind::BareUrl
    } else {
        LineKind::Text
    }
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// A delimiter line carrying an even number of fence markers (such as
/// ```` ```sh echo``` ````) opens and closes on the same line.
pub fn is_balanced_fence(line: &str) -> bool {
    line.matches(FENCE).count() % 2 == 0
}
