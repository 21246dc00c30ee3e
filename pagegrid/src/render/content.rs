//! Styled cell text with highlight spans.

/// One run of text, either plain or marked as a search match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// The text of this run
    pub text: String,
    /// Whether this run matched the search text
    pub highlighted: bool,
}

impl Span {
    /// Create a plain span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: false,
        }
    }

    /// Create a highlighted span.
    pub fn highlighted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: true,
        }
    }
}

/// The computed display value of a cell: ordered spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellText {
    /// Runs in display order
    pub spans: Vec<Span>,
}

impl CellText {
    /// Single plain span. Empty text yields no spans.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self {
            spans: vec![Span::plain(text)],
        }
    }

    /// Concatenate all spans into an unstyled string.
    pub fn to_plain_string(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Whether any span is a search match.
    pub fn has_highlight(&self) -> bool {
        self.spans.iter().any(|span| span.highlighted)
    }
}

/// Wrap case-insensitive matches of `needle` in highlighted spans.
///
/// Pure: same inputs always produce the same spans. Falls back to an
/// unhighlighted value when lowercasing shifts byte offsets (rare scripts),
/// rather than splitting text on a non-boundary.
pub fn highlight(text: &str, needle: &str) -> CellText {
    if text.is_empty() || needle.is_empty() {
        return CellText::plain(text);
    }
    let haystack = text.to_lowercase();
    let needle = needle.to_lowercase();
    if haystack.len() != text.len() {
        return CellText::plain(text);
    }

    let mut spans = Vec::new();
    let mut cursor = 0;
    while let Some(found) = haystack[cursor..].find(&needle) {
        let start = cursor + found;
        let end = start + needle.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return CellText::plain(text);
        }
        if start > cursor {
            spans.push(Span::plain(&text[cursor..start]));
        }
        spans.push(Span::highlighted(&text[start..end]));
        cursor = end;
    }
    if spans.is_empty() {
        return CellText::plain(text);
    }
    if cursor < text.len() {
        spans.push(Span::plain(&text[cursor..]));
    }
    CellText { spans }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_marks_all_matches() {
        let cell = highlight("banana", "an");
        assert_eq!(
            cell.spans,
            vec![
                Span::plain("b"),
                Span::highlighted("an"),
                Span::highlighted("an"),
                Span::plain("a"),
            ]
        );
    }

    #[test]
    fn test_highlight_is_case_insensitive() {
        let cell = highlight("Ada Lovelace", "ada");
        assert_eq!(cell.spans[0], Span::highlighted("Ada"));
        assert!(!cell.spans[1].highlighted);
    }

    #[test]
    fn test_no_match_yields_plain_text() {
        let cell = highlight("banana", "xyz");
        assert_eq!(cell, CellText::plain("banana"));
        assert!(!cell.has_highlight());
    }

    #[test]
    fn test_empty_needle_is_plain() {
        assert!(!highlight("banana", "").has_highlight());
    }

    #[test]
    fn test_plain_string_round_trip() {
        let cell = highlight("apricot and apple", "ap");
        assert_eq!(cell.to_plain_string(), "apricot and apple");
    }
}
