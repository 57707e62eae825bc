/// Byte range into a borrowed source string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start offset in bytes (inclusive)
    pub start: usize,
    /// End offset in bytes (exclusive)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Whether a part is sentence text or the punctuation that closes it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    Segment,
    Delimiter,
}

/// One element of a segmented text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Part {
    pub kind: PartKind,
    pub span: Span,
}

impl Part {
    pub fn segment(start: usize, end: usize) -> Self {
        Self {
            kind: PartKind::Segment,
            span: Span::new(start, end),
        }
    }

    pub fn delimiter(start: usize, end: usize) -> Self {
        Self {
            kind: PartKind::Delimiter,
            span: Span::new(start, end),
        }
    }

    pub fn is_segment(&self) -> bool {
        self.kind == PartKind::Segment
    }
}

/// A text split into alternating segments and delimiters
///
/// The parts always start and end with a segment, which may be empty, so
/// there is exactly one more segment than there are delimiters. The spans
/// tile the source without gaps or overlap.
#[derive(Debug, Clone)]
pub struct SegmentedText<'a> {
    source: &'a str,
    parts: Vec<Part>,
}

impl<'a> SegmentedText<'a> {
    pub(crate) fn new(source: &'a str, parts: Vec<Part>) -> Self {
        debug_assert!(parts.first().is_some_and(Part::is_segment));
        debug_assert!(parts.last().is_some_and(Part::is_segment));
        Self { source, parts }
    }

    /// The text the parts were cut from
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// All parts in source order
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Text covered by a part
    pub fn text(&self, part: &Part) -> &'a str {
        &self.source[part.span.start..part.span.end]
    }

    /// Segment texts in order
    pub fn segments(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.parts
            .iter()
            .filter(|p| p.kind == PartKind::Segment)
            .map(|p| self.text(p))
    }

    /// Delimiter texts in order, trailing whitespace included
    pub fn delimiters(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.parts
            .iter()
            .filter(|p| p.kind == PartKind::Delimiter)
            .map(|p| self.text(p))
    }

    pub fn segment_count(&self) -> usize {
        self.parts.iter().filter(|p| p.is_segment()).count()
    }

    /// Concatenate every part back into one string
    pub fn rejoin(&self) -> String {
        self.parts.iter().map(|p| self.text(p)).collect()
    }
}
