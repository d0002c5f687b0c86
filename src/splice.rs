//! Anchor-delimited splicing over plain text.
//!
//! The document is cut twice: once right after the anchor and once at the
//! first end marker that follows it. Only the span between the cuts changes.

/// Byte offsets of the region replaced by a splice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpliceSpan {
    /// Offset immediately after the anchor's last byte.
    pub insert_at: usize,
    /// Offset where the untouched tail begins.
    pub resume_at: usize,
    pub end_marker_found: bool,
}

impl SpliceSpan {
    pub fn removed_len(&self) -> usize {
        self.resume_at - self.insert_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spliced {
    pub text: String,
    pub span: SpliceSpan,
}

/// Find the region to replace, or `None` when the anchor is missing.
///
/// The first anchor occurrence wins. The end marker is searched only after
/// the anchor; without one the region runs to end of document.
pub fn locate(document: &str, anchor: &str, end_marker: &str) -> Option<SpliceSpan> {
    let insert_at = document.find(anchor)? + anchor.len();
    let (resume_at, end_marker_found) = match document[insert_at..].find(end_marker) {
        Some(rel) => (insert_at + rel, true),
        None => (document.len(), false),
    };
    Some(SpliceSpan {
        insert_at,
        resume_at,
        end_marker_found,
    })
}

/// Replace the located region with `replacement`.
pub fn splice(
    document: &str,
    anchor: &str,
    end_marker: &str,
    replacement: &str,
) -> Option<Spliced> {
    let span = locate(document, anchor, end_marker)?;
    let head = &document[..span.insert_at];
    let tail = &document[span.resume_at..];
    let mut text = String::with_capacity(head.len() + replacement.len() + tail.len());
    text.push_str(head);
    text.push_str(replacement);
    text.push_str(tail);
    Some(Spliced { text, span })
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLACEMENT: &str = "  new body\n";

    #[test]
    fn replaces_between_anchor_and_end_marker() {
        let spliced = splice("X\nANCHOR\nOLD\n\nNEXT:", "ANCHOR\n", "\n\nNEXT:", REPLACEMENT)
            .expect("anchor present");
        assert_eq!(spliced.text, format!("X\nANCHOR\n{REPLACEMENT}\n\nNEXT:"));
        assert_eq!(
            spliced.span,
            SpliceSpan {
                insert_at: 9,
                resume_at: 12,
                end_marker_found: true,
            }
        );
        assert_eq!(spliced.span.removed_len(), "OLD".len());
    }

    #[test]
    fn missing_end_marker_replaces_to_end_of_document() {
        let spliced =
            splice("ANCHOR\nOLD", "ANCHOR\n", "\n\nNEXT:", REPLACEMENT).expect("anchor present");
        assert_eq!(spliced.text, format!("ANCHOR\n{REPLACEMENT}"));
        assert!(!spliced.span.end_marker_found);
        assert_eq!(spliced.span.resume_at, "ANCHOR\nOLD".len());
    }

    #[test]
    fn missing_anchor_yields_none() {
        assert!(splice("no anchor here", "ANCHOR\n", "\n\nNEXT:", REPLACEMENT).is_none());
    }

    #[test]
    fn output_length_is_sum_of_kept_spans_and_replacement() {
        let document = "head\nANCHOR\nfirst\nsecond\n\nNEXT: tail\n\nNEXT: again";
        let spliced =
            splice(document, "ANCHOR\n", "\n\nNEXT:", REPLACEMENT).expect("anchor present");
        let prefix = spliced.span.insert_at;
        let suffix = document.len() - spliced.span.resume_at;
        assert_eq!(spliced.text.len(), prefix + REPLACEMENT.len() + suffix);
        assert!(spliced.text.ends_with("\n\nNEXT: tail\n\nNEXT: again"));
    }

    #[test]
    fn first_anchor_occurrence_is_used() {
        let document = "ANCHOR\na\n\nNEXT:ANCHOR\nb\n\nNEXT:";
        let spliced =
            splice(document, "ANCHOR\n", "\n\nNEXT:", REPLACEMENT).expect("anchor present");
        assert_eq!(
            spliced.text,
            format!("ANCHOR\n{REPLACEMENT}\n\nNEXT:ANCHOR\nb\n\nNEXT:")
        );
    }

    #[test]
    fn end_marker_before_anchor_is_ignored() {
        let document = "\n\nNEXT:\nANCHOR\nold";
        let spliced =
            splice(document, "ANCHOR\n", "\n\nNEXT:", REPLACEMENT).expect("anchor present");
        assert!(!spliced.span.end_marker_found);
        assert_eq!(spliced.text, format!("\n\nNEXT:\nANCHOR\n{REPLACEMENT}"));
    }

    #[test]
    fn reapplying_reaches_a_fixed_point() {
        let document = "X\nANCHOR\nOLD\n\nNEXT: keep";
        let once = splice(document, "ANCHOR\n", "\n\nNEXT:", REPLACEMENT).expect("anchor present");
        let twice =
            splice(&once.text, "ANCHOR\n", "\n\nNEXT:", REPLACEMENT).expect("anchor present");
        assert_eq!(once.text, twice.text);
    }

    #[test]
    fn handles_multibyte_text_around_the_region() {
        let document = "é\nANCHOR\nüber\n\nNEXT: ß";
        let spliced =
            splice(document, "ANCHOR\n", "\n\nNEXT:", REPLACEMENT).expect("anchor present");
        assert_eq!(spliced.text, format!("é\nANCHOR\n{REPLACEMENT}\n\nNEXT: ß"));
    }
}
