//! Label-driven section slicing.
//!
//! The model is free to reorder sections, interleave commentary, or drop
//! headings entirely, so sections are located by label match rather than by
//! position. A section runs from the end of its label to the start of the
//! next recognized section label, or to end-of-text.

use super::labels::{label_patterns, FieldKind, SECTION_KINDS};

/// Earliest match of any of the kind's label patterns at or after `from`,
/// returned as (match start, match end).
fn earliest_label_match(text: &str, kind: FieldKind, from: usize) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for pattern in label_patterns(kind) {
        if let Some(m) = pattern.find_at(text, from) {
            if best.map_or(true, |(start, _)| m.start() < start) {
                best = Some((m.start(), m.end()));
            }
        }
    }
    best
}

/// Slice the section belonging to `kind` out of normalized text. Absence is
/// a normal outcome, not an error.
pub fn locate_section(text: &str, kind: FieldKind) -> Option<&str> {
    let (_, content_start) = earliest_label_match(text, kind, 0)?;
    let mut end = text.len();
    for stop in SECTION_KINDS {
        if let Some((start, _)) = earliest_label_match(text, stop, content_start) {
            if start < end {
                end = start;
            }
        }
    }
    Some(&text[content_start..end])
}

/// The search space for recommendation fields: the labeled recommendation
/// block when present, otherwise the entire text, because some responses
/// omit the header but still carry the fields inline. Downstream extractors
/// deal with an empty result by failing validation, never by panicking.
pub fn resolve_recommendation_scope(text: &str) -> &str {
    match locate_section(text, FieldKind::Recommendation) {
        Some(section) if !section.trim().is_empty() => section,
        _ => text,
    }
}
