//! Low-level text cleanup for raw AI output.
//!
//! The upstream model decorates its answers with markdown the parser has no
//! use for. Everything here is pure, total and idempotent; numeric tokens
//! and label words pass through untouched.

use regex::Regex;
use std::sync::LazyLock;

static MARKDOWN_NOISE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[*`]+|#+|-{2,}").unwrap());
static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());
static LINE_EDGES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" *\n *").unwrap());
static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Strip markdown noise (`*`, backticks, `#` runs, `--` runs) and collapse
/// repeated whitespace while keeping the line structure intact. A single `-`
/// survives: it is both the placeholder sentinel and a minus sign.
pub fn normalize(raw: &str) -> String {
    let text = raw.replace("\r\n", "\n").replace(['\r', '\t'], " ");
    let text = MARKDOWN_NOISE.replace_all(&text, " ");
    let text = SPACE_RUNS.replace_all(&text, " ");
    let text = LINE_EDGES.replace_all(&text, "\n");
    let text = BLANK_RUNS.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Collapse all whitespace (including newlines) into single spaces and trim.
/// Applied to narrative slices and captured field values before they land in
/// an `Analysis`.
pub fn clean_fragment(s: &str) -> String {
    WHITESPACE.replace_all(s, " ").trim().to_string()
}

/// Keep only the characters a price token is made of. The result is a
/// display string, never parsed to a float, so formatting is preserved.
pub fn clean_numeric(s: &str) -> String {
    let kept: String = s.chars().filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-')).collect();
    kept.trim_end_matches(['.', ',']).trim_start_matches(',').to_string()
}
