//! Table-driven label grammar for the analysis extractor.
//!
//! Every field the parser knows about maps to an ordered list of label
//! regexes, tried in priority order. The upstream model answers in
//! Indonesian or English depending on mood, so each entry carries both
//! spellings. Bare single-word synonyms ("Indikator", "Indicators") require
//! an explicit `:`/`-` separator so prose mentioning the word does not get
//! mistaken for a heading; distinctive multi-word labels accept a missing
//! separator.

use regex::Regex;
use std::sync::LazyLock;

/// Everything the extractor can look for: narrative sections, the
/// recommendation header, and the numeric trade fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Trend,
    SupportResistance,
    Candlestick,
    Indicators,
    Explanation,
    Recommendation,
    Action,
    Entry,
    EntryRationale,
    StopLoss,
    TakeProfit,
}

/// Section-level kinds, in prompt order. These double as the stop set when
/// slicing a section out of the text: a section ends where the next
/// recognized section label begins.
pub const SECTION_KINDS: [FieldKind; 6] = [
    FieldKind::Trend,
    FieldKind::SupportResistance,
    FieldKind::Candlestick,
    FieldKind::Indicators,
    FieldKind::Explanation,
    FieldKind::Recommendation,
];

fn compile<S: AsRef<str>>(patterns: &[S]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p.as_ref()).expect("invalid label pattern")).collect()
}

static TREND: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\btrend\s+utama\s*[:\-]?\s*",
        r"(?i)\bprimary\s+trend(?:\s+direction)?\s*[:\-]?\s*",
        r"(?i)\btrend\s+analysis(?:\s*(?:&|and)\s*market\s+structure)?\s*[:\-]?\s*",
    ])
});

static SUPPORT_RESISTANCE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\bsupport\s*(?:&|dan|and)\s*resistance\s*[:\-]?\s*",
        r"(?i)\bkey\s+levels(?:\s+identification)?\s*[:\-]?\s*",
    ])
});

static CANDLESTICK: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\bpola\s+candlestick\s*[:\-]?\s*",
        r"(?i)\bcandlestick\s+patterns?\s*[:\-]?\s*",
        r"(?i)\bprice\s+action(?:\s*(?:&|and)\s*chart\s+patterns?)?\s*[:\-]?\s*",
    ])
});

static INDICATORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\bindikator\s*[:\-]\s*",
        r"(?i)\btechnical\s+indicators(?:\s+confluence)?\s*[:\-]?\s*",
        r"(?i)\bindicators\s*[:\-]\s*",
    ])
});

static EXPLANATION: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\bpenjelasan(?:\s+analisa)?(?:\s*(?:&|dan)\s*strategi)?\s*[:\-]?\s*",
        r"(?i)\bexplanation\s*[:\-]?\s*",
        r"(?i)\banalysis\s*(?:&|and)\s*strategy\s*[:\-]?\s*",
    ])
});

static RECOMMENDATION: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\brekomendasi\s+entry\s*[:\-]?\s*",
        r"(?i)\bentry\s+recommendation\s*[:\-]?\s*",
        r"(?i)\btrading\s+execution\s*[:\-]?\s*",
        r"(?i)\btrading\s+signal(?:\s*(?:&|and)\s*execution\s+plan)?\s*[:\-]?\s*",
    ])
});

const NUMERIC: &str = r"(-?[0-9][0-9.,]*)";

static ACTION: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\baksi\s*[:\-]?\s*\(?\s*(buy|sell)\b",
        r"(?i)\baction\s*[:\-]?\s*\(?\s*(buy|sell)\b",
        r"(?i)\bsignal(?:\s+type)?\s*[:\-]?\s*\(?\s*(buy|sell)\b",
    ])
});

static ENTRY: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        format!(r"(?i)\bentry(?:\s+(?:zone|price|level|point))?\s*[:\-]?\s*{NUMERIC}"),
        format!(r"(?i)\b(?:buy|sell)\s+(?:limit|stop)\s*[:\-]?\s*{NUMERIC}"),
        format!(r"(?i)\boptimal\s+entry(?:\s+zone)?\s*[:\-]?\s*{NUMERIC}"),
    ])
});

static ENTRY_RATIONALE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\brasional\s+entry\s*[:\-]?\s*([^\n]+)",
        r"(?i)\bentry\s+rationale\s*[:\-]?\s*([^\n]+)",
        r"(?i)\balasan\s+entry\s*[:\-]?\s*([^\n]+)",
    ])
});

static STOP_LOSS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        format!(r"(?i)\bstop\s*loss(?:\s+level)?\s*[:\-]?\s*{NUMERIC}"),
        format!(r"(?i)\bsl\s*[:\-]?\s*{NUMERIC}"),
        format!(r"(?i)\bstop\s*[:\-]?\s*{NUMERIC}"),
    ])
});

/// TP1..TP3 by explicit number, index 0 holding the TP1 patterns.
static TAKE_PROFIT_NUMBERED: LazyLock<[Vec<Regex>; 3]> = LazyLock::new(|| {
    [1, 2, 3].map(|n| {
        compile(&[
            format!(r"(?i)\btake\s*profit\s*{n}\s*[:\-]?\s*{NUMERIC}"),
            format!(r"(?i)\btp\s*{n}\s*[:\-]?\s*{NUMERIC}"),
        ])
    })
});

/// Fallback for the single-label form: "Take Profit: 100, 105, 110".
/// Captures the whole delimited list; the extractor splits it.
static TAKE_PROFIT_LIST: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[r"(?i)\btake\s*profit(?:\s+targets?)?\s*[:\-]?\s*((?:-?[0-9][0-9.,]*[,;/ \n]*)+)"])
});

/// Ordered label patterns for a field, highest priority first.
pub fn label_patterns(kind: FieldKind) -> &'static [Regex] {
    match kind {
        FieldKind::Trend => &TREND,
        FieldKind::SupportResistance => &SUPPORT_RESISTANCE,
        FieldKind::Candlestick => &CANDLESTICK,
        FieldKind::Indicators => &INDICATORS,
        FieldKind::Explanation => &EXPLANATION,
        FieldKind::Recommendation => &RECOMMENDATION,
        FieldKind::Action => &ACTION,
        FieldKind::Entry => &ENTRY,
        FieldKind::EntryRationale => &ENTRY_RATIONALE,
        FieldKind::StopLoss => &STOP_LOSS,
        FieldKind::TakeProfit => &TAKE_PROFIT_LIST,
    }
}

/// Patterns for "Take Profit N" / "TPN", `n` in 1..=3.
pub fn take_profit_numbered(n: usize) -> &'static [Regex] {
    &TAKE_PROFIT_NUMBERED[n - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tables_compile() {
        for kind in [
            FieldKind::Trend,
            FieldKind::SupportResistance,
            FieldKind::Candlestick,
            FieldKind::Indicators,
            FieldKind::Explanation,
            FieldKind::Recommendation,
            FieldKind::Action,
            FieldKind::Entry,
            FieldKind::EntryRationale,
            FieldKind::StopLoss,
            FieldKind::TakeProfit,
        ] {
            assert!(!label_patterns(kind).is_empty());
        }
        for n in 1..=3 {
            assert_eq!(take_profit_numbered(n).len(), 2);
        }
    }

    #[test]
    fn test_indonesian_and_english_spellings_match() {
        let id = label_patterns(FieldKind::Trend)[0].find("Trend Utama: Bullish");
        assert!(id.is_some());
        let en = label_patterns(FieldKind::Trend)
            .iter()
            .any(|p| p.is_match("Primary Trend: Bullish"));
        assert!(en);
    }

    #[test]
    fn test_bare_synonyms_require_separator() {
        let prose = "konfirmasi indikator menunjukkan momentum";
        assert!(!label_patterns(FieldKind::Indicators).iter().any(|p| p.is_match(prose)));
        assert!(label_patterns(FieldKind::Indicators).iter().any(|p| p.is_match("Indikator: RSI 60")));
    }

    #[test]
    fn test_trend_word_inside_other_words_does_not_match() {
        assert!(!label_patterns(FieldKind::Trend).iter().any(|p| p.is_match("harga downtrend utamanya")));
    }
}
