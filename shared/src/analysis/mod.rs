//! Free-text AI response parser.
//!
//! The upstream model is asked to answer with labeled sections and a
//! terminal recommendation block, but that contract is enforced by nothing
//! stronger than the prompt. This module turns whatever text comes back into
//! a typed [`Analysis`], or rejects it when the mandatory trade fields
//! cannot be recovered. A partially wrong trade plan shown to a trader is
//! worse than a clean failure, so the validation gate never lets a partial
//! record through.

pub mod fields;
pub mod labels;
pub mod normalize;
pub mod sections;

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

use crate::models::{Analysis, Recommendation, RiskProfile};
use fields::{
    extract_action, extract_entry, extract_entry_rationale, extract_stop_loss,
    extract_take_profits,
};
use labels::FieldKind;
use normalize::{clean_fragment, normalize};
use sections::{locate_section, resolve_recommendation_scope};

/// Sentinel for a narrative section the model did not provide. Narrative
/// fields are never empty strings.
const PLACEHOLDER: &str = "-";

/// Numeric-field label words that must never survive inside the explanation
/// narrative; the explanation is truncated at the first occurrence.
static TRADE_FIELD_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:entry|stop\s*loss|sl|take\s*profit|tp\d*)\b").unwrap());

/// The only expected failure mode of the extractor. Infrastructure errors
/// (network, quota) never surface through this type, so callers can decide
/// between "re-ask the AI" and "retry the transport" by error kind alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("AI analysis format invalid or incomplete: missing crucial trade data ({missing})")]
    MissingTradeData { missing: String },
}

/// Extraction knobs. `degraded_action_scan` enables the last-resort bare
/// buy/sell keyword scan when no action label exists; it trades recall for
/// precision and can be switched off independently of the label-driven path.
#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    pub degraded_action_scan: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self { degraded_action_scan: true }
    }
}

fn section_or_placeholder(text: &str, kind: FieldKind) -> String {
    locate_section(text, kind)
        .map(clean_fragment)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Drop everything from the first numeric-field label onward so the
/// narrative never duplicates the structured recommendation.
fn strip_trade_fields(explanation: &str) -> String {
    let kept = match TRADE_FIELD_LABEL.find(explanation) {
        Some(m) => explanation[..m.start()].trim_end(),
        None => explanation,
    };
    if kept.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        kept.to_string()
    }
}

/// Parse one raw AI response into an [`Analysis`] with default options.
pub fn parse_analysis_text(raw: &str, risk: RiskProfile) -> Result<Analysis, ParseError> {
    parse_analysis_text_with(raw, risk, ParserOptions::default())
}

/// Single-pass extraction: normalize, slice narrative sections (missing
/// sections become "-"), resolve the recommendation scope, extract the trade
/// fields, then gate on all of action/entry/stop-loss/take-profit being
/// present. `risk` is a caller-supplied pass-through, never read from text.
pub fn parse_analysis_text_with(
    raw: &str,
    risk: RiskProfile,
    options: ParserOptions,
) -> Result<Analysis, ParseError> {
    let text = normalize(raw);

    let trend = section_or_placeholder(&text, FieldKind::Trend);
    let support_resistance = section_or_placeholder(&text, FieldKind::SupportResistance);
    let candlestick = section_or_placeholder(&text, FieldKind::Candlestick);
    let indicators = section_or_placeholder(&text, FieldKind::Indicators);
    let explanation = strip_trade_fields(&section_or_placeholder(&text, FieldKind::Explanation));

    let scope = resolve_recommendation_scope(&text);
    let action = extract_action(scope, &options);
    let entry = extract_entry(scope);
    let stop_loss = extract_stop_loss(scope);
    let take_profit = extract_take_profits(scope);

    match (action, entry, stop_loss, take_profit.is_empty()) {
        (Some(action), Some(entry), Some(stop_loss), false) => Ok(Analysis {
            trend,
            support_resistance,
            candlestick,
            indicators,
            explanation,
            recommendation: Recommendation {
                action,
                entry,
                entry_rationale: extract_entry_rationale(scope).unwrap_or_default(),
                stop_loss,
                take_profit,
                risk_profile: risk,
            },
        }),
        (action, entry, stop_loss, tp_empty) => {
            let mut missing = Vec::new();
            if action.is_none() {
                missing.push("Aksi");
            }
            if entry.is_none() {
                missing.push("Entry");
            }
            if stop_loss.is_none() {
                missing.push("Stop Loss");
            }
            if tp_empty {
                missing.push("Take Profit");
            }
            debug!(scope, "AI output rejected by validation gate");
            Err(ParseError::MissingTradeData { missing: missing.join(", ") })
        }
    }
}
