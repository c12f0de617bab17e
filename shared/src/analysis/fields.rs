//! Field-level extractors over the recommendation scope.
//!
//! Each extractor walks its label synonym table in priority order and
//! returns the first usable value. Missing fields are `None`/empty, the
//! validation gate in the orchestrator decides whether that sinks the parse.

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

use super::labels::{label_patterns, take_profit_numbered, FieldKind};
use super::normalize::{clean_fragment, clean_numeric};
use super::ParserOptions;
use crate::models::TradeAction;

static BARE_ACTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\b(buy|sell)\b").unwrap());
static LIST_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,;/\s]+").unwrap());

fn first_capture(scope: &str, kind: FieldKind) -> Option<String> {
    for pattern in label_patterns(kind) {
        if let Some(caps) = pattern.captures(scope) {
            return Some(caps[1].to_string());
        }
    }
    None
}

fn usable_numeric(raw: &str) -> Option<String> {
    let cleaned = clean_numeric(raw);
    cleaned.chars().any(|c| c.is_ascii_digit()).then_some(cleaned)
}

fn numeric_capture(scope: &str, kind: FieldKind) -> Option<String> {
    first_capture(scope, kind).and_then(|v| usable_numeric(&v))
}

fn action_from_keyword(word: &str) -> Option<TradeAction> {
    match word.to_ascii_lowercase().as_str() {
        "buy" => Some(TradeAction::Buy),
        "sell" => Some(TradeAction::Sell),
        _ => None,
    }
}

/// Labeled "Aksi/Action/Signal: Buy|Sell" lookup. When no label matches and
/// the degraded scan is enabled, falls back to the first bare buy/sell
/// keyword anywhere in the scope. That heuristic can misfire on narrative
/// that merely discusses buying, so it is switchable and logged when used.
pub fn extract_action(scope: &str, options: &ParserOptions) -> Option<TradeAction> {
    if let Some(word) = first_capture(scope, FieldKind::Action) {
        return action_from_keyword(&word);
    }
    if options.degraded_action_scan {
        if let Some(caps) = BARE_ACTION.captures(scope) {
            let action = action_from_keyword(&caps[1])?;
            warn!(%action, "no action label found, degraded keyword scan used");
            return Some(action);
        }
    }
    None
}

pub fn extract_entry(scope: &str) -> Option<String> {
    numeric_capture(scope, FieldKind::Entry)
}

pub fn extract_stop_loss(scope: &str) -> Option<String> {
    numeric_capture(scope, FieldKind::StopLoss)
}

/// TP1..TP3 by explicit numbering first; otherwise a single "Take Profit:"
/// label followed by a delimited list, split in order. An empty vec (not an
/// error) signals that nothing was found.
pub fn extract_take_profits(scope: &str) -> Vec<String> {
    let mut targets = Vec::new();
    for n in 1..=3 {
        for pattern in take_profit_numbered(n) {
            if let Some(caps) = pattern.captures(scope) {
                if let Some(value) = usable_numeric(&caps[1]) {
                    targets.push(value);
                }
                break;
            }
        }
    }
    if !targets.is_empty() {
        return targets;
    }

    for pattern in label_patterns(FieldKind::TakeProfit) {
        if let Some(caps) = pattern.captures(scope) {
            return LIST_SPLIT
                .split(&caps[1])
                .filter_map(usable_numeric)
                .take(3)
                .collect();
        }
    }
    Vec::new()
}

/// Optional sub-narrative after "Rasional Entry"; absence is fine and maps
/// to an empty string in the final record.
pub fn extract_entry_rationale(scope: &str) -> Option<String> {
    first_capture(scope, FieldKind::EntryRationale)
        .map(|v| clean_fragment(&v))
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ParserOptions {
        ParserOptions::default()
    }

    fn strict() -> ParserOptions {
        ParserOptions { degraded_action_scan: false }
    }

    #[test]
    fn test_extract_action_labeled() {
        assert_eq!(extract_action("Aksi: Buy", &options()), Some(TradeAction::Buy));
        assert_eq!(extract_action("Action - SELL", &options()), Some(TradeAction::Sell));
        assert_eq!(extract_action("Signal Type: buy", &options()), Some(TradeAction::Buy));
    }

    #[test]
    fn test_extract_action_degraded_scan_is_switchable() {
        let scope = "pasar cenderung sell off minggu ini";
        assert_eq!(extract_action(scope, &options()), Some(TradeAction::Sell));
        assert_eq!(extract_action(scope, &strict()), None);
    }

    #[test]
    fn test_extract_action_none_without_keyword() {
        assert_eq!(extract_action("Sideways, tunggu konfirmasi", &options()), None);
    }

    #[test]
    fn test_extract_entry_variants() {
        assert_eq!(extract_entry("Entry: 4190.5").as_deref(), Some("4190.5"));
        assert_eq!(extract_entry("Entry Zone - 4190.5").as_deref(), Some("4190.5"));
        assert_eq!(extract_entry("Buy Limit: 1.0832").as_deref(), Some("1.0832"));
        assert_eq!(extract_entry("Optimal Entry Zone: 4185").as_deref(), Some("4185"));
        assert_eq!(extract_entry("Entry: -"), None);
        assert_eq!(extract_entry("tidak ada angka"), None);
    }

    #[test]
    fn test_extract_stop_loss_label_tolerance() {
        // All three spellings must resolve to the same value.
        assert_eq!(extract_stop_loss("Stop Loss: 4180.0").as_deref(), Some("4180.0"));
        assert_eq!(extract_stop_loss("SL: 4180.0").as_deref(), Some("4180.0"));
        assert_eq!(extract_stop_loss("Stop: 4180.0").as_deref(), Some("4180.0"));
    }

    #[test]
    fn test_extract_take_profits_numbered() {
        let scope = "Take Profit 1: 4200.0\nTake Profit 2: 4210.0\nTP3: 4225";
        assert_eq!(extract_take_profits(scope), vec!["4200.0", "4210.0", "4225"]);
    }

    #[test]
    fn test_extract_take_profits_numbered_keeps_order_with_gaps() {
        assert_eq!(extract_take_profits("TP2: 110 TP1: 105"), vec!["105", "110"]);
        assert_eq!(extract_take_profits("Take Profit 2: 4210.0"), vec!["4210.0"]);
    }

    #[test]
    fn test_extract_take_profits_delimited_list() {
        assert_eq!(extract_take_profits("Take Profit: 100, 105, 110"), vec!["100", "105", "110"]);
        assert_eq!(extract_take_profits("Take Profit: 100; 105"), vec!["100", "105"]);
    }

    #[test]
    fn test_extract_take_profits_list_caps_at_three() {
        assert_eq!(
            extract_take_profits("Take Profit: 100, 105, 110, 115"),
            vec!["100", "105", "110"]
        );
    }

    #[test]
    fn test_extract_take_profits_empty_when_absent() {
        assert!(extract_take_profits("tidak ada target").is_empty());
        assert!(extract_take_profits("").is_empty());
    }

    #[test]
    fn test_extract_entry_rationale_optional() {
        assert_eq!(
            extract_entry_rationale("Rasional Entry: retest support terdekat").as_deref(),
            Some("retest support terdekat")
        );
        assert_eq!(extract_entry_rationale("Entry: 100"), None);
    }
}
