//! Scenario tests for the AI response parser.

#[cfg(test)]
mod tests {
    use shared::analysis::{parse_analysis_text, ParseError};
    use shared::models::{RiskProfile, TradeAction};

    #[test]
    fn test_labeled_recommendation_block() {
        let raw = "Trend Utama: Bullish\nRekomendasi Entry:\nAksi: Buy\nEntry: 4190.5\nStop Loss: 4180.0\nTake Profit 1: 4200.0\nTake Profit 2: 4210.0";

        let analysis = parse_analysis_text(raw, RiskProfile::Low).unwrap();
        assert_eq!(analysis.trend, "Bullish");
        assert_eq!(analysis.recommendation.action, TradeAction::Buy);
        assert_eq!(analysis.recommendation.entry, "4190.5");
        assert_eq!(analysis.recommendation.stop_loss, "4180.0");
        assert_eq!(analysis.recommendation.take_profit, vec!["4200.0", "4210.0"]);
        assert_eq!(analysis.recommendation.risk_profile, RiskProfile::Low);
    }

    #[test]
    fn test_inline_fields_without_header() {
        let raw = "Aksi: Sell Entry: 100 SL: 90 TP1: 80";

        let analysis = parse_analysis_text(raw, RiskProfile::Medium).unwrap();
        assert_eq!(analysis.recommendation.action, TradeAction::Sell);
        assert_eq!(analysis.recommendation.entry, "100");
        assert_eq!(analysis.recommendation.stop_loss, "90");
        assert_eq!(analysis.recommendation.take_profit, vec!["80"]);
    }

    #[test]
    fn test_no_numeric_fields_is_a_parse_error() {
        let raw = "Trend Utama: Sideways market, no clear signal.";

        let err = parse_analysis_text(raw, RiskProfile::Low).unwrap_err();
        let ParseError::MissingTradeData { missing } = err;
        assert!(missing.contains("Entry"));
        assert!(missing.contains("Stop Loss"));
        assert!(missing.contains("Take Profit"));
    }

    #[test]
    fn test_take_profit_comma_list_fallback() {
        let raw = "Aksi: Buy\nEntry: 95\nStop Loss: 90\nTake Profit: 100, 105, 110";

        let analysis = parse_analysis_text(raw, RiskProfile::Low).unwrap();
        assert_eq!(analysis.recommendation.take_profit, vec!["100", "105", "110"]);
    }

    #[test]
    fn test_entry_leak_is_stripped_from_explanation() {
        let raw = "Penjelasan Analisa & Strategi: Struktur bullish jelas. Entry: 999 adalah level kunci.\nRekomendasi Entry:\nAksi: Buy\nEntry: 999\nStop Loss: 990\nTP1: 1010";

        let analysis = parse_analysis_text(raw, RiskProfile::Medium).unwrap();
        assert_eq!(analysis.explanation, "Struktur bullish jelas.");
        assert_eq!(analysis.recommendation.entry, "999");
    }

    // The extractor must be total: any input either parses or fails with a
    // typed error, and narrative fields always carry content or "-".
    #[test]
    fn test_never_panics_and_narratives_always_populated() {
        let inputs = [
            "",
            "-",
            "random prose with no structure at all",
            "Entry: \nSL: \nTP1:",
            "Aksi: Buy\nEntry: 1.2345\nStop Loss: 1.2300\nTP1: 1.2400",
            "🚀🚀🚀",
            "Trend Utama:",
        ];

        for raw in inputs {
            match parse_analysis_text(raw, RiskProfile::Low) {
                Ok(analysis) => {
                    for field in [
                        &analysis.trend,
                        &analysis.support_resistance,
                        &analysis.candlestick,
                        &analysis.indicators,
                        &analysis.explanation,
                    ] {
                        assert!(!field.is_empty(), "empty narrative for input {raw:?}");
                    }
                    assert!(!analysis.recommendation.take_profit.is_empty());
                }
                Err(ParseError::MissingTradeData { .. }) => {}
            }
        }
    }

    #[test]
    fn test_stop_loss_spelling_invariance() {
        let spellings = ["Stop Loss", "SL", "Stop"];
        let mut values = Vec::new();
        for label in spellings {
            let raw = format!("Aksi: Buy\nEntry: 100\n{label}: 92.50\nTP1: 110");
            let analysis = parse_analysis_text(&raw, RiskProfile::Low).unwrap();
            values.push(analysis.recommendation.stop_loss);
        }
        assert_eq!(values, vec!["92.50", "92.50", "92.50"]);
    }

    #[test]
    fn test_risk_profile_is_pure_pass_through() {
        // The AI text claims a different risk level; the caller wins.
        let raw = "Risk Level: High\nAksi: Sell\nEntry: 100\nSL: 110\nTP1: 90";
        let analysis = parse_analysis_text(raw, RiskProfile::Medium).unwrap();
        assert_eq!(analysis.recommendation.risk_profile, RiskProfile::Medium);

        let analysis = parse_analysis_text(raw, RiskProfile::Low).unwrap();
        assert_eq!(analysis.recommendation.risk_profile, RiskProfile::Low);
    }

    #[test]
    fn test_explanation_never_contains_trade_labels() {
        let raws = [
            "Penjelasan Analisa & Strategi: Breakout valid. Take Profit bisa digeser.\nAksi: Buy\nEntry: 10\nSL: 9\nTP1: 12",
            "Penjelasan: SL ketat disarankan di sini\nAksi: Sell\nEntry: 10\nSL: 11\nTP1: 9",
        ];
        for raw in raws {
            let analysis = parse_analysis_text(raw, RiskProfile::Low).unwrap();
            for label in ["Entry", "Stop Loss", "SL", "Take Profit", "TP"] {
                assert!(
                    !analysis.explanation.contains(label),
                    "label {label} leaked into explanation: {:?}",
                    analysis.explanation
                );
            }
        }
    }

    #[test]
    fn test_markdown_noise_does_not_break_extraction() {
        let raw = "## **Rekomendasi Entry:**\n*Aksi:* **Buy**\n`Entry:` 4190.50\n**Stop Loss:** 4180\n- Take Profit 1: 4200";

        let analysis = parse_analysis_text(raw, RiskProfile::Low).unwrap();
        assert_eq!(analysis.recommendation.entry, "4190.50");
        assert_eq!(analysis.recommendation.stop_loss, "4180");
        assert_eq!(analysis.recommendation.take_profit, vec!["4200"]);
    }
}
