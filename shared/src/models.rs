use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trade direction of a recommendation. There is deliberately no
/// neutral/hold variant: an analysis without a clear direction fails
/// parsing instead of producing an unactionable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeAction {
    Buy,
    Sell,
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeAction::Buy => write!(f, "Buy"),
            TradeAction::Sell => write!(f, "Sell"),
        }
    }
}

/// Risk appetite selected by the user before the analysis runs. Pure
/// pass-through: never derived from AI text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskProfile {
    Low,
    Medium,
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskProfile::Low => write!(f, "Low"),
            RiskProfile::Medium => write!(f, "Medium"),
        }
    }
}

impl FromStr for RiskProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskProfile::Low),
            "medium" => Ok(RiskProfile::Medium),
            other => Err(format!("unknown risk profile: {other}")),
        }
    }
}

/// The numeric trade plan nested inside an [`Analysis`].
///
/// Prices stay as strings on purpose: the system never does arithmetic on
/// them and trailing zeros matter for display (4190.50 is not 4190.5 to a
/// trader reading levels off a chart).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub action: TradeAction,
    pub entry: String,
    /// Optional sub-narrative; empty string is a legitimate value here,
    /// unlike the "-" convention of the narrative fields.
    pub entry_rationale: String,
    pub stop_loss: String,
    /// TP1..TP3 in order. Guaranteed non-empty on a successful parse.
    pub take_profit: Vec<String>,
    pub risk_profile: RiskProfile,
}

/// Structured result of one AI round-trip. Immutable once produced;
/// persisted verbatim as a JSON blob for history browsing.
///
/// Narrative fields are never empty: absent sections carry the "-"
/// sentinel so the UI always has something to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub trend: String,
    pub support_resistance: String,
    pub candlestick: String,
    pub indicators: String,
    pub explanation: String,
    pub recommendation: Recommendation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_profile_from_str() {
        assert_eq!("Low".parse::<RiskProfile>().unwrap(), RiskProfile::Low);
        assert_eq!("medium".parse::<RiskProfile>().unwrap(), RiskProfile::Medium);
        assert_eq!("MEDIUM".parse::<RiskProfile>().unwrap(), RiskProfile::Medium);
        assert!("High".parse::<RiskProfile>().is_err());
        assert!("".parse::<RiskProfile>().is_err());
    }

    #[test]
    fn test_analysis_serializes_camel_case() {
        let analysis = Analysis {
            trend: "Bullish".to_string(),
            support_resistance: "-".to_string(),
            candlestick: "-".to_string(),
            indicators: "-".to_string(),
            explanation: "-".to_string(),
            recommendation: Recommendation {
                action: TradeAction::Buy,
                entry: "4190.5".to_string(),
                entry_rationale: String::new(),
                stop_loss: "4180.0".to_string(),
                take_profit: vec!["4200.0".to_string()],
                risk_profile: RiskProfile::Low,
            },
        };

        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["supportResistance"], "-");
        assert_eq!(json["recommendation"]["stopLoss"], "4180.0");
        assert_eq!(json["recommendation"]["action"], "Buy");
        assert_eq!(json["recommendation"]["riskProfile"], "Low");
        assert_eq!(json["recommendation"]["entryRationale"], "");
    }

    #[test]
    fn test_analysis_round_trips_through_json() {
        let json = r#"{
            "trend": "Uptrend",
            "supportResistance": "S 4100 / R 4250",
            "candlestick": "Bullish engulfing",
            "indicators": "RSI 62",
            "explanation": "Momentum continuation",
            "recommendation": {
                "action": "Sell",
                "entry": "100",
                "entryRationale": "",
                "stopLoss": "90",
                "takeProfit": ["80", "75"],
                "riskProfile": "Medium"
            }
        }"#;

        let analysis: Analysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.recommendation.action, TradeAction::Sell);
        assert_eq!(analysis.recommendation.take_profit.len(), 2);

        let back = serde_json::to_string(&analysis).unwrap();
        let reparsed: Analysis = serde_json::from_str(&back).unwrap();
        assert_eq!(analysis, reparsed);
    }
}
