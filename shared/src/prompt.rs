//! Prompt contract for the chart-analysis request.
//!
//! The section labels and their order here are the other half of the parser:
//! `analysis::labels` recognizes exactly these headings. Nothing upstream
//! enforces the contract, the parser tolerates violations, but a drifting
//! template still degrades extraction quality, so keep both sides in sync.

use crate::models::RiskProfile;

pub fn build_analysis_prompt(pair: &str, timeframe: &str, risk: RiskProfile) -> String {
    let risk_guidance = match risk {
        RiskProfile::Low => {
            "Profil risiko user: LOW. Prioritaskan entry konservatif dengan stop loss ketat \
             dan target realistis."
        }
        RiskProfile::Medium => {
            "Profil risiko user: MEDIUM. Entry boleh lebih agresif dengan rasio risk-reward \
             minimal 1:2."
        }
    };

    format!(
        r#"ANALISIS CHART PROFESSIONAL - {pair} TIMEFRAME {timeframe}

Sebagai AI Chart Analyst profesional dengan spesialisasi trading {pair}, lakukan analisis teknikal komprehensif pada gambar chart terlampir dengan struktur berikut:

1. Trend Utama:
- Arah trend dominan (bullish/bearish/sideways) dan struktur market

2. Support & Resistance:
- Level support dan resistance terkuat (prioritaskan 3 level dengan confluence tertinggi)

3. Pola Candlestick:
- Pola candlestick dominan dan pola chart yang teridentifikasi

4. Indikator:
- Konfluensi indikator teknikal yang terlihat (MA, RSI, MACD, volume)

5. Penjelasan Analisa & Strategi:
- Rasional lengkap di balik sinyal, tanpa menyebut angka entry/SL/TP di bagian ini

Rekomendasi Entry (WAJIB di bagian akhir):
Aksi: [BUY/SELL]
Entry: [angka]
Stop Loss: [angka]
Take Profit 1: [angka]
Take Profit 2: [angka]
Take Profit 3: [angka]

{risk_guidance}

ATURAN ANALISIS:
1. Fokus pada konfirmasi multi-indikator dan price action
2. Berikan sinyal yang actionable dengan risk management jelas
3. Maksimum 200 kata untuk setiap section utama
4. Output HARUS mengandung bagian "Rekomendasi Entry" di akhir dengan format di atas
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::labels::{label_patterns, FieldKind, SECTION_KINDS};

    #[test]
    fn test_prompt_mentions_pair_and_timeframe() {
        let prompt = build_analysis_prompt("XAUUSD", "H4", RiskProfile::Medium);
        assert!(prompt.contains("XAUUSD"));
        assert!(prompt.contains("TIMEFRAME H4"));
    }

    #[test]
    fn test_prompt_risk_guidance_varies() {
        let low = build_analysis_prompt("EURUSD", "H1", RiskProfile::Low);
        let medium = build_analysis_prompt("EURUSD", "H1", RiskProfile::Medium);
        assert!(low.contains("LOW"));
        assert!(medium.contains("MEDIUM"));
        assert_ne!(low, medium);
    }

    #[test]
    fn test_prompt_headings_are_recognized_by_the_parser() {
        // The contract is only useful if every requested heading is one the
        // label tables can find again in the response.
        let prompt = build_analysis_prompt("BTCUSDT", "M15", RiskProfile::Low);
        for kind in SECTION_KINDS {
            assert!(
                label_patterns(kind).iter().any(|p| p.is_match(&prompt)),
                "no label pattern matches the prompt for {kind:?}"
            );
        }
        assert!(label_patterns(FieldKind::Action).iter().any(|p| p.is_match("Aksi: BUY")));
    }
}
