use serde::{Deserialize, Serialize};

use crate::core::numeric::round4;

/// Structured indicators scraped from one country brief.
///
/// Every field is independently optional: a label missing from the source
/// text leaves its field `None` and has no effect on any other field.
/// `None` is the only absence marker — zero is a real percentage and must
/// stay distinguishable from a failed match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRecord {
    pub country_name: Option<String>,
    pub capital: Option<String>,
    /// Free-form annotation captured next to the capital name, kept verbatim.
    pub capital_population_hint: Option<String>,

    pub area_km2: Option<u64>,
    /// National population in millions.
    pub population_million: Option<f64>,

    pub language: Option<String>,
    pub religion: Option<String>,
    pub government_form: Option<String>,

    pub gdp_year: Option<u16>,
    pub gdp_usd_billion: Option<f64>,

    pub gdp_per_capita_year: Option<u16>,
    pub gdp_per_capita_usd: Option<u64>,

    pub real_gdp_growth_year: Option<u16>,
    pub real_gdp_growth_pct: Option<f64>,

    pub trade_year: Option<u16>,
    pub export_usd_billion: Option<f64>,
    pub import_usd_billion: Option<f64>,

    pub unemployment_year: Option<u16>,
    pub unemployment_pct: Option<f64>,
    pub youth_unemployment_pct: Option<f64>,

    pub sector_fin_public_pct: Option<f64>,
    pub sector_manufacturing_pct: Option<f64>,
    pub sector_ict_pct: Option<f64>,
    /// Agriculture share kept as the literal range text (e.g. "3~4").
    pub sector_agri_pct_range: Option<String>,
}

impl IndicatorRecord {
    /// Export minus import in USD billions. Computed on demand and never
    /// stored, so it cannot go stale against its operands.
    pub fn trade_balance_usd_billion(&self) -> Option<f64> {
        match (self.export_usd_billion, self.import_usd_billion) {
            (Some(export), Some(import)) => Some(round4(export - import)),
            _ => None,
        }
    }
}

/// What one extraction run hands to presentation consumers: the record
/// plus the flattened text it was scraped from (used for raw previews).
#[derive(Debug, Clone, PartialEq)]
pub struct BriefExtraction {
    pub text: String,
    pub record: IndicatorRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_balance_from_both_operands() {
        let record = IndicatorRecord {
            export_usd_billion: Some(7.49),
            import_usd_billion: Some(20.46),
            ..Default::default()
        };
        assert_eq!(record.trade_balance_usd_billion(), Some(-12.97));
    }

    #[test]
    fn trade_balance_absent_when_operand_missing() {
        let record = IndicatorRecord {
            export_usd_billion: Some(7.49),
            ..Default::default()
        };
        assert_eq!(record.trade_balance_usd_billion(), None);

        let record = IndicatorRecord {
            import_usd_billion: Some(20.46),
            ..Default::default()
        };
        assert_eq!(record.trade_balance_usd_billion(), None);
    }

    #[test]
    fn record_serializes_round_trip() {
        let record = IndicatorRecord {
            country_name: Some("요르단".to_string()),
            gdp_year: Some(2017),
            gdp_usd_billion: Some(40.0),
            ..Default::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: IndicatorRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
