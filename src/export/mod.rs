pub mod json_export;
pub mod markdown_export;
pub mod text_export;

use std::fmt::Display;

use anyhow::Result;

use crate::core::indicators::{BriefExtraction, IndicatorRecord};

pub use json_export::JsonExporter;
pub use markdown_export::MarkdownExporter;
pub use text_export::TextExporter;

/// Placeholder shown for fields the extractor could not locate.
pub const ABSENT: &str = "N/A";

pub trait Exporter {
    fn export(&self, extraction: &BriefExtraction) -> Result<()>;
}

/// Formats an optional value with a unit suffix, falling back to the
/// absent placeholder.
pub fn format_optional<T: Display>(value: Option<T>, suffix: &str) -> String {
    match value {
        Some(value) => format!("{value}{suffix}"),
        None => ABSENT.to_string(),
    }
}

/// Labeled rows for tabular rendering, in the brief's field order.
/// Every tabular surface goes through this one list so renderings of the
/// same record cannot drift apart.
pub fn indicator_rows(record: &IndicatorRecord) -> Vec<(&'static str, String)> {
    vec![
        (
            "Country name",
            format_optional(record.country_name.as_deref(), ""),
        ),
        ("Capital", format_optional(record.capital.as_deref(), "")),
        (
            "Capital population hint",
            format_optional(record.capital_population_hint.as_deref(), ""),
        ),
        ("Area", format_optional(record.area_km2, " km2")),
        (
            "Population (million)",
            format_optional(record.population_million, ""),
        ),
        ("Language", format_optional(record.language.as_deref(), "")),
        ("Religion", format_optional(record.religion.as_deref(), "")),
        (
            "Government form",
            format_optional(record.government_form.as_deref(), ""),
        ),
        ("GDP year", format_optional(record.gdp_year, "")),
        ("GDP (USD bn)", format_optional(record.gdp_usd_billion, "")),
        (
            "GDP per capita year",
            format_optional(record.gdp_per_capita_year, ""),
        ),
        (
            "GDP per capita (USD)",
            format_optional(record.gdp_per_capita_usd, ""),
        ),
        (
            "Real GDP growth year",
            format_optional(record.real_gdp_growth_year, ""),
        ),
        (
            "Real GDP growth",
            format_optional(record.real_gdp_growth_pct, "%"),
        ),
        ("Trade year", format_optional(record.trade_year, "")),
        (
            "Export (USD bn)",
            format_optional(record.export_usd_billion, ""),
        ),
        (
            "Import (USD bn)",
            format_optional(record.import_usd_billion, ""),
        ),
        (
            "Trade balance (USD bn)",
            format_optional(record.trade_balance_usd_billion(), ""),
        ),
        (
            "Unemployment year",
            format_optional(record.unemployment_year, ""),
        ),
        (
            "Unemployment",
            format_optional(record.unemployment_pct, "%"),
        ),
        (
            "Youth unemployment",
            format_optional(record.youth_unemployment_pct, "%"),
        ),
        (
            "Sector: finance/real estate/telecom/public",
            format_optional(record.sector_fin_public_pct, "%"),
        ),
        (
            "Sector: manufacturing",
            format_optional(record.sector_manufacturing_pct, "%"),
        ),
        ("Sector: ICT", format_optional(record.sector_ict_pct, "%")),
        (
            "Sector: agriculture (range)",
            format_optional(record.sector_agri_pct_range.as_deref(), "%"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_optional_uses_placeholder() {
        assert_eq!(format_optional(None::<f64>, "%"), "N/A");
        assert_eq!(format_optional(Some(18.5), "%"), "18.5%");
        assert_eq!(format_optional(Some(89_342u64), " km2"), "89342 km2");
    }

    #[test]
    fn rows_cover_every_field_and_the_derived_balance() {
        let record = IndicatorRecord::default();
        let rows = indicator_rows(&record);
        // 24 record fields plus the derived trade balance
        assert_eq!(rows.len(), 25);
        assert!(rows.iter().all(|(_, value)| value == ABSENT));
    }

    #[test]
    fn balance_row_reflects_operands() {
        let record = IndicatorRecord {
            export_usd_billion: Some(7.49),
            import_usd_billion: Some(20.46),
            ..Default::default()
        };
        let rows = indicator_rows(&record);
        let balance = rows
            .iter()
            .find(|(label, _)| *label == "Trade balance (USD bn)")
            .unwrap();
        assert_eq!(balance.1, "-12.97");
    }
}
