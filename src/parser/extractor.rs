/// Label-anchored indicator extraction
/// One independent rule per field: a pattern search over the whole flat
/// text followed by a typed conversion. Rules do not interact; a rule
/// that finds nothing leaves its field empty and cannot disturb any
/// other field, which keeps extraction robust against missing or
/// reordered sections of the brief.
use regex::Regex;

use crate::core::indicators::IndicatorRecord;
use crate::core::numeric::{
    korean_amount_to_usd_billion, man_units_to_million, parse_separated_int,
};

/// An 억 amount with its optional 천만 sub-unit, as it appears in text.
const AMOUNT: &str = r"[\d,]+\s*억(?:\s*\d+\s*천만)?";

/// Builds a label pattern that tolerates whitespace runs between the
/// label's characters; the brief's typesetting pads them apart
/// ("면 적", "인   구"), so no exact spelling is hardcoded.
fn spaced(label: &str) -> String {
    label
        .chars()
        .map(|c| regex::escape(&c.to_string()))
        .collect::<Vec<_>>()
        .join(r"\s*")
}

fn rule(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid field pattern")
}

/// The full rule set, compiled once per extraction call.
struct FieldRules {
    country_name: Regex,
    capital: Regex,
    area: Regex,
    population: Regex,
    language: Regex,
    religion: Regex,
    government_form: Regex,
    gdp: Regex,
    gdp_per_capita: Regex,
    real_gdp_growth: Regex,
    trade: Regex,
    unemployment: Regex,
    youth_unemployment: Regex,
    sectors: Regex,
}

impl FieldRules {
    fn new() -> Self {
        Self {
            country_name: rule(&format!(r"{}\s*:\s*(.+)", spaced("국명"))),
            capital: rule(&format!(
                r"{}\s*:\s*([^(\n]+)\(([^)\n]+)\)",
                spaced("수도")
            )),
            area: rule(&format!(r"{}\s*:\s*([\d,]+)\s*km2", spaced("면적"))),
            population: rule(&format!(
                r"{}\s*:\s*약\s*([\d,]+)\s*만\s*명",
                spaced("인구")
            )),
            language: rule(&format!(r"{}\s*:\s*(.+)", spaced("언어"))),
            religion: rule(&format!(r"{}\s*:\s*(.+)", spaced("종교"))),
            government_form: rule(&format!(r"{}\s*:\s*(.+)", spaced("국가형태"))),
            gdp: rule(&format!(r"GDP\s*:\s*({AMOUNT})\s*달러\((\d{{4}})\)")),
            gdp_per_capita: rule(r"1인당\s*GDP\s*:\s*([\d,]+)\s*달\w*\s*\(?(?:(\d{4}))?"),
            real_gdp_growth: rule(&format!(
                r"{}\s*GDP\s*{}\s*:\s*([\d.]+)\s*\(%\s*(\d{{4}})\)",
                spaced("실질"),
                spaced("성장률")
            )),
            trade: rule(&format!(
                r"수출\s*({AMOUNT})\s*달러\((\d{{4}})\)\s*,\s*수입\s*({AMOUNT})\s*달러\((\d{{4}})\)"
            )),
            unemployment: rule(&format!(
                r"{}\s*:\s*([\d.]+)%\((\d{{4}})\)",
                spaced("실업률")
            )),
            // the label carries either topic particle in the source text
            youth_unemployment: rule(r"청년실업률[은는]\s*([\d.]+)%"),
            sectors: rule(
                r"전체\s*GDP의\s*약\s*([\d.]+)%.*?제조업은\s*GDP의\s*([\d.]+)%\s*,\s*ICT\s*([\d.]+)%\s*,\s*농업은\s*([0-9~.\-]+)%",
            ),
        }
    }
}

/// Applies every field rule to the flat text and returns the record.
/// Pure and deterministic; unmatched rules leave `None` and nothing
/// here ever fails.
pub fn extract_indicators(text: &str) -> IndicatorRecord {
    let rules = FieldRules::new();
    let mut record = IndicatorRecord::default();

    if let Some(caps) = rules.country_name.captures(text) {
        record.country_name = Some(caps[1].trim().to_string());
    }

    if let Some(caps) = rules.capital.captures(text) {
        record.capital = Some(caps[1].trim().to_string());
        record.capital_population_hint = Some(caps[2].trim().to_string());
    }

    if let Some(caps) = rules.area.captures(text) {
        record.area_km2 = parse_separated_int(&caps[1]);
    }

    if let Some(caps) = rules.population.captures(text) {
        record.population_million = parse_separated_int(&caps[1]).map(man_units_to_million);
    }

    if let Some(caps) = rules.language.captures(text) {
        record.language = Some(caps[1].trim().to_string());
    }

    if let Some(caps) = rules.religion.captures(text) {
        record.religion = Some(caps[1].trim().to_string());
    }

    if let Some(caps) = rules.government_form.captures(text) {
        record.government_form = Some(caps[1].trim().to_string());
    }

    if let Some(caps) = rules.gdp.captures(text) {
        record.gdp_usd_billion = korean_amount_to_usd_billion(&caps[1]);
        record.gdp_year = caps[2].parse().ok();
    }

    if let Some(caps) = rules.gdp_per_capita.captures(text) {
        record.gdp_per_capita_usd = parse_separated_int(&caps[1]);
        record.gdp_per_capita_year = caps.get(2).and_then(|m| m.as_str().parse().ok());
    }

    if let Some(caps) = rules.real_gdp_growth.captures(text) {
        record.real_gdp_growth_pct = caps[1].parse().ok();
        record.real_gdp_growth_year = caps[2].parse().ok();
    }

    if let Some(caps) = rules.trade.captures(text) {
        record.export_usd_billion = korean_amount_to_usd_billion(&caps[1]);
        record.import_usd_billion = korean_amount_to_usd_billion(&caps[3]);
        // both sides carry a year; the first one is kept
        record.trade_year = caps[2].parse().ok();
    }

    if let Some(caps) = rules.unemployment.captures(text) {
        record.unemployment_pct = caps[1].parse().ok();
        record.unemployment_year = caps[2].parse().ok();
        // secondary rule, only meaningful once the primary matched
        if let Some(youth) = rules.youth_unemployment.captures(text) {
            record.youth_unemployment_pct = youth[1].parse().ok();
        }
    }

    if let Some(caps) = rules.sectors.captures(text) {
        record.sector_fin_public_pct = caps[1].parse().ok();
        record.sector_manufacturing_pct = caps[2].parse().ok();
        record.sector_ict_pct = caps[3].parse().ok();
        record.sector_agri_pct_range = Some(caps[4].trim().to_string());
    }

    record
}
