pub mod indicators;
pub mod numeric;

pub use indicators::{BriefExtraction, IndicatorRecord};
