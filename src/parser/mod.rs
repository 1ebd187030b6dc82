pub mod document;
pub mod extractor;
pub mod hangul;

pub use document::{DocumentError, DocumentSource};
pub use extractor::extract_indicators;
pub use hangul::recompose_hangul;
