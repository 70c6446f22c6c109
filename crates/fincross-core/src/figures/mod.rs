//! Figure extraction: pattern tables, year attribution, and the extractor.

mod extractor;
pub mod patterns;
mod years;

pub use extractor::{FigureExtractor, PatternFigureExtractor};
pub use years::YearIndex;
