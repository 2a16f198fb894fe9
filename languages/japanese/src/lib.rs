pub mod chart;
pub mod data;
pub mod speech;

pub use chart::{COL_HEADERS, ROW_HEADERS, col_label, row_label};
pub use speech::GeminiSpeech;

use kana_core::{Catalog, CatalogError};

/// The compiled-in kana curriculum, validated
pub fn catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(data::CATEGORIES)
}
