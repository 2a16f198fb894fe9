/// Static dataset integrity faults, detected when the catalog is built
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog has no categories")]
    Empty,

    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),

    #[error("Category {0} has no entries")]
    EmptyCategory(String),

    #[error("Entry {kana} in {category} has no romanization")]
    MissingRomaji { category: String, kana: String },

    #[error("Example for {kana} in {category} has an empty word")]
    EmptyExample { category: String, kana: String },

    #[error("Grid cell ({row}, {col}) used twice in {category}")]
    GridCollision { category: String, row: u8, col: u8 },

    #[error("Grid cell ({row}, {col}) in {category} is off the chart")]
    GridOutOfRange { category: String, row: u8, col: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("Need {needed} distinct glyphs for a question, pool has {available}")]
    NotEnoughGlyphs { needed: usize, available: usize },
}
