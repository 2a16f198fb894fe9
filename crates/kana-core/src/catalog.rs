use std::collections::HashSet;

use crate::error::CatalogError;

/// Cell in the base-syllabary chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub row: u8,
    pub col: u8,
}

impl GridPos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Vocabulary word illustrating a kana
#[derive(Debug, PartialEq, Eq)]
pub struct Example {
    pub word: &'static str,
    /// Reading in kana
    pub reading: &'static str,
    pub romaji: &'static str,
    /// Short English gloss
    pub meaning: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct KanaEntry {
    /// Hiragana glyph, the identity of the entry in quizzes
    pub kana: &'static str,
    pub katakana: &'static str,
    pub romaji: &'static str,
    pub examples: &'static [Example],
    pub grid: Option<GridPos>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Pedagogical order, also the order of the detail overlay
    pub entries: &'static [KanaEntry],
}

impl Category {
    pub fn entry(&self, index: usize) -> Option<&'static KanaEntry> {
        self.entries.get(index)
    }

    pub fn position_of(&self, kana: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.kana == kana)
    }

    /// Glyph shown on the category card
    pub fn preview(&self) -> Option<&'static str> {
        self.entries.first().map(|e| e.kana)
    }

    pub fn has_grid(&self) -> bool {
        self.entries.iter().any(|e| e.grid.is_some())
    }

    pub fn grid_cell(&self, row: u8, col: u8) -> Option<&'static KanaEntry> {
        let pos = GridPos::new(row, col);
        self.entries.iter().find(|e| e.grid == Some(pos))
    }

    /// (rows, columns) spanned by positioned entries
    pub fn grid_size(&self) -> (u8, u8) {
        self.entries
            .iter()
            .filter_map(|e| e.grid)
            .fold((0, 0), |(rows, cols), pos| {
                (rows.max(pos.row.saturating_add(1)), cols.max(pos.col.saturating_add(1)))
            })
    }
}

/// The whole curriculum; validated once, read-only afterwards
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    categories: &'static [Category],
}

impl Catalog {
    pub fn new(categories: &'static [Category]) -> Result<Self, CatalogError> {
        validate(categories)?;
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    pub fn category(&self, index: usize) -> Option<&'static Category> {
        self.categories.get(index)
    }

    pub fn category_by_id(&self, id: &str) -> Option<&'static Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.id == id)
    }

    /// First entry with this glyph, in catalog order
    pub fn find_by_glyph(&self, kana: &str) -> Option<&'static KanaEntry> {
        self.pool().find(|e| e.kana == kana)
    }

    /// Every entry of every category, flattened in catalog order
    pub fn pool(&self) -> impl Iterator<Item = &'static KanaEntry> + use<> {
        let categories = self.categories;
        categories.iter().flat_map(|c| c.entries.iter())
    }

    /// View over a single category, used for drills and tests
    pub fn restricted(&self, id: &str) -> Option<Catalog> {
        let index = self.position(id)?;
        let categories = self.categories;
        Some(Catalog {
            categories: &categories[index..=index],
        })
    }
}

fn validate(categories: &[Category]) -> Result<(), CatalogError> {
    if categories.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut ids = HashSet::new();
    for category in categories {
        if !ids.insert(category.id) {
            return Err(CatalogError::DuplicateCategory(category.id.to_string()));
        }
        if category.entries.is_empty() {
            return Err(CatalogError::EmptyCategory(category.id.to_string()));
        }

        let mut cells = HashSet::new();
        for entry in category.entries {
            if entry.romaji.trim().is_empty() {
                return Err(CatalogError::MissingRomaji {
                    category: category.id.to_string(),
                    kana: entry.kana.to_string(),
                });
            }
            if entry.examples.iter().any(|ex| ex.word.trim().is_empty()) {
                return Err(CatalogError::EmptyExample {
                    category: category.id.to_string(),
                    kana: entry.kana.to_string(),
                });
            }
            if let Some(pos) = entry.grid
                && (pos.row == u8::MAX || pos.col == u8::MAX)
            {
                // the chart must stay measurable in u8
                return Err(CatalogError::GridOutOfRange {
                    category: category.id.to_string(),
                    row: pos.row,
                    col: pos.col,
                });
            }
            if let Some(pos) = entry.grid
                && !cells.insert(pos)
            {
                return Err(CatalogError::GridCollision {
                    category: category.id.to_string(),
                    row: pos.row,
                    col: pos.col,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    const NO_EXAMPLES: &[Example] = &[];

    const fn entry(kana: &'static str, katakana: &'static str, romaji: &'static str) -> KanaEntry {
        KanaEntry {
            kana,
            katakana,
            romaji,
            examples: NO_EXAMPLES,
            grid: None,
        }
    }

    const fn cell(
        kana: &'static str,
        katakana: &'static str,
        romaji: &'static str,
        row: u8,
        col: u8,
    ) -> KanaEntry {
        KanaEntry {
            kana,
            katakana,
            romaji,
            examples: NO_EXAMPLES,
            grid: Some(GridPos::new(row, col)),
        }
    }

    pub const VOWELS: &[KanaEntry] = &[
        cell("あ", "ア", "a", 0, 0),
        cell("い", "イ", "i", 0, 1),
        cell("う", "ウ", "u", 0, 2),
        cell("え", "エ", "e", 0, 3),
        cell("お", "オ", "o", 0, 4),
        cell("ん", "ン", "n", 1, 0),
    ];

    pub const MORAS: &[KanaEntry] = &[
        entry("っ", "ッ", "(pause)"),
        entry("ん", "ン", "n"),
        entry("ー", "ー", "(long)"),
    ];

    pub const SMALL: &[Category] = &[
        Category {
            id: "vowels",
            name: "Vowels",
            description: "a i u e o",
            entries: VOWELS,
        },
        Category {
            id: "moras",
            name: "Moras",
            description: "special beats",
            entries: MORAS,
        },
    ];

    pub fn small() -> Catalog {
        Catalog::new(SMALL).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    const EMPTY_ROMAJI: &[KanaEntry] = &[KanaEntry {
        kana: "あ",
        katakana: "ア",
        romaji: " ",
        examples: &[],
        grid: None,
    }];

    const COLLIDING: &[KanaEntry] = &[
        KanaEntry {
            kana: "あ",
            katakana: "ア",
            romaji: "a",
            examples: &[],
            grid: Some(GridPos::new(0, 0)),
        },
        KanaEntry {
            kana: "い",
            katakana: "イ",
            romaji: "i",
            examples: &[],
            grid: Some(GridPos::new(0, 0)),
        },
    ];

    const EDGE_CELL: &[KanaEntry] = &[KanaEntry {
        kana: "あ",
        katakana: "ア",
        romaji: "a",
        examples: &[],
        grid: Some(GridPos::new(3, u8::MAX)),
    }];

    const BLANK_EXAMPLE: &[KanaEntry] = &[KanaEntry {
        kana: "あ",
        katakana: "ア",
        romaji: "a",
        examples: &[Example {
            word: "",
            reading: "あさ",
            romaji: "asa",
            meaning: "morning",
        }],
        grid: None,
    }];

    fn single(id: &'static str, entries: &'static [KanaEntry]) -> &'static [Category] {
        Box::leak(Box::new([Category {
            id,
            name: id,
            description: "",
            entries,
        }]))
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(Catalog::new(&[]).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let categories: &'static [Category] = Box::leak(Box::new([
            Category {
                id: "same",
                name: "a",
                description: "",
                entries: VOWELS,
            },
            Category {
                id: "same",
                name: "b",
                description: "",
                entries: MORAS,
            },
        ]));

        assert_eq!(
            Catalog::new(categories).unwrap_err(),
            CatalogError::DuplicateCategory("same".to_string())
        );
    }

    #[test]
    fn rejects_empty_category() {
        let err = Catalog::new(single("empty", &[])).unwrap_err();
        assert_eq!(err, CatalogError::EmptyCategory("empty".to_string()));
    }

    #[test]
    fn rejects_blank_romaji() {
        let err = Catalog::new(single("bad", EMPTY_ROMAJI)).unwrap_err();
        assert!(matches!(err, CatalogError::MissingRomaji { .. }));
    }

    #[test]
    fn rejects_blank_example_word() {
        let err = Catalog::new(single("bad", BLANK_EXAMPLE)).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyExample { .. }));
    }

    #[test]
    fn rejects_grid_collision() {
        let err = Catalog::new(single("grid", COLLIDING)).unwrap_err();
        assert_eq!(
            err,
            CatalogError::GridCollision {
                category: "grid".to_string(),
                row: 0,
                col: 0
            }
        );
    }

    #[test]
    fn rejects_cell_at_the_edge_of_u8() {
        let err = Catalog::new(single("edge", EDGE_CELL)).unwrap_err();
        assert_eq!(
            err,
            CatalogError::GridOutOfRange {
                category: "edge".to_string(),
                row: 3,
                col: 255
            }
        );

        let unchecked = Category {
            id: "edge",
            name: "edge",
            description: "",
            entries: EDGE_CELL,
        };
        assert_eq!(unchecked.grid_size(), (4, 255));
    }

    #[test]
    fn lookups_by_id_and_glyph() {
        let catalog = small();

        assert_eq!(catalog.position("moras"), Some(1));
        assert_eq!(catalog.category_by_id("vowels").unwrap().name, "Vowels");
        assert!(catalog.category_by_id("missing").is_none());
        assert_eq!(catalog.find_by_glyph("ー").unwrap().romaji, "(long)");
        assert_eq!(catalog.pool().count(), 9);
    }

    #[test]
    fn restricted_catalog_only_holds_one_category() {
        let vowels = small().restricted("vowels").unwrap();

        assert_eq!(vowels.categories().len(), 1);
        assert!(vowels.pool().all(|e| e.grid.is_some()));
        assert!(small().restricted("nope").is_none());
    }

    #[test]
    fn grid_helpers() {
        let vowels = small().category(0).unwrap();

        assert!(vowels.has_grid());
        assert_eq!(vowels.grid_size(), (2, 5));
        assert_eq!(vowels.grid_cell(0, 2).unwrap().kana, "う");
        assert!(vowels.grid_cell(1, 1).is_none());
        assert_eq!(vowels.preview(), Some("あ"));
        assert!(!small().category(1).unwrap().has_grid());
    }
}
