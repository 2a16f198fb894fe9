/// Consonant rows of the base-syllabary chart, top to bottom
pub const ROW_HEADERS: [&str; 11] = [
    "あ行", "か行", "さ行", "た行", "な行", "は行", "ま行", "や行", "ら行", "わ行", "ん",
];

/// Vowel columns of the base-syllabary chart, left to right
pub const COL_HEADERS: [&str; 5] = ["あ段", "い段", "う段", "え段", "お段"];

/// Single-glyph label for a row, e.g. `か` for `か行`
pub fn row_label(row: usize) -> Option<&'static str> {
    ROW_HEADERS.get(row).copied().map(first_glyph)
}

pub fn col_label(col: usize) -> Option<&'static str> {
    COL_HEADERS.get(col).copied().map(first_glyph)
}

fn first_glyph(header: &'static str) -> &'static str {
    header
        .char_indices()
        .nth(1)
        .map_or(header, |(end, _)| &header[..end])
}
