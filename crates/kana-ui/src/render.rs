use std::fmt::{self, Write};

use kana_core::{CandidateMark, Catalog, Category, KanaEntry, QuizResult, Screen, ViewState};
use kana_lang_japanese::chart;
use kana_types::ScriptMode;

/// Text view of a state snapshot, printed after every transition
pub fn render(view: &ViewState, catalog: &Catalog) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = match view.screen() {
        Screen::Home => home(&mut out, view, catalog),
        Screen::Category => category(&mut out, view, catalog),
        Screen::Quiz => quiz(&mut out, view, catalog),
    };
    let _ = footer(&mut out, view);
    out
}

fn home(out: &mut String, view: &ViewState, catalog: &Catalog) -> fmt::Result {
    writeln!(out, "== Kana ==")?;
    for (i, category) in catalog.categories().iter().enumerate() {
        let preview = category
            .entries
            .first()
            .map(|e| glyph(e, view.script_mode()))
            .unwrap_or_default();
        writeln!(out, "{:>2}. [{preview}] {}", i + 1, category.name)?;
        writeln!(out, "      {}", category.description)?;
    }
    writeln!(out, "open <n> to browse, quiz to practice, help for more")
}

fn category(out: &mut String, view: &ViewState, catalog: &Catalog) -> fmt::Result {
    let Some(category) = view.category(catalog) else {
        return writeln!(out, "(no module)");
    };
    writeln!(out, "== {} ==", category.name)?;
    writeln!(out, "{}", category.description)?;

    if category.has_grid() {
        grid(out, view, category)?;
    } else {
        for (i, entry) in category.entries.iter().enumerate() {
            write!(out, "{:>3}. {}", i + 1, glyph(entry, view.script_mode()))?;
            if view.show_romaji() {
                write!(out, "  {}", entry.romaji)?;
            }
            writeln!(out)?;
        }
    }

    if let Some(entry) = view.selected_entry(catalog) {
        overlay(out, view, catalog, entry)?;
    }
    Ok(())
}

fn grid(out: &mut String, view: &ViewState, category: &Category) -> fmt::Result {
    let (rows, cols) = category.grid_size();

    write!(out, "   ")?;
    for col in 0..cols {
        write!(out, " {:<10}", chart::col_label(col as usize).unwrap_or(""))?;
    }
    writeln!(out)?;

    for row in 0..rows {
        write!(out, "{}", chart::row_label(row as usize).unwrap_or(" "))?;
        write!(out, " ")?;
        for col in 0..cols {
            let cell = match category.grid_cell(row, col) {
                Some(entry) if view.show_romaji() => {
                    format!("{} {}", glyph(entry, view.script_mode()), entry.romaji)
                }
                Some(entry) => glyph(entry, view.script_mode()),
                None => "-".to_string(),
            };
            write!(out, " {cell:<10}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn overlay(out: &mut String, view: &ViewState, catalog: &Catalog, entry: &KanaEntry) -> fmt::Result {
    let (position, len) = view.overlay_position(catalog).unwrap_or((0, 0));

    writeln!(out, "---")?;
    write!(out, "[{position} / {len}]  {}  {}", entry.kana, entry.katakana)?;
    if view.show_romaji() {
        write!(out, "  {}", entry.romaji)?;
    }
    if view.is_pending(entry.kana) {
        write!(out, "  ♪…")?;
    }
    writeln!(out)?;

    for (i, ex) in entry.examples.iter().enumerate() {
        write!(out, "  ex {}: {} ({}", i + 1, ex.word, ex.reading)?;
        if view.show_romaji() {
            write!(out, ", {}", ex.romaji)?;
        }
        write!(out, ") {}", ex.meaning)?;
        if view.is_pending(ex.word) {
            write!(out, "  ♪…")?;
        }
        writeln!(out)?;
    }
    writeln!(out, "next / prev / say / ex <n> / close")
}

fn quiz(out: &mut String, view: &ViewState, catalog: &Catalog) -> fmt::Result {
    writeln!(out, "== Practice ==")?;
    let Some(question) = view.question() else {
        return writeln!(out, "No question available.");
    };

    writeln!(out, "Which kana reads \"{}\"?", question.prompt)?;
    for (i, candidate) in question.candidates.iter().enumerate() {
        let shown = match view.script_mode() {
            ScriptMode::Katakana => catalog
                .find_by_glyph(candidate)
                .map_or(*candidate, |e| e.katakana),
            _ => *candidate,
        };
        let mark = match view.candidate_mark(candidate) {
            CandidateMark::Unmarked => "",
            CandidateMark::Correct => "  ✓",
            CandidateMark::Revealed => "  ← answer",
            CandidateMark::Wrong => "  ✗",
            CandidateMark::Dimmed => "  ·",
        };
        writeln!(out, "  {}. {shown}{mark}", i + 1)?;
    }

    match view.result() {
        Some(QuizResult::Correct) => writeln!(out, "Correct! Next question coming up."),
        Some(QuizResult::Incorrect) => writeln!(
            out,
            "Not quite: \"{}\" is {}. Type again for a new question.",
            question.prompt, question.answer
        ),
        _ => writeln!(out, "pick <n> to answer"),
    }
}

fn footer(out: &mut String, view: &ViewState) -> fmt::Result {
    if let Some(text) = view.pending_speech() {
        writeln!(out, "(fetching audio for {text})")?;
    }
    Ok(())
}

fn glyph(entry: &KanaEntry, mode: ScriptMode) -> String {
    match mode {
        ScriptMode::Hiragana => entry.kana.to_string(),
        ScriptMode::Katakana => entry.katakana.to_string(),
        ScriptMode::Both => format!("{}{}", entry.kana, entry.katakana),
    }
}
