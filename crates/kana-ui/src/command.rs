use kana_core::Action;
use kana_types::ScriptMode;
use unicode_normalization::UnicodeNormalization;

use crate::state::UiState;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Action(Action),
    Help,
    Quit,
}

pub const HELP: &str = "\
home                         back to the module list
open <n|id>                  browse a module
show <n|kana>                open the detail view on an entry
next / prev / focus <n>      move inside the detail view
close                        close the detail view
script hiragana|katakana|both
romaji                       toggle romanization
say [text]                   pronounce text (default: the open entry)
ex <n>                       pronounce the n-th example word of the open entry
quiz                         start practice
pick <n|kana>                answer the current question
again                        new question
quit";

/// Turns one line of learner input into a command. Blank lines yield `None`.
pub fn parse(line: &str, state: &UiState) -> Result<Option<Command>, String> {
    // NFKC folds full-width digits and half-width katakana
    let line: String = line.nfkc().collect();
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (line, ""),
    };

    let action = match verb.to_ascii_lowercase().as_str() {
        "help" | "?" => return Ok(Some(Command::Help)),
        "quit" | "exit" | "q" => return Ok(Some(Command::Quit)),
        "home" | "back" => Action::GoHome,
        "open" => Action::SelectCategory(category_id(arg, state)?),
        "show" => Action::OpenEntry(entry_index(arg, state)?),
        "close" => Action::CloseEntry,
        "next" | "n" => Action::MoveFocus(1),
        "prev" | "p" => Action::MoveFocus(-1),
        "focus" => Action::FocusEntry(ordinal(arg)?),
        "script" => Action::SetScriptMode(arg.parse::<ScriptMode>()?),
        "romaji" | "ro" => Action::ToggleRomaji,
        "quiz" => Action::StartQuiz,
        "pick" => Action::Choose(candidate(arg, state)?),
        "again" | "new" => Action::NextQuestion,
        "say" => Action::RequestSpeech(speech_text(arg, state)?),
        "ex" => Action::RequestSpeech(example_word(arg, state)?),
        other => return Err(format!("unknown command: {other} (try 'help')")),
    };

    Ok(Some(Command::Action(action)))
}

/// 1-based number typed by the learner, as a 0-based index
fn ordinal(arg: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("expected a number from 1, got '{arg}'")),
    }
}

fn category_id(arg: &str, state: &UiState) -> Result<String, String> {
    if arg.is_empty() {
        return Err("open which module?".to_string());
    }
    if let Ok(index) = ordinal(arg) {
        return state
            .catalog
            .category(index)
            .map(|c| c.id.to_string())
            .ok_or_else(|| format!("no module {arg}"));
    }
    Ok(arg.to_string())
}

fn entry_index(arg: &str, state: &UiState) -> Result<usize, String> {
    if let Ok(index) = ordinal(arg) {
        return Ok(index);
    }
    state
        .view
        .category(&state.catalog)
        .and_then(|c| c.position_of(arg))
        .ok_or_else(|| format!("'{arg}' is not in this module"))
}

fn candidate(arg: &str, state: &UiState) -> Result<String, String> {
    let question = state.view.question().ok_or("no question on screen")?;
    if let Ok(index) = ordinal(arg) {
        return question
            .candidates
            .get(index)
            .map(|c| c.to_string())
            .ok_or_else(|| format!("pick 1 to {}", question.candidates.len()));
    }
    Ok(arg.to_string())
}

fn speech_text(arg: &str, state: &UiState) -> Result<String, String> {
    if !arg.is_empty() {
        return Ok(arg.to_string());
    }
    state
        .view
        .selected_entry(&state.catalog)
        .map(|e| e.kana.to_string())
        .ok_or_else(|| "say what? open an entry or give some text".to_string())
}

fn example_word(arg: &str, state: &UiState) -> Result<String, String> {
    let entry = state
        .view
        .selected_entry(&state.catalog)
        .ok_or("open an entry first")?;
    let index = if arg.is_empty() { 0 } else { ordinal(arg)? };
    entry
        .examples
        .get(index)
        .map(|ex| ex.word.to_string())
        .ok_or_else(|| format!("{} has {} example(s)", entry.kana, entry.examples.len()))
}
