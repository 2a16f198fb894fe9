use std::time::Duration;

use kana_config::Config;
use kana_types::{AudioClip, ScriptMode};
use rand::Rng;

use crate::catalog::{Catalog, Category, KanaEntry};
use crate::error::QuizError;
use crate::quiz::{QuizQuestion, next_question};

const DEFAULT_AUTO_ADVANCE: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Category,
    Quiz,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizResult {
    #[default]
    Unanswered,
    Correct,
    Incorrect,
}

/// How the presentation layer should paint one quiz candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateMark {
    Unmarked,
    /// Answered correctly
    Correct,
    /// The true answer after a wrong pick
    Revealed,
    /// The learner's wrong pick
    Wrong,
    /// Any other option after a wrong pick
    Dimmed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRound {
    pub question: QuizQuestion,
    pub result: QuizResult,
    pub choice: Option<&'static str>,
    /// Bumped for every generated question, guards delayed auto-advance
    pub generation: u64,
}

/// Everything that can move the view state
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    GoHome,
    SelectCategory(String),
    /// Open the detail overlay on the entry at this position
    OpenEntry(usize),
    CloseEntry,
    /// Swipe inside the overlay
    MoveFocus(isize),
    /// Scroll the overlay to a position
    FocusEntry(usize),
    SetScriptMode(ScriptMode),
    ToggleRomaji,
    StartQuiz,
    Choose(String),
    NextQuestion,
    RequestSpeech(String),
    SpeechCompleted {
        text: String,
        clip: Option<AudioClip>,
    },
    AutoAdvance {
        generation: u64,
    },
}

/// Side effects requested by a transition, carried out by the runtime
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    LookupSpeech(String),
    ScheduleAdvance { generation: u64, delay: Duration },
    Play(AudioClip),
    QuizUnavailable(QuizError),
}

/// Session state owned by a single controller
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    screen: Screen,
    category: usize,
    selected: Option<usize>,
    script_mode: ScriptMode,
    show_romaji: bool,
    quiz: Option<QuizRound>,
    generation: u64,
    pending_speech: Option<String>,
    auto_advance: Duration,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Home,
            category: 0,
            selected: None,
            script_mode: ScriptMode::Both,
            show_romaji: true,
            quiz: None,
            generation: 0,
            pending_speech: None,
            auto_advance: DEFAULT_AUTO_ADVANCE,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            script_mode: config.ui.script_mode,
            show_romaji: config.ui.show_romaji,
            auto_advance: config.auto_advance_delay(),
            ..Self::new()
        }
    }

    pub fn with_auto_advance(mut self, delay: Duration) -> Self {
        self.auto_advance = delay;
        self
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn category_index(&self) -> usize {
        self.category
    }

    pub fn category(&self, catalog: &Catalog) -> Option<&'static Category> {
        catalog.category(self.category)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_entry(&self, catalog: &Catalog) -> Option<&'static KanaEntry> {
        self.category(catalog)?.entry(self.selected?)
    }

    /// 1-based position of the overlay and the category size
    pub fn overlay_position(&self, catalog: &Catalog) -> Option<(usize, usize)> {
        let len = self.category(catalog)?.entries.len();
        self.selected.map(|k| (k + 1, len))
    }

    pub fn script_mode(&self) -> ScriptMode {
        self.script_mode
    }

    pub fn show_romaji(&self) -> bool {
        self.show_romaji
    }

    pub fn quiz(&self) -> Option<&QuizRound> {
        self.quiz.as_ref()
    }

    pub fn question(&self) -> Option<&QuizQuestion> {
        self.quiz.as_ref().map(|r| &r.question)
    }

    pub fn result(&self) -> Option<QuizResult> {
        self.quiz.as_ref().map(|r| r.result)
    }

    pub fn last_choice(&self) -> Option<&'static str> {
        self.quiz.as_ref().and_then(|r| r.choice)
    }

    pub fn correct_answer(&self) -> Option<&'static str> {
        self.quiz.as_ref().map(|r| r.question.answer)
    }

    pub fn pending_speech(&self) -> Option<&str> {
        self.pending_speech.as_deref()
    }

    pub fn is_pending(&self, text: &str) -> bool {
        self.pending_speech.as_deref() == Some(text)
    }

    pub fn candidate_mark(&self, glyph: &str) -> CandidateMark {
        let Some(round) = &self.quiz else {
            return CandidateMark::Unmarked;
        };
        let is_answer = round.question.answer == glyph;

        match round.result {
            QuizResult::Unanswered => CandidateMark::Unmarked,
            QuizResult::Correct if is_answer => CandidateMark::Correct,
            QuizResult::Correct => CandidateMark::Unmarked,
            QuizResult::Incorrect if is_answer => CandidateMark::Revealed,
            QuizResult::Incorrect if round.choice == Some(glyph) => CandidateMark::Wrong,
            QuizResult::Incorrect => CandidateMark::Dimmed,
        }
    }

    /// Applies one action and returns the effects the runtime must carry out
    pub fn apply<R>(&mut self, action: Action, catalog: &Catalog, rng: &mut R) -> Vec<Effect>
    where
        R: Rng + ?Sized,
    {
        match action {
            Action::GoHome => {
                self.leave_quiz();
                self.screen = Screen::Home;
                self.selected = None;
                Vec::new()
            }
            Action::SelectCategory(id) => {
                match catalog.position(&id) {
                    Some(index) => {
                        self.leave_quiz();
                        self.screen = Screen::Category;
                        self.category = index;
                        self.selected = None;
                    }
                    None => tracing::warn!("Unknown category: {id}"),
                }
                Vec::new()
            }
            Action::OpenEntry(index) => {
                if self.screen == Screen::Category && index < self.category_len(catalog) {
                    self.selected = Some(index);
                }
                Vec::new()
            }
            Action::CloseEntry => {
                self.selected = None;
                Vec::new()
            }
            Action::MoveFocus(offset) => {
                if let Some(current) = self.selected {
                    let last = self.category_len(catalog).saturating_sub(1);
                    let target = current.saturating_add_signed(offset).min(last);
                    self.selected = Some(target);
                }
                Vec::new()
            }
            Action::FocusEntry(index) => {
                if self.selected.is_some() && index < self.category_len(catalog) {
                    self.selected = Some(index);
                }
                Vec::new()
            }
            Action::SetScriptMode(mode) => {
                self.script_mode = mode;
                Vec::new()
            }
            Action::ToggleRomaji => {
                self.show_romaji = !self.show_romaji;
                Vec::new()
            }
            Action::StartQuiz => {
                if self.screen == Screen::Quiz && self.quiz.is_some() {
                    return Vec::new();
                }
                self.selected = None;
                self.screen = Screen::Quiz;
                self.new_question(catalog, rng)
            }
            Action::Choose(glyph) => self.choose(&glyph),
            Action::NextQuestion => {
                if self.screen != Screen::Quiz {
                    return Vec::new();
                }
                self.new_question(catalog, rng)
            }
            Action::RequestSpeech(text) => {
                if text.trim().is_empty() {
                    return Vec::new();
                }
                self.pending_speech = Some(text.clone());
                vec![Effect::LookupSpeech(text)]
            }
            Action::SpeechCompleted { text, clip } => {
                if self.is_pending(&text) {
                    self.pending_speech = None;
                }
                clip.map(Effect::Play).into_iter().collect()
            }
            Action::AutoAdvance { generation } => {
                let due = self.screen == Screen::Quiz
                    && self.quiz.as_ref().is_some_and(|r| {
                        r.generation == generation && r.result == QuizResult::Correct
                    });
                if !due {
                    tracing::debug!("Ignoring stale auto-advance for question {generation}");
                    return Vec::new();
                }
                self.new_question(catalog, rng)
            }
        }
    }

    fn category_len(&self, catalog: &Catalog) -> usize {
        self.category(catalog).map_or(0, |c| c.entries.len())
    }

    fn leave_quiz(&mut self) {
        self.quiz = None;
    }

    fn new_question<R>(&mut self, catalog: &Catalog, rng: &mut R) -> Vec<Effect>
    where
        R: Rng + ?Sized,
    {
        self.generation += 1;

        match next_question(catalog, rng) {
            Ok(question) => {
                tracing::debug!(
                    "Question {}: {} -> {:?}",
                    self.generation,
                    question.prompt,
                    question.candidates
                );
                self.quiz = Some(QuizRound {
                    question,
                    result: QuizResult::Unanswered,
                    choice: None,
                    generation: self.generation,
                });
                Vec::new()
            }
            Err(e) => {
                self.quiz = None;
                vec![Effect::QuizUnavailable(e)]
            }
        }
    }

    fn choose(&mut self, glyph: &str) -> Vec<Effect> {
        if self.screen != Screen::Quiz {
            return Vec::new();
        }
        let Some(round) = self.quiz.as_mut() else {
            return Vec::new();
        };
        if round.result != QuizResult::Unanswered {
            return Vec::new();
        }
        let Some(choice) = round.question.candidate(glyph) else {
            return Vec::new();
        };

        round.choice = Some(choice);
        if choice == round.question.answer {
            round.result = QuizResult::Correct;
            vec![Effect::ScheduleAdvance {
                generation: round.generation,
                delay: self.auto_advance,
            }]
        } else {
            round.result = QuizResult::Incorrect;
            Vec::new()
        }
    }
}
