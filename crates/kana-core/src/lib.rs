pub mod catalog;
pub mod error;
pub mod quiz;
pub mod types;
pub mod view;

pub use catalog::{Catalog, Category, Example, GridPos, KanaEntry};
pub use error::{CatalogError, QuizError};
pub use quiz::{QuizQuestion, next_question};
pub use types::AppEvent;
pub use view::{Action, CandidateMark, Effect, QuizResult, QuizRound, Screen, ViewState};
