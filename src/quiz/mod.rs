mod error;
mod index;
mod loader;
mod model;
mod normalize;
mod questions;

pub use error::SkipReason;
pub use index::{check_entry, validate_index};
pub use loader::{file_exists, read_json};
pub use model::{flag_of, text_of, Answer, IndexEntry, Question, QuizDocument, QuizItem};
pub use normalize::{load_quiz, normalize};
pub use questions::parse_questions;
