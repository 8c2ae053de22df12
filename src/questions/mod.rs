pub mod repo;
pub mod repo_types;

pub use repo::{PgQuestionStore, QuestionStore};
pub use repo_types::QuestionSet;
