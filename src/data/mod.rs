mod loader;

pub use loader::{LoadError, load_quizzes_from_json};
