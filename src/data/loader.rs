use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{QuizDraft, ValidationError};

/// Why a seed file could not be used.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("quiz {} in {} is invalid: {source}", .index + 1, .path.display())]
    Invalid {
        path: PathBuf,
        index: usize,
        #[source]
        source: ValidationError,
    },
}

/// Read quizzes from a JSON array of drafts.
///
/// Every quiz must pass the same checks as the quiz form. An empty array is
/// accepted and yields an empty store.
pub fn load_quizzes_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<QuizDraft>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let quizzes: Vec<QuizDraft> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    for (index, quiz) in quizzes.iter().enumerate() {
        quiz.validate().map_err(|source| LoadError::Invalid {
            path: path.to_path_buf(),
            index,
            source,
        })?;
    }

    log::info!("Loaded {} quizzes from {}", quizzes.len(), path.display());
    Ok(quizzes)
}
