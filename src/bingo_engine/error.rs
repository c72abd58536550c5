//! Error kinds surfaced by deck generation.
//!
//! Every variant is terminal: the generator never retries on its own beyond
//! the attempt budget of a request.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BingoError {
    /// The pool cannot fill a single board.
    #[error("insufficient vocabulary: a board needs {required} words but only {available} are available")]
    InsufficientVocabulary { required: usize, available: usize },

    /// No trial met the pacing bounds within the attempt budget.
    #[error(
        "generation exhausted after {attempts} attempts: no deck of {num_players} \
         {board_size}x{board_size} boards had its first win within turns {min_turns}..={max_turns}"
    )]
    GenerationExhausted {
        attempts: usize,
        min_turns: usize,
        max_turns: usize,
        num_players: usize,
        board_size: usize,
    },

    #[error("invalid board size: boards must be at least 1x1")]
    InvalidBoardSize,

    #[error("duplicate word in vocabulary: {0:?}")]
    DuplicateWord(String),

    #[error("invalid word list JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BingoError>;
