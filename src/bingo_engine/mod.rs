//! Core bingo engine: board dealing, game simulation and pacing checks.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: word pool, boards, win turns, request/response structs |
//! | `error`     | `BingoError` and the crate `Result` alias |
//! | `deck`      | Fisher-Yates permutation and sampling of word-pool indices |
//! | `detector`  | `has_bingo()`: row, column and diagonal win detection |
//! | `trial`     | One trial: reading order, boards, per-player win turns |
//! | `generator` | Entry points `generate()` / `generate_with_rng()`, bounded retry loop |

pub mod deck;
pub mod detector;
pub mod error;
pub mod generator;
pub mod models;
pub mod trial;

pub use detector::has_bingo;
pub use error::{BingoError, Result};
#[cfg(feature = "parallel")]
pub use generator::generate_parallel;
pub use generator::{generate, generate_with_rng};
pub use models::{
    BingoDeck, Board, DeckRequest, PacingBounds, WinTurn, WordEntry, WordPool,
    DEFAULT_MAX_ATTEMPTS,
};
