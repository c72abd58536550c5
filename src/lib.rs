//! # word_bingo_gen
//!
//! Generates word-bingo boards for a group of players together with the
//! order in which the caller reads the words out, tuned so the game neither
//! ends too early nor drags on.
//!
//! ## How it works
//!
//! 1. Build a [`WordPool`] of unique `(word, description)` pairs. Boards show
//!    the words; the caller reads the descriptions aloud.
//! 2. Describe the game with a [`DeckRequest`]: board size, number of
//!    players, the pacing window `min_turns..=max_turns`, an attempt budget
//!    and an optional RNG seed.
//! 3. Call [`generate`]. Each attempt shuffles the whole pool into a reading
//!    order, deals an independent board per player, plays the game out and
//!    records the turn each board first completes a row, column or diagonal.
//!    The attempt is kept when nobody wins before `min_turns` and somebody
//!    wins by `max_turns`.
//! 4. The returned [`BingoDeck`] holds the boards, the reading script and
//!    every player's win turn. Hand it to a [`DeckRenderer`] to print it.
//!
//! ## Key features
//!
//! - **Deterministic**: `rng_seed: Some(u64)` reproduces the same deck, or
//!   inject any generator with [`generate_with_rng`].
//! - **Fails closed**: an impossible window ends in
//!   [`BingoError::GenerationExhausted`] after exactly `max_attempts` trials.
//! - **Parallel** (feature `parallel`): `generate_parallel` evaluates trials
//!   on rayon and returns the same deck as the sequential loop.
//!
//! ## Quick start
//!
//! ```rust
//! use word_bingo_gen::{generate, DeckRequest, TextRenderer, DeckRenderer, WordPool};
//!
//! let pool = WordPool::from_pairs((0..16).map(|i| (format!("word{i}"), format!("clue {i}"))))
//!     .unwrap();
//!
//! let deck = generate(&pool, &DeckRequest::new(4, 1, 1, 16).with_seed(42)).unwrap();
//! for line in deck.win_report() {
//!     println!("{line}");
//! }
//! println!("{}", TextRenderer.render(&deck.boards, &deck.script));
//! ```

pub mod bingo_engine;
pub mod render_adapter;

// Convenience re-exports so callers can use `word_bingo_gen::generate`
// directly without reaching into `bingo_engine::`.
#[cfg(feature = "parallel")]
pub use bingo_engine::generate_parallel;
pub use bingo_engine::{
    generate, generate_with_rng, has_bingo, BingoDeck, BingoError, Board, DeckRequest,
    PacingBounds, Result, WinTurn, WordEntry, WordPool, DEFAULT_MAX_ATTEMPTS,
};
pub use render_adapter::{DeckRenderer, JsonRenderer, TextRenderer};
