use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bingo_engine::detector::has_bingo;
use crate::bingo_engine::error::{BingoError, Result};

/// Attempt budget used when a request does not set one.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

/// One vocabulary item: the word printed on boards and the clue read aloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub description: String,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, description: impl Into<String>) -> Self {
        WordEntry { word: word.into(), description: description.into() }
    }

    /// Script line as read aloud, e.g. `"3. verb, past tense [wrote]"`.
    pub fn script_line(&self, turn: usize) -> String {
        format!("{}. {} [{}]", turn, self.description, self.word)
    }
}

/// Accepted JSON shapes for a single vocabulary item.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Object(WordEntry),
    Pair(String, String),
}

impl From<RawEntry> for WordEntry {
    fn from(raw: RawEntry) -> Self {
        match raw {
            RawEntry::Object(entry) => entry,
            RawEntry::Pair(word, description) => WordEntry { word, description },
        }
    }
}

/// Ordered vocabulary with unique words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    entries: Vec<WordEntry>,
}

impl WordPool {
    /// Build a pool, rejecting the first word that appears twice.
    pub fn new(entries: Vec<WordEntry>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.word.as_str()) {
                return Err(BingoError::DuplicateWord(entry.word.clone()));
            }
        }
        Ok(WordPool { entries })
    }

    pub fn from_pairs<W, D>(pairs: impl IntoIterator<Item = (W, D)>) -> Result<Self>
    where
        W: Into<String>,
        D: Into<String>,
    {
        Self::new(pairs.into_iter().map(|(w, d)| WordEntry::new(w, d)).collect())
    }

    /// Parse a JSON array of `{"word", "description"}` objects or
    /// `["word", "description"]` pairs.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<RawEntry> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: Vec<RawEntry>) -> Result<Self> {
        Self::new(raw.into_iter().map(WordEntry::from).collect())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|e| e.word == word)
    }

    pub fn description_of(&self, word: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.word == word)
            .map(|e| e.description.as_str())
    }
}

impl<'de> Deserialize<'de> for WordPool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Vec::<RawEntry>::deserialize(deserializer)?;
        Self::from_raw(raw).map_err(serde::de::Error::custom)
    }
}

impl Serialize for WordPool {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

// ---------------------------------------------------------------------------
// Boards and game results
// ---------------------------------------------------------------------------

/// One player's `size × size` grid, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub size: usize,
    pub words: Vec<String>,
}

impl Board {
    pub fn rows(&self) -> impl Iterator<Item = &[String]> + '_ {
        // chunks(0) panics; an empty board has no rows
        self.words.chunks(self.size.max(1)).take(self.size)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// True when a full row, column or diagonal is in `marked`.
    pub fn has_bingo(&self, marked: &HashSet<String>) -> bool {
        has_bingo(&self.words, marked, self.size)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.join(" | "))?;
        }
        Ok(())
    }
}

/// Turn (1-based) on which a player's board first completed a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinTurn {
    Won(usize),
    NoWin,
}

impl WinTurn {
    pub fn turn(self) -> Option<usize> {
        match self {
            WinTurn::Won(turn) => Some(turn),
            WinTurn::NoWin => None,
        }
    }
}

impl fmt::Display for WinTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinTurn::Won(turn) => write!(f, "won on turn {}", turn),
            WinTurn::NoWin => write!(f, "did not win"),
        }
    }
}

/// Acceptable window for the first wins of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingBounds {
    pub min_turns: usize,
    pub max_turns: usize,
}

impl PacingBounds {
    /// Some player wins before `min_turns`.
    pub fn has_early_win(&self, win_turns: &[WinTurn]) -> bool {
        win_turns
            .iter()
            .any(|w| w.turn().is_some_and(|t| t < self.min_turns))
    }

    /// Some player wins by `max_turns`. Early winners count here too.
    pub fn has_timely_win(&self, win_turns: &[WinTurn]) -> bool {
        win_turns
            .iter()
            .any(|w| w.turn().is_some_and(|t| t <= self.max_turns))
    }

    /// Nobody wins early and at least one player wins in time.
    pub fn accepts(&self, win_turns: &[WinTurn]) -> bool {
        !self.has_early_win(win_turns) && self.has_timely_win(win_turns)
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRequest {
    pub board_size: usize,
    pub num_players: usize,
    pub min_turns: usize,
    pub max_turns: usize,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    /// `None` seeds from entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl DeckRequest {
    pub fn new(board_size: usize, num_players: usize, min_turns: usize, max_turns: usize) -> Self {
        DeckRequest {
            board_size,
            num_players,
            min_turns,
            max_turns,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            rng_seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn pacing(&self) -> PacingBounds {
        PacingBounds { min_turns: self.min_turns, max_turns: self.max_turns }
    }

    /// Words each board needs.
    pub fn cells_per_board(&self) -> usize {
        self.board_size * self.board_size
    }
}

/// An accepted trial: everything the printing side needs plus diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BingoDeck {
    pub boards: Vec<Board>,
    /// Full reading order with clues, turn 1 first.
    pub script: Vec<WordEntry>,
    /// One entry per board, same order.
    pub win_turns: Vec<WinTurn>,
    /// 1-based index of the accepted attempt.
    pub attempts: usize,
}

impl BingoDeck {
    /// `"Player 1 won on turn 9."` style lines, one per player.
    pub fn win_report(&self) -> Vec<String> {
        self.win_turns
            .iter()
            .enumerate()
            .map(|(i, w)| format!("Player {} {}.", i + 1, w))
            .collect()
    }

    /// Earliest win across all players.
    pub fn first_win(&self) -> Option<usize> {
        self.win_turns.iter().filter_map(|w| w.turn()).min()
    }
}
