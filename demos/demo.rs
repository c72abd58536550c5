//! End-to-end demo: a classroom game of grammar bingo.
//!
//! Run with: `cargo run --example demo`
//! (`RUST_LOG=debug` shows every rejected attempt.)
//!
//! 1. **Generation**: eleven 4x4 boards from a 21-word vocabulary, with no
//!    winner before turn 7 and at least one by turn 15.
//! 2. **Report**: which attempt was accepted and each player's win turn.
//! 3. **Rendering**: boards and reading script as text, and the JSON payload
//!    a page-layout service would receive.
//! 4. **Failure**: an impossible window, reported after the attempt budget.

use word_bingo_gen::{
    generate, BingoError, DeckRenderer, DeckRequest, JsonRenderer, TextRenderer, WordPool,
};

const VOCABULARY: &str = r#"[
    ["nakreslí", "verb, 3rd person, singular, future tense"],
    ["sedíš", "verb, 2nd person, singular, present tense"],
    ["tešili", "verb, 3rd person, plural, past tense"],
    ["urobila", "verb, 1st person, singular, past tense"],
    ["písal", "verb, 2nd person, singular, past tense"],
    ["dvadsať", "numeral, cardinal"],
    ["prvý", "numeral, ordinal"],
    ["ono", "pronoun, personal, 3rd person, singular, nominative"],
    ["my", "pronoun, personal, nominative"],
    ["ňou", "pronoun, personal, 3rd person, singular, instrumental"],
    ["školy", "noun, feminine, singular, genitive"],
    ["kamarátmi", "noun, masculine, plural, instrumental"],
    ["srdci", "noun, neuter, singular, locative"],
    ["dievčatám", "noun, feminine, plural, dative"],
    ["štvrták", "noun, masculine, singular, nominative"],
    ["základnej", "adjective, feminine, singular, genitive"],
    ["dobrými", "adjective, masculine, plural, instrumental"],
    ["úprimnom", "adjective, neuter, singular, locative"],
    ["šikovných", "adjective, masculine, plural, genitive"],
    ["usilovný", "adjective, masculine, singular, nominative"],
    ["rozmýšľať", "verb, infinitive"]
]"#;

fn main() -> Result<(), BingoError> {
    env_logger::init();

    let pool = WordPool::from_json(VOCABULARY)?;

    // ── Generation ───────────────────────────────────────────────────────────
    let request = DeckRequest::new(4, 11, 7, 15).with_seed(2024);
    println!();
    println!(
        "══ {} players, {}x{} boards, first win in turns {}..={} ══",
        request.num_players,
        request.board_size,
        request.board_size,
        request.min_turns,
        request.max_turns
    );
    println!();

    let deck = match generate(&pool, &request) {
        Ok(deck) => deck,
        Err(e @ BingoError::GenerationExhausted { .. }) => {
            println!("  {e}");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    // ── Report ───────────────────────────────────────────────────────────────
    println!("  Accepted on attempt {}", deck.attempts);
    if let Some(turn) = deck.first_win() {
        println!("  First bingo on turn {turn}");
    }
    for line in deck.win_report() {
        println!("  {line}");
    }
    println!();

    // ── Rendering ────────────────────────────────────────────────────────────
    println!("{}", TextRenderer.render_deck(&deck));

    let payload = JsonRenderer.render_deck(&deck);
    println!("══ JSON payload (first board) ══");
    println!("{}", serde_json::to_string_pretty(&payload["boards"][0])?);
    println!();

    // ── Failure ──────────────────────────────────────────────────────────────
    let impossible = DeckRequest::new(4, 11, 10, 5).with_seed(1).with_max_attempts(50);
    if let Err(e) = generate(&pool, &impossible) {
        println!("══ Impossible window ══");
        println!("  {e}");
    }
    Ok(())
}
