use log::{debug, info, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::bingo_engine::{
    error::{BingoError, Result},
    models::{BingoDeck, DeckRequest, WordPool},
    trial::TrialOutcome,
};

/// Seeded from the request, or from entropy when no seed is given.
fn request_rng(request: &DeckRequest) -> StdRng {
    match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Preconditions checked before any randomness is drawn.
fn check_request(pool: &WordPool, request: &DeckRequest) -> Result<()> {
    if request.board_size == 0 {
        return Err(BingoError::InvalidBoardSize);
    }
    let required = request.cells_per_board();
    if pool.len() < required {
        return Err(BingoError::InsufficientVocabulary { required, available: pool.len() });
    }
    Ok(())
}

fn exhausted(request: &DeckRequest) -> BingoError {
    warn!(
        "no acceptable deck after {} attempts (turns {}..={}, {} players)",
        request.max_attempts, request.min_turns, request.max_turns, request.num_players
    );
    BingoError::GenerationExhausted {
        attempts: request.max_attempts,
        min_turns: request.min_turns,
        max_turns: request.max_turns,
        num_players: request.num_players,
        board_size: request.board_size,
    }
}

/// Run the trial for one attempt and keep it if the pacing bounds hold.
fn attempt(pool: &WordPool, request: &DeckRequest, attempt: usize, seed: u64) -> Option<BingoDeck> {
    let outcome =
        TrialOutcome::from_seed(pool.len(), request.board_size, request.num_players, seed);

    if !request.pacing().accepts(&outcome.win_turns) {
        debug!("attempt {attempt}: rejected win turns {:?}", outcome.win_turns);
        return None;
    }
    info!("attempt {attempt}: accepted win turns {:?}", outcome.win_turns);
    Some(outcome.into_deck(pool, attempt))
}

/// Generate a deck using the request's seed (or entropy).
pub fn generate(pool: &WordPool, request: &DeckRequest) -> Result<BingoDeck> {
    let mut rng = request_rng(request);
    generate_with_rng(pool, request, &mut rng)
}

/// Generate a deck drawing from an injected random source.
///
/// Each attempt takes one `u64` from `rng` and runs its trial on a fresh
/// generator seeded with it. `request.rng_seed` is ignored here.
pub fn generate_with_rng<R: Rng + ?Sized>(
    pool: &WordPool,
    request: &DeckRequest,
    rng: &mut R,
) -> Result<BingoDeck> {
    check_request(pool, request)?;

    for n in 1..=request.max_attempts {
        let seed: u64 = rng.gen();
        if let Some(deck) = attempt(pool, request, n, seed) {
            return Ok(deck);
        }
    }
    Err(exhausted(request))
}

/// Same result as [`generate`] for a seeded request, with trials evaluated
/// on the rayon pool.
///
/// Seeds for every attempt are drawn up front in sequential order and the
/// lowest accepted attempt wins, so the output does not depend on scheduling.
#[cfg(feature = "parallel")]
pub fn generate_parallel(pool: &WordPool, request: &DeckRequest) -> Result<BingoDeck> {
    use rayon::prelude::*;

    check_request(pool, request)?;
    let mut rng = request_rng(request);
    let seeds: Vec<u64> = (0..request.max_attempts).map(|_| rng.gen()).collect();

    seeds
        .par_iter()
        .enumerate()
        .find_map_first(|(i, &seed)| attempt(pool, request, i + 1, seed))
        .ok_or_else(|| exhausted(request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bingo_engine::models::WordEntry;

    fn pool(n: usize) -> WordPool {
        WordPool::new(
            (0..n)
                .map(|i| WordEntry::new(format!("w{i}"), format!("clue {i}")))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn zero_board_size_is_rejected() {
        let err = generate(&pool(4), &DeckRequest::new(0, 2, 1, 4).with_seed(1)).unwrap_err();
        assert!(matches!(err, BingoError::InvalidBoardSize));
    }

    #[test]
    fn zero_attempts_exhausts_immediately() {
        let req = DeckRequest::new(2, 1, 1, 4).with_seed(1).with_max_attempts(0);
        let err = generate(&pool(4), &req).unwrap_err();
        assert!(matches!(err, BingoError::GenerationExhausted { attempts: 0, .. }));
    }

    #[test]
    fn accepted_attempt_index_is_reported() {
        let req = DeckRequest::new(3, 4, 3, 20).with_seed(11);
        let deck = generate(&pool(20), &req).unwrap();
        assert!(deck.attempts >= 1 && deck.attempts <= req.max_attempts);
        assert!(req.pacing().accepts(&deck.win_turns));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let req = DeckRequest::new(4, 11, 7, 15).with_seed(2024);
        let p = pool(21);
        assert_eq!(generate(&p, &req).ok(), generate_parallel(&p, &req).ok());
    }
}
