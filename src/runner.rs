//! Seeded simulation driver.
//!
//! Drives a game to completion with injected randomness: roll a 1-6
//! die, then answer incorrectly when a one-in-nine chance fires,
//! otherwise correctly, until a correct answer reports the game is
//! over. The same seed always replays the same game, which makes
//! driver runs usable as regression fixtures.

use log::debug;

use crate::core::{GameError, GameRng, PlayerId};
use crate::engine::Game;
use crate::transcript::Transcript;

/// Wrong-answer odds: one die face in nine.
const ANSWER_DIE_FACES: i32 = 9;
const WRONG_ANSWER_FACE: i32 = 7;

/// Outcome of a completed simulated game.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// The player whose purse reached the winning threshold.
    pub winner: PlayerId,
    /// Resolved turns played (outcome calls).
    pub turns: u32,
    /// The finished game's transcript.
    pub transcript: Transcript,
}

/// Play a full game with the given players and seed.
///
/// Fails if `names` is empty (the first roll finds no roster) or if a
/// marathon game exhausts a question queue.
pub fn simulate(seed: u64, names: &[&str]) -> Result<RunReport, GameError> {
    let mut game = Game::new();
    for name in names {
        game.add_player(*name)?;
    }

    let mut rng = GameRng::new(seed);
    let mut turns = 0u32;

    loop {
        game.roll(rng.gen_range(1..7))?;

        let continues = if rng.gen_range(0..ANSWER_DIE_FACES) == WRONG_ANSWER_FACE {
            game.answer_incorrect()?
        } else {
            game.answer_correct()?
        };
        turns += 1;

        if !continues {
            break;
        }
    }

    let winner = game
        .winner()
        .expect("a game only ends once a purse reaches the winning threshold");
    debug!("seed {} finished in {} turns, {} won", seed, turns, winner);

    Ok(RunReport {
        winner,
        turns,
        transcript: game.into_sink(),
    })
}
