//! Error taxonomy for the turn engine.
//!
//! Every failure is a driver programming error surfaced immediately:
//! there are no retries and no internal recovery. The one exception is
//! [`GameError::Transcript`], which carries an I/O failure from a
//! writer-backed sink.

use std::io;

use thiserror::Error;

use crate::board::Category;

/// Errors surfaced by the turn engine.
#[derive(Debug, Error)]
pub enum GameError {
    /// A turn operation was invoked before any player was added.
    #[error("no players have been added to the game")]
    EmptyRoster,

    /// A category's question queue had no remaining entries.
    #[error("the {0} question queue is exhausted")]
    QuestionsExhausted(Category),

    /// A non-positive die value was passed to `roll`.
    #[error("die roll must be positive, got {0}")]
    InvalidRoll(i32),

    /// The transcript sink failed to accept a line.
    #[error("transcript sink failed")]
    Transcript(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GameError::EmptyRoster.to_string(),
            "no players have been added to the game"
        );
        assert_eq!(
            GameError::QuestionsExhausted(Category::Rock).to_string(),
            "the Rock question queue is exhausted"
        );
        assert_eq!(
            GameError::InvalidRoll(0).to_string(),
            "die roll must be positive, got 0"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = io::Error::new(io::ErrorKind::BrokenPipe, "gone");
        let err: GameError = io.into();
        assert!(matches!(err, GameError::Transcript(_)));
    }
}
