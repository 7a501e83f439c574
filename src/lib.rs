//! # trivia-engine
//!
//! A deterministic turn engine for the trivia board game.
//!
//! ## Design Principles
//!
//! 1. **Caller-Driven**: The engine generates no randomness. Die rolls
//!    and answer outcomes are supplied by the driving loop; the
//!    optional simulation driver injects its own seeded RNG so runs
//!    are replayable.
//!
//! 2. **Narrated State Machine**: Every notable event is appended to a
//!    transcript sink, one human-readable line at a time. The wording
//!    is an external interface: golden-output comparison is how this
//!    engine is verified.
//!
//! 3. **Explicit Failure**: Conditions the board game leaves undefined
//!    (rolling with no players, drawing from an exhausted question
//!    queue, non-positive die values) fail fast with typed errors.
//!
//! ## Modules
//!
//! - `core`: Player IDs, seats, the roster, errors, driver RNG
//! - `board`: Board geometry and the position → category mapping
//! - `questions`: Per-category FIFO question queues
//! - `transcript`: Transcript sink trait and implementations
//! - `engine`: The turn engine itself
//! - `runner`: Seeded simulation driver

pub mod board;
pub mod core;
pub mod engine;
pub mod questions;
pub mod runner;
pub mod transcript;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, GameRngState, PlayerId, Roster, Seat};

pub use crate::board::{Category, BOARD_SQUARES, WINNING_PURSE};

pub use crate::questions::{QuestionBank, DEFAULT_QUESTIONS_PER_CATEGORY};

pub use crate::transcript::{Transcript, TranscriptSink, WriterSink};

pub use crate::engine::Game;

pub use crate::runner::{simulate, RunReport};
