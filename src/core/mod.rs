//! Core engine types: players, errors, RNG.
//!
//! These are the building blocks the turn engine is assembled from;
//! board geometry and question storage live in their own modules.

pub mod error;
pub mod player;
pub mod rng;

pub use error::GameError;
pub use player::{PlayerId, Roster, Seat};
pub use rng::{GameRng, GameRngState};
