//! Player identification and the seat roster.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Indices are 0-based and follow
//! registration order, which fixes play order.
//!
//! ## Roster
//!
//! Insertion-ordered seats plus the turn cursor. Duplicate names are
//! allowed and are tracked as distinct seats.

use serde::{Deserialize, Serialize};

use crate::board::{BOARD_SQUARES, WINNING_PURSE};

/// Player identifier. The first registered player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One player's seat: everything the engine tracks per player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Display name, as it appears in the transcript.
    pub name: String,

    /// Board square in `[0, 11]`; wraps modulo 12 on movement.
    pub position: u8,

    /// Coins won so far. Reaching [`WINNING_PURSE`] ends the game.
    pub purse: u8,

    /// Set on a wrong answer. Never cleared: scoring while boxed is
    /// governed per turn by `pending_release`, not by this flag.
    pub in_penalty_box: bool,

    /// Whether this seat's most recent roll qualified for release.
    /// Written on every roll while boxed, consumed by the following
    /// outcome call.
    pub pending_release: bool,
}

impl Seat {
    /// New seat at the start square with an empty purse.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: 0,
            purse: 0,
            in_penalty_box: false,
            pending_release: false,
        }
    }

    /// Advance along the board, wrapping at [`BOARD_SQUARES`].
    ///
    /// `roll` must already be validated as positive.
    pub fn advance(&mut self, roll: i32) {
        debug_assert!(roll > 0, "roll must be validated before movement");
        self.position = ((self.position as i64 + roll as i64) % BOARD_SQUARES as i64) as u8;
    }

    /// Whether this seat has won.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.purse >= WINNING_PURSE
    }
}

/// Ordered list of seats plus the turn cursor.
///
/// Registration order is play order. The cursor advances by one seat
/// (wrapping) after every resolved outcome call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    seats: Vec<Seat>,
    current: usize,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a seat. Returns the new player's ID.
    pub fn add(&mut self, name: impl Into<String>) -> PlayerId {
        self.seats.push(Seat::new(name));
        PlayerId::new((self.seats.len() - 1) as u8)
    }

    /// Number of registered seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Get a seat by ID.
    #[must_use]
    pub fn seat(&self, player: PlayerId) -> Option<&Seat> {
        self.seats.get(player.index())
    }

    /// The seat whose turn it is, with its ID.
    #[must_use]
    pub fn current(&self) -> Option<(PlayerId, &Seat)> {
        let seat = self.seats.get(self.current)?;
        Some((PlayerId::new(self.current as u8), seat))
    }

    /// Mutable access to the seat whose turn it is.
    pub fn current_mut(&mut self) -> Option<(PlayerId, &mut Seat)> {
        let id = PlayerId::new(self.current as u8);
        let seat = self.seats.get_mut(self.current)?;
        Some((id, seat))
    }

    /// Advance the turn cursor by one seat, wrapping at the roster
    /// size. No-op on an empty roster.
    pub fn advance_turn(&mut self) {
        if !self.seats.is_empty() {
            self.current = (self.current + 1) % self.seats.len();
        }
    }

    /// Iterate over (PlayerId, &Seat) pairs in play order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Seat)> {
        self.seats
            .iter()
            .enumerate()
            .map(|(i, s)| (PlayerId::new(i as u8), s))
    }
}
