//! The turn engine.
//!
//! `Game` owns all per-player state, the question bank, and the
//! transcript sink. It consumes two external stimuli, a die roll and a
//! right/wrong answer outcome, and narrates every event as it happens.
//! The engine never generates randomness and never halts itself: the
//! driving loop stops when a correct answer reports the game is over.
//!
//! ## Turn shape
//!
//! A resolved turn is a `roll` followed by exactly one outcome call.
//! The turn cursor advances on outcome calls only; consecutive rolls
//! without an outcome between them are legal and keep the same player.
//!
//! ## Penalty box
//!
//! A wrong answer boxes the current player. While boxed, an odd roll
//! moves the player, asks a question, and marks the seat as pending
//! release, which lets the following correct answer score; an even
//! roll does nothing but clear that mark. The boxed flag itself is
//! never cleared.

use log::{debug, trace};

use crate::board::{Category, WINNING_PURSE};
use crate::core::{GameError, PlayerId, Roster, Seat};
use crate::questions::QuestionBank;
use crate::transcript::{Transcript, TranscriptSink};

/// A single trivia game: roster, question bank, and transcript sink.
///
/// All state lives for the lifetime of the instance; two games never
/// share anything. Operations are synchronous and single-threaded.
///
/// ## Example
///
/// ```
/// use trivia_engine::Game;
///
/// let mut game = Game::new();
/// game.add_player("Chet").unwrap();
/// game.add_player("Pat").unwrap();
///
/// game.roll(5).unwrap();
/// let continues = game.answer_correct().unwrap();
/// assert!(continues);
/// ```
pub struct Game<S: TranscriptSink = Transcript> {
    roster: Roster,
    bank: QuestionBank,
    sink: S,
}

impl Game<Transcript> {
    /// New game with an empty roster, fully seeded question banks, and
    /// an in-memory transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Transcript::new())
    }

    /// New game with `count` questions per category. Useful for
    /// exercising bank exhaustion.
    #[must_use]
    pub fn with_question_count(count: usize) -> Self {
        Self {
            roster: Roster::new(),
            bank: QuestionBank::with_question_count(count),
            sink: Transcript::new(),
        }
    }

    /// The transcript accumulated so far.
    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.sink
    }
}

impl Default for Game<Transcript> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TranscriptSink> Game<S> {
    /// New game narrating into the given sink.
    pub fn with_sink(sink: S) -> Self {
        Self {
            roster: Roster::new(),
            bank: QuestionBank::new(),
            sink,
        }
    }

    /// Consume the game, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    // === Registration ===

    /// Register a player at the next seat.
    ///
    /// Duplicate names are allowed; they play as distinct seats.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId, GameError> {
        let name = name.into();
        let id = self.roster.add(name.clone());

        self.sink.line(&format!("{} was added", name))?;
        self.sink
            .line(&format!("They are player number {}", self.roster.len()))?;
        debug!("registered {} as {}", name, id);

        Ok(id)
    }

    /// Number of registered players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    /// Whether enough players are registered to play (two or more).
    /// A derived query, not an enforced precondition.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.roster.len() >= 2
    }

    // === Queries ===

    /// The player whose turn it is.
    pub fn current_player(&self) -> Result<PlayerId, GameError> {
        self.roster
            .current()
            .map(|(id, _)| id)
            .ok_or(GameError::EmptyRoster)
    }

    /// A player's seat, if registered.
    #[must_use]
    pub fn seat(&self, player: PlayerId) -> Option<&Seat> {
        self.roster.seat(player)
    }

    /// The player whose purse reached the winning threshold, if any.
    /// The engine only reports this; stopping is the driver's job.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.roster
            .iter()
            .find(|(_, seat)| seat.has_won())
            .map(|(id, _)| id)
    }

    /// Remaining questions for a category.
    #[must_use]
    pub fn remaining_questions(&self, category: Category) -> usize {
        self.bank.remaining(category)
    }

    // === Turn operations ===

    /// Resolve a die roll for the current player.
    ///
    /// Free players move and get asked a question. Boxed players move
    /// and get asked only on an odd roll, which also marks them as
    /// pending release; an even roll leaves them where they are.
    ///
    /// Rolls larger than a die allows are accepted; movement wraps at
    /// the board size.
    pub fn roll(&mut self, value: i32) -> Result<(), GameError> {
        if value < 1 {
            return Err(GameError::InvalidRoll(value));
        }

        let (id, seat) = self.roster.current().ok_or(GameError::EmptyRoster)?;
        let name = seat.name.clone();
        let boxed = seat.in_penalty_box;

        self.sink.line(&format!("{} is the current player", name))?;
        self.sink.line(&format!("They have rolled a {}", value))?;

        if boxed {
            let releasing = value % 2 != 0;
            if let Some((_, seat)) = self.roster.current_mut() {
                seat.pending_release = releasing;
            }

            if releasing {
                debug!("{} rolled odd while boxed, moving", id);
                self.sink
                    .line(&format!("{} is getting out of the penalty box", name))?;
                self.move_and_ask(value)?;
            } else {
                debug!("{} rolled even while boxed, staying put", id);
                self.sink
                    .line(&format!("{} is not getting out of the penalty box", name))?;
            }
        } else {
            self.move_and_ask(value)?;
        }

        Ok(())
    }

    /// Resolve a correct answer. Returns `true` while the game
    /// continues, `false` once this answer has won it.
    ///
    /// A boxed player whose last roll was even gets no coin; the turn
    /// still passes to the next seat.
    pub fn answer_correct(&mut self) -> Result<bool, GameError> {
        let (id, seat) = self.roster.current().ok_or(GameError::EmptyRoster)?;

        // Scoring eligibility: free, or boxed with a qualifying roll.
        let eligible = !seat.in_penalty_box || seat.pending_release;
        if !eligible {
            debug!("{} is boxed with no pending release, no coin", id);
            self.roster.advance_turn();
            return Ok(true);
        }

        let name = seat.name.clone();
        self.sink.line("Answer was correct!!!!")?;

        let purse = match self.roster.current_mut() {
            Some((_, seat)) => {
                seat.purse += 1;
                seat.purse
            }
            None => return Err(GameError::EmptyRoster),
        };
        self.sink
            .line(&format!("{} now has {} Gold Coins.", name, purse))?;
        debug!("{} scored, purse now {}", id, purse);

        let continues = purse != WINNING_PURSE;
        self.roster.advance_turn();
        Ok(continues)
    }

    /// Resolve a wrong answer: the current player is sent to the
    /// penalty box and the turn passes.
    ///
    /// Always returns `true`; the value mirrors the correct-answer
    /// signature and carries no signal.
    pub fn answer_incorrect(&mut self) -> Result<bool, GameError> {
        let (id, seat) = self.roster.current().ok_or(GameError::EmptyRoster)?;
        let name = seat.name.clone();

        self.sink.line("Question was incorrectly answered")?;
        self.sink
            .line(&format!("{} was sent to the penalty box", name))?;

        if let Some((_, seat)) = self.roster.current_mut() {
            seat.in_penalty_box = true;
        }
        debug!("{} sent to the penalty box", id);

        self.roster.advance_turn();
        Ok(true)
    }

    /// Shared movement path: advance, announce the square and
    /// category, draw and ask the next question.
    fn move_and_ask(&mut self, value: i32) -> Result<(), GameError> {
        let (name, position) = match self.roster.current_mut() {
            Some((_, seat)) => {
                seat.advance(value);
                (seat.name.clone(), seat.position)
            }
            None => return Err(GameError::EmptyRoster),
        };

        let category = Category::at(position);
        self.sink
            .line(&format!("{}'s new location is {}", name, position))?;
        self.sink.line(&format!("The category is {}", category))?;

        let question = self.bank.draw(category)?;
        trace!("asking {:?}, {} left", question, self.bank.remaining(category));
        self.sink.line(&question)?;

        Ok(())
    }
}
