//! Board geometry: squares and question categories.
//!
//! The board is a ring of 12 squares. A player's square determines the
//! category of the question they are asked; the mapping is a pure
//! function of position and never depends on player identity.

use serde::{Deserialize, Serialize};

/// Number of squares on the board. Movement wraps at this bound.
pub const BOARD_SQUARES: u8 = 12;

/// Purse size that ends the game.
pub const WINNING_PURSE: u8 = 6;

/// Question category, derived from board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Pop,
    Science,
    Sports,
    Rock,
}

impl Category {
    /// All categories, in question-bank order.
    pub const ALL: [Category; 4] = [
        Category::Pop,
        Category::Science,
        Category::Sports,
        Category::Rock,
    ];

    /// Category for a board position.
    ///
    /// Positions 0/4/8 are Pop, 1/5/9 Science, 2/6/10 Sports, and
    /// everything else Rock.
    ///
    /// ```
    /// use trivia_engine::board::Category;
    ///
    /// assert_eq!(Category::at(0), Category::Pop);
    /// assert_eq!(Category::at(5), Category::Science);
    /// assert_eq!(Category::at(10), Category::Sports);
    /// assert_eq!(Category::at(11), Category::Rock);
    /// ```
    #[must_use]
    pub const fn at(position: u8) -> Self {
        match position {
            0 | 4 | 8 => Category::Pop,
            1 | 5 | 9 => Category::Science,
            2 | 6 | 10 => Category::Sports,
            _ => Category::Rock,
        }
    }

    /// Index into per-category storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Category::Pop => 0,
            Category::Science => 1,
            Category::Sports => 2,
            Category::Rock => 3,
        }
    }

    /// Display name, as it appears in the transcript.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Pop => "Pop",
            Category::Science => "Science",
            Category::Sports => "Sports",
            Category::Rock => "Rock",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
