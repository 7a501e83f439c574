//! Per-category question storage.
//!
//! Four independent FIFO queues, one per [`Category`], seeded at
//! construction. Each question is drawn exactly once, in seeding
//! order; drawing from an empty queue is an explicit error rather than
//! undefined behavior.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Category;
use crate::core::GameError;

/// Questions seeded per category by [`QuestionBank::new`].
pub const DEFAULT_QUESTIONS_PER_CATEGORY: usize = 50;

/// FIFO question queues for all four categories.
///
/// Backed by `im::Vector` so cloning a whole game snapshot is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    queues: [Vector<String>; 4],
}

impl QuestionBank {
    /// Bank with [`DEFAULT_QUESTIONS_PER_CATEGORY`] questions per
    /// category.
    #[must_use]
    pub fn new() -> Self {
        Self::with_question_count(DEFAULT_QUESTIONS_PER_CATEGORY)
    }

    /// Bank with `count` generated questions per category, labeled
    /// `"<Category> Question <i>"` with `i` from 0.
    #[must_use]
    pub fn with_question_count(count: usize) -> Self {
        let mut queues: [Vector<String>; 4] = Default::default();
        for category in Category::ALL {
            let queue = &mut queues[category.index()];
            for i in 0..count {
                queue.push_back(format!("{} Question {}", category, i));
            }
        }
        Self { queues }
    }

    /// Remove and return the oldest remaining question for a category.
    pub fn draw(&mut self, category: Category) -> Result<String, GameError> {
        self.queues[category.index()]
            .pop_front()
            .ok_or(GameError::QuestionsExhausted(category))
    }

    /// Remaining questions for a category.
    #[must_use]
    pub fn remaining(&self, category: Category) -> usize {
        self.queues[category.index()].len()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::new()
    }
}
