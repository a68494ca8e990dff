// Copyright 2026 the railprep authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::db::Database;
use crate::error::Fallible;
use crate::keys::LAST_QUIZ_ATTEMPTED_KEY;
use crate::keys::LAST_QUIZ_CORRECT_KEY;
use crate::keys::LAST_QUIZ_SKIPPED_KEY;
use crate::keys::LAST_QUIZ_TIME_KEY;
use crate::keys::LAST_QUIZ_WRONG_KEY;
use crate::keys::USER_HIGH_SCORE_KEY;
use crate::keys::USER_LAST_SCORE_KEY;
use crate::types::item::QuizItem;
use crate::types::score::ScoreLabel;
use crate::types::score::format_mm_ss;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Wrong,
}

/// One run through a quiz. Each question is answered at most once; advancing
/// past an unanswered question leaves it to be counted as skipped. The
/// session ends either by running out of questions or by early submission;
/// both paths go through `into_result`, which consumes the session, so a
/// finalized session cannot be resumed.
pub struct QuizSession {
    items: Vec<QuizItem>,
    index: usize,
    correct: u32,
    wrong: u32,
    answered: bool,
    live_skipped: u32,
}

impl QuizSession {
    pub fn new(items: Vec<QuizItem>) -> Self {
        Self {
            items,
            index: 0,
            correct: 0,
            wrong: 0,
            answered: false,
            live_skipped: 0,
        }
    }

    pub fn current(&self) -> Option<&QuizItem> {
        self.items.get(self.index)
    }

    /// Zero-based index of the current question.
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn wrong(&self) -> u32 {
        self.wrong
    }

    /// Questions passed without an answer so far. Display-only: the persisted
    /// skipped count is derived at finalization from the attempted total.
    pub fn live_skipped(&self) -> u32 {
        self.live_skipped
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.items.len()
    }

    /// Record an answer to the current question. Returns `None` if there is
    /// no current question, it was already answered, or the option index is
    /// out of range.
    pub fn answer(&mut self, option_index: usize) -> Option<Outcome> {
        if self.answered {
            return None;
        }
        let item = self.items.get(self.index)?;
        if option_index >= item.options.len() {
            return None;
        }
        self.answered = true;
        if option_index == item.correct_option_index {
            self.correct += 1;
            Some(Outcome::Correct)
        } else {
            self.wrong += 1;
            Some(Outcome::Wrong)
        }
    }

    /// Move to the next question. An unanswered question counts as a live
    /// skip.
    pub fn advance(&mut self) {
        if self.is_finished() {
            return;
        }
        if !self.answered {
            self.live_skipped += 1;
        }
        self.index += 1;
        self.answered = false;
    }

    /// Finalize the session. Every question is exactly one of correct, wrong,
    /// or skipped, so the skipped count is derived from the attempted total.
    pub fn into_result(self, elapsed_seconds: u64) -> SessionResult {
        let attempted = self.items.len() as u32;
        let skipped = attempted - self.correct - self.wrong;
        SessionResult {
            attempted,
            correct: self.correct,
            wrong: self.wrong,
            skipped,
            elapsed_seconds,
            score: ScoreLabel::new(self.correct, attempted),
        }
    }
}

/// The outcome of a completed session. Never mutated afterward; the next
/// session's result supersedes it wholesale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionResult {
    pub attempted: u32,
    pub correct: u32,
    pub wrong: u32,
    pub skipped: u32,
    pub elapsed_seconds: u64,
    pub score: ScoreLabel,
}

impl SessionResult {
    pub fn time_label(&self) -> String {
        format_mm_ss(self.elapsed_seconds)
    }
}

/// Persists a finalized session and maintains the high-score record.
pub struct SessionRecorder {
    db: Database,
}

impl SessionRecorder {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Finalize the session into durable history. The returned result is
    /// computed from memory; persistence failures are logged and never block
    /// showing the summary to the user.
    pub fn finalize(&self, session: QuizSession, elapsed_seconds: u64) -> SessionResult {
        let result = session.into_result(elapsed_seconds);
        if let Err(e) = self.persist(&result) {
            log::warn!("Failed to save session result: {e}");
        }
        result
    }

    fn persist(&self, result: &SessionResult) -> Fallible<()> {
        let score = result.score.to_string();
        self.db.set_value(USER_LAST_SCORE_KEY, &score)?;
        self.db
            .set_value(LAST_QUIZ_CORRECT_KEY, &result.correct.to_string())?;
        self.db
            .set_value(LAST_QUIZ_WRONG_KEY, &result.wrong.to_string())?;
        self.db
            .set_value(LAST_QUIZ_SKIPPED_KEY, &result.skipped.to_string())?;
        self.db
            .set_value(LAST_QUIZ_ATTEMPTED_KEY, &result.attempted.to_string())?;
        self.db
            .set_value(LAST_QUIZ_TIME_KEY, &result.time_label())?;

        // Replace the high score only when strictly beaten on the raw
        // correct count. An unreadable stored label counts as absent.
        let high_score = match self.db.get_value(USER_HIGH_SCORE_KEY)? {
            None => None,
            Some(raw) => match raw.parse::<ScoreLabel>() {
                Ok(label) => Some(label),
                Err(e) => {
                    log::warn!("Ignoring unreadable high score: {e}");
                    None
                }
            },
        };
        let beaten = match high_score {
            None => true,
            Some(high_score) => result.score.correct() > high_score.correct(),
        };
        if beaten {
            self.db.set_value(USER_HIGH_SCORE_KEY, &score)?;
        }
        Ok(())
    }
}
