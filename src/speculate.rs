//! Scoped speculative mutation.
//!
//! Every lookahead in the strategies goes through these guards: the move
//! (or null move) is applied when the guard is created and taken back when
//! it drops, including on early return and unwinding. Guards borrow the
//! engine mutably, so nested lookahead is forced into LIFO order by the
//! borrow checker.

use std::ops::{Deref, DerefMut};

use shakmaty::Move;

use crate::RulesEngine;

/// A move applied to an engine until this guard is dropped.
pub struct Speculation<'a, R: RulesEngine> {
    engine: &'a mut R,
    mv: &'a Move,
}

impl<'a, R: RulesEngine> Speculation<'a, R> {
    /// Apply `mv` and return the guard that takes it back.
    pub fn apply(engine: &'a mut R, mv: &'a Move) -> Self {
        engine.apply(mv);
        Self { engine, mv }
    }
}

impl<R: RulesEngine> Deref for Speculation<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.engine
    }
}

impl<R: RulesEngine> DerefMut for Speculation<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.engine
    }
}

impl<R: RulesEngine> Drop for Speculation<'_, R> {
    fn drop(&mut self) {
        self.engine.undo(self.mv);
    }
}

/// A passed turn, held until this guard is dropped.
pub(crate) struct SkippedTurn<'a, R: RulesEngine> {
    engine: &'a mut R,
}

impl<'a, R: RulesEngine> SkippedTurn<'a, R> {
    /// Pass the turn, or `None` if the side to move may not pass.
    pub(crate) fn try_new(engine: &'a mut R) -> Option<Self> {
        if engine.try_skip_turn() {
            Some(Self { engine })
        } else {
            None
        }
    }
}

impl<R: RulesEngine> Deref for SkippedTurn<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.engine
    }
}

impl<R: RulesEngine> Drop for SkippedTurn<'_, R> {
    fn drop(&mut self) {
        self.engine.undo_skip_turn();
    }
}
