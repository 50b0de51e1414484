use std::time::{Duration, Instant};

use shakmaty::Move;
use thiserror::Error;

use crate::RulesEngine;
use crate::strategy::{Decision, Tier, forced_mate};

/// Why no move could be selected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("side to move is checkmated")]
    Checkmated,
    #[error("side to move is stalemated")]
    Stalemated,
}

/// Tunables for the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorConfig {
    /// How many of our own moves the mate search may play.
    pub mate_depth: u32,
    /// Most opponent replies a position may have and still count as forced.
    pub branching_limit: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            mate_depth: forced_mate::DEFAULT_DEPTH,
            branching_limit: forced_mate::DEFAULT_BRANCHING_LIMIT,
        }
    }
}

impl SelectorConfig {
    #[inline]
    pub const fn with_mate_depth(mut self, mate_depth: u32) -> Self {
        self.mate_depth = mate_depth;
        self
    }

    #[inline]
    pub const fn with_branching_limit(mut self, branching_limit: usize) -> Self {
        self.branching_limit = branching_limit;
        self
    }
}

/// Picks one move per turn by running the tiers in order.
#[derive(Debug, Clone, Default)]
pub struct MoveSelector {
    config: SelectorConfig,
}

impl MoveSelector {
    #[inline]
    pub const fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Choose a move for the side to move.
    ///
    /// `budget` is advisory: the cascade is bounded by depth and branching
    /// only, and overrunning the budget is logged rather than enforced.
    pub fn select_move<R: RulesEngine>(
        &self,
        engine: &mut R,
        budget: Duration,
    ) -> Result<Move, SelectError> {
        self.decide(engine, budget).map(|decision| decision.mv)
    }

    /// Like [`MoveSelector::select_move`], also reporting the deciding tier.
    pub fn decide<R: RulesEngine>(
        &self,
        engine: &mut R,
        budget: Duration,
    ) -> Result<Decision, SelectError> {
        let started = Instant::now();

        let Some((tier, mv)) = Tier::CASCADE
            .into_iter()
            .find_map(|tier| tier.find(&mut *engine, &self.config).map(|mv| (tier, mv)))
        else {
            // The fallback tier only comes up empty without legal moves.
            return Err(if engine.is_checkmate() {
                SelectError::Checkmated
            } else {
                SelectError::Stalemated
            });
        };

        let elapsed = started.elapsed();
        log::debug!("{tier} chose {mv:?} in {elapsed:?}");
        if elapsed > budget {
            log::warn!("move selection took {elapsed:?}, over the {budget:?} budget");
        }
        Ok(Decision { mv, tier, elapsed })
    }
}
