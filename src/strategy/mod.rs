//! The move-selection cascade.
//!
//! Each tier is an independent heuristic over the current position. Tiers
//! are tried in [`Tier::CASCADE`] order and the first one that produces a
//! move decides; later tiers are not consulted.

pub mod exchange;
pub mod fallback;
pub mod forced_mate;
pub mod hanging;
pub mod threat;

use std::time::Duration;

use shakmaty::Move;

use crate::RulesEngine;
use crate::selector::SelectorConfig;

pub use fallback::is_self_stalemate;

/// One step of the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Bounded search for a forced checkmate.
    ForcedMate,
    /// Capture a piece the opponent cannot recapture.
    HangingCapture,
    /// Capture a piece worth more than the capturer.
    ExchangeWin,
    /// Save an attacked piece.
    ThreatResponse,
    /// Any legal move that does not stalemate.
    Fallback,
}

impl Tier {
    /// Tiers in priority order.
    pub const CASCADE: [Tier; 5] = [
        Tier::ForcedMate,
        Tier::HangingCapture,
        Tier::ExchangeWin,
        Tier::ThreatResponse,
        Tier::Fallback,
    ];

    /// Run this tier alone.
    pub fn find<R: RulesEngine>(self, engine: &mut R, config: &SelectorConfig) -> Option<Move> {
        match self {
            Tier::ForcedMate => forced_mate::find(engine, config.mate_depth, config.branching_limit),
            Tier::HangingCapture => hanging::find(engine),
            Tier::ExchangeWin => exchange::find(&*engine),
            Tier::ThreatResponse => threat::find(engine),
            Tier::Fallback => fallback::find(engine),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Tier::ForcedMate => "forced mate",
            Tier::HangingCapture => "hanging capture",
            Tier::ExchangeWin => "exchange win",
            Tier::ThreatResponse => "threat response",
            Tier::Fallback => "fallback",
        })
    }
}

/// The chosen move and which tier chose it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub mv: Move,
    pub tier: Tier,
    pub elapsed: Duration,
}
