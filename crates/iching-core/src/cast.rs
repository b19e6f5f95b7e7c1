//! Line casting.
//!
//! Two methods are supported. The three-coin method sums three two-valued
//! coins (2 or 3 each) and maps the total 6..=9 to an outcome, giving the
//! classic 1/8, 3/8, 3/8, 1/8 odds. The marble method draws from a pool of
//! sixteen weighted marbles, which reproduces the yarrow-stalk odds.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::line::LineOutcome;

/// How lines are cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CastMethod {
    /// Draw one marble from a sixteen-marble pool per line.
    #[default]
    Marbles,
    /// Toss three coins per line.
    Coins,
}

impl std::fmt::Display for CastMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Marbles => write!(f, "marbles"),
            Self::Coins => write!(f, "coins"),
        }
    }
}

/// The marble pool: 1 X, 3 O, 7 solid and 5 broken marbles.
pub const MARBLE_POOL: [LineOutcome; 16] = [
    LineOutcome::ChangingSolidToBroken,
    LineOutcome::ChangingBrokenToSolid,
    LineOutcome::ChangingBrokenToSolid,
    LineOutcome::ChangingBrokenToSolid,
    LineOutcome::StaticSolid,
    LineOutcome::StaticSolid,
    LineOutcome::StaticSolid,
    LineOutcome::StaticSolid,
    LineOutcome::StaticSolid,
    LineOutcome::StaticSolid,
    LineOutcome::StaticSolid,
    LineOutcome::StaticBroken,
    LineOutcome::StaticBroken,
    LineOutcome::StaticBroken,
    LineOutcome::StaticBroken,
    LineOutcome::StaticBroken,
];

/// Cast a single line with the given method and random source.
pub fn cast_line<R: Rng + ?Sized>(method: CastMethod, rng: &mut R) -> LineOutcome {
    match method {
        CastMethod::Coins => {
            let sum = (0..3).map(|_| rng.random_range(2..=3u32)).sum();
            coin_outcome(sum)
        }
        CastMethod::Marbles => MARBLE_POOL[rng.random_range(0..MARBLE_POOL.len())],
    }
}

/// Map a three-coin total to its outcome.
pub fn coin_outcome(sum: u32) -> LineOutcome {
    match sum {
        6 => LineOutcome::ChangingSolidToBroken,
        7 => LineOutcome::StaticSolid,
        9 => LineOutcome::ChangingBrokenToSolid,
        // 8; three coins of 2 or 3 always total 6..=9
        _ => LineOutcome::StaticBroken,
    }
}
