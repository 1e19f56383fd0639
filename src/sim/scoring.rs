//! Landing classification and score counters
//!
//! Bands are a strict partition of |offset|:
//! `[0, GOAL_HALF_WIDTH)` goal, `[GOAL_HALF_WIDTH, BEHIND_HALF_WIDTH]` behind,
//! anything wider (or non-finite) is a miss.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::flight::Side;
use crate::consts::*;

/// Result of a landing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreOutcome {
    Goal,
    Behind,
    Miss,
}

impl ScoreOutcome {
    /// Classify a final lateral offset
    pub fn classify(offset: f32) -> Self {
        let distance = offset.abs();
        if !distance.is_finite() {
            ScoreOutcome::Miss
        } else if distance < GOAL_HALF_WIDTH {
            ScoreOutcome::Goal
        } else if distance <= BEHIND_HALF_WIDTH {
            ScoreOutcome::Behind
        } else {
            ScoreOutcome::Miss
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            ScoreOutcome::Goal => GOAL_POINTS,
            ScoreOutcome::Behind => BEHIND_POINTS,
            ScoreOutcome::Miss => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreOutcome::Goal => "goal",
            ScoreOutcome::Behind => "behind",
            ScoreOutcome::Miss => "miss",
        }
    }
}

/// One side's counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideScore {
    pub total: u32,
    pub goals: u32,
    pub behinds: u32,
}

impl SideScore {
    /// Add a landing to the counters (a miss changes nothing)
    pub fn record(&mut self, outcome: ScoreOutcome) {
        self.total += outcome.points();
        match outcome {
            ScoreOutcome::Goal => self.goals += 1,
            ScoreOutcome::Behind => self.behinds += 1,
            ScoreOutcome::Miss => {}
        }
    }
}

/// Traditional `goals.behinds (total)` form, e.g. `3.2 (20)`
impl fmt::Display for SideScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} ({})", self.goals, self.behinds, self.total)
    }
}

/// Both sides' counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub player: SideScore,
    pub computer: SideScore,
}

impl Scoreboard {
    pub fn side(&self, side: Side) -> &SideScore {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }

    pub fn record(&mut self, side: Side, outcome: ScoreOutcome) {
        match side {
            Side::Player => self.player.record(outcome),
            Side::Computer => self.computer.record(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_goal_band() {
        assert_eq!(ScoreOutcome::classify(0.0), ScoreOutcome::Goal);
        assert_eq!(ScoreOutcome::classify(0.3399), ScoreOutcome::Goal);
        assert_eq!(ScoreOutcome::classify(-0.3399), ScoreOutcome::Goal);
    }

    #[test]
    fn test_goal_boundary_is_a_behind() {
        assert_eq!(ScoreOutcome::classify(GOAL_HALF_WIDTH), ScoreOutcome::Behind);
        assert_eq!(ScoreOutcome::classify(-GOAL_HALF_WIDTH), ScoreOutcome::Behind);
    }

    #[test]
    fn test_behind_band_is_inclusive_of_outer_edge() {
        assert_eq!(ScoreOutcome::classify(1.0), ScoreOutcome::Behind);
        assert_eq!(ScoreOutcome::classify(BEHIND_HALF_WIDTH), ScoreOutcome::Behind);
        assert_eq!(ScoreOutcome::classify(-BEHIND_HALF_WIDTH), ScoreOutcome::Behind);
    }

    #[test]
    fn test_miss_band() {
        assert_eq!(ScoreOutcome::classify(1.35), ScoreOutcome::Miss);
        assert_eq!(ScoreOutcome::classify(-4.0), ScoreOutcome::Miss);
        assert_eq!(ScoreOutcome::classify(f32::NAN), ScoreOutcome::Miss);
        assert_eq!(ScoreOutcome::classify(f32::INFINITY), ScoreOutcome::Miss);
    }

    #[test]
    fn test_record_goal_and_behind() {
        let mut score = SideScore::default();
        score.record(ScoreOutcome::Goal);
        assert_eq!((score.total, score.goals, score.behinds), (6, 1, 0));

        score.record(ScoreOutcome::Behind);
        assert_eq!((score.total, score.goals, score.behinds), (7, 1, 1));

        score.record(ScoreOutcome::Miss);
        assert_eq!((score.total, score.goals, score.behinds), (7, 1, 1));
    }

    #[test]
    fn test_scoreboard_sides_are_independent() {
        let mut board = Scoreboard::default();
        board.record(Side::Computer, ScoreOutcome::Goal);
        assert_eq!(board.side(Side::Player).total, 0);
        assert_eq!(board.side(Side::Computer).total, 6);
    }

    #[test]
    fn test_display_format() {
        let score = SideScore {
            total: 20,
            goals: 3,
            behinds: 2,
        };
        assert_eq!(score.to_string(), "3.2 (20)");
    }

    fn rank(outcome: ScoreOutcome) -> u8 {
        match outcome {
            ScoreOutcome::Goal => 2,
            ScoreOutcome::Behind => 1,
            ScoreOutcome::Miss => 0,
        }
    }

    proptest! {
        #[test]
        fn classify_is_symmetric(offset in -20.0f32..20.0) {
            prop_assert_eq!(ScoreOutcome::classify(offset), ScoreOutcome::classify(-offset));
        }

        #[test]
        fn classify_never_improves_further_out(a in 0.0f32..5.0, b in 0.0f32..5.0) {
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(rank(ScoreOutcome::classify(near)) >= rank(ScoreOutcome::classify(far)));
        }

        #[test]
        fn total_matches_counters(outcomes in prop::collection::vec(0u8..3, 0..50)) {
            let mut score = SideScore::default();
            for o in outcomes {
                score.record(match o {
                    0 => ScoreOutcome::Goal,
                    1 => ScoreOutcome::Behind,
                    _ => ScoreOutcome::Miss,
                });
            }
            prop_assert_eq!(score.total, score.goals * GOAL_POINTS + score.behinds * BEHIND_POINTS);
        }
    }
}
