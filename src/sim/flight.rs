//! Scripted football flights
//!
//! A flight climbs by fixed steps until it passes the apex height, then falls
//! by smaller steps until it is back at rest height, where the landing offset
//! is scored. Every step is a fixed increment per tick; nothing is integrated.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::scoring::ScoreOutcome;
use crate::consts::*;

/// Which football
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    /// Stable iteration order (player steps first each tick)
    pub const ALL: [Side; 2] = [Side::Player, Side::Computer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Computer => "computer",
        }
    }

    /// Where this side's football sits between kicks
    pub fn resting_position(&self) -> Vec3 {
        match self {
            Side::Player => Vec3::new(PLAYER_REST_X, REST_HEIGHT, 0.0),
            Side::Computer => Vec3::new(COMPUTER_REST_X, REST_HEIGHT, 0.0),
        }
    }

    /// +1 kicks toward +x (player), -1 toward -x (computer)
    pub fn forward_sign(&self) -> f32 {
        match self {
            Side::Player => 1.0,
            Side::Computer => -1.0,
        }
    }

    /// Half-width of the drift range; the computer is a little more accurate
    pub fn drift_limit(&self) -> f32 {
        match self {
            Side::Player => PLAYER_DRIFT_LIMIT,
            Side::Computer => COMPUTER_DRIFT_LIMIT,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flight phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlightPhase {
    /// On the ground, can be nudged sideways
    #[default]
    Resting,
    /// Climbing toward the apex
    Ascending,
    /// Past the apex, falling toward the field
    Descending,
}

/// What a single step did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightStep {
    /// Ball is resting; nothing moved
    Idle,
    /// Ball moved and is still in the air
    Airborne,
    /// Ball passed the apex this step and began falling
    Apex,
    /// Ball came down and was scored; it is resting again
    Landed { outcome: ScoreOutcome, offset: f32 },
    /// Ball crossed the field boundary; counted as a miss and reset
    ExitedField { offset: f32 },
}

/// One football and its flight state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub side: Side,
    /// x forward, y height, z lateral offset from the centerline
    pub position: Vec3,
    /// Rotation about z (radians), used for spin feedback
    pub spin: f32,
    pub phase: FlightPhase,
    /// Lateral drift added every step; fixed for the whole flight
    pub drift: f32,
}

impl Flight {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            position: side.resting_position(),
            spin: 0.0,
            phase: FlightPhase::Resting,
            drift: 0.0,
        }
    }

    #[inline]
    pub fn is_resting(&self) -> bool {
        self.phase == FlightPhase::Resting
    }

    /// Start climbing with the given per-step drift
    pub fn launch(&mut self, drift: f32) {
        if self.is_resting() {
            self.drift = drift;
            self.phase = FlightPhase::Ascending;
        }
    }

    /// Put the ball back on its spot
    pub fn reset(&mut self) {
        self.position = self.side.resting_position();
        self.spin = 0.0;
        self.drift = 0.0;
        self.phase = FlightPhase::Resting;
    }

    /// Nudge the lateral offset; only a resting ball can be moved
    pub fn shift(&mut self, delta: f32) -> bool {
        if !self.is_resting() {
            return false;
        }
        self.position.z += delta;
        true
    }

    /// Scripted flights land near x = 5.7, so only a displaced ball gets here
    fn beyond_boundary(&self) -> bool {
        self.position.x * self.side.forward_sign() >= FIELD_BOUNDARY
    }

    /// Advance one tick
    pub fn step(&mut self) -> FlightStep {
        if self.is_resting() {
            return FlightStep::Idle;
        }

        if self.beyond_boundary() {
            let offset = self.position.z;
            self.reset();
            return FlightStep::ExitedField { offset };
        }

        let sign = self.side.forward_sign();
        let mut passed_apex = false;
        if self.phase == FlightPhase::Ascending && self.position.y > APEX_HEIGHT {
            self.phase = FlightPhase::Descending;
            passed_apex = true;
        }

        match self.phase {
            FlightPhase::Ascending => {
                self.position.y += ASCENT_RISE;
                self.position.x += ASCENT_ADVANCE * sign;
                self.position.z += self.drift;
                self.spin += ASCENT_SPIN;
                FlightStep::Airborne
            }
            FlightPhase::Descending if self.position.y > REST_HEIGHT => {
                self.position.y -= DESCENT_DROP;
                self.position.x += DESCENT_ADVANCE * sign;
                self.position.z += self.drift;
                self.spin += DESCENT_SPIN;
                if passed_apex {
                    FlightStep::Apex
                } else {
                    FlightStep::Airborne
                }
            }
            FlightPhase::Descending => {
                let offset = self.position.z;
                let outcome = ScoreOutcome::classify(offset);
                self.reset();
                FlightStep::Landed { outcome, offset }
            }
            FlightPhase::Resting => FlightStep::Idle,
        }
    }
}
