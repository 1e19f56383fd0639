//! Match state: both footballs, the scoreboard and the kick controls

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::flight::{Flight, Side};
use super::scoring::{ScoreOutcome, Scoreboard};
use crate::consts::LATERAL_STEP;
use crate::error::ControlError;

/// Per-kick drift constants, sampled once when both balls are launched
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchSession {
    pub player_drift: f32,
    pub computer_drift: f32,
}

impl LaunchSession {
    /// Kick with no drift on either side
    pub const STRAIGHT: LaunchSession = LaunchSession {
        player_drift: 0.0,
        computer_drift: 0.0,
    };

    /// Draw both drifts uniformly from each side's range
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            player_drift: sample_drift(rng, Side::Player),
            computer_drift: sample_drift(rng, Side::Computer),
        }
    }

    pub fn drift(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.player_drift,
            Side::Computer => self.computer_drift,
        }
    }
}

fn sample_drift<R: Rng + ?Sized>(rng: &mut R, side: Side) -> f32 {
    let limit = side.drift_limit();
    rng.random_range(-limit..limit)
}

/// Something the front end may want to log or react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    Launched(LaunchSession),
    ApexReached { side: Side },
    Landed {
        side: Side,
        outcome: ScoreOutcome,
        offset: f32,
    },
    ExitedField { side: Side, offset: f32 },
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct MatchState {
    /// Seed the drift RNG was created from
    pub seed: u64,
    pub player: Flight,
    pub computer: Flight,
    pub scoreboard: Scoreboard,
    /// Kicks accepted so far
    pub kicks: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events since the last drain
    pub events: Vec<MatchEvent>,
    rng: Pcg32,
}

impl MatchState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            player: Flight::new(Side::Player),
            computer: Flight::new(Side::Computer),
            scoreboard: Scoreboard::default(),
            kicks: 0,
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn flight(&self, side: Side) -> &Flight {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }

    pub fn flight_mut(&mut self, side: Side) -> &mut Flight {
        match side {
            Side::Player => &mut self.player,
            Side::Computer => &mut self.computer,
        }
    }

    /// A kick may only start when both balls are on their spots
    pub fn both_resting(&self) -> bool {
        self.player.is_resting() && self.computer.is_resting()
    }

    fn first_in_flight(&self) -> Option<Side> {
        Side::ALL.into_iter().find(|&side| !self.flight(side).is_resting())
    }

    /// Kick both footballs with freshly sampled drift
    pub fn kick_goal(&mut self) -> Result<LaunchSession, ControlError> {
        if let Some(side) = self.first_in_flight() {
            return Err(ControlError::BallInFlight { side });
        }
        let session = LaunchSession::sample(&mut self.rng);
        self.kick_with(session)?;
        Ok(session)
    }

    /// Kick both footballs with the given drift constants
    pub fn kick_with(&mut self, session: LaunchSession) -> Result<(), ControlError> {
        if let Some(side) = self.first_in_flight() {
            return Err(ControlError::BallInFlight { side });
        }
        for side in Side::ALL {
            self.flight_mut(side).launch(session.drift(side));
        }
        self.kicks += 1;
        self.events.push(MatchEvent::Launched(session));
        log::debug!(
            "Kick {}: drift player {:.4}, computer {:.4}",
            self.kicks,
            session.player_drift,
            session.computer_drift
        );
        Ok(())
    }

    /// Nudge a resting football toward -z; returns the new offset
    pub fn shift_left(&mut self, side: Side) -> Result<f32, ControlError> {
        self.shift(side, -LATERAL_STEP)
    }

    /// Nudge a resting football toward +z; returns the new offset
    pub fn shift_right(&mut self, side: Side) -> Result<f32, ControlError> {
        self.shift(side, LATERAL_STEP)
    }

    fn shift(&mut self, side: Side, delta: f32) -> Result<f32, ControlError> {
        let flight = self.flight_mut(side);
        if flight.shift(delta) {
            Ok(flight.position.z)
        } else {
            Err(ControlError::BallInFlight { side })
        }
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::FlightPhase;

    #[test]
    fn test_new_state_is_resting() {
        let state = MatchState::new(1);
        assert!(state.both_resting());
        assert_eq!(state.player.position, Side::Player.resting_position());
        assert_eq!(state.computer.position, Side::Computer.resting_position());
        assert_eq!(state.scoreboard, Scoreboard::default());
    }

    #[test]
    fn test_sampled_drift_within_limits() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..1000 {
            let session = LaunchSession::sample(&mut rng);
            assert!(session.player_drift >= -PLAYER_DRIFT_LIMIT);
            assert!(session.player_drift < PLAYER_DRIFT_LIMIT);
            assert!(session.computer_drift >= -COMPUTER_DRIFT_LIMIT);
            assert!(session.computer_drift < COMPUTER_DRIFT_LIMIT);
        }
    }

    #[test]
    fn test_same_seed_same_drift() {
        let mut a = MatchState::new(7);
        let mut b = MatchState::new(7);
        assert_eq!(a.kick_goal().ok(), b.kick_goal().ok());
    }

    #[test]
    fn test_kick_launches_both() {
        let mut state = MatchState::new(1);
        let session = state.kick_goal().expect("resting balls can be kicked");
        assert_eq!(state.player.phase, FlightPhase::Ascending);
        assert_eq!(state.computer.phase, FlightPhase::Ascending);
        assert_eq!(state.player.drift, session.player_drift);
        assert_eq!(state.computer.drift, session.computer_drift);
        assert_eq!(state.kicks, 1);
        assert_eq!(state.drain_events(), vec![MatchEvent::Launched(session)]);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_kick_rejected_while_one_ball_in_flight() {
        let mut state = MatchState::new(1);
        state.computer.launch(0.0);
        state.computer.step();

        let before = state.computer.position;
        assert_eq!(
            state.kick_goal(),
            Err(ControlError::BallInFlight {
                side: Side::Computer
            })
        );
        assert!(state.player.is_resting());
        assert_eq!(state.computer.position, before);
        assert_eq!(state.kicks, 0);
    }

    #[test]
    fn test_shift_while_resting() {
        let mut state = MatchState::new(1);
        assert_eq!(state.shift_left(Side::Player), Ok(-LATERAL_STEP));
        assert_eq!(state.shift_right(Side::Player), Ok(0.0));
        assert_eq!(state.shift_right(Side::Player), Ok(LATERAL_STEP));
        assert_eq!(state.computer.position.z, 0.0);
    }

    #[test]
    fn test_shift_rejected_in_flight() {
        let mut state = MatchState::new(1);
        state.kick_with(LaunchSession::STRAIGHT).unwrap();
        state.player.step();

        let z = state.player.position.z;
        assert_eq!(
            state.shift_left(Side::Player),
            Err(ControlError::BallInFlight { side: Side::Player })
        );
        assert_eq!(state.player.position.z, z);
    }

    #[test]
    fn test_shifted_offset_carries_into_flight() {
        let mut state = MatchState::new(1);
        state.shift_right(Side::Player).unwrap();
        state.kick_with(LaunchSession::STRAIGHT).unwrap();
        state.player.step();
        assert_eq!(state.player.position.z, LATERAL_STEP);
    }
}
