//! Fixed timestep simulation tick
//!
//! Applies one tick of input, then steps each football's flight.

use super::flight::{FlightStep, Side};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use super::state::{MatchEvent, MatchState};

/// Lateral nudge request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    Left,
    Right,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Kick both footballs (button/space)
    pub kick: bool,
    /// Nudges for the player's football, applied in order
    pub shifts: Vec<Shift>,
}

/// Take whole timesteps out of a frame-time accumulator
///
/// Returns how many ticks to run this frame, at most `MAX_SUBSTEPS`. The
/// leftover never exceeds `MAX_SUBSTEPS` ticks' worth.
pub fn take_substeps(accumulator: &mut f32) -> u32 {
    let mut substeps = 0;
    while *accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
        *accumulator -= SIM_DT;
        substeps += 1;
    }
    *accumulator = accumulator.min(SIM_DT * MAX_SUBSTEPS as f32);
    substeps
}

/// Advance the match by one fixed timestep
pub fn tick(state: &mut MatchState, input: &TickInput) {
    // Controls first so a shift lands before a same-tick kick
    for &shift in &input.shifts {
        let result = match shift {
            Shift::Left => state.shift_left(Side::Player),
            Shift::Right => state.shift_right(Side::Player),
        };
        if let Err(e) = result {
            log::debug!("Ignored {:?} shift: {}", shift, e);
        }
    }

    if input.kick {
        if let Err(e) = state.kick_goal() {
            log::debug!("Ignored kick: {}", e);
        }
    }

    state.time_ticks += 1;

    for side in Side::ALL {
        match state.flight_mut(side).step() {
            FlightStep::Idle | FlightStep::Airborne => {}
            FlightStep::Apex => {
                state.events.push(MatchEvent::ApexReached { side });
            }
            FlightStep::Landed { outcome, offset } => {
                state.scoreboard.record(side, outcome);
                state.events.push(MatchEvent::Landed {
                    side,
                    outcome,
                    offset,
                });
                log::info!(
                    "{} {} (offset {:.3}) - {}",
                    side,
                    outcome.as_str(),
                    offset,
                    state.scoreboard.side(side)
                );
            }
            FlightStep::ExitedField { offset } => {
                state.events.push(MatchEvent::ExitedField { side, offset });
                log::warn!("{} ball left the field", side);
            }
        }
    }
}
