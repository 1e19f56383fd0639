//! Kick simulation module
//!
//! All flight and scoring logic lives here. This module must stay pure:
//! - Fixed per-tick increments only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod flight;
pub mod scoring;
pub mod state;
pub mod tick;

pub use flight::{Flight, FlightPhase, FlightStep, Side};
pub use scoring::{ScoreOutcome, Scoreboard, SideScore};
pub use state::{LaunchSession, MatchEvent, MatchState};
pub use tick::{Shift, TickInput, take_substeps, tick};
