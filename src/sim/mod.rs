//! Deterministic simulation module
//!
//! All gameplay logic lives here, driven strictly by discrete fixed ticks:
//! - One explicit state aggregate, no hidden globals
//! - Stable registry order for reproducible runs
//! - No rendering or input-polling dependencies

pub mod player;
pub mod resolve;
pub mod state;
pub mod tick;
pub mod weapon;

pub use resolve::{BallSnapshot, BeamSnapshot, Decisions, scan};
pub use state::{Beam, BouncyBall, CircleView, Player, SimState};
pub use tick::{TickInput, tick};
