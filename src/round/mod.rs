//! Round simulation
//!
//! Everything about a single round lives here:
//! - `state`: round phases, snapshots and the merged record
//! - `multiplier`: fixed-point multiplier and its step curve
//! - `crash`: crash point draw
//! - `clock`: injectable suspension points
//! - `engine`: the perpetual round loop

pub mod clock;
pub mod crash;
pub mod engine;
pub mod multiplier;
pub mod state;

pub use clock::{Clock, SimulatedClock, SystemClock};
pub use crash::{crash_point_from_uniforms, draw_crash_point};
pub use engine::{RoundEngine, RoundSummary};
pub use multiplier::{Multiplier, ParseMultiplierError};
pub use state::{Round, RoundRecord, RoundStatus, Snapshot};
