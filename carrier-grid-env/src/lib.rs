#![warn(missing_docs)]
//! Carrier-robot gridworld environment.
//!
//! The world is a rectangular occupancy grid generated procedurally at every
//! episode reset by the [`field`] module. The generator guarantees that all
//! free cells form a single 4-connected component and that every wall cell
//! touches at least one free cell, so any wall is a reachable delivery
//! target.
//!
//! [`CarrierEnv`] puts a robot on a free cell and a target on a wall cell.
//! The robot has five discrete actions (stay and the four cardinal moves) and
//! wins an episode by standing 4-adjacent to the target. Leaving the grid or
//! running into a wall ends the episode with a penalty, and every step costs
//! a decaying time penalty.
pub mod field;

mod act;
mod env;
mod obs;
pub use act::CarrierAct;
pub use env::{CarrierEnv, CarrierEnvConfig, CarrierInfo};
pub use obs::CarrierObs;
