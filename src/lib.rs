#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod cellset;
mod combatant;
mod common;
mod config;
mod coord;
pub mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod targeting;
mod vessel;

pub use board::*;
pub use cellset::CellSet;
pub use combatant::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
pub use targeting::*;
pub use vessel::*;
