#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod board;
mod common;
mod config;
mod game;
mod heatmap;
#[cfg(feature = "std")]
mod logging;
mod placement;
#[cfg(feature = "std")]
pub mod render;
mod ship;
mod sim;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use heatmap::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use placement::*;
pub use ship::*;
pub use sim::*;
