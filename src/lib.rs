//! A fixed-size game of life with edge-clamped neighborhoods, drawn to a
//! text terminal.

pub use utils::Pos;
mod utils;

pub use world::{Cell, Grid};
pub mod world;

pub use sim::{step, Sim};
pub mod sim;

pub mod patterns;

pub use config::{ClearFailurePolicy, Config, Glyphs};
pub mod config;

pub use error::{Error, Result};
mod error;

pub use view::{ClearRegistry, ClearStrategy, Clearer, View};
pub mod view;

pub use driver::{Driver, DriverCmd};
pub mod driver;
