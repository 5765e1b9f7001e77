mod board;
#[cfg(feature = "cli")]
pub mod cli;
mod common;
mod config;
mod game;
mod generator;
mod grid;
#[cfg(feature = "cli")]
mod logging;
pub mod prelude;
mod snapshot;
pub mod ui;
mod vessel;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use generator::*;
pub use grid::*;
#[cfg(feature = "cli")]
pub use logging::{init_logging, level_from_env, LOG_ENV};
pub use snapshot::*;
pub use ui::render_snapshot;
pub use vessel::*;
