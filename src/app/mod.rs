// Application layer: wires adapters into services and runs CLI commands.

#[cfg(feature = "cli")]
pub mod commands;
pub mod game;

pub use game::{open_game, FileGame};
