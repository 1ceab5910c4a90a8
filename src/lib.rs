pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{InMemoryRepository, JsonFileRepository};
pub use app::{open_game, FileGame};
pub use crate::core::{actor_service::ActorService, grid_service::GridService};
pub use crate::core::{Actor, Facing, Grid, Report, Repository, Wall};
pub use utils::error::{GameError, Result};
