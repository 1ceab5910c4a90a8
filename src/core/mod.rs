pub mod actor_service;
pub mod grid_service;

pub use crate::domain::actor::Actor;
pub use crate::domain::grid::Grid;
pub use crate::domain::model::{Facing, Report, Wall};
pub use crate::domain::ports::{ConfigProvider, Repository};
pub use crate::utils::error::Result;
