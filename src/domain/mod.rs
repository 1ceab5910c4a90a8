// Domain layer: entities and ports. Nothing here touches the filesystem.

pub mod actor;
pub mod grid;
pub mod model;
pub mod ports;
