#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{BoardCommand, CliConfig, Command, RobotCommand};
pub use toml_config::TomlConfig;
