use crate::adapters::JsonFileRepository;
use crate::core::actor_service::ActorService;
use crate::core::grid_service::GridService;
use crate::core::{Actor, ConfigProvider, Grid};

/// Board and robot persisted as JSON files under the configured data directory.
pub type FileGame = ActorService<JsonFileRepository<Actor>, JsonFileRepository<Grid>>;

pub fn open_game<C: ConfigProvider>(config: &C) -> FileGame {
    let grids = GridService::new(JsonFileRepository::in_dir(
        config.data_dir(),
        config.board_file(),
    ));
    let actors = JsonFileRepository::in_dir(config.data_dir(), config.robot_file());

    tracing::debug!(
        "Opened game state in {} ({}, {})",
        config.data_dir(),
        config.board_file(),
        config.robot_file()
    );
    ActorService::new(actors, grids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TomlConfig;
    use tempfile::TempDir;

    #[test]
    fn test_state_survives_reopening() {
        let temp_dir = TempDir::new().unwrap();
        let config = TomlConfig::default()
            .with_data_dir(Some(temp_dir.path().to_string_lossy().into_owned()));

        let game = open_game(&config);
        game.grids().create_or_get(4, 4).unwrap();
        game.place(2, 2, "NORTH").unwrap();
        drop(game);

        let game = open_game(&config);
        let report = game.report().unwrap().unwrap();
        assert_eq!((report.x, report.y), (2, 2));
        assert!(temp_dir.path().join("board.json").exists());
        assert!(temp_dir.path().join("robot.json").exists());
    }
}
