use crate::config::{BoardCommand, Command, RobotCommand};
use crate::core::actor_service::ActorService;
use crate::core::{Actor, ConfigProvider, Grid, Report, Repository};
use crate::utils::error::{GameError, Result};

/// Runs one CLI command and returns the text to print on success.
pub fn execute<A, G, C>(game: &ActorService<A, G>, config: &C, command: &Command) -> Result<String>
where
    A: Repository<Actor>,
    G: Repository<Grid>,
    C: ConfigProvider,
{
    match command {
        Command::Board { action } => execute_board(game, config, action),
        Command::Robot { action } => execute_robot(game, action),
    }
}

fn execute_board<A, G, C>(game: &ActorService<A, G>, config: &C, action: &BoardCommand) -> Result<String>
where
    A: Repository<Actor>,
    G: Repository<Grid>,
    C: ConfigProvider,
{
    let grids = game.grids();
    match action {
        BoardCommand::Create { width, height } => {
            let width = width.unwrap_or_else(|| config.default_width());
            let height = height.unwrap_or_else(|| config.default_height());
            let grid = grids.create_or_get(width, height)?;
            Ok(format!("Board {}x{} ready", grid.width(), grid.height()))
        }
        BoardCommand::Show => {
            let grid = grids.get()?.ok_or(GameError::NoGrid)?;
            Ok(describe_grid(&grid))
        }
        BoardCommand::Delete => {
            grids.delete()?;
            Ok("Board deleted".to_string())
        }
        BoardCommand::Wall { x, y } => {
            grids.add_wall(*x, *y)?;
            Ok(format!("Wall added at ({}, {})", x, y))
        }
        BoardCommand::ClearWalls => {
            grids.clear_walls()?;
            Ok("All walls removed".to_string())
        }
    }
}

fn execute_robot<A, G>(game: &ActorService<A, G>, action: &RobotCommand) -> Result<String>
where
    A: Repository<Actor>,
    G: Repository<Grid>,
{
    match action {
        RobotCommand::Place { x, y, facing } => {
            let facing = facing.to_uppercase();
            game.place(*x, *y, &facing)?;
            Ok(format!("Robot placed at ({}, {}) facing {}", x, y, facing))
        }
        RobotCommand::Move => {
            game.move_forward()?;
            current_report(game).map(|r| format!("Robot moved to ({}, {})\n{}", r.x, r.y, r))
        }
        RobotCommand::Left => {
            game.turn_left()?;
            current_report(game).map(|r| format!("Robot turned left, now facing {}\n{}", r.facing, r))
        }
        RobotCommand::Right => {
            game.turn_right()?;
            current_report(game).map(|r| format!("Robot turned right, now facing {}\n{}", r.facing, r))
        }
        RobotCommand::Report => current_report(game).map(|r| r.to_string()),
        RobotCommand::Delete => {
            game.delete()?;
            Ok("Robot deleted".to_string())
        }
    }
}

fn current_report<A, G>(game: &ActorService<A, G>) -> Result<Report>
where
    A: Repository<Actor>,
    G: Repository<Grid>,
{
    game.report()?.ok_or(GameError::NotPlaced)
}

fn describe_grid(grid: &Grid) -> String {
    let walls: Vec<String> = grid
        .walls()
        .map(|wall| format!("({}, {})", wall.x, wall.y))
        .collect();

    if walls.is_empty() {
        format!("Board {}x{}, no walls", grid.width(), grid.height())
    } else {
        format!(
            "Board {}x{}, walls: {}",
            grid.width(),
            grid.height(),
            walls.join(" ")
        )
    }
}
