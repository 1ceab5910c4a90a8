use crate::config::toml_config::DEFAULT_CONFIG_FILE;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "robot-grid")]
#[command(about = "Drive a robot around a board with walls")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Override the directory holding the board and robot state
    #[arg(long)]
    pub data_dir: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Manage the board
    Board {
        #[command(subcommand)]
        action: BoardCommand,
    },
    /// Control the robot
    Robot {
        #[command(subcommand)]
        action: RobotCommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum BoardCommand {
    /// Create the board, or show the existing one
    Create {
        #[arg(allow_negative_numbers = true)]
        width: Option<i32>,
        #[arg(allow_negative_numbers = true)]
        height: Option<i32>,
    },
    /// Print the board size and walls
    Show,
    /// Remove the board
    Delete,
    /// Add a wall
    Wall {
        #[arg(allow_negative_numbers = true)]
        x: i32,
        #[arg(allow_negative_numbers = true)]
        y: i32,
    },
    /// Remove every wall
    ClearWalls,
}

#[derive(Debug, Clone, Subcommand)]
pub enum RobotCommand {
    /// Put the robot on the board
    Place {
        #[arg(allow_negative_numbers = true)]
        x: i32,
        #[arg(allow_negative_numbers = true)]
        y: i32,
        /// NORTH, SOUTH, EAST or WEST (any case)
        facing: String,
    },
    /// Step forward, wrapping around the board edges
    Move,
    /// Turn 90 degrees left
    Left,
    /// Turn 90 degrees right
    Right,
    /// Print position and facing
    Report,
    /// Remove the robot
    Delete,
}
