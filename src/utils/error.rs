use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Position ({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },

    #[error("A wall already exists at ({x}, {y})")]
    AlreadyExists { x: i32, y: i32 },

    #[error("The robot has not been placed on the board")]
    NotPlaced,

    #[error("Invalid direction '{value}'. Must be one of: NORTH, SOUTH, EAST, WEST")]
    InvalidDirection { value: String },

    #[error("There is a wall at ({x}, {y})")]
    WallCollision { x: i32, y: i32 },

    #[error("No board has been created")]
    NoGrid,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Lock on {resource} was poisoned")]
    LockPoisoned { resource: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rejected game rule; the caller sent something the board does not allow.
    Domain,
    Storage,
    Configuration,
    Internal,
}

impl GameError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GameError::OutOfBounds { .. }
            | GameError::AlreadyExists { .. }
            | GameError::NotPlaced
            | GameError::InvalidDirection { .. }
            | GameError::WallCollision { .. }
            | GameError::NoGrid
            | GameError::ValidationError { .. } => ErrorCategory::Domain,
            GameError::IoError(_) | GameError::SerializationError(_) => ErrorCategory::Storage,
            GameError::ConfigError { .. } | GameError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            GameError::LockPoisoned { .. } => ErrorCategory::Internal,
        }
    }

    pub fn is_domain(&self) -> bool {
        self.category() == ErrorCategory::Domain
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Domain => self.to_string(),
            ErrorCategory::Storage => format!("Could not access saved game state: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Internal => format!("Unexpected error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GameError::OutOfBounds { .. } => "Use coordinates between 1 and the board size",
            GameError::AlreadyExists { .. } => "Pick a cell that has no wall yet",
            GameError::NotPlaced => "Place the robot first with `robot place <X> <Y> <FACING>`",
            GameError::InvalidDirection { .. } => "Use NORTH, SOUTH, EAST or WEST",
            GameError::WallCollision { .. } => "Turn the robot or choose a free cell",
            GameError::NoGrid => "Create a board first with `board create <WIDTH> <HEIGHT>`",
            GameError::ValidationError { .. } => "Check the command arguments",
            GameError::IoError(_) => "Check that the data directory exists and is writable",
            GameError::SerializationError(_) => {
                "The saved state is corrupted; delete the board and robot files to start over"
            }
            GameError::ConfigError { .. } | GameError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or the command line flags"
            }
            GameError::LockPoisoned { .. } => "Restart the process",
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
