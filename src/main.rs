use clap::Parser;
use robot_grid::app::commands;
use robot_grid::utils::error::ErrorCategory;
use robot_grid::utils::logger::{self, LogFormat};
use robot_grid::utils::validation::Validate;
use robot_grid::{open_game, CliConfig, TomlConfig};

fn main() {
    let cli = CliConfig::parse();

    let config = match TomlConfig::from_file_or_default(&cli.config) {
        Ok(config) => config.with_data_dir(cli.data_dir.clone()),
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config, e);
            eprintln!("💡 Make sure the file is valid TOML");
            std::process::exit(1);
        }
    };

    let format = LogFormat::parse(&config.logging.format).unwrap_or(LogFormat::Compact);
    logger::init_cli_logger(cli.verbose, &config.logging.level, format);

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let game = open_game(&config);

    match commands::execute(&game, &config, &cli.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            if e.is_domain() {
                tracing::warn!("Command rejected: {}", e);
            } else {
                tracing::error!("Command failed: {} (Category: {:?})", e, e.category());
            }

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.category() {
                ErrorCategory::Domain => 2,
                ErrorCategory::Configuration => 1,
                ErrorCategory::Storage | ErrorCategory::Internal => 3,
            };
            std::process::exit(exit_code);
        }
    }
}
