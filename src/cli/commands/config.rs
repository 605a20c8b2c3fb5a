use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config { print_config } = cmd else {
        return Ok(());
    };

    if *print_config {
        let yaml = serde_yaml::to_string(cfg)
            .map_err(|e| AppError::Config(format!("failed to serialize config: {e}")))?;
        print!("{yaml}");
    }

    Ok(())
}
