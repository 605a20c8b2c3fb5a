use crate::config::Config;
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::ui::messages::success;

pub fn handle() -> AppResult<()> {
    let cfg = Config::init_all()?;

    // Create the schema right away so the first punch finds its tables.
    let store = SqliteStore::open(&cfg.database)?;
    store.log_operation("init", &cfg.database, "database initialized")?;

    success(format!("Config file: {}", Config::config_file().display()));
    success(format!("Database:    {}", cfg.database));
    Ok(())
}
