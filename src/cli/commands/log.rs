use crate::cli::parser::Commands;
use crate::config::{Config, StorageBackend};
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::ui::messages::warning;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Log { print } = cmd else {
        return Ok(());
    };

    if !*print {
        return Ok(());
    }

    if cfg.storage == StorageBackend::Csv {
        warning("The operations log is only available with the SQLite backend.");
        return Ok(());
    }

    let mut store = SqliteStore::open(&cfg.database)?;
    let entries = store.read_log()?;

    if entries.is_empty() {
        warning("The operations log is empty.");
        return Ok(());
    }

    let mut table = Table::new(&["Date", "Operation", "Target", "Message"]);
    for (date, operation, target, message) in entries {
        table.add_row(vec![date, operation, target, message]);
    }

    print!("{}", table.render());
    Ok(())
}
