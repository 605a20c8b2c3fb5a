use crate::cli::commands::resolve_worker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::History;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::warning;
use crate::utils::table::Table;
use crate::utils::time::hhmm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::History {
        first_name,
        last_name,
        all,
    } = cmd
    else {
        return Ok(());
    };

    let mut store = open_store(cfg)?;

    let history = if *all {
        History::load(store.as_mut(), None)?
    } else {
        let worker = resolve_worker(store.as_mut(), first_name.as_ref(), last_name.as_ref())?;
        History::load(store.as_mut(), Some(&worker))?
    };

    if history.is_empty() {
        warning("No events recorded.");
        return Ok(());
    }

    let mut table = Table::new(&["First name", "Last name", "Date", "Time", "Status"]);
    for row in history.rows() {
        table.add_row(vec![
            row.first_name.clone(),
            row.last_name.clone(),
            row.date.format("%Y-%m-%d").to_string(),
            hhmm(row.time),
            row.status_text.clone(),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
