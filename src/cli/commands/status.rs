use crate::cli::commands::resolve_worker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::current_state;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Status {
        first_name,
        last_name,
    } = cmd
    else {
        return Ok(());
    };

    let mut store = open_store(cfg)?;
    let worker = resolve_worker(store.as_mut(), first_name.as_ref(), last_name.as_ref())?;
    let state = current_state(store.as_mut(), &worker)?;

    if state.is_in_break {
        let since = state
            .break_start_time
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        info(format!("{} is clocked in, on break since {}.", worker, since));
    } else if state.is_clocked_in {
        info(format!("{} is clocked in.", worker));
    } else {
        info(format!("{} is not clocked in.", worker));
    }

    Ok(())
}
