//! Handlers for the four punch commands.

use crate::cli::commands::resolve_worker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::recorder;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::success;
use crate::utils::time::UNKNOWN_DURATION;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg)?;

    match cmd {
        Commands::In {
            first_name,
            last_name,
        } => {
            let worker = resolve_worker(store.as_mut(), first_name.as_ref(), last_name.as_ref())?;
            let ev = recorder::clock_in(store.as_mut(), &worker)?;
            success(format!(
                "Clocked in {} at {} on {}.",
                worker,
                ev.time_str(),
                ev.date_str()
            ));
        }
        Commands::Out {
            first_name,
            last_name,
        } => {
            let worker = resolve_worker(store.as_mut(), first_name.as_ref(), last_name.as_ref())?;
            let ev = recorder::clock_out(store.as_mut(), &worker)?;
            success(format!(
                "Clocked out {} at {} on {}.",
                worker,
                ev.time_str(),
                ev.date_str()
            ));
        }
        Commands::BreakStart {
            first_name,
            last_name,
        } => {
            let worker = resolve_worker(store.as_mut(), first_name.as_ref(), last_name.as_ref())?;
            let ev = recorder::break_start(store.as_mut(), &worker)?;
            success(format!("Break started for {} at {}.", worker, ev.time_str()));
        }
        Commands::BreakEnd {
            first_name,
            last_name,
        } => {
            let worker = resolve_worker(store.as_mut(), first_name.as_ref(), last_name.as_ref())?;
            let ev = recorder::break_end(store.as_mut(), &worker)?;
            let duration = ev.break_duration.as_deref().unwrap_or(UNKNOWN_DURATION);
            success(format!("Break ended for {} ({}).", worker, duration));
        }
        _ => unreachable!("not a clock command"),
    }

    Ok(())
}
