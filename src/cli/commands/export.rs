use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{EventExport, ExportFormat, ensure_writable, export_csv, export_json, parse_range};
use crate::store::open_store;
use crate::ui::messages::warning;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    else {
        return Ok(());
    };

    let path = Path::new(file);
    ensure_writable(path, *force)?;

    let bounds = match range {
        None => None,
        Some(r) if r.eq_ignore_ascii_case("all") => None,
        Some(r) => Some(parse_range(r)?),
    };

    let mut store = open_store(cfg)?;
    let mut events = store.query(None)?;

    if let Some((start, end)) = bounds {
        events.retain(|ev| ev.date >= start && ev.date <= end);
    }

    if events.is_empty() {
        warning("No events found for selected range.");
        return Ok(());
    }

    // Exports are written oldest first.
    events.reverse();
    let rows: Vec<EventExport> = events.iter().map(EventExport::from).collect();

    match format {
        ExportFormat::Csv => export_csv(&rows, path)?,
        ExportFormat::Json => export_json(&rows, path)?,
    }

    Ok(())
}
