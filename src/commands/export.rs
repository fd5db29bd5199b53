use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use schedule_it_core::EventManager;
use schedule_it_core::export::ExportFormat;
use schedule_it_core::month::MonthCursor;
use schedule_it_core::store::KeyValueStore;

/// Write the events of `cursor`'s month to `<file_name>.<ext>`.
pub fn run<S: KeyValueStore>(
    manager: &EventManager<S>,
    format: ExportFormat,
    cursor: MonthCursor,
    file_name: Option<String>,
) -> Result<()> {
    let path = export_to(manager, format, cursor, file_name)?;
    println!(
        "{}",
        format!("  Exported {} to {}", cursor.title(), path.display()).green()
    );
    Ok(())
}

fn export_to<S: KeyValueStore>(
    manager: &EventManager<S>,
    format: ExportFormat,
    cursor: MonthCursor,
    file_name: Option<String>,
) -> Result<PathBuf> {
    let content = format.render(&manager.list(), cursor.month, cursor.year)?;

    let file_name = file_name
        .unwrap_or_else(|| format!("events-{}-{:02}", cursor.year, cursor.month + 1));
    let path = PathBuf::from(format!("{}.{}", file_name, format.extension()));

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
