use dialoguer::Confirm;

use crate::config::get_data_dir;
use crate::error::Result;
use crate::store::{JsonStore, Store};
use crate::transfer::parse_export;

/// Validate the file, then fully replace both ledger documents. Existing
/// state is only touched after validation and confirmation succeed.
pub fn run(file: &str, yes: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)?;
    let import = parse_export(&content)?;

    if !yes {
        let proceed = Confirm::new()
            .with_prompt(format!(
                "Replace the current ledger with {} records from {file}?",
                import.records.len()
            ))
            .default(false)
            .interact()
            .unwrap_or(false);
        if !proceed {
            println!("Import cancelled.");
            return Ok(());
        }
    }

    let store = JsonStore::new(get_data_dir());
    store.save_records(&import.records)?;
    store.save_settings(&import.settings)?;

    println!("Imported {} records.", import.records.len());
    if !import.export_date.is_empty() {
        println!("Backup was exported at {}", import.export_date);
    }
    Ok(())
}
