use std::path::PathBuf;

use crate::config::{load_config, save_config, shellexpand_path};
use crate::error::{BusbookError, Result};
use crate::store::RECORDS_FILE;

pub fn run(path: &str) -> Result<()> {
    let resolved = PathBuf::from(shellexpand_path(path));
    let records_path = resolved.join(RECORDS_FILE);

    if !records_path.exists() {
        return Err(BusbookError::Config(format!(
            "No ledger found at {}\nRun `busbook init --data-dir {}` to create one.",
            records_path.display(),
            resolved.display()
        )));
    }

    let mut config = load_config();
    config.data_dir = resolved.to_string_lossy().to_string();
    save_config(&config)?;

    println!("Switched to {}", resolved.display());
    Ok(())
}
