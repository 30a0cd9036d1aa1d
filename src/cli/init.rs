use std::path::PathBuf;

use crate::config::{load_config, save_config, shellexpand_path};
use crate::error::Result;
use crate::store::{JsonStore, Store};

pub fn run(data_dir: Option<String>) -> Result<()> {
    let mut config = load_config();

    if let Some(dir) = data_dir {
        config.data_dir = shellexpand_path(&dir);
    }
    save_config(&config)?;

    let resolved = PathBuf::from(&config.data_dir);
    std::fs::create_dir_all(&resolved)?;
    std::fs::create_dir_all(resolved.join("exports"))?;

    // Materialize both documents so a fresh ledger starts from explicit
    // empty/zero state.
    let store = JsonStore::new(&resolved);
    let records = store.load_records()?;
    let settings = store.load_settings()?;
    store.save_records(&records)?;
    store.save_settings(&settings)?;

    println!("Initialized busbook at {}", resolved.display());
    println!("Set your pay rates with `busbook rates --trip-rate ...`");
    Ok(())
}
