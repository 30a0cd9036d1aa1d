use crate::config::load_config;
use crate::error::Result;
use crate::models::WorkStatus;
use crate::store::{JsonStore, Store};

pub fn run() -> Result<()> {
    let config = load_config();
    let data_dir = std::path::PathBuf::from(&config.data_dir);

    println!("Data dir:   {}", data_dir.display());

    let store = JsonStore::new(&data_dir);
    if store.records_path().exists() {
        let records = store.load_records()?;
        let work_days = records
            .values()
            .filter(|r| r.status == WorkStatus::Work)
            .count();
        let off_days = records.len() - work_days;

        println!();
        println!("Records:    {}", records.len());
        println!("Work days:  {work_days}");
        println!("Off days:   {off_days}");
        if let (Some(first), Some(last)) = (records.keys().next(), records.keys().last()) {
            println!("Range:      {first} .. {last}");
        }
    } else {
        println!();
        println!("Ledger not found. Run `busbook init` to set up.");
    }

    Ok(())
}
