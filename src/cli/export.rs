use std::path::PathBuf;

use crate::config::get_data_dir;
use crate::error::Result;
use crate::store::{JsonStore, Store};
use crate::transfer::export_json;

pub fn run(output: Option<String>) -> Result<()> {
    let data_dir = get_data_dir();
    let store = JsonStore::new(&data_dir);

    let records = store.load_records()?;
    let settings = store.load_settings()?;
    let json = export_json(&records, &settings)?;

    let dest_path = match output {
        Some(p) => PathBuf::from(p),
        None => {
            let exports_dir = data_dir.join("exports");
            std::fs::create_dir_all(&exports_dir)?;
            let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
            exports_dir.join(format!("busbook-{stamp}.json"))
        }
    };
    std::fs::write(&dest_path, format!("{json}\n"))?;

    println!("Exported {} records to {}", records.len(), dest_path.display());
    Ok(())
}
