use crate::error::{BusbookError, Result};
use crate::models::{ExportFile, Records, Settings, EXPORT_VERSION};

/// Build the export document for the current ledger state.
pub fn build_export(records: &Records, settings: &Settings) -> ExportFile {
    ExportFile {
        records: records.clone(),
        settings: settings.clone(),
        export_date: chrono::Local::now().to_rfc3339(),
        version: EXPORT_VERSION.to_string(),
    }
}

pub fn export_json(records: &Records, settings: &Settings) -> Result<String> {
    Ok(serde_json::to_string_pretty(&build_export(
        records, settings,
    ))?)
}

/// Parse an export document. Both `records` and `settings` must be present
/// at the top level; anything else (including unparseable JSON) is rejected
/// without touching existing state.
pub fn parse_export(content: &str) -> Result<ExportFile> {
    let raw: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| BusbookError::Import(format!("not a valid JSON file: {e}")))?;
    let obj = raw
        .as_object()
        .ok_or_else(|| BusbookError::Import("expected a JSON object".to_string()))?;
    for key in ["records", "settings"] {
        if !obj.contains_key(key) {
            return Err(BusbookError::Import(format!(
                "missing required key: {key}"
            )));
        }
    }
    serde_json::from_value(raw).map_err(|e| BusbookError::Import(e.to_string()))
}
