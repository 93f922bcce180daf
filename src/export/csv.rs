use super::ExportError;
use crate::data::model::StudentRecord;

/// Column order of the exported file.
pub const CSV_HEADER: [&str; 6] = ["Name", "Math", "Science", "English", "Avg", "Category"];

/// Serialize the entire roster as CSV text. Exports always cover the full
/// roster and ignore the active filter.
pub fn render_csv(records: &[StudentRecord]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([
            record.name.as_str(),
            &record.math.to_string(),
            &record.science.to_string(),
            &record.english.to_string(),
            &record.average().to_string(),
            record.category().label(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::CsvFinish(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}
