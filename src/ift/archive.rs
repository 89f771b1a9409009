//! Reading numbering-plan records out of a published ZIP archive.

use crate::models::RangeRecord;
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Read all range records from the first file (the CSV) of a plan ZIP.
pub fn read_records(zip_path: &Path) -> Result<Vec<RangeRecord>, Box<dyn Error>> {
    let file = File::open(zip_path)
        .map_err(|e| format!("Error opening {}: {e}", zip_path.display()))?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| format!("Error reading ZIP {}: {e}", zip_path.display()))?;
    if archive.len() == 0 {
        return Err(format!("ZIP {} contains no files", zip_path.display()).into());
    }

    let entry = archive.by_index(0)?;
    log::info!("Reading number ranges from {}", entry.name());

    let mut reader = csv::Reader::from_reader(entry);
    let mut records = Vec::new();
    for (i, record) in reader.deserialize().enumerate() {
        let record: RangeRecord =
            record.map_err(|e| format!("Error parsing CSV row {}: {e}", i + 2))?;
        records.push(record);
    }

    log::info!(
        "Got {} records from {}",
        records.len(),
        zip_path.display()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_records_from_fixture() {
        let records = read_records(Path::new("tests/data/pnn_Publico_01_03_2024.zip"))
            .expect("Error reading fixture ZIP");
        assert_eq!(records.len(), 13);
        assert_eq!(records[0].nir, "55");
        assert_eq!(records[0].serie, "5512");
        assert!(records[0].is_mobile());
        assert!(records.iter().any(|r| !r.is_mobile()));
    }

    #[test]
    fn test_read_records_missing_file() {
        assert!(read_records(Path::new("tests/data/no_such.zip")).is_err());
    }
}
