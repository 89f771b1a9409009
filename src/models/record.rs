//! Raw numbering-plan record as published by the authority.

use crate::config;
use serde::{Deserialize, Serialize};

/// One row of the published numbering-plan CSV.
///
/// The CSV header carries a leading space before every column name (the
/// file is written as `ZONA, NIR, SERIE, ...`), hence the serde renames.
/// Block bounds stay strings here; they are validated and zero-padded when
/// the row is turned into a range pattern.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RangeRecord {
    /// Routing code (Numero de Identificacion Regional).
    #[serde(rename = " NIR")]
    pub nir: String,
    /// Series within the routing code.
    #[serde(rename = " SERIE")]
    pub serie: String,
    /// Inclusive start of the numbering block.
    #[serde(rename = " NUMERACION_INICIAL")]
    pub block_start: String,
    /// Inclusive end of the numbering block.
    #[serde(rename = " NUMERACION_FINAL")]
    pub block_end: String,
    /// Network type classifier (MOVIL, FIJO, ...).
    #[serde(rename = " TIPO_RED")]
    pub network_type: String,
}

impl RangeRecord {
    /// Only records whose classifier matches the mobile designator exactly
    /// enter the pattern pipeline.
    pub fn is_mobile(&self) -> bool {
        self.network_type == config::MOBILE_NETWORK_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(network_type: &str) -> RangeRecord {
        RangeRecord {
            nir: "55".to_string(),
            serie: "5512".to_string(),
            block_start: "0000".to_string(),
            block_end: "9999".to_string(),
            network_type: network_type.to_string(),
        }
    }

    #[test]
    fn test_is_mobile_exact_match() {
        assert!(record("MOVIL").is_mobile());
        assert!(!record("FIJO").is_mobile());
        assert!(!record("movil").is_mobile());
        assert!(!record(" MOVIL").is_mobile());
    }

    #[test]
    fn test_csv_header_with_leading_spaces() {
        let csv_text = "\
ZONA, NIR, SERIE, NUMERACION_INICIAL, NUMERACION_FINAL, TIPO_RED, MODALIDAD\n\
1,55,5512,0000,9999,MOVIL,CPP\n\
1,81,1234,0000,4999,FIJO,FPP\n";
        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let records: Vec<RangeRecord> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .expect("Error parsing CSV");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].nir, "55");
        assert_eq!(records[0].serie, "5512");
        assert!(records[0].is_mobile());
        assert!(!records[1].is_mobile());
    }
}
