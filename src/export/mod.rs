//! Tabular export of the calculation history
//!
//! Produces a CSV document with one row per record and optionally hands it
//! to the OS-level opener. Export failures never touch the ledger.

use crate::core::{CalculationRecord, Error, Result};
use std::path::Path;
use std::process::Command;

/// Column headers of the exported table
const HEADERS: [&str; 7] = [
    "date",
    "origin",
    "destination",
    "distance_km",
    "axles",
    "amount",
    "trip_type",
];

/// Write the full record sequence to a CSV file
pub fn export_csv(records: &[CalculationRecord], output_path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output_path)
        .map_err(|e| Error::Export(e.to_string()))?;

    writer
        .write_record(HEADERS)
        .map_err(|e| Error::Export(e.to_string()))?;

    for record in records {
        let distance = format!("{:.1}", record.distance_km);
        let axles = record.axle_count.to_string();
        let amount = format!("{:.2}", record.amount);
        let trip_type = record.trip_type.to_string();
        writer
            .write_record([
                record.timestamp.as_str(),
                record.origin.as_str(),
                record.destination.as_str(),
                distance.as_str(),
                axles.as_str(),
                amount.as_str(),
                trip_type.as_str(),
            ])
            .map_err(|e| Error::Export(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| Error::Export(e.to_string()))?;
    log::info!("exported {} record(s) to {}", records.len(), output_path.display());
    Ok(())
}

/// Hand a document to the platform opener
pub fn open_file(path: &Path) -> Result<()> {
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    };

    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = Command::new("open");
        c.arg(path);
        c
    };

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let mut command = {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };

    let status = command
        .status()
        .map_err(|e| Error::Export(format!("could not launch opener: {}", e)))?;

    if !status.success() {
        return Err(Error::Export(format!(
            "opener exited with status {}",
            status
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AxleCount, TripType};
    use tempfile::tempdir;

    fn records() -> Vec<CalculationRecord> {
        vec![
            CalculationRecord {
                timestamp: "01/03/2025 09:00".to_string(),
                origin: "Campinas".to_string(),
                destination: "Sorocaba -> Santos".to_string(),
                distance_km: 500.0,
                axle_count: AxleCount::Four,
                amount: 3081.85,
                trip_type: TripType::RoundTrip,
            },
            CalculationRecord {
                timestamp: "02/03/2025 10:15".to_string(),
                origin: "Curitiba".to_string(),
                destination: "Joinville".to_string(),
                distance_km: 130.0,
                axle_count: AxleCount::Two,
                amount: 955.206,
                trip_type: TripType::OneWay,
            },
        ]
    }

    #[test]
    fn test_export_writes_header_and_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.csv");

        export_csv(&records(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "date,origin,destination,distance_km,axles,amount,trip_type"
        );
        assert!(lines[1].contains("Campinas"));
        assert!(lines[1].contains("Sorocaba -> Santos"));
        assert!(lines[1].contains("3081.85"));
        // Amounts are formatted to two decimals on export
        assert!(lines[2].contains("955.21"));
        assert!(lines[2].contains("Apenas Ida"));
    }

    #[test]
    fn test_export_failure_is_export_class() {
        let dir = tempdir().unwrap();

        // Writing to a path that is a directory cannot succeed; the failure
        // must surface as an export error, not a storage error
        let err = export_csv(&records(), dir.path()).unwrap_err();
        assert!(matches!(err, Error::Export(_)));
    }

    #[test]
    fn test_export_empty_history_is_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        export_csv(&[], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }
}
