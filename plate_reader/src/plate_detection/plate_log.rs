use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Local;
use chrono::NaiveDateTime;

use crate::error::PlateError;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Append-only record of recognised plates, one line per plate.
pub struct PlateLog<W: Write> {
    writer: W,
}

impl PlateLog<File> {
    pub fn append_to(path: &Path) -> Result<Self, PlateError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(PlateError::PlateLog)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> PlateLog<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn record(&mut self, plate: &str) -> Result<(), PlateError> {
        self.record_at(Local::now().naive_local(), plate)
    }

    pub fn record_at(&mut self, when: NaiveDateTime, plate: &str) -> Result<(), PlateError> {
        writeln!(
            self.writer,
            "{} plate detected: {}",
            when.format(TIMESTAMP_FORMAT),
            plate
        )
        .and_then(|_| self.writer.flush())
        .map_err(PlateError::PlateLog)
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_record_format() {
        let when = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_milli_opt(18, 4, 5, 27)
            .unwrap();
        let mut log = PlateLog::new(Vec::new());
        log.record_at(when, "AB1234").unwrap();

        let text = String::from_utf8(log.get_ref().clone()).unwrap();
        assert_eq!(text, "2024-03-09 18:04:05,027 plate detected: AB1234\n");
    }

    #[test]
    fn test_appends_to_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("placas.log");
        fs::write(&path, "earlier run\n").unwrap();

        let mut log = PlateLog::append_to(&path).unwrap();
        log.record("AB1234").unwrap();
        log.record("CD5678").unwrap();

        let lines: Vec<String> = fs::read_to_string(&path)
            .unwrap()
            .lines()
            .map(String::from)
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "earlier run");
        assert!(lines[1].ends_with(" plate detected: AB1234"));
        assert!(lines[2].ends_with(" plate detected: CD5678"));
    }
}
