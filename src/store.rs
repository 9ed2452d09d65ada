use crate::error::PantryError;
use crate::model::{normalize_name, IngredientRecord};
use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, info, warn};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const NAME_COLUMN: &str = "ingredient";
const DATE_COLUMN: &str = "expiration_date";
const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Example rows written the first time the tool runs
const SEED_RECORDS: [(&str, &str); 2] = [("milk", "2023-12-10"), ("eggs", "2023-12-12")];

/// One CSV row as written to disk
#[derive(Debug, Serialize)]
struct Row {
    ingredient: String,
    expiration_date: String,
}

/// Flat CSV file holding the ingredient list.
///
/// Every save rewrites the whole file; pantry-sized lists make this cheap.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecordStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record in file order.
    ///
    /// A missing file is an empty store. A file that exists but cannot be
    /// parsed yields `FileReadError`; unparseable date cells become `None`.
    pub fn load(&self) -> Result<Vec<IngredientRecord>, PantryError> {
        let opened = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(&self.path);
        let mut reader = match opened {
            Ok(reader) => reader,
            Err(e) if is_not_found(&e) => {
                debug!("{} does not exist, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(PantryError::file_read(&self.path, e)),
        };

        let headers = reader
            .headers()
            .map_err(|e| PantryError::file_read(&self.path, e))?
            .clone();
        let column = |name: &str| {
            headers.iter().position(|h| h == name).ok_or_else(|| {
                PantryError::file_read(&self.path, format!("missing '{}' column", name))
            })
        };
        let name_idx = column(NAME_COLUMN)?;
        let date_idx = column(DATE_COLUMN)?;

        let mut records = Vec::new();
        for (line, record) in reader.records().enumerate() {
            let record = record.map_err(|e| PantryError::file_read(&self.path, e))?;
            // Short rows are tolerated (missing date), extra fields are not
            if record.len() > headers.len() {
                return Err(PantryError::file_read(
                    &self.path,
                    format!(
                        "row {} has {} fields, expected {}",
                        line + 1,
                        record.len(),
                        headers.len()
                    ),
                ));
            }
            let name = normalize_name(record.get(name_idx).unwrap_or_default());
            let date_cell = record.get(date_idx).unwrap_or_default();
            if name.is_empty() {
                warn!("Skipping row {} with an empty ingredient name", line + 1);
                continue;
            }
            let expiration_date = parse_date(date_cell);
            if expiration_date.is_none() && !date_cell.is_empty() {
                warn!(
                    "Unparseable expiration date '{}' for '{}', treating as unknown",
                    date_cell, name
                );
            }
            records.push(IngredientRecord {
                name,
                expiration_date,
            });
        }

        debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    /// Like [`load`](Self::load), but falls back to an empty store and hands
    /// the read error back for the caller to report.
    pub fn load_or_empty(&self) -> (Vec<IngredientRecord>, Option<PantryError>) {
        match self.load() {
            Ok(records) => (records, None),
            Err(e) => (Vec::new(), Some(e)),
        }
    }

    /// Replace the file contents with `records`.
    ///
    /// The rows are written to a sibling temp file which is then renamed over
    /// the destination. A symlinked store is written through to its target,
    /// and a read-only destination is refused.
    pub fn save(&self, records: &[IngredientRecord]) -> Result<(), PantryError> {
        let target = self.write_target()?;
        let tmp_path = temp_path(&target);
        self.write_rows(&tmp_path, records).inspect_err(|_| {
            let _ = fs::remove_file(&tmp_path);
        })?;
        fs::rename(&tmp_path, &target).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            PantryError::file_write(&self.path, e)
        })?;

        info!("Saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    /// Create the file with example content if it does not exist yet.
    ///
    /// Returns `true` when the seed was written, `false` when the file was
    /// already there.
    pub fn initialize(&self) -> Result<bool, PantryError> {
        if self.path.exists() {
            return Ok(false);
        }

        let seed: Vec<IngredientRecord> = SEED_RECORDS
            .iter()
            .map(|(name, date)| IngredientRecord {
                name: name.to_string(),
                expiration_date: parse_date(date),
            })
            .collect();
        self.save(&seed)?;
        info!("Created {} with example ingredients", self.path.display());
        Ok(true)
    }

    fn write_rows(&self, path: &Path, records: &[IngredientRecord]) -> Result<(), PantryError> {
        let mut writer =
            csv::Writer::from_path(path).map_err(|e| PantryError::file_write(&self.path, e))?;
        if records.is_empty() {
            // serialize() emits the header with the first row, so write it by hand
            writer
                .write_record([NAME_COLUMN, DATE_COLUMN])
                .map_err(|e| PantryError::file_write(&self.path, e))?;
        }
        for record in records {
            let row = Row {
                ingredient: record.name.clone(),
                expiration_date: record
                    .expiration_date
                    .map(|d| d.format(DATE_FORMAT).to_string())
                    .unwrap_or_default(),
            };
            writer
                .serialize(row)
                .map_err(|e| PantryError::file_write(&self.path, e))?;
        }
        writer
            .flush()
            .map_err(|e| PantryError::file_write(&self.path, e))
    }

    /// The file a save must replace: the store path itself, or the file a
    /// symlinked store points at.
    fn write_target(&self) -> Result<PathBuf, PantryError> {
        let target = match fs::symlink_metadata(&self.path) {
            Ok(meta) if meta.file_type().is_symlink() => {
                fs::canonicalize(&self.path).map_err(|e| PantryError::file_write(&self.path, e))?
            }
            _ => self.path.clone(),
        };

        match fs::metadata(&target) {
            Ok(meta) if meta.permissions().readonly() => Err(PantryError::file_write(
                &self.path,
                "destination is read-only",
            )),
            _ => Ok(target),
        }
    }
}

fn temp_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "ingredients.csv".into());
    name.push(".tmp");
    target.with_file_name(name)
}

fn is_not_found(err: &csv::Error) -> bool {
    matches!(err.kind(), csv::ErrorKind::Io(io_err) if io_err.kind() == io::ErrorKind::NotFound)
}

/// Parse a date cell. Accepts `YYYY-MM-DD` and full timestamps.
pub(crate) fn parse_date(cell: &str) -> Option<NaiveDate> {
    let cell = cell.trim();
    NaiveDate::parse_from_str(cell, DATE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(cell, DATETIME_FORMAT).map(|dt| dt.date()))
        .ok()
}
