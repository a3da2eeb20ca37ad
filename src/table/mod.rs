// src/table/mod.rs
use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::{fs::File, path::Path};
use tempfile::NamedTempFile;
use tracing::warn;

/// An in-memory delimited table: one header row plus data rows.
///
/// Column order is whatever the file's header declared, and is preserved
/// verbatim on save. Rows are stored positionally; a row shorter than the
/// header reads as empty strings for the missing trailing columns.
#[derive(Debug)]
pub struct Table {
    /// Column names, from the header row of the file.
    pub headers: Vec<String>,
    /// Each data row, as a Vec of Strings (one per field).
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Load `path` into memory. Returns `None` (after logging a warning) when
    /// the file does not exist or contains no data rows; both are skip
    /// conditions, not errors. Corrupt CSV syntax propagates as `Err`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Table>> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "not found, skipping");
            return Ok(None);
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // short rows pad out as empty fields
            .from_reader(file);

        let headers: Vec<String> = rdr
            .headers()
            .with_context(|| format!("Failed to read header row of {}", path.display()))?
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut rows = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result
                .with_context(|| format!("CSV parse error in {} at record {}", path.display(), idx))?;
            let row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
            rows.push(row);
        }

        if rows.is_empty() {
            warn!(path = %path.display(), "empty or malformed, skipping");
            return Ok(None);
        }

        Ok(Some(Table { headers, rows }))
    }

    /// Value of `row` at header position `col_idx`, empty if the row is short.
    pub fn value(row: &[String], col_idx: usize) -> &str {
        row.get(col_idx).map(String::as_str).unwrap_or("")
    }

    /// Position of `column` in the header, if declared.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    /// Write the table back to `path`: header first, then rows, original
    /// column order. Goes through a temp file in the same directory and an
    /// atomic rename so an interrupted write never truncates the original.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty());

        let tmp = match dir {
            Some(dir) => NamedTempFile::new_in(dir),
            None => NamedTempFile::new_in("."),
        }
        .with_context(|| format!("creating temp file next to {}", path.display()))?;

        {
            let mut wtr = WriterBuilder::new().flexible(true).from_writer(&tmp);
            wtr.write_record(&self.headers)
                .with_context(|| format!("writing header to {}", path.display()))?;
            for row in &self.rows {
                wtr.write_record(row)
                    .with_context(|| format!("writing row to {}", path.display()))?;
            }
            wtr.flush().context("flushing CSV writer")?;
        }

        tmp.persist(path)
            .with_context(|| format!("replacing {}", path.display()))?;
        Ok(())
    }
}
