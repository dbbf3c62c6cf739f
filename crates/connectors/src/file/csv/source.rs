use crate::{
    error::FileError,
    file::csv::{
        metadata::{placeholder_name, unique_headers},
        settings::CsvSettings,
    },
};
use model::{FieldValue, RowData, Table, Value};
use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

pub trait TableSource {
    type Error;

    fn read_table(&self) -> Result<Table, Self::Error>;
}

/// Loads a delimited text file into a [`Table`] with inferred cell values.
pub struct CsvTableReader {
    path: PathBuf,
    settings: CsvSettings,
}

impl CsvTableReader {
    pub fn new(path: impl AsRef<Path>, settings: CsvSettings) -> Self {
        CsvTableReader {
            path: path.as_ref().to_path_buf(),
            settings,
        }
    }

    /// Reads a table from any byte source using `settings`.
    pub fn from_reader<R: Read>(reader: R, settings: &CsvSettings) -> Result<Table, FileError> {
        if !settings.delimiter.is_ascii() {
            return Err(FileError::InvalidFormat(format!(
                "Delimiter '{}' is not a single-byte character",
                settings.delimiter
            )));
        }

        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(settings.delimiter as u8)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = rdr
            .records()
            .skip(settings.header_row)
            .collect::<Result<Vec<_>, _>>()?
            .into_iter();

        let header = if settings.has_headers {
            let record = records.next().ok_or_else(|| {
                FileError::InvalidFormat(format!(
                    "Header row {} not found",
                    settings.header_row
                ))
            })?;
            Some(unique_headers(record.iter()))
        } else {
            None
        };

        let records: Vec<csv::StringRecord> = records.collect();
        let columns = header.unwrap_or_else(|| {
            let width = records.iter().map(|r| r.len()).max().unwrap_or(0);
            (0..width).map(placeholder_name).collect()
        });

        let mut table = Table::new(columns);
        for (idx, record) in records.iter().enumerate() {
            if record.len() > table.columns.len() {
                warn!(
                    "Record {} has {} cells but only {} columns; extra cells ignored",
                    idx,
                    record.len(),
                    table.columns.len()
                );
            }

            let fields = table
                .columns
                .iter()
                .enumerate()
                .map(|(pos, name)| {
                    let value = record.get(pos).map(Value::infer).unwrap_or(Value::Null);
                    FieldValue::new(name.clone(), value)
                })
                .collect();
            table.push_row(RowData::new(fields));
        }

        debug!("Columns: {:?}", table.columns);
        Ok(table)
    }
}

impl TableSource for CsvTableReader {
    type Error = FileError;

    fn read_table(&self) -> Result<Table, Self::Error> {
        if !self.path.exists() {
            return Err(FileError::NotFound(self.path.display().to_string()));
        }

        let file = File::open(&self.path)?;
        let table = Self::from_reader(file, &self.settings)?;

        info!(
            "Loaded {} row(s) and {} column(s) from {}",
            table.len(),
            table.columns.len(),
            self.path.display()
        );
        Ok(table)
    }
}
