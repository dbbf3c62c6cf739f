/// How a delimited file is turned into a table.
#[derive(Debug, Clone)]
pub struct CsvSettings {
    pub delimiter: char,
    /// 0-based record holding the column names; records above it are skipped.
    pub header_row: usize,
    pub has_headers: bool,
}

impl CsvSettings {
    pub fn new(delimiter: char, has_headers: bool) -> Self {
        CsvSettings {
            delimiter,
            header_row: 0,
            has_headers,
        }
    }

    pub fn with_header_row(mut self, header_row: usize) -> Self {
        self.header_row = header_row;
        self
    }
}

impl Default for CsvSettings {
    fn default() -> Self {
        CsvSettings::new(',', true)
    }
}
