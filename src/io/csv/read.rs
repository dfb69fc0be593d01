//! CSV reading operations.

use std::{fs::File, path::Path};

use polars::{frame::DataFrame, io::SerReader, prelude::{CsvEncoding, CsvReadOptions, PolarsResult}};

use crate::error::{ImportError, Result};

/// Reads a headerless CSV file (geography or estimate file) into rows of text fields.
///
/// Every column is read as a string so identifiers keep their leading zeros, and Latin-1
/// place names are decoded lossily. Empty fields come back as empty strings; a row shorter
/// than the widest row keeps its own width.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    // The handle is dropped (closed) when this function returns, on every path.
    let file = File::open(path)
        .map_err(|source| ImportError::SourceUnavailable { path: path.to_path_buf(), source })?;

    let df = CsvReadOptions::default()
        .with_has_header(false)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|po| po
            .with_encoding(CsvEncoding::LossyUtf8)
            .with_missing_is_null(false))
        .into_reader_with_file_handle(file)
        .finish()
        .map_err(|source| ImportError::Csv { path: path.to_path_buf(), source })?;

    dataframe_to_rows(&df)
        .map_err(|source| ImportError::Csv { path: path.to_path_buf(), source })
}

/// Transpose an all-string DataFrame into row-major fields.
///
/// Empty fields are read as "" (not null), so a null only marks padding after the end of a
/// short row; each row stops at its first null.
fn dataframe_to_rows(df: &DataFrame) -> PolarsResult<Vec<Vec<String>>> {
    let columns = df.get_columns().iter()
        .map(|col| col.str())
        .collect::<PolarsResult<Vec<_>>>()?;

    Ok((0..df.height())
        .map(|i| columns.iter()
            .map_while(|ca| ca.get(i).map(str::to_string))
            .collect())
        .collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn reads_all_fields_as_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ACSSF,RI,040,00,0000001,,\"Rhode Island, State\"").unwrap();
        writeln!(file, "ACSSF,RI,050,00,0000008,007,\"Kent County, Rhode Island\"").unwrap();
        file.flush().unwrap();

        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ["ACSSF", "RI", "040", "00", "0000001", "", "Rhode Island, State"]);
        assert_eq!(rows[1][4], "0000008");
        assert_eq!(rows[1][5], "007");
    }

    #[test]
    fn short_rows_keep_their_width() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ACSSF,ri,0003,1,10").unwrap();
        writeln!(file, "ACSSF,ri,0003,2").unwrap();
        writeln!(file, "ACSSF,ri,0003,,30").unwrap();
        file.flush().unwrap();

        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows[0].len(), 5);
        assert_eq!(rows[1], ["ACSSF", "ri", "0003", "2"]);
        assert_eq!(rows[2], ["ACSSF", "ri", "0003", "", "30"]);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("e20151ri0094000.txt");
        match read_rows(&path).unwrap_err() {
            ImportError::SourceUnavailable { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
