//! CSV row reader.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use csv::StringRecord;

use crate::error::{ExtractError, ExtractResult};
use crate::types::Row;

/// Lazily yields [`Row`]s from a CSV source whose first line is the header.
///
/// Records may have fewer or more fields than the header; missing trailing fields are
/// treated as absent. The underlying source is released when the reader is dropped.
#[derive(Debug)]
pub struct RowReader<R> {
    rdr: csv::Reader<R>,
    path: PathBuf,
    headers: Arc<StringRecord>,
    done: bool,
}

/// Open `path` and read its header row.
pub fn open_rows(path: impl AsRef<Path>) -> ExtractResult<RowReader<File>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ExtractError::input_open(path, e))?;
    RowReader::from_named_reader(file, path)
}

/// Name reported in errors for readers that were not opened from a path.
const UNNAMED_SOURCE: &str = "<reader>";

impl<R: Read> RowReader<R> {
    /// Wrap any byte source; the header row is read immediately.
    pub fn from_reader(source: R) -> ExtractResult<Self> {
        Self::from_named_reader(source, UNNAMED_SOURCE)
    }

    /// Like [`Self::from_reader`], reporting read failures against `path`.
    pub fn from_named_reader(source: R, path: impl Into<PathBuf>) -> ExtractResult<Self> {
        let path = path.into();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);
        let headers = match rdr.headers() {
            Ok(h) => h.clone(),
            Err(e) => return Err(ExtractError::from_csv(&path, e)),
        };
        Ok(Self {
            rdr,
            path,
            headers: Arc::new(headers),
            done: false,
        })
    }

    /// The header record shared by every yielded row.
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = ExtractResult<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut record = StringRecord::new();
        match self.rdr.read_record(&mut record) {
            Ok(true) => Some(Ok(Row::new(Arc::clone(&self.headers), record))),
            Ok(false) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(ExtractError::from_csv(&self.path, e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_rows_keyed_by_header() {
        let input = "addr:housenumber,addr:street\n123,Main St\n45,Elm Ave\n";
        let rows: Vec<Row> = RowReader::from_reader(input.as_bytes())
            .unwrap()
            .collect::<ExtractResult<_>>()
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("addr:street"), Some("Main St"));
        assert_eq!(rows[1].get("addr:housenumber"), Some("45"));
    }

    #[test]
    fn tolerates_ragged_records() {
        let input = "a,b,c\n1\n1,2,3,4\n";
        let rows: Vec<Row> = RowReader::from_reader(input.as_bytes())
            .unwrap()
            .collect::<ExtractResult<_>>()
            .unwrap();

        assert_eq!(rows[0].get("b"), None);
        assert_eq!(rows[1].get("c"), Some("3"));
    }

    #[test]
    fn stops_after_first_error() {
        let mut input = b"a,b\n1,2\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b',', b'x', b'\n']);
        input.extend_from_slice(b"3,4\n");

        let mut reader = RowReader::from_reader(input.as_slice()).unwrap();
        assert!(reader.next().unwrap().is_ok());
        assert!(matches!(
            reader.next(),
            Some(Err(ExtractError::MalformedRow { .. }))
        ));
        assert!(reader.next().is_none());
    }

    /// Serves its bytes, then fails every later read.
    #[derive(Debug)]
    struct FailingSource {
        data: std::io::Cursor<Vec<u8>>,
    }

    impl Read for FailingSource {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(std::io::Error::other("disk gone")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn io_failure_mid_stream_is_input_read() {
        let source = FailingSource {
            data: std::io::Cursor::new(b"a,b\n1,2\n".to_vec()),
        };
        let mut reader = RowReader::from_named_reader(source, "exports/addresses.csv").unwrap();
        assert!(reader.next().unwrap().is_ok());

        let err = reader.next().unwrap().unwrap_err();
        match &err {
            ExtractError::InputRead { path, source } => {
                assert_eq!(path, Path::new("exports/addresses.csv"));
                assert_eq!(source.to_string(), "disk gone");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            err.to_string(),
            "failed to read input file exports/addresses.csv: disk gone"
        );
        assert!(reader.next().is_none());
    }

    #[test]
    fn io_failure_before_header_is_input_read() {
        let source = FailingSource {
            data: std::io::Cursor::new(Vec::new()),
        };
        let err = RowReader::from_reader(source).unwrap_err();
        assert!(matches!(err, ExtractError::InputRead { .. }));
    }
}
