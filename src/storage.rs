use crate::constants::CSV_DELIMITER;
use crate::error::{LocatorError, Result};
use crate::types::{AddressRecord, OutputEncoding};
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use encoding_rs::mem::{decode_latin1, encode_latin1_lossy, is_str_latin1};
use std::borrow::Cow;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Semicolon-delimited address file with a single header row.
///
/// Rows are appended one at a time; the header is written only when the file
/// is empty or missing at the time of the append. There is no locking.
pub struct AddressBook {
    path: PathBuf,
    encoding: OutputEncoding,
}

impl AddressBook {
    pub fn new(path: impl Into<PathBuf>, encoding: OutputEncoding) -> Self {
        Self {
            path: path.into(),
            encoding,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines currently in the file; a missing file counts as empty.
    pub fn line_count(&self) -> Result<usize> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(count_lines(&bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    /// Append one record and return the absolute path of the file.
    pub fn append(&self, record: &AddressRecord) -> Result<PathBuf> {
        let needs_header = self.line_count()? == 0;

        let mut writer = WriterBuilder::new()
            .delimiter(CSV_DELIMITER)
            .terminator(Terminator::Any(b'\n'))
            .has_headers(needs_header)
            .from_writer(Vec::new());
        writer.serialize(record)?;
        let utf8 = writer.into_inner().map_err(|e| LocatorError::Io(e.into_error()))?;
        let text = String::from_utf8(utf8).map_err(|e| {
            LocatorError::Encoding(format!("CSV writer produced invalid UTF-8: {e}"))
        })?;
        let bytes = encode(&text, self.encoding)?;

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(&bytes)?;
        file.flush()?;
        debug!(
            path = %self.path.display(),
            header = needs_header,
            bytes = bytes.len(),
            "row appended"
        );

        Ok(fs::canonicalize(&self.path)?)
    }

    /// Re-read every stored record using the same delimiter, columns and encoding.
    pub fn read_all(&self) -> Result<Vec<AddressRecord>> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let text = decode(&bytes, self.encoding)?;

        let mut reader = ReaderBuilder::new()
            .delimiter(CSV_DELIMITER)
            .has_headers(true)
            .from_reader(text.as_bytes());
        let mut records = Vec::new();
        for row in reader.deserialize::<AddressRecord>() {
            records.push(row?);
        }
        Ok(records)
    }
}

fn count_lines(bytes: &[u8]) -> usize {
    if bytes.is_empty() {
        return 0;
    }
    let newlines = bytes.iter().filter(|&&b| b == b'\n').count();
    if bytes.ends_with(b"\n") {
        newlines
    } else {
        newlines + 1
    }
}

// ISO-8859-1 proper: one byte per code point up to U+00FF, no Windows-1252 extras
fn encode(text: &str, encoding: OutputEncoding) -> Result<Vec<u8>> {
    match encoding {
        OutputEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
        OutputEncoding::Latin1 => {
            if !is_str_latin1(text) {
                let bad = text.chars().find(|&c| c > '\u{FF}').unwrap_or_default();
                return Err(LocatorError::Encoding(format!(
                    "cannot represent {bad:?} in {text:?} as Latin-1"
                )));
            }
            Ok(encode_latin1_lossy(text).into_owned())
        }
    }
}

fn decode(bytes: &[u8], encoding: OutputEncoding) -> Result<Cow<'_, str>> {
    match encoding {
        OutputEncoding::Utf8 => std::str::from_utf8(bytes)
            .map(Cow::Borrowed)
            .map_err(|e| LocatorError::Encoding(format!("file is not valid UTF-8: {e}"))),
        // every byte is a valid Latin-1 code point
        OutputEncoding::Latin1 => Ok(decode_latin1(bytes)),
    }
}
