//! Offset-based extraction of a single record from a sequence file.
//!
//! A record starts with a header line beginning with `>`. Every following line
//! up to the next header line (or end of file) contributes its bases, with
//! surrounding whitespace and line terminators removed. Bases must be ASCII,
//! so byte offsets into the result are base positions.

use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

use crate::parsing::ParseError;

/// First byte of every record header line
pub const RECORD_DELIMITER: u8 = b'>';

/// Extract the bases of the record whose header line starts at `offset`.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::MalformedRecord` if the line at `offset` does not begin with `>`.
pub fn extract_record(path: &Path, offset: u64) -> Result<String, ParseError> {
    let mut reader = std::fs::File::open(path).map(BufReader::new)?;
    reader.seek(SeekFrom::Start(offset))?;

    read_record(&mut reader).map_err(|e| match e {
        ParseError::MalformedRecord(msg) => ParseError::MalformedRecord(format!(
            "{msg} (offset {offset} in {})",
            path.display()
        )),
        other => other,
    })
}

/// Read one record from the reader's current position.
///
/// The header line of the following record, if any, is left unconsumed.
///
/// # Errors
///
/// Returns `ParseError::Io` on read failure, or `ParseError::MalformedRecord`
/// if the current line does not begin with `>`.
pub fn read_record<R: BufRead>(reader: &mut R) -> Result<String, ParseError> {
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;

    if line.first() != Some(&RECORD_DELIMITER) {
        let found = String::from_utf8_lossy(&line);
        return Err(ParseError::MalformedRecord(format!(
            "expected a line starting with '>', found '{}'",
            found.trim_end()
        )));
    }

    let mut bases = String::new();
    loop {
        match reader.fill_buf()?.first() {
            None | Some(&RECORD_DELIMITER) => break,
            Some(_) => {}
        }

        line.clear();
        reader.read_until(b'\n', &mut line)?;
        if !line.is_ascii() {
            return Err(ParseError::MalformedRecord(format!(
                "non-ASCII bytes in sequence line '{}'",
                String::from_utf8_lossy(&line).trim_end()
            )));
        }
        // ASCII is valid UTF-8, so this never substitutes
        bases.push_str(String::from_utf8_lossy(&line).trim());
    }

    Ok(bases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read, Write};
    use tempfile::NamedTempFile;

    const TWO_RECORDS: &str = ">rec1 first\nACGT\nAC\n>rec2 second\nGGGG\nTT\n";

    #[test]
    fn test_extract_each_record_by_offset() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(TWO_RECORDS.as_bytes()).unwrap();
        temp.flush().unwrap();

        let second = TWO_RECORDS.find(">rec2").unwrap() as u64;
        assert_eq!(extract_record(temp.path(), 0).unwrap(), "ACGTAC");
        assert_eq!(extract_record(temp.path(), second).unwrap(), "GGGGTT");
    }

    #[test]
    fn test_boundary_header_is_not_consumed() {
        let mut reader = Cursor::new(TWO_RECORDS.as_bytes());
        assert_eq!(read_record(&mut reader).unwrap(), "ACGTAC");

        let mut rest = String::new();
        reader.read_to_string(&mut rest).unwrap();
        assert!(rest.starts_with(">rec2"));
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let text = ">r\r\nAC\r\n\r\n  GT \r\nNN";
        let mut reader = Cursor::new(text.as_bytes());
        assert_eq!(read_record(&mut reader).unwrap(), "ACGTNN");
    }

    #[test]
    fn test_non_ascii_bases() {
        let mut reader = Cursor::new(&b">r\nAC\xc3\xa9GT\n"[..]);
        assert!(matches!(read_record(&mut reader), Err(ParseError::MalformedRecord(_))));

        // Non-ASCII text in the header line is fine
        let mut reader = Cursor::new(">r caf\u{e9}\nACGT\n".as_bytes());
        assert_eq!(read_record(&mut reader).unwrap(), "ACGT");
    }

    #[test]
    fn test_header_only_record() {
        let mut reader = Cursor::new(&b">empty\n>next\nAC\n"[..]);
        assert_eq!(read_record(&mut reader).unwrap(), "");
    }

    #[test]
    fn test_offset_not_at_header() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(TWO_RECORDS.as_bytes()).unwrap();
        temp.flush().unwrap();

        let result = extract_record(temp.path(), 3);
        match result {
            Err(ParseError::MalformedRecord(msg)) => assert!(msg.contains("offset 3")),
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_offset_past_end_of_file() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(TWO_RECORDS.as_bytes()).unwrap();
        temp.flush().unwrap();

        let result = extract_record(temp.path(), 10_000);
        assert!(matches!(result, Err(ParseError::MalformedRecord(_))));
    }
}
