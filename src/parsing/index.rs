//! Reader for binary index (`.idx`) files.
//!
//! Layout (integers byte-reversed, see [`crate::parsing`]):
//!
//! | Bytes | Content |
//! |-------|---------|
//! | 0..4   | Total file size |
//! | 4..8   | Unused |
//! | 8..10  | Record length `L` |
//! | 10..300 | Header padding |
//! | 300..  | `(size - 300) / L` records of `L - 10` id bytes, 4 offset bytes, 6 unused bytes |
//!
//! Bytes after the last whole record are ignored.

use std::collections::HashMap;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use tracing::debug;

use crate::parsing::ParseError;

/// Size of the fixed header preceding the records
pub const HEADER_SIZE: usize = 300;

/// Bytes of each record that are not part of the id (offset + trailer)
pub const RECORD_OVERHEAD: usize = 10;

const OFFSET_WIDTH: usize = 4;

/// Mapping from record id to the byte offset of its header line in the sequence file
pub type EntryIndex = HashMap<String, u64>;

/// A single decoded index record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub id: String,
    pub offset: u64,
}

/// Interpret bytes stored in reversed order: reverse them, then read big-endian.
fn reversed_uint(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .rev()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte))
}

/// Strip the fill that pads ids out to the record width
fn trim_id(bytes: &[u8]) -> String {
    let end = bytes
        .iter()
        .rposition(|&b| b != 0 && b != b' ')
        .map_or(0, |pos| pos + 1);
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

/// Read an index file into an id → offset map.
///
/// When an id occurs more than once, the last record wins.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::MalformedIndex` if the header is truncated, declares a record
/// length shorter than 10 bytes, or declares more records than the file holds.
pub fn read_index_file(path: &Path) -> Result<EntryIndex, ParseError> {
    let reader = std::fs::File::open(path).map(BufReader::new)?;
    read_index(reader)
}

/// Read index records from any reader into an id → offset map.
///
/// # Errors
///
/// See [`read_index_file`].
pub fn read_index<R: Read>(reader: R) -> Result<EntryIndex, ParseError> {
    Ok(read_index_entries(reader)?
        .into_iter()
        .map(|entry| (entry.id, entry.offset))
        .collect())
}

/// Read index records from any reader, in file order.
///
/// # Errors
///
/// See [`read_index_file`].
pub fn read_index_entries<R: Read>(mut reader: R) -> Result<Vec<IndexEntry>, ParseError> {
    let mut header = [0u8; HEADER_SIZE];
    read_block(&mut reader, &mut header, || {
        format!("header shorter than {HEADER_SIZE} bytes")
    })?;

    let file_size = reversed_uint(&header[0..4]);
    let record_length = reversed_uint(&header[8..10]);
    if record_length < RECORD_OVERHEAD as u64 {
        return Err(ParseError::MalformedIndex(format!(
            "record length {record_length} is shorter than {RECORD_OVERHEAD} bytes"
        )));
    }

    let body_size = file_size.saturating_sub(HEADER_SIZE as u64);
    let record_count = body_size / record_length;
    let remainder = body_size % record_length;
    if remainder != 0 {
        debug!(
            remainder,
            record_length, "Ignoring partial record at end of index"
        );
    }

    // record_length fits in two bytes, so this cannot truncate
    let mut record = vec![0u8; record_length as usize];
    let id_width = record.len() - RECORD_OVERHEAD;
    let mut entries = Vec::new();

    for n in 0..record_count {
        read_block(&mut reader, &mut record, || {
            format!("expected {record_count} records but file ends in record {n}")
        })?;

        entries.push(IndexEntry {
            id: trim_id(&record[..id_width]),
            offset: reversed_uint(&record[id_width..id_width + OFFSET_WIDTH]),
        });
    }

    debug!(
        records = entries.len(),
        record_length, "Decoded index records"
    );

    Ok(entries)
}

/// Fill `buf`, reporting a short read as a malformed index rather than an IO error
fn read_block<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    context: impl FnOnce() -> String,
) -> Result<(), ParseError> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            ParseError::MalformedIndex(context())
        } else {
            ParseError::Io(e)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    const RECORD_LENGTH: usize = 26;

    /// Build an index whose header declares the true file size
    fn build_index(entries: &[(&str, u32)], record_length: usize, trailing: &[u8]) -> Vec<u8> {
        let size = HEADER_SIZE + entries.len() * record_length + trailing.len();
        build_index_with_size(entries, record_length, trailing, size as u32)
    }

    fn build_index_with_size(
        entries: &[(&str, u32)],
        record_length: usize,
        trailing: &[u8],
        declared_size: u32,
    ) -> Vec<u8> {
        let mut bytes = vec![0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&declared_size.to_le_bytes());
        bytes[8..10].copy_from_slice(&(record_length as u16).to_le_bytes());

        for (id, offset) in entries {
            let mut id_field = vec![b' '; record_length - RECORD_OVERHEAD];
            id_field[..id.len()].copy_from_slice(id.as_bytes());
            bytes.extend_from_slice(&id_field);
            bytes.extend_from_slice(&offset.to_le_bytes());
            bytes.extend_from_slice(&[0u8; 6]);
        }
        bytes.extend_from_slice(trailing);
        bytes
    }

    #[test]
    fn test_reversed_uint() {
        assert_eq!(reversed_uint(&[0x2c, 0x01, 0x00, 0x00]), 300);
        assert_eq!(reversed_uint(&[0x1a, 0x00]), 26);
        assert_eq!(reversed_uint(&[0x78, 0x56, 0x34, 0x12]), 0x1234_5678);
    }

    #[test]
    fn test_trim_id() {
        assert_eq!(trim_id(b"X12345    "), "X12345");
        assert_eq!(trim_id(b"X12345\0\0\0\0"), "X12345");
        assert_eq!(trim_id(b"A B \0"), "A B");
        assert_eq!(trim_id(b"\0\0\0"), "");
    }

    #[test]
    fn test_read_index_entries() {
        let bytes = build_index(
            &[("gene_1", 0), ("gene_2", 1_234), ("gene_3", 70_000)],
            RECORD_LENGTH,
            &[],
        );

        let entries = read_index_entries(Cursor::new(bytes)).unwrap();
        assert_eq!(
            entries,
            vec![
                IndexEntry { id: "gene_1".to_string(), offset: 0 },
                IndexEntry { id: "gene_2".to_string(), offset: 1_234 },
                IndexEntry { id: "gene_3".to_string(), offset: 70_000 },
            ]
        );
    }

    #[test]
    fn test_partial_trailing_record_is_dropped() {
        let entries = [("a", 10), ("b", 20)];
        let whole = read_index(Cursor::new(build_index(&entries, RECORD_LENGTH, &[]))).unwrap();
        let ragged =
            read_index(Cursor::new(build_index(&entries, RECORD_LENGTH, &[7u8; 11]))).unwrap();

        assert_eq!(whole.len(), 2);
        assert_eq!(whole, ragged);
        assert_eq!(ragged["a"], 10);
        assert_eq!(ragged["b"], 20);
    }

    #[test]
    fn test_record_count_follows_declared_size() {
        // Declared size covers one record; the second is never read
        let declared = (HEADER_SIZE + RECORD_LENGTH) as u32;
        let bytes = build_index_with_size(&[("a", 1), ("b", 2)], RECORD_LENGTH, &[], declared);

        let index = read_index(Cursor::new(bytes)).unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.contains_key("a"));
    }

    #[test]
    fn test_declared_size_below_header_yields_no_records() {
        let bytes = build_index_with_size(&[("a", 1)], RECORD_LENGTH, &[], 12);
        assert!(read_index(Cursor::new(bytes)).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_id_last_wins() {
        let bytes = build_index(&[("a", 1), ("a", 2)], RECORD_LENGTH, &[]);
        let index = read_index(Cursor::new(bytes)).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index["a"], 2);
    }

    #[test]
    fn test_truncated_header() {
        let result = read_index(Cursor::new(vec![0u8; 100]));
        assert!(matches!(result, Err(ParseError::MalformedIndex(_))));
    }

    #[test]
    fn test_record_length_too_short() {
        let bytes = build_index(&[], 4, &[]);
        let result = read_index(Cursor::new(bytes));
        assert!(matches!(result, Err(ParseError::MalformedIndex(_))));
    }

    #[test]
    fn test_declared_size_exceeds_file() {
        let declared = (HEADER_SIZE + 3 * RECORD_LENGTH) as u32;
        let bytes = build_index_with_size(&[("a", 1)], RECORD_LENGTH, &[], declared);
        let result = read_index(Cursor::new(bytes));
        assert!(matches!(result, Err(ParseError::MalformedIndex(_))));
    }

    #[test]
    fn test_read_index_file() {
        let bytes = build_index(&[("X12345", 42)], RECORD_LENGTH, &[]);

        let mut temp = NamedTempFile::with_suffix(".idx").unwrap();
        temp.write_all(&bytes).unwrap();
        temp.flush().unwrap();

        let index = read_index_file(temp.path()).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index["X12345"], 42);
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_index_file(Path::new("/nonexistent/entrynam.idx"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
