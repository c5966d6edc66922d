//! Reader for binary lookup (`.lkp`) files.
//!
//! Only the final 24 bytes are meaningful: the sequence file's path relative to
//! the database directory, padded with null bytes.

use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::parsing::ParseError;

/// Width of the null-padded path field at the end of the file
pub const PATH_FIELD_WIDTH: usize = 24;

/// Read the sequence-file path named by a lookup file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::MalformedLookup` if the file is shorter than 24 bytes or the
/// path field is empty or not valid UTF-8.
pub fn read_lookup_file(path: &Path) -> Result<PathBuf, ParseError> {
    let mut file = std::fs::File::open(path)?;
    read_lookup(&mut file)
}

/// Read the sequence-file path from the end of a seekable reader.
///
/// # Errors
///
/// See [`read_lookup_file`].
pub fn read_lookup<R: Read + Seek>(reader: &mut R) -> Result<PathBuf, ParseError> {
    let len = reader.seek(SeekFrom::End(0))?;
    if len < PATH_FIELD_WIDTH as u64 {
        return Err(ParseError::MalformedLookup(format!(
            "file is {len} bytes, expected at least {PATH_FIELD_WIDTH}"
        )));
    }

    let mut field = [0u8; PATH_FIELD_WIDTH];
    reader.seek(SeekFrom::End(-(PATH_FIELD_WIDTH as i64)))?;
    reader.read_exact(&mut field)?;

    decode_path_field(&field)
}

/// Strip null fill from a path field and decode it
fn decode_path_field(field: &[u8]) -> Result<PathBuf, ParseError> {
    let start = field.iter().position(|&b| b != 0).unwrap_or(field.len());
    let end = field.iter().rposition(|&b| b != 0).map_or(start, |pos| pos + 1);
    let name = &field[start..end];

    if name.is_empty() {
        return Err(ParseError::MalformedLookup(
            "path field contains only null bytes".to_string(),
        ));
    }

    let name = std::str::from_utf8(name).map_err(|e| {
        ParseError::MalformedLookup(format!("path field is not valid UTF-8: {e}"))
    })?;

    Ok(PathBuf::from(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn path_field(name: &str) -> Vec<u8> {
        let mut field = name.as_bytes().to_vec();
        field.resize(PATH_FIELD_WIDTH, 0);
        field
    }

    #[test]
    fn test_reads_final_field() {
        let mut bytes = vec![0xffu8; 300];
        bytes.extend(path_field("sequences.fa"));

        let path = read_lookup(&mut Cursor::new(bytes)).unwrap();
        assert_eq!(path, PathBuf::from("sequences.fa"));
    }

    #[test]
    fn test_exact_width_file() {
        let path = read_lookup(&mut Cursor::new(path_field("db.fasta"))).unwrap();
        assert_eq!(path, PathBuf::from("db.fasta"));
    }

    #[test]
    fn test_full_width_name_without_fill() {
        let name = "a".repeat(PATH_FIELD_WIDTH);
        let path = read_lookup(&mut Cursor::new(name.clone().into_bytes())).unwrap();
        assert_eq!(path, PathBuf::from(name));
    }

    #[test]
    fn test_leading_fill_is_stripped() {
        let mut bytes = vec![0u8; 4];
        bytes.extend_from_slice(b"seq.fa");
        bytes.resize(PATH_FIELD_WIDTH, 0);

        let path = read_lookup(&mut Cursor::new(bytes)).unwrap();
        assert_eq!(path, PathBuf::from("seq.fa"));
    }

    #[test]
    fn test_short_file() {
        let result = read_lookup(&mut Cursor::new(vec![b'a'; PATH_FIELD_WIDTH - 1]));
        assert!(matches!(result, Err(ParseError::MalformedLookup(_))));
    }

    #[test]
    fn test_empty_field() {
        let result = read_lookup(&mut Cursor::new(vec![0u8; 64]));
        assert!(matches!(result, Err(ParseError::MalformedLookup(_))));
    }

    #[test]
    fn test_read_lookup_file() {
        let mut temp = NamedTempFile::with_suffix(".lkp").unwrap();
        temp.write_all(&[1u8; 50]).unwrap();
        temp.write_all(&path_field("division.fa")).unwrap();
        temp.flush().unwrap();

        let path = read_lookup_file(temp.path()).unwrap();
        assert_eq!(path, PathBuf::from("division.fa"));
    }
}
