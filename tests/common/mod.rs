//! Builders for synthetic on-disk databases.

#![allow(dead_code)]

use std::path::Path;

use tempfile::TempDir;

pub const HEADER_SIZE: usize = 300;
pub const RECORD_LENGTH: usize = 30;

/// Index file bytes: 300-byte header then one fixed-length record per entry,
/// integers stored byte-reversed
pub fn index_bytes(entries: &[(&str, u64)], trailing: &[u8]) -> Vec<u8> {
    let size = HEADER_SIZE + entries.len() * RECORD_LENGTH + trailing.len();

    let mut bytes = vec![0u8; HEADER_SIZE];
    bytes[0..4].copy_from_slice(&(size as u32).to_le_bytes());
    bytes[8..10].copy_from_slice(&(RECORD_LENGTH as u16).to_le_bytes());
    for (id, offset) in entries {
        let mut id_field = vec![b' '; RECORD_LENGTH - 10];
        id_field[..id.len()].copy_from_slice(id.as_bytes());
        bytes.extend_from_slice(&id_field);
        bytes.extend_from_slice(&(*offset as u32).to_le_bytes());
        bytes.extend_from_slice(&[0u8; 6]);
    }
    bytes.extend_from_slice(trailing);
    bytes
}

/// Lookup file bytes: arbitrary leading content, then the null-padded 24-byte path
pub fn lookup_bytes(sequence_file: &str) -> Vec<u8> {
    let mut bytes = b"division lookup table\n".to_vec();
    bytes.resize(128, 0xff);
    let mut field = sequence_file.as_bytes().to_vec();
    field.resize(24, 0);
    bytes.extend(field);
    bytes
}

/// Write a database directory whose index points at every `>` header in `fasta`
pub fn write_database(root: &Path, name: &str, fasta: &str) {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();

    let mut entries = Vec::new();
    let mut offset = 0u64;
    for line in fasta.split_inclusive('\n') {
        if let Some(header) = line.strip_prefix('>') {
            let id = header.split_whitespace().next().unwrap_or_default();
            entries.push((id, offset));
        }
        offset += line.len() as u64;
    }

    std::fs::write(dir.join("entrynam.idx"), index_bytes(&entries, &[])).unwrap();
    std::fs::write(dir.join("division.lkp"), lookup_bytes(&format!("{name}.fa"))).unwrap();
    std::fs::write(dir.join(format!("{name}.fa")), fasta).unwrap();
}

pub const UTR_FASTA: &str = "\
>ENST0001 five prime utr
ACGTACGT
>ENST0002 contains an orf
CCATGAAATAGCC
ATGCCC
>ENST0003
GGGG
";

/// A catalog root holding the `utr` database built from [`UTR_FASTA`]
pub fn utr_catalog() -> TempDir {
    let root = TempDir::new().unwrap();
    write_database(root.path(), "utr", UTR_FASTA);
    root
}
