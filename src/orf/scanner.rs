use tracing::debug;

use crate::core::address::Address;

/// An open reading frame: an address named `<source id>_<ordinal>` whose
/// sequence holds the ORF bases (stop codon excluded).
pub type Orf = Address;

/// Codon that opens an ORF
pub const START_CODON: &[u8] = b"ATG";

/// Codons that close an ORF
pub const STOP_CODONS: [&[u8]; 3] = [b"TGA", b"TAA", b"TAG"];

const CODON_LEN: usize = 3;

/// Forward reading frames, scanned in this order
const FRAMES: [usize; 3] = [0, 1, 2];

fn is_stop_codon(codon: &[u8]) -> bool {
    STOP_CODONS.contains(&codon)
}

/// Inclusive ORF length limits in bases, stop codon excluded. Unset = unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl LengthBounds {
    pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn contains(&self, length: usize) -> bool {
        self.min.map_or(true, |min| length >= min) && self.max.map_or(true, |max| length <= max)
    }
}

/// Scan state within one frame
#[derive(Debug, Clone, Copy)]
enum FrameState {
    Idle,
    /// Inside an ORF whose start codon begins at this 0-based position
    Open(usize),
}

/// Finds ORFs in the three forward reading frames of a resolved address
#[derive(Debug, Clone, Default)]
pub struct OrfScanner {
    bounds: LengthBounds,
}

impl OrfScanner {
    pub fn new(bounds: LengthBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> LengthBounds {
        self.bounds
    }

    /// Scan frames 0, 1 and 2 in order and return every ORF whose length is
    /// within bounds.
    ///
    /// Each ORF runs from an `ATG` to the next in-frame stop codon, or to the
    /// end of the sequence when no stop codon follows. Its `start` is the
    /// 1-based position of the start codon and its `stop` is the 0-based
    /// position of the stop codon (the sequence length for unterminated ORFs).
    /// Ordinals in the ids count emitted ORFs across all frames.
    ///
    /// An address with no sequence attached yields no ORFs.
    pub fn scan(&self, source: &Address) -> Vec<Orf> {
        let bases = source.sequence.as_ref().map_or(&[][..], |s| s.as_bytes());
        let mut orfs = Vec::new();

        for frame in FRAMES {
            let frame_bases = bases.get(frame..).unwrap_or_default();
            let mut state = FrameState::Idle;

            // The final chunk may be a partial codon, which never matches
            for (i, codon) in frame_bases.chunks(CODON_LEN).enumerate() {
                let pos = frame + i * CODON_LEN;
                state = match state {
                    FrameState::Idle if codon == START_CODON => FrameState::Open(pos),
                    FrameState::Open(start) if is_stop_codon(codon) => {
                        self.emit(source, bases, start, pos, &mut orfs);
                        FrameState::Idle
                    }
                    other => other,
                };
            }

            if let FrameState::Open(start) = state {
                self.emit(source, bases, start, bases.len(), &mut orfs);
            }
        }

        debug!(source = %source, orfs = orfs.len(), "Scanned reading frames");
        orfs
    }

    /// Record the ORF spanning `bases[start..end]` if its length is within bounds
    fn emit(&self, source: &Address, bases: &[u8], start: usize, end: usize, orfs: &mut Vec<Orf>) {
        let orf_bases = &bases[start..end];
        if !self.bounds.contains(orf_bases.len()) {
            return;
        }

        let orf = Address::new(
            source.database.clone(),
            format!("{}_{}", source.id, orfs.len() + 1),
            Some(start as u64 + 1),
            Some(end as u64),
        )
        .with_sequence(String::from_utf8_lossy(orf_bases).into_owned());
        orfs.push(orf);
    }
}

/// Scan a resolved address for ORFs with optional length bounds
pub fn scan_orfs(source: &Address, min_length: Option<usize>, max_length: Option<usize>) -> Vec<Orf> {
    OrfScanner::new(LengthBounds::new(min_length, max_length)).scan(source)
}
