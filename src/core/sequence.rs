use serde::{Deserialize, Serialize};

/// Nucleotide bases of a record or subrange.
///
/// The bases are kept exactly as read from the sequence file (no case folding,
/// no alphabet validation).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(String);

impl Sequence {
    pub fn new(bases: impl Into<String>) -> Self {
        Self(bases.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Half-open slice `[start, stop)` of the bases.
    ///
    /// `start` defaults to 0 and `stop` to the end of the bases. Both bounds
    /// are clamped to the sequence length, and a start at or past the stop
    /// yields an empty sequence.
    #[must_use]
    pub fn slice(&self, start: Option<u64>, stop: Option<u64>) -> Self {
        let len = self.0.len();
        let clamp = |bound: u64| usize::try_from(bound).map_or(len, |b| b.min(len));

        let start = start.map_or(0, clamp);
        let stop = stop.map_or(len, clamp);
        if start >= stop {
            return Self::default();
        }

        Self(String::from_utf8_lossy(&self.0.as_bytes()[start..stop]).into_owned())
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for Sequence {
    fn from(bases: String) -> Self {
        Self(bases)
    }
}

impl From<&str> for Sequence {
    fn from(bases: &str) -> Self {
        Self(bases.to_string())
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
