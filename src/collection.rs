/// Grammar that produced a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadKind {
    Fasta,
    Fastq,
}

/// All reads decoded from one file.
///
/// `names`, `sequences` and `qualities` are parallel vectors with one entry
/// per record, in file order. FASTA records carry zero-filled quality
/// vectors of the same length as their sequence; FASTQ qualities are decoded
/// Phred+33 scores. A collection is a plain value owned by the caller and
/// never mutated by the library after it is returned.
#[derive(Debug, Clone)]
pub struct ReadCollection {
    pub kind: ReadKind,
    pub names: Vec<String>,
    pub sequences: Vec<String>,
    pub qualities: Vec<Vec<u8>>,
    /// Set when the collection came out of a gzip archive.
    pub was_archived: bool,
}

impl ReadCollection {
    pub(crate) fn new(kind: ReadKind) -> Self {
        ReadCollection {
            kind,
            names: Vec::new(),
            sequences: Vec::new(),
            qualities: Vec::new(),
            was_archived: false,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
