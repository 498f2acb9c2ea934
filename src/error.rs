use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

/// Everything that can go wrong while loading or transforming reads.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Extension not recognized by the dispatch or archive layer.
    #[error("Unsupported file type")]
    UnsupportedFileType,

    /// A FASTQ block ended before all four of its lines were present.
    #[error("malformed FASTQ record: input ends before line {line}")]
    MalformedRecord { line: usize },

    /// A FASTQ quality string whose length disagrees with its sequence.
    #[error("record {record}: sequence length {sequence_len} does not match quality length {quality_len}")]
    LengthMismatch {
        record: usize,
        sequence_len: usize,
        quality_len: usize,
    },

    /// Character outside the IUPAC ambiguity alphabet.
    #[error("invalid IUPAC symbol '{0}'")]
    InvalidSymbol(char),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("decompression error: {0}")]
    Decompress(#[from] niffler::Error),

    /// No application data directory could be resolved for this platform.
    #[error("unsupported platform: no application data directory")]
    PlatformUnsupported,
}
