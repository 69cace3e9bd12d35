/// Custom Result type for seqfeat operations, wrapping the custom [`Error`] type
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the seqfeat library, encompassing all possible error cases
/// that can occur while loading and encoding sequences.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub enum Error {
    /// Errors related to resolving or opening a sequence file format
    FormatError(#[from] FormatError),
    /// Errors from invalid encoder parameters
    ConfigError(#[from] ConfigError),
    /// Errors that occur while encoding a batch of sequences
    EncodeError(#[from] EncodeError),
    /// Standard I/O errors from the Rust standard library
    IoError(#[from] std::io::Error),
    /// Errors from the niffler decompression library
    NifflerError(#[from] niffler::Error),
    /// FASTA parsing errors
    FastaError(#[from] seq_io::fasta::Error),
    /// FASTQ parsing errors
    FastqError(#[from] seq_io::fastq::Error),
    /// Generic errors that can occur in any part of the system
    AnyhowError(#[from] anyhow::Error),
}

/// Errors specific to classifying and opening sequence files
#[derive(thiserror::Error, Debug)]
pub enum FormatError {
    /// The file does not end with a recognized FASTA or FASTQ suffix
    ///
    /// # Arguments
    /// * `String` - The offending path
    #[error("Unknown extension: {0}. Only FASTA (.fasta, .fa, .fna, .fas) and FASTQ (.fq, .fastq) files are supported, optionally followed by .gz")]
    UnsupportedExtension(String),

    /// The file carries a compression marker other than gzip
    ///
    /// # Arguments
    /// * `String` - The unsupported compression marker
    #[error("Unknown file encoding: {0}")]
    UnsupportedEncoding(String),

    /// The stream compression does not agree with what the filename declares
    #[error("Compression of {path} does not match its extension (expected {expected})")]
    CompressionMismatch { path: String, expected: &'static str },
}

/// Errors from invalid encoder parameters
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The sliding window must be at least one base wide
    #[error("Read length must be positive")]
    ZeroReadLength,

    /// The read length is too large for window offsets to be computed
    ///
    /// # Arguments
    /// * `usize` - The rejected read length
    #[error("Read length {0} exceeds the maximum of usize::MAX / 2")]
    ReadLengthTooLarge(usize),

    /// The sliding window must advance by at least one base
    #[error("Window step must be positive")]
    ZeroStep,
}

/// Errors that can occur while encoding a batch of sequences
#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    /// A worker thread could not be started
    #[error("Unable to spawn worker thread: {0}")]
    PoolSpawn(std::io::Error),

    /// A worker thread panicked before returning its results
    ///
    /// # Arguments
    /// * `usize` - The thread id of the failed worker
    #[error("Worker thread {0} panicked")]
    WorkerPanicked(usize),
}
