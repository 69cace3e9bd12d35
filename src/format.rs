use std::{ffi::OsStr, fmt, path::Path};

use tracing::debug;

use crate::{error::FormatError, Result};

pub const FASTA_EXTENSIONS: [&str; 4] = ["fasta", "fa", "fna", "fas"];
pub const FASTQ_EXTENSIONS: [&str; 2] = ["fq", "fastq"];
pub const GZIP_EXTENSIONS: [&str; 1] = ["gz"];

/// Compression markers that are recognized but not supported
const UNSUPPORTED_ENCODINGS: [&str; 4] = ["Z", "bz2", "xz", "br"];

/// Compression carried by a trailing filename marker
enum Marker {
    Gzip,
    Unsupported,
}

/// Looks up a compression marker, exactly first and then lowercased
fn compression_marker(ext: &str) -> Option<Marker> {
    let lookup = |ext: &str| {
        if GZIP_EXTENSIONS.contains(&ext) {
            Some(Marker::Gzip)
        } else if UNSUPPORTED_ENCODINGS.contains(&ext) {
            Some(Marker::Unsupported)
        } else {
            None
        }
    };
    lookup(ext).or_else(|| lookup(&ext.to_ascii_lowercase()))
}

/// Record layout of a sequence file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeqKind {
    Fasta,
    Fastq,
}

/// The record layout and compression of a sequence file, resolved from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeqFormat {
    FastaPlain,
    FastaGzip,
    FastqPlain,
    FastqGzip,
}
impl SeqFormat {
    /// Classify a path by its trailing extensions
    ///
    /// An optional `.gz` marker (any case) is stripped first, then the
    /// remaining suffix must be one of the FASTA or FASTQ extensions, matched
    /// case-sensitively.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let unsupported = || FormatError::UnsupportedExtension(path.display().to_string());

        let name = path
            .file_name()
            .and_then(OsStr::to_str)
            .ok_or_else(unsupported)?;

        let (name, compressed) = match name
            .rsplit_once('.')
            .and_then(|(stem, ext)| Some((stem, ext, compression_marker(ext)?)))
        {
            Some((stem, _, Marker::Gzip)) => (stem, true),
            Some((_, ext, Marker::Unsupported)) => {
                return Err(FormatError::UnsupportedEncoding(ext.to_string()).into());
            }
            None => (name, false),
        };

        let kind = match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && FASTA_EXTENSIONS.contains(&ext) => {
                SeqKind::Fasta
            }
            Some((stem, ext)) if !stem.is_empty() && FASTQ_EXTENSIONS.contains(&ext) => {
                SeqKind::Fastq
            }
            _ => return Err(unsupported().into()),
        };

        let format = Self::from_parts(kind, compressed);
        debug!(path = %path.display(), %format, "Resolved sequence format");
        Ok(format)
    }

    #[must_use]
    pub const fn from_parts(kind: SeqKind, compressed: bool) -> Self {
        match (kind, compressed) {
            (SeqKind::Fasta, false) => Self::FastaPlain,
            (SeqKind::Fasta, true) => Self::FastaGzip,
            (SeqKind::Fastq, false) => Self::FastqPlain,
            (SeqKind::Fastq, true) => Self::FastqGzip,
        }
    }

    #[must_use]
    pub const fn kind(self) -> SeqKind {
        match self {
            Self::FastaPlain | Self::FastaGzip => SeqKind::Fasta,
            Self::FastqPlain | Self::FastqGzip => SeqKind::Fastq,
        }
    }

    #[must_use]
    pub const fn is_compressed(self) -> bool {
        matches!(self, Self::FastaGzip | Self::FastqGzip)
    }
}
impl fmt::Display for SeqFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FastaPlain => "fa",
            Self::FastaGzip => "fa.gz",
            Self::FastqPlain => "fq",
            Self::FastqGzip => "fq.gz",
        };
        f.write_str(label)
    }
}
