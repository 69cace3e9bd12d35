use std::{fs, io::Read, path::Path};

use niffler::compression;
use seq_io::{fasta, fastq};

use crate::{
    error::FormatError,
    format::{SeqFormat, SeqKind},
    Result,
};

/// A single named sequence record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeqRecord {
    /// Header text up to the first whitespace
    pub name: String,
    pub seq: Vec<u8>,
}
impl SeqRecord {
    fn from_parts(head: &[u8], seq: Vec<u8>) -> Self {
        let id = head
            .split(u8::is_ascii_whitespace)
            .next()
            .unwrap_or_default();
        Self {
            name: String::from_utf8_lossy(id).into_owned(),
            seq,
        }
    }
}

enum Records {
    Fasta(fasta::Reader<Box<dyn Read>>),
    Fastq(fastq::Reader<Box<dyn Read>>),
    Empty,
}

/// Lazy reader over the records of a FASTA or FASTQ file
///
/// The format is taken from the caller as-is; the file name is never
/// inspected again once a [`SeqFormat`] is resolved.
pub struct FastxReader {
    records: Records,
}
impl FastxReader {
    /// Open `path` for reading records of the given format
    ///
    /// Fails with [`FormatError::CompressionMismatch`] if the stream does not
    /// carry the compression declared by `format`.
    pub fn open<P: AsRef<Path>>(path: P, format: SeqFormat) -> Result<Self> {
        let path = path.as_ref();

        // Too short to sniff, and holds no records either way
        if fs::metadata(path)?.len() == 0 {
            return Ok(Self {
                records: Records::Empty,
            });
        }

        let (handle, detected) = niffler::from_path(path)?;
        let handle: Box<dyn Read> = handle;
        let is_compressed = !matches!(detected, compression::Format::No);
        if is_compressed != format.is_compressed() {
            return Err(FormatError::CompressionMismatch {
                path: path.display().to_string(),
                expected: if format.is_compressed() {
                    "gzip"
                } else {
                    "plain text"
                },
            }
            .into());
        }

        let records = match format.kind() {
            SeqKind::Fasta => Records::Fasta(fasta::Reader::new(handle)),
            SeqKind::Fastq => Records::Fastq(fastq::Reader::new(handle)),
        };
        Ok(Self { records })
    }

    /// Discard record names and yield only the raw sequences
    pub fn sequences(self) -> impl Iterator<Item = Result<Vec<u8>>> {
        self.map(|record| record.map(|r| r.seq))
    }
}
impl Iterator for FastxReader {
    type Item = Result<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.records {
            Records::Fasta(reader) => reader.next().map(|record| -> Result<SeqRecord> {
                use fasta::Record;
                let record = record?;
                Ok(SeqRecord::from_parts(
                    record.head(),
                    record.full_seq().into_owned(),
                ))
            }),
            Records::Fastq(reader) => reader.next().map(|record| -> Result<SeqRecord> {
                use fastq::Record;
                let record = record?;
                Ok(SeqRecord::from_parts(record.head(), record.seq().to_vec()))
            }),
            Records::Empty => None,
        }
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_record_name_stops_at_whitespace() {
        let record = SeqRecord::from_parts(b"read_1 length=4\tx", b"ACGT".to_vec());
        assert_eq!(record.name, "read_1");
        assert_eq!(record.seq, b"ACGT");
    }

    #[test]
    fn test_record_name_empty_header() {
        let record = SeqRecord::from_parts(b"", Vec::new());
        assert!(record.name.is_empty());
    }
}
