//! One-hot feature encoding of nucleotide sequences.
//!
//! Sequences are read from FASTA or FASTQ files (optionally gzip-compressed)
//! and turned into fixed-shape `[len, 4]` matrices, either one per sequence
//! ([`load_encoded_seqs`]) or as overlapping read fragments taken from both
//! strands ([`load_encoded_seq_reads`]). Encoding runs on a scoped
//! [`WorkerPool`] and always returns results in input order.

mod base;
mod encoder;
mod error;
mod format;
mod parallel;
pub mod prelude;
mod reader;

use std::path::Path;

pub use base::{
    complement, encode_base, reverse_complement, BaseVector, A_VECTOR, BASE_WIDTH, C_VECTOR,
    G_VECTOR, T_VECTOR, ZERO_VECTOR,
};
pub use encoder::{
    encode_seq, encode_seq_reads, EncodedSeq, FixedLengthEncoder, ReadWindowConfig,
    ReadWindowEncoder, SequenceEncoder, DEFAULT_READ_LEN, DEFAULT_STEP, MAX_READ_LEN,
};
pub use error::{ConfigError, EncodeError, Error, FormatError, Result};
pub use format::{SeqFormat, SeqKind, FASTA_EXTENSIONS, FASTQ_EXTENSIONS, GZIP_EXTENSIONS};
pub use parallel::{WorkerPool, DEFAULT_CORES};
pub use reader::{FastxReader, SeqRecord};

/// Load every sequence of a FASTA/FASTQ file as a `min_seq_length` one-hot matrix
///
/// Returns one matrix per record, in file order.
pub fn load_encoded_seqs<P: AsRef<Path>>(
    path: P,
    min_seq_length: usize,
    cores: usize,
) -> Result<Vec<EncodedSeq>> {
    let format = SeqFormat::from_path(&path)?;
    let encoder = FixedLengthEncoder::new(min_seq_length);
    load_with(path.as_ref(), format, &encoder, cores)
}

/// Load every sequence of a FASTA/FASTQ file as overlapping `read_len` fragments
///
/// Fragments of all records are flattened into one list. Each record
/// contributes a contiguous block: forward-strand fragments followed by
/// reverse-complement fragments.
pub fn load_encoded_seq_reads<P: AsRef<Path>>(
    path: P,
    read_len: usize,
    step: usize,
    cores: usize,
) -> Result<Vec<EncodedSeq>> {
    let format = SeqFormat::from_path(&path)?;
    let encoder = ReadWindowEncoder::new(ReadWindowConfig::new(read_len, step)?);
    load_with(path.as_ref(), format, &encoder, cores)
}

/// Encode in-memory sequences as `min_seq_length` one-hot matrices
pub fn encode_seqs<I, S>(sequences: I, min_seq_length: usize, cores: usize) -> Result<Vec<EncodedSeq>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]> + Sync,
{
    let sequences: Vec<S> = sequences.into_iter().collect();
    WorkerPool::new(cores).encode(&sequences, &FixedLengthEncoder::new(min_seq_length))
}

/// Encode in-memory sequences as flattened `read_len` fragments from both strands
pub fn encode_reads<I, S>(
    sequences: I,
    read_len: usize,
    step: usize,
    cores: usize,
) -> Result<Vec<EncodedSeq>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]> + Sync,
{
    let encoder = ReadWindowEncoder::new(ReadWindowConfig::new(read_len, step)?);
    let sequences: Vec<S> = sequences.into_iter().collect();
    WorkerPool::new(cores).encode(&sequences, &encoder)
}

fn load_with<E>(path: &Path, format: SeqFormat, encoder: &E, cores: usize) -> Result<Vec<E::Output>>
where
    E: SequenceEncoder + Sync,
{
    let sequences = FastxReader::open(path, format)?
        .sequences()
        .collect::<Result<Vec<_>>>()?;
    WorkerPool::new(cores).encode(&sequences, encoder)
}

#[cfg(test)]
mod testing {

    use super::*;
    use anyhow::Result;

    #[test]
    fn test_encode_seqs_preserves_order() -> Result<()> {
        let seqs = ["A", "CC", "GGG", "TTTT", "", "UUUUUU"];
        let encoded = encode_seqs(seqs, 4, 3)?;
        assert_eq!(encoded.len(), seqs.len());
        for (seq, enc) in seqs.iter().zip(&encoded) {
            assert_eq!(enc, &encode_seq(seq.as_bytes(), 4));
        }
        Ok(())
    }

    #[test]
    fn test_encode_reads_blocks() -> Result<()> {
        let seqs = ["ACGTACGTAC", "AC", "GGGGCCCC"];
        let encoded = encode_reads(seqs, 4, 2, 2)?;

        let mut expected = Vec::new();
        for seq in seqs {
            expected.extend(encode_seq_reads(seq.as_bytes(), 4, 2)?);
        }
        // 8 for the first, none for the second, 6 for the third
        assert_eq!(encoded.len(), 14);
        assert_eq!(encoded, expected);
        Ok(())
    }

    #[test]
    fn test_encode_reads_accepts_mixed_alphabet() -> Result<()> {
        let seqs = ["ACGT", "ACGU", "ACGTTAUGC"];
        let encoded = encode_reads(seqs, 4, 2, 2)?;
        // 2 + 2 + 8 fragments
        assert_eq!(encoded.len(), 12);
        assert_eq!(encoded[4..], encode_seq_reads(b"ACGTTAUGC", 4, 2)?[..]);
        Ok(())
    }

    #[test]
    fn test_encode_reads_rejects_zero_step() {
        assert!(matches!(
            encode_reads(["ACGT"], 4, 0, 1),
            Err(Error::ConfigError(ConfigError::ZeroStep))
        ));
    }
}
