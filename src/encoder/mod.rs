mod config;
mod fixed;
mod window;

use auto_impl::auto_impl;

use crate::base::{encode_base, BaseVector, BASE_WIDTH, ZERO_VECTOR};
use crate::Result;

pub use config::{ReadWindowConfig, DEFAULT_READ_LEN, DEFAULT_STEP, MAX_READ_LEN};
pub use fixed::{encode_seq, FixedLengthEncoder};
pub use window::{encode_seq_reads, ReadWindowEncoder};

/// A length-normalized one-hot matrix of shape `[len, 4]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EncodedSeq {
    rows: Vec<BaseVector>,
}
impl EncodedSeq {
    /// Encodes `bases` and right-pads with zero vectors up to `len` rows
    ///
    /// `bases` must not be longer than `len`.
    pub(crate) fn padded(bases: &[u8], len: usize) -> Self {
        debug_assert!(bases.len() <= len);
        let mut rows = Vec::with_capacity(len);
        rows.extend(bases.iter().map(|&b| encode_base(b)));
        rows.resize(len, ZERO_VECTOR);
        Self { rows }
    }

    /// Number of rows (bases)
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Shape of the matrix as `(rows, columns)`
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), BASE_WIDTH)
    }

    #[must_use]
    pub fn rows(&self) -> &[BaseVector] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<BaseVector> {
        self.rows
    }

    /// Row-major view over all cells, `len * 4` bytes long
    #[must_use]
    pub fn as_flat(&self) -> &[u8] {
        bytemuck::cast_slice(&self.rows)
    }
}
impl AsRef<[BaseVector]> for EncodedSeq {
    fn as_ref(&self) -> &[BaseVector] {
        &self.rows
    }
}

/// Trait for per-sequence encoders that can be dispatched over a [`WorkerPool`](crate::WorkerPool)
///
/// An encoder appends zero or more outputs for each input sequence. Outputs
/// for one sequence are always appended contiguously and in order.
#[auto_impl(&, Box, Arc)]
pub trait SequenceEncoder {
    type Output: Send;

    /// Encode a single sequence, appending the results to `out`
    fn encode_into(&self, seq: &[u8], out: &mut Vec<Self::Output>) -> Result<()>;

    /// Encode a single sequence into a freshly allocated buffer
    fn encode(&self, seq: &[u8]) -> Result<Vec<Self::Output>> {
        let mut out = Vec::new();
        self.encode_into(seq, &mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::base::{A_VECTOR, C_VECTOR};

    #[test]
    fn test_padded_shape() {
        let enc = EncodedSeq::padded(b"AC", 4);
        assert_eq!(enc.shape(), (4, 4));
        assert_eq!(enc.rows(), &[A_VECTOR, C_VECTOR, ZERO_VECTOR, ZERO_VECTOR]);
    }

    #[test]
    fn test_flat_view_is_row_major() {
        let enc = EncodedSeq::padded(b"AC", 3);
        assert_eq!(enc.as_flat(), &[1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_empty() {
        let enc = EncodedSeq::padded(b"", 0);
        assert!(enc.is_empty());
        assert!(enc.as_flat().is_empty());
    }

    #[test]
    fn test_encoder_through_reference() -> anyhow::Result<()> {
        fn first_len<E: SequenceEncoder<Output = EncodedSeq>>(encoder: E) -> crate::Result<usize> {
            Ok(encoder.encode(b"ACGT")?[0].len())
        }
        let encoder = FixedLengthEncoder::new(6);
        assert_eq!(first_len(&encoder)?, 6);
        assert_eq!(first_len(std::sync::Arc::new(encoder))?, 6);
        Ok(())
    }
}
