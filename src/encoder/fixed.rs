use super::{EncodedSeq, SequenceEncoder};
use crate::Result;

/// Encodes a sequence into exactly `min_seq_length` rows
///
/// Longer sequences keep their centered window, starting at
/// `(len - min_seq_length) / 2`, so an odd surplus loses the extra base from
/// the tail. Shorter sequences are right-padded with zero vectors.
#[must_use]
pub fn encode_seq(seq: &[u8], min_seq_length: usize) -> EncodedSeq {
    let kept = if seq.len() > min_seq_length {
        let start = (seq.len() - min_seq_length) / 2;
        &seq[start..start + min_seq_length]
    } else {
        seq
    };
    EncodedSeq::padded(kept, min_seq_length)
}

/// [`SequenceEncoder`] emitting one fixed-length matrix per sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLengthEncoder {
    min_seq_length: usize,
}
impl FixedLengthEncoder {
    #[must_use]
    pub fn new(min_seq_length: usize) -> Self {
        Self { min_seq_length }
    }

    #[must_use]
    pub fn min_seq_length(&self) -> usize {
        self.min_seq_length
    }
}
impl SequenceEncoder for FixedLengthEncoder {
    type Output = EncodedSeq;

    fn encode_into(&self, seq: &[u8], out: &mut Vec<EncodedSeq>) -> Result<()> {
        out.push(encode_seq(seq, self.min_seq_length));
        Ok(())
    }
}
