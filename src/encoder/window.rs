use super::{EncodedSeq, ReadWindowConfig, SequenceEncoder};
use crate::{base::reverse_complement, Result};

/// Fragments a sequence and its reverse complement into `read_len` windows
///
/// Convenience wrapper over [`ReadWindowEncoder`] for a single sequence.
pub fn encode_seq_reads(seq: &[u8], read_len: usize, step: usize) -> Result<Vec<EncodedSeq>> {
    ReadWindowEncoder::new(ReadWindowConfig::new(read_len, step)?).encode(seq)
}

/// [`SequenceEncoder`] emitting overlapping read fragments from both strands
///
/// Fragments of the forward strand come first in ascending offset order,
/// followed by those of the reverse complement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadWindowEncoder {
    config: ReadWindowConfig,
}
impl ReadWindowEncoder {
    #[must_use]
    pub fn new(config: ReadWindowConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> ReadWindowConfig {
        self.config
    }

    /// Slides the window over one strand
    ///
    /// The first window touching the end of the strand is the last one
    /// considered. It is kept (zero-padded) only when less than half of it
    /// lies past the end.
    fn encode_strand(&self, strand: &[u8], out: &mut Vec<EncodedSeq>) {
        let read_len = self.config.read_len();
        let seq_len = strand.len();
        for start in (0..seq_len).step_by(self.config.step()) {
            if start + read_len < seq_len {
                out.push(EncodedSeq::padded(&strand[start..start + read_len], read_len));
                continue;
            }
            let missing_len = start + read_len - seq_len;
            if self.config.keeps_partial(missing_len) {
                out.push(EncodedSeq::padded(&strand[start..], read_len));
            }
            break;
        }
    }
}
impl SequenceEncoder for ReadWindowEncoder {
    type Output = EncodedSeq;

    fn encode_into(&self, seq: &[u8], out: &mut Vec<EncodedSeq>) -> Result<()> {
        let rc = reverse_complement(seq);
        self.encode_strand(seq, out);
        self.encode_strand(&rc, out);
        Ok(())
    }
}
