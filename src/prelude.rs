pub use super::{EncodedSeq, SequenceEncoder, WorkerPool};

pub use crate::encoder::{FixedLengthEncoder, ReadWindowConfig, ReadWindowEncoder};
pub use crate::format::{SeqFormat, SeqKind};
pub use crate::reader::{FastxReader, SeqRecord};
