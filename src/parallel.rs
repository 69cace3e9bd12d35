use std::thread;

use tracing::{debug, trace};

use crate::{encoder::SequenceEncoder, error::EncodeError, Result};

/// Number of worker threads used when the caller does not specify one
pub const DEFAULT_CORES: usize = 4;

/// A bounded pool of worker threads scoped to a single batch
///
/// Threads are spawned when [`encode`](WorkerPool::encode) is called and are
/// all joined before it returns, whether the batch succeeded or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerPool {
    num_threads: usize,
}
impl WorkerPool {
    /// Create a pool of `cores` workers
    ///
    /// A value of zero uses every logical CPU.
    #[must_use]
    pub fn new(cores: usize) -> Self {
        let num_threads = if cores == 0 { num_cpus::get() } else { cores };
        Self { num_threads }
    }

    #[must_use]
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Encode every sequence in parallel, returning the outputs in input order
    ///
    /// The sequences are split into contiguous chunks, one per thread, and
    /// the per-thread outputs are concatenated in thread order. The first
    /// failing sequence aborts the batch and no partial output is returned.
    pub fn encode<S, E>(&self, sequences: &[S], encoder: &E) -> Result<Vec<E::Output>>
    where
        S: AsRef<[u8]> + Sync,
        E: SequenceEncoder + Sync,
    {
        let num_seqs = sequences.len();
        if num_seqs == 0 {
            return Ok(Vec::new());
        }

        // Never spawn idle threads
        let num_threads = self.num_threads.min(num_seqs);
        let seqs_per_thread = num_seqs.div_ceil(num_threads);
        debug!(num_threads, num_seqs, "Starting worker pool");

        let batches = thread::scope(|scope| -> Result<Vec<Result<Vec<E::Output>>>> {
            let mut handles = Vec::with_capacity(num_threads);

            for (tid, chunk) in sequences.chunks(seqs_per_thread).enumerate() {
                let spawned = thread::Builder::new()
                    .name(format!("seqfeat-worker-{tid}"))
                    .spawn_scoped(scope, move || -> Result<Vec<E::Output>> {
                        trace!(tid, num_seqs = chunk.len(), "Worker started");
                        let mut out = Vec::new();
                        for seq in chunk {
                            encoder.encode_into(seq.as_ref(), &mut out)?;
                        }
                        trace!(tid, num_outputs = out.len(), "Worker finished");
                        Ok(out)
                    });

                match spawned {
                    Ok(handle) => handles.push(handle),
                    Err(err) => {
                        // Drain the workers that did start before failing the batch
                        for handle in handles {
                            let _ = handle.join();
                        }
                        return Err(EncodeError::PoolSpawn(err).into());
                    }
                }
            }

            Ok(handles
                .into_iter()
                .enumerate()
                .map(|(tid, handle)| {
                    handle
                        .join()
                        .unwrap_or_else(|_| Err(EncodeError::WorkerPanicked(tid).into()))
                })
                .collect())
        })?;

        let mut outputs = Vec::new();
        for batch in batches {
            outputs.extend(batch?);
        }
        debug!(num_outputs = outputs.len(), "Worker pool finished");
        Ok(outputs)
    }
}
impl Default for WorkerPool {
    fn default() -> Self {
        Self::new(DEFAULT_CORES)
    }
}
