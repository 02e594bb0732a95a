// src/search/parallel.rs
//! Parallel scan of the 2^20 two-key space.
//!
//! The first-key range is split into contiguous slices, one per worker;
//! each worker scans every second key for its slice. Workers poll a
//! shared stop flag between candidate evaluations and report over a
//! channel; the coordinator records the first success, flips the flag,
//! and discards anything that arrives later. Cancellation is
//! cooperative — an in-flight evaluation may still finish.

use super::{decode_candidate, frame_ciphertext, SearchConfig, SearchOutcome};
use crate::bits::Bits;
use crate::cipher;
use crate::consts::KEY_SPACE;
use crate::error::{CipherError, Result};
use crate::keys::CombinedKey;
use crossbeam_channel::{unbounded, Sender};
use log::{debug, info};
use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

enum WorkerMsg {
    Hit { key: CombinedKey, plaintext: String },
    Failed(CipherError),
    /// Worker finished its slice; carries how many candidates it evaluated.
    Done(usize),
}

/// Searches the full Cartesian product of key pairs for the first one
/// whose decryption of every block passes the oracle.
///
/// The returned key is the first *discovered*, which depends on worker
/// scheduling — not necessarily the numerically smallest pair.
pub fn crack_triple(
    ciphertext: &Bits,
    config: &SearchConfig,
) -> Result<SearchOutcome<CombinedKey>> {
    let (outcome, evaluated) = search_pairs(ciphertext, config)?;
    info!("search finished after evaluating {evaluated} candidate pairs");
    Ok(outcome)
}

/// The search itself, also reporting how many candidate pairs were
/// evaluated before every worker stopped.
pub(crate) fn search_pairs(
    ciphertext: &Bits,
    config: &SearchConfig,
) -> Result<(SearchOutcome<CombinedKey>, usize)> {
    let chunks = frame_ciphertext(ciphertext)?;
    if chunks.is_empty() {
        return Ok((SearchOutcome::Exhausted, 0));
    }
    let workers = config.workers.max(1);
    let per_worker = KEY_SPACE.div_ceil(workers);
    info!(
        "triple-key search: {} candidate pairs over {} blocks, {} workers",
        KEY_SPACE * KEY_SPACE,
        chunks.len(),
        workers
    );

    let stop = AtomicBool::new(false);
    let (tx, rx) = unbounded();
    let mut found: Option<(CombinedKey, String)> = None;
    let mut failure: Option<CipherError> = None;
    let mut evaluated = 0usize;

    thread::scope(|scope| {
        for worker in 0..workers {
            let start = (worker * per_worker).min(KEY_SPACE);
            let end = (start + per_worker).min(KEY_SPACE);
            debug!("worker {worker}: first-key slice {start}..{end}");
            let tx = tx.clone();
            let stop = &stop;
            let chunks = &chunks;
            scope.spawn(move || scan_slice(start..end, chunks, stop, &tx));
        }
        drop(tx);

        let mut remaining = workers;
        while remaining > 0 {
            match rx.recv().expect("search worker channel closed early") {
                WorkerMsg::Hit { key, plaintext } => {
                    if found.is_none() {
                        info!("key pair {key} accepted; cancelling remaining workers");
                        found = Some((key, plaintext));
                    }
                    // Late successes from in-flight evaluations are discarded.
                    stop.store(true, Ordering::Relaxed);
                }
                WorkerMsg::Failed(err) => {
                    if failure.is_none() {
                        failure = Some(err);
                    }
                    stop.store(true, Ordering::Relaxed);
                }
                WorkerMsg::Done(count) => {
                    evaluated += count;
                    remaining -= 1;
                }
            }
        }
    });

    if let Some(err) = failure {
        return Err(err);
    }
    let outcome = match found {
        Some((key, plaintext)) => SearchOutcome::Found { key, plaintext },
        None => {
            debug!("triple-key space exhausted with no accepted decryption");
            SearchOutcome::Exhausted
        }
    };
    Ok((outcome, evaluated))
}

fn scan_slice(range: Range<usize>, chunks: &[Bits], stop: &AtomicBool, tx: &Sender<WorkerMsg>) {
    let mut evaluated = 0usize;
    'slice: for first in range {
        for second in 0..KEY_SPACE {
            if stop.load(Ordering::Relaxed) {
                break 'slice;
            }
            evaluated += 1;
            let key = match CombinedKey::from_indices(first as u16, second as u16) {
                Ok(key) => key,
                Err(err) => {
                    tx.send(WorkerMsg::Failed(err))
                        .expect("coordinator dropped result channel");
                    break 'slice;
                }
            };
            match decode_candidate(chunks, |block| cipher::decrypt3(&key, block)) {
                Ok(Some(plaintext)) => {
                    tx.send(WorkerMsg::Hit { key, plaintext })
                        .expect("coordinator dropped result channel");
                    break 'slice;
                }
                Ok(None) => {}
                Err(err) => {
                    tx.send(WorkerMsg::Failed(err))
                        .expect("coordinator dropped result channel");
                    break 'slice;
                }
            }
        }
    }
    tx.send(WorkerMsg::Done(evaluated))
        .expect("coordinator dropped result channel");
}
