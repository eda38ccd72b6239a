use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use tracing::debug;

use super::{CorrectionOracle, OracleError, ResolverError};

pub(super) struct OracleJob {
    pub original: String,
    pub heuristic: String,
    /// Set by the caller once it stops waiting.
    pub cancelled: Arc<AtomicBool>,
    pub reply: mpsc::Sender<Result<String, OracleError>>,
}

/// Handle to the thread that owns the oracle.
///
/// Dropping the handle closes the job channel and lets the thread exit after
/// its current call.
pub(super) struct OracleWorker {
    jobs: mpsc::Sender<OracleJob>,
}

impl OracleWorker {
    pub fn spawn(oracle: Arc<dyn CorrectionOracle>) -> Result<Self, ResolverError> {
        let (jobs, rx) = mpsc::channel::<OracleJob>();
        thread::Builder::new()
            .name("translit-oracle".into())
            .spawn(move || oracle_worker(rx, oracle))
            .map_err(ResolverError::Spawn)?;
        Ok(Self { jobs })
    }

    /// Submit one request and block until it answers or `timeout` passes.
    pub fn call(
        &self,
        original: &str,
        heuristic: &str,
        timeout: Duration,
    ) -> Result<String, OracleError> {
        let cancelled = Arc::new(AtomicBool::new(false));
        let (reply, reply_rx) = mpsc::channel();
        self.jobs
            .send(OracleJob {
                original: original.to_string(),
                heuristic: heuristic.to_string(),
                cancelled: Arc::clone(&cancelled),
                reply,
            })
            .map_err(|_| OracleError::Disconnected)?;

        match reply_rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                cancelled.store(true, Ordering::SeqCst);
                Err(OracleError::Timeout(timeout))
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(OracleError::Disconnected),
        }
    }
}

fn oracle_worker(rx: mpsc::Receiver<OracleJob>, oracle: Arc<dyn CorrectionOracle>) {
    while let Ok(job) = rx.recv() {
        if job.cancelled.load(Ordering::SeqCst) {
            debug!("skipping cancelled oracle request");
            continue;
        }
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            oracle.correct(&job.original, &job.heuristic)
        }))
        .unwrap_or(Err(OracleError::Panicked));
        // Receiver gone means the caller timed out meanwhile
        let _ = job.reply.send(result);
    }
}
