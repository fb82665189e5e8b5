//! Background drawing.
//!
//! Assembly runs on a worker thread so the window keeps repainting while a
//! long text is looked up word by word. The worker owns a snapshot of the
//! text and a handle to the lexicon, and reports back exactly once over a
//! bounded channel. At most one worker exists at a time.

use crate::{GuiError, GuiResult};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, TryRecvError};
use semtree_core::{assemble_notation, AssemblyOptions, CancelToken, LexicalDatabase};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Result of one draw: the tree notation (`None` for blank text) and how
/// long the worker took
#[derive(Debug)]
pub struct DrawOutcome {
    pub result: GuiResult<Option<String>>,
    pub elapsed: Duration,
}

impl DrawOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self.result, Err(GuiError::Core(semtree_core::Error::Cancelled)))
    }
}

/// What happened to a draw request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawStart {
    Started,
    /// A worker is already running; nothing was spawned
    AlreadyRunning,
    /// The lexicon failed to load at startup
    NoLexicon(String),
}

struct DrawJob {
    receiver: Receiver<DrawOutcome>,
    cancel: CancelToken,
    handle: JoinHandle<()>,
}

pub struct DrawController {
    lexicon: Result<Arc<dyn LexicalDatabase>, String>,
    options: AssemblyOptions,
    job: Option<DrawJob>,
}

impl DrawController {
    /// `lexicon` is the database, or the reason it could not be opened
    pub fn new(lexicon: Result<Arc<dyn LexicalDatabase>, String>, options: AssemblyOptions) -> Self {
        Self { lexicon, options, job: None }
    }

    pub fn lexicon_name(&self) -> Option<&str> {
        self.lexicon.as_ref().ok().map(|db| db.name())
    }

    pub fn is_running(&self) -> bool {
        self.job.is_some()
    }

    /// Spawn a worker for `text`.
    ///
    /// `repaint` is woken when the worker finishes.
    pub fn start(&mut self, text: String, repaint: Option<egui::Context>) -> GuiResult<DrawStart> {
        if self.is_running() {
            log::warn!("draw requested while a draw is running; ignored");
            return Ok(DrawStart::AlreadyRunning);
        }
        let db = match &self.lexicon {
            Ok(db) => Arc::clone(db),
            Err(reason) => return Ok(DrawStart::NoLexicon(reason.clone())),
        };

        let (sender, receiver) = bounded(1);
        let cancel = CancelToken::new();
        let worker_cancel = cancel.clone();
        let options = self.options;

        let handle = thread::Builder::new().name("semtree-draw".to_string()).spawn(move || {
            let start = Instant::now();
            let result = assemble_notation(&text, db.as_ref(), &options, &worker_cancel).map_err(GuiError::from);
            let outcome = DrawOutcome { result, elapsed: start.elapsed() };
            if sender.send(outcome).is_err() {
                log::debug!("draw result dropped; controller is gone");
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        })?;

        log::info!("draw started");
        self.job = Some(DrawJob { receiver, cancel, handle });
        Ok(DrawStart::Started)
    }

    /// Ask the running worker to stop at the next word
    pub fn cancel(&self) {
        if let Some(job) = &self.job {
            log::info!("draw cancellation requested");
            job.cancel.cancel();
        }
    }

    /// The finished worker's outcome, if it has finished
    pub fn poll(&mut self) -> Option<DrawOutcome> {
        let received = match &self.job {
            Some(job) => job.receiver.try_recv(),
            None => return None,
        };
        match received {
            Ok(outcome) => Some(self.complete(outcome)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(self.complete(Self::lost_worker())),
        }
    }

    /// Block until the running worker finishes or `timeout` passes
    pub fn wait(&mut self, timeout: Duration) -> Option<DrawOutcome> {
        let received = match &self.job {
            Some(job) => job.receiver.recv_timeout(timeout),
            None => return None,
        };
        match received {
            Ok(outcome) => Some(self.complete(outcome)),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => Some(self.complete(Self::lost_worker())),
        }
    }

    fn lost_worker() -> DrawOutcome {
        DrawOutcome {
            result: Err(GuiError::State("draw worker exited without a result".to_string())),
            elapsed: Duration::ZERO,
        }
    }

    fn complete(&mut self, outcome: DrawOutcome) -> DrawOutcome {
        if let Some(job) = self.job.take() {
            if job.handle.join().is_err() {
                log::error!("draw worker panicked");
            }
        }
        outcome
    }
}
