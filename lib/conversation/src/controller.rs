//! The conversation controller.
//!
//! The controller owns the transcript and the typing indicator. A
//! submission is appended immediately and its query is dispatched to the
//! answer service on a spawned task. The task sends a [`Completion`] back
//! over a channel; the owner applies completions with
//! [`Controller::complete`] (or the `settle_*` helpers), so the transcript
//! and the view are only ever touched from the owning task.
//!
//! Request lifecycle: `Idle -> Sent -> {Fulfilled, Failed} -> Idle`.
//! Overlapping requests are allowed. They run concurrently and settle in
//! completion order. They share one indicator slot, and any settlement
//! removes it.

use crate::error::{AnswerError, ConversationError};
use crate::pending::PendingIndicator;
use crate::service::AnswerService;
use crate::transcript::{Transcript, TranscriptEntry};
use crate::view::ViewSink;
use futures::FutureExt;
use ipo_compass_core::RequestId;
use rootcause::prelude::Report;
use std::any::Any;
use std::collections::HashSet;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{Instrument, debug, info_span, warn};

/// Assistant text shown when the answer service fails.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, I encountered an error processing your request. Please try again.";

/// The settled result of one request.
#[derive(Debug)]
pub struct Completion {
    request_id: RequestId,
    outcome: Result<String, Report<AnswerError>>,
}

impl Completion {
    #[must_use]
    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// Returns true if the service produced a reply.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Drives the message pipeline for one widget.
pub struct Controller<S: ?Sized, V> {
    service: Arc<S>,
    view: V,
    transcript: Transcript,
    pending: PendingIndicator,
    input: String,
    in_flight: HashSet<RequestId>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
}

impl<S, V> Controller<S, V>
where
    S: AnswerService + ?Sized + 'static,
    V: ViewSink,
{
    /// Creates a controller with an empty transcript.
    pub fn new(service: Arc<S>, view: V) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            service,
            view,
            transcript: Transcript::new(),
            pending: PendingIndicator::default(),
            input: String::new(),
            in_flight: HashSet::new(),
            completions_tx,
            completions_rx,
        }
    }

    /// Submits user text.
    ///
    /// On acceptance the trimmed text is appended as a user entry, the
    /// input is cleared, the typing indicator is shown if it is not
    /// already, and the query is dispatched.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationError::InputRejected`] if the text is empty
    /// after trimming, or [`ConversationError::NoRuntime`] if called
    /// outside a tokio runtime. Nothing is appended or sent in either case.
    pub fn submit(&mut self, text: &str) -> Result<RequestId, ConversationError> {
        let query = text.trim();
        if query.is_empty() {
            debug!("ignoring empty submission");
            return Err(ConversationError::InputRejected);
        }
        let Ok(runtime) = Handle::try_current() else {
            warn!("submission outside a tokio runtime");
            return Err(ConversationError::NoRuntime);
        };
        let query = query.to_string();

        self.append(TranscriptEntry::user(query.clone()));

        self.input.clear();
        self.view.input_cleared();

        if self.pending.show() {
            self.view.pending_shown();
            self.view.scroll_to_latest();
        }

        let request_id = RequestId::new();
        self.in_flight.insert(request_id);
        debug!(%request_id, query_len = query.len(), "dispatching query");
        self.dispatch(&runtime, request_id, query);

        Ok(request_id)
    }

    /// Submits a suggestion shortcut as if it had been typed.
    ///
    /// # Errors
    ///
    /// Same as [`Controller::submit`].
    pub fn choose_suggestion(&mut self, text: &str) -> Result<RequestId, ConversationError> {
        self.set_input(text);
        self.submit(text)
    }

    fn dispatch(&self, runtime: &Handle, request_id: RequestId, query: String) {
        let service = Arc::clone(&self.service);
        let completions = self.completions_tx.clone();

        runtime.spawn(
            async move {
                // A panicking service still has to settle its request.
                let outcome = match AssertUnwindSafe(service.ask(&query))
                    .catch_unwind()
                    .await
                {
                    Ok(outcome) => outcome,
                    Err(panic) => Err(AnswerError::Aborted {
                        reason: panic_reason(&*panic),
                    }
                    .into()),
                };
                // A dropped controller has no transcript left to update.
                let _ = completions.send(Completion {
                    request_id,
                    outcome,
                });
            }
            .instrument(info_span!("answer_request", %request_id)),
        );
    }

    /// Waits for the next request to settle.
    ///
    /// Returns `None` immediately if nothing is in flight.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        if self.in_flight.is_empty() {
            return None;
        }
        self.completions_rx.recv().await
    }

    /// Applies a settled request: removes the indicator and appends the
    /// reply, or the fallback message on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationError::UnknownRequest`] if the request is not
    /// in flight on this controller.
    pub fn complete(
        &mut self,
        completion: Completion,
    ) -> Result<&TranscriptEntry, ConversationError> {
        let Completion {
            request_id,
            outcome,
        } = completion;

        if !self.in_flight.remove(&request_id) {
            return Err(ConversationError::UnknownRequest { request_id });
        }

        if self.pending.hide() {
            self.view.pending_hidden();
        }

        let entry = match outcome {
            Ok(reply) => {
                debug!(%request_id, reply_len = reply.len(), "answer received");
                TranscriptEntry::assistant(reply)
            }
            Err(report) => {
                warn!(%request_id, error = %report, "answer service failed, showing fallback");
                TranscriptEntry::assistant_verbatim(FALLBACK_MESSAGE)
            }
        };

        Ok(self.append(entry))
    }

    /// Waits for one request to settle and applies it.
    ///
    /// Returns false if nothing was in flight.
    pub async fn settle_next(&mut self) -> bool {
        let Some(completion) = self.next_completion().await else {
            return false;
        };
        if let Err(e) = self.complete(completion) {
            warn!(error = %e, "dropping completion");
        }
        true
    }

    /// Settles every request currently in flight.
    pub async fn settle_all(&mut self) {
        while self.settle_next().await {}
    }

    fn append(&mut self, entry: TranscriptEntry) -> &TranscriptEntry {
        let entry = self.transcript.push(entry);
        self.view.entry_appended(entry);
        self.view.scroll_to_latest();
        entry
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Returns true while the typing indicator is shown.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_visible()
    }

    /// Number of requests dispatched but not yet applied.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Current contents of the input field.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the contents of the input field.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|reason| (*reason).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "answer task panicked".to_string())
}
