//! Handle to a call running on a background task

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::core::errors::{CancelCause, Result, TranslateError};
use crate::core::models::ResponseEnvelope;

/// Work in progress for one non-blocking call.
///
/// Awaiting it yields the call's outcome. Dropping it detaches the task;
/// the request keeps running until it finishes on its own.
#[derive(Debug)]
pub struct PendingResult<T> {
    handle: JoinHandle<Result<ResponseEnvelope<T>>>,
}

impl<T: Send + 'static> PendingResult<T> {
    pub(crate) fn spawn<F>(call: F) -> Self
    where
        F: Future<Output = Result<ResponseEnvelope<T>>> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(call),
        }
    }

    /// Wait for the outcome while observing `token`.
    ///
    /// The token is checked first, so a token that is already cancelled
    /// always yields a cancellation error even if the call has finished.
    pub async fn wait_with(self, token: &CancellationToken) -> Result<ResponseEnvelope<T>> {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!("Cancellation observed while waiting on pending call");
                Err(TranslateError::Cancelled(CancelCause::Signal))
            }
            outcome = self => outcome,
        }
    }
}

impl<T> PendingResult<T> {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Abort the background task. Awaiting afterwards yields a cancellation error.
    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl<T> Future for PendingResult<T> {
    type Output = Result<ResponseEnvelope<T>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.handle).poll(cx).map(|joined| match joined {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => Err(TranslateError::Cancelled(CancelCause::Signal)),
            Err(e) => Err(TranslateError::Internal(e.to_string())),
        })
    }
}
