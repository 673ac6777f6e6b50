//! Decision source seam
//!
//! The engine talks to whatever chooses actions through the synchronous
//! [`DecisionSource`] trait. [`AsyncSourceBridge`] adapts an async handler
//! (typically a remote text-generation call) plus a caller-imposed deadline
//! onto that seam, so the engine itself never blocks without bound and is
//! never left mid-turn by a hung call.

use std::future::Future;
use std::time::Duration;

use tokio::runtime::Runtime;

use crate::ai::protocol::{parse_decision, DecisionError};
use crate::core::snapshot::DecisionRequest;
use crate::types::Action;

/// External chooser of one action per turn.
///
/// `decide` may block for external latency and may fail; the turn
/// controller converts every failure into its auto-drop fallback.
pub trait DecisionSource {
    /// Readiness gate checked before a turn is accepted. How readiness is
    /// computed is up to the implementation.
    fn is_ready(&self) -> bool;

    /// Caller-authored strategy text forwarded inside each request
    fn policy(&self) -> &str {
        ""
    }

    fn decide(&mut self, request: &DecisionRequest) -> Result<Action, DecisionError>;
}

/// Bridges an async decision handler to the sync [`DecisionSource`] seam.
///
/// The handler receives the request and resolves to one raw response line
/// (the JSON function call). A deadline bounds every call; expiry is
/// reported as [`DecisionError::Timeout`].
pub struct AsyncSourceBridge<F> {
    runtime: Runtime,
    handler: F,
    deadline: Duration,
    policy: String,
    ready: bool,
}

impl<F, Fut> AsyncSourceBridge<F>
where
    F: FnMut(DecisionRequest) -> Fut,
    Fut: Future<Output = Result<String, String>>,
{
    pub fn new(handler: F, deadline: Duration) -> std::io::Result<Self> {
        Ok(Self {
            runtime: Runtime::new()?,
            handler,
            deadline,
            policy: String::new(),
            ready: false,
        })
    }

    /// Replace the policy text. Changing it clears readiness until the
    /// caller re-validates.
    pub fn set_policy(&mut self, text: impl Into<String>) {
        self.policy = text.into();
        self.ready = false;
    }

    /// Caller-supplied readiness verdict (validation is external to this crate)
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }
}

impl<F, Fut> DecisionSource for AsyncSourceBridge<F>
where
    F: FnMut(DecisionRequest) -> Fut,
    Fut: Future<Output = Result<String, String>>,
{
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn policy(&self) -> &str {
        &self.policy
    }

    fn decide(&mut self, request: &DecisionRequest) -> Result<Action, DecisionError> {
        let future = (self.handler)(request.clone());
        let deadline = self.deadline;
        match self
            .runtime
            .block_on(async { tokio::time::timeout(deadline, future).await })
        {
            Ok(Ok(line)) => parse_decision(&line),
            Ok(Err(message)) => Err(DecisionError::Source(message)),
            Err(_) => Err(DecisionError::Timeout),
        }
    }
}
