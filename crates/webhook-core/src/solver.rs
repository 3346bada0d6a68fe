//! Solver trait definition

use crate::error::{Result, SolverError};
use crate::request::{ChallengeAction, ChallengeRequest};
use async_trait::async_trait;
use tracing::debug;

/// DNS-01 challenge solver
///
/// The dispatcher routes requests to a solver by [`Solver::name`], calls
/// [`Solver::initialize`] once at startup, then `present` / `cleanup` for
/// each challenge. Both must be safe to repeat and to run concurrently.
#[async_trait]
pub trait Solver: Send + Sync {
    /// Whatever the solver needs wired up at startup
    type Bootstrap: Send;

    /// Solver name, unique within the webhook group (e.g. "domeneshop")
    fn name(&self) -> &str;

    /// Called once when the webhook starts
    async fn initialize(&mut self, bootstrap: Self::Bootstrap) -> Result<()>;

    /// Publish the challenge TXT record
    async fn present(&self, request: &ChallengeRequest) -> Result<()>;

    /// Remove the challenge TXT record, and only that one
    async fn cleanup(&self, request: &ChallengeRequest) -> Result<()>;
}

/// Run Present or CleanUp according to `request.action`
pub async fn dispatch<S: Solver + ?Sized>(solver: &S, request: &ChallengeRequest) -> Result<()> {
    debug!(
        solver = solver.name(),
        uid = %request.uid,
        action = ?request.action,
        "Dispatching challenge request"
    );

    match request.action {
        Some(ChallengeAction::Present) => solver.present(request).await,
        Some(ChallengeAction::CleanUp) => solver.cleanup(request).await,
        None => Err(SolverError::Config(format!(
            "challenge request '{}' has no action",
            request.uid
        ))),
    }
}
