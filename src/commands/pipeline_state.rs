//! Commit message pipeline state machine
//!
//! Pure state transitions for the generate command. IO happens in
//! `commands/generate.rs`; this module only decides what comes next.
//!
//! # State transition diagram
//! ```text
//! Start ──> RepoChecked ──> StagedChecked{true} ──> MessageGenerated ──> Committed
//!                 │                                        │
//!                 └──> StagedChecked{false} ──> Err        └──> MessageOnly
//! ```
//!
//! Any failing stage leaves the machine through `Err(kind)`.
//!
//! # Usage example
//! ```
//! use commit_gpt::commands::pipeline_state::{PipelineEvent, PipelineState};
//!
//! # fn main() -> anyhow::Result<()> {
//! let state = PipelineState::Start
//!     .transition(PipelineEvent::RepositoryFound)?
//!     .transition(PipelineEvent::StagedChecked(true))?
//!     .transition(PipelineEvent::MessageGenerated("feat: add login".to_string()))?
//!     .transition(PipelineEvent::Printed)?;
//!
//! assert!(state.is_terminal());
//! # Ok(())
//! # }
//! ```

use crate::error::{CommitGptError, Result};

/// Pipeline state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineState {
    /// Nothing checked yet
    Start,
    /// Working directory is inside a repository
    RepoChecked,
    /// Staged-change probe finished
    StagedChecked {
        /// Probe result; `false` can only fail from here
        has_staged: bool,
    },
    /// Message produced by the service
    MessageGenerated {
        /// Cleaned commit message
        message: String,
    },
    /// Terminal: commit performed
    Committed {
        /// Message used as the commit subject
        message: String,
    },
    /// Terminal: message printed, nothing committed
    MessageOnly {
        /// Message shown to the user
        message: String,
    },
}

/// Stage results fed into [`PipelineState::transition`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    RepositoryFound,
    StagedChecked(bool),
    MessageGenerated(String),
    /// The commit command succeeded
    CommitDone,
    /// The message was printed without committing
    Printed,
}

/// Final result of a successful pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Message printed, nothing committed
    MessageOnly(String),
    /// Commit performed with this message
    Committed(String),
}

impl PipelineState {
    /// Applies one stage result (pure function)
    ///
    /// # Errors
    /// - [`CommitGptError::NoStagedChanges`] when leaving `StagedChecked { has_staged: false }`
    /// - [`CommitGptError::InvalidInput`] for an event that does not belong to the current state
    pub fn transition(self, event: PipelineEvent) -> Result<Self> {
        let next = match (self, event) {
            (PipelineState::Start, PipelineEvent::RepositoryFound) => PipelineState::RepoChecked,

            (PipelineState::RepoChecked, PipelineEvent::StagedChecked(false)) => {
                return Err(CommitGptError::NoStagedChanges);
            }
            (PipelineState::RepoChecked, PipelineEvent::StagedChecked(has_staged)) => {
                PipelineState::StagedChecked { has_staged }
            }

            (
                PipelineState::StagedChecked { has_staged: true },
                PipelineEvent::MessageGenerated(message),
            ) => {
                if message.trim().is_empty() {
                    return Err(CommitGptError::ServiceError(
                        "empty commit message returned".to_string(),
                    ));
                }
                PipelineState::MessageGenerated { message }
            }
            (PipelineState::StagedChecked { has_staged: false }, _) => {
                return Err(CommitGptError::NoStagedChanges);
            }

            (PipelineState::MessageGenerated { message }, PipelineEvent::CommitDone) => {
                PipelineState::Committed { message }
            }
            (PipelineState::MessageGenerated { message }, PipelineEvent::Printed) => {
                PipelineState::MessageOnly { message }
            }

            (state, event) => {
                return Err(CommitGptError::InvalidInput(format!(
                    "event {:?} not allowed in state {:?}",
                    event, state
                )));
            }
        };

        tracing::debug!("Pipeline state -> {:?}", next);
        Ok(next)
    }

    /// Whether the run has finished successfully
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PipelineState::Committed { .. } | PipelineState::MessageOnly { .. }
        )
    }

    /// Converts a terminal state into its outcome
    pub fn into_outcome(self) -> Option<PipelineOutcome> {
        match self {
            PipelineState::Committed { message } => Some(PipelineOutcome::Committed(message)),
            PipelineState::MessageOnly { message } => Some(PipelineOutcome::MessageOnly(message)),
            _ => None,
        }
    }
}
