//! Per-turn state

use crate::domain::PendingId;
use crate::infrastructure::transport::ChatError;

/// Lifecycle of one chat turn.
///
/// `Idle → Submitted → AwaitingReply → {Resolved | Failed}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnState {
    #[default]
    Idle,
    /// Input accepted and the placeholder is on screen
    Submitted,
    /// Request dispatched, not yet settled
    AwaitingReply,
    Resolved,
    Failed,
}

impl TurnState {
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnState::Resolved | TurnState::Failed)
    }
}

/// A turn whose placeholder is in the log and whose reply is outstanding.
///
/// Consumed by `ChatTurnController::finish_turn`, so a turn settles once.
#[derive(Debug)]
pub struct PendingTurn {
    id: PendingId,
    text: String,
    state: TurnState,
}

impl PendingTurn {
    pub(crate) fn new(text: String) -> Self {
        Self {
            id: PendingId::new(),
            text,
            state: TurnState::Submitted,
        }
    }

    pub fn id(&self) -> &PendingId {
        &self.id
    }

    /// Trimmed text that was submitted
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub(crate) fn mark_awaiting(&mut self) {
        self.state = TurnState::AwaitingReply;
    }

    pub(crate) fn into_id(self) -> PendingId {
        self.id
    }
}

/// Terminal record of a settled turn
#[derive(Debug)]
pub struct TurnOutcome {
    pub id: PendingId,
    pub state: TurnState,
    /// Set when `state` is `Failed`
    pub error: Option<ChatError>,
}

impl TurnOutcome {
    pub fn is_resolved(&self) -> bool {
        self.state == TurnState::Resolved
    }
}
