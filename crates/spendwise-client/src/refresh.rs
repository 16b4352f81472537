use std::sync::{Mutex, PoisonError};

use tokio::sync::oneshot;
use tracing::debug;

use crate::error::ClientError;

pub(crate) type RefreshOutcome = Result<String, ClientError>;

#[derive(Default)]
enum RefreshState {
    #[default]
    Idle,
    Refreshing {
        waiters: Vec<oneshot::Sender<RefreshOutcome>>,
    },
}

/// Single-flight guard for the session refresh.
///
/// The first caller to hit a 401 becomes the leader and receives a
/// [`RefreshLease`]; callers arriving while the lease is held queue behind it
/// and receive the leader's outcome in arrival order.
#[derive(Default)]
pub(crate) struct RefreshGate {
    state: Mutex<RefreshState>,
}

pub(crate) enum Ticket<'a> {
    Leader(RefreshLease<'a>),
    Follower(oneshot::Receiver<RefreshOutcome>),
}

impl RefreshGate {
    pub(crate) fn acquire(&self) -> Ticket<'_> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if let RefreshState::Refreshing { waiters } = &mut *state {
            let (tx, rx) = oneshot::channel();
            waiters.push(tx);
            debug!(queued = waiters.len(), "request queued behind session refresh");
            return Ticket::Follower(rx);
        }
        *state = RefreshState::Refreshing {
            waiters: Vec::new(),
        };
        Ticket::Leader(RefreshLease {
            gate: self,
            settled: false,
        })
    }

    pub(crate) fn is_refreshing(&self) -> bool {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        matches!(*state, RefreshState::Refreshing { .. })
    }

    fn settle(&self, outcome: RefreshOutcome) {
        let waiters = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            match std::mem::take(&mut *state) {
                RefreshState::Refreshing { waiters } => waiters,
                RefreshState::Idle => Vec::new(),
            }
        };
        for waiter in waiters {
            // A waiter whose request future was dropped has nobody listening.
            let _ = waiter.send(outcome.clone());
        }
    }
}

/// Held by the caller running the refresh. Settling it drains the queue and
/// returns the gate to idle; dropping it unsettled rejects the queue.
pub(crate) struct RefreshLease<'a> {
    gate: &'a RefreshGate,
    settled: bool,
}

impl RefreshLease<'_> {
    pub(crate) fn finish(mut self, outcome: RefreshOutcome) {
        self.settled = true;
        self.gate.settle(outcome);
    }
}

impl Drop for RefreshLease<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.gate.settle(Err(ClientError::RefreshAbandoned));
        }
    }
}
