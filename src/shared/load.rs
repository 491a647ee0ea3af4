//! Load status and request sequencing shared by the view-models.
//!
//! Each view-model owns one [`RequestSeq`]. Starting a load issues a fresh
//! [`RequestTicket`]; a completion is applied only while its ticket is still
//! the latest one issued, so a slow response for an old query can never
//! overwrite the state of a newer query.

use crate::error::LoadError;

/// Where a view-model is in its fetch cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(LoadError),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadStatus::Ready)
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadStatus::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// A started load: the ticket to complete it with and the query to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending<Q> {
    pub ticket: RequestTicket,
    pub query: Q,
}

/// Monotonic ticket dispenser.
#[derive(Debug, Clone, Default)]
pub struct RequestSeq {
    current: u64,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, invalidating every earlier one.
    pub fn issue(&mut self) -> RequestTicket {
        self.current += 1;
        RequestTicket(self.current)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.current
    }
}
