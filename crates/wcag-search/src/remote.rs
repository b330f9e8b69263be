//! Latest remote card list, guarded against out-of-order responses.
//!
//! Every refresh takes a [`RefreshTicket`] before its request is sent. A
//! response is applied only if its ticket is newer than the one that produced
//! the current list, so a slow early response can never overwrite a later one.

use wcag_core::StoredCard;

/// Sequence number handed out by [`RemoteCards::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

#[derive(Debug, Default)]
pub struct RemoteCards {
    cards: Vec<StoredCard>,
    issued: u64,
    applied: u64,
    pending: usize,
}

impl RemoteCards {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh and return the ticket its response must present.
    pub const fn begin(&mut self) -> RefreshTicket {
        self.issued += 1;
        self.pending += 1;
        RefreshTicket(self.issued)
    }

    /// Apply a successful response. Returns `false` when it was discarded as
    /// stale.
    pub fn complete(&mut self, ticket: RefreshTicket, cards: Vec<StoredCard>) -> bool {
        self.pending = self.pending.saturating_sub(1);
        if ticket.0 <= self.applied {
            tracing::debug!(
                ticket = ticket.0,
                applied = self.applied,
                "discarding stale card list"
            );
            return false;
        }
        self.applied = ticket.0;
        self.cards = cards;
        true
    }

    /// Record a failed refresh. The current list is kept.
    pub const fn fail(&mut self, _ticket: RefreshTicket) {
        self.pending = self.pending.saturating_sub(1);
    }

    /// Whether any refresh is still outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending > 0
    }

    #[must_use]
    pub fn cards(&self) -> &[StoredCard] {
        &self.cards
    }
}
