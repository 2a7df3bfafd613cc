// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request sequencing for overlapping polls.
//!
//! Polls are never cancelled, so their completions may arrive out of order.
//! Every request takes a [`Ticket`] when it is issued. A completion may only
//! be applied if no newer ticket has been applied yet.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic position of a request in issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Returns the raw sequence number.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Issues tickets and decides which completions are still current.
///
/// # Examples
///
/// ```
/// use espanel_lib::state::RequestSequencer;
///
/// let sequencer = RequestSequencer::new();
/// let older = sequencer.issue();
/// let newer = sequencer.issue();
///
/// // The newer request completes first
/// assert!(sequencer.try_apply(newer));
/// // The older completion is stale now
/// assert!(!sequencer.try_apply(older));
/// ```
#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl RequestSequencer {
    /// Creates a sequencer with no requests issued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next ticket.
    pub fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Marks `ticket` as applied if it is newer than every applied ticket.
    ///
    /// Returns `false` if the completion is stale and must be discarded.
    pub fn try_apply(&self, ticket: Ticket) -> bool {
        self.applied
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |applied| {
                (ticket.0 > applied).then_some(ticket.0)
            })
            .is_ok()
    }

    /// Returns the most recently issued ticket, if any.
    #[must_use]
    pub fn latest_issued(&self) -> Option<Ticket> {
        match self.issued.load(Ordering::SeqCst) {
            0 => None,
            n => Some(Ticket(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_increase() {
        let sequencer = RequestSequencer::new();
        assert_eq!(sequencer.latest_issued(), None);
        let a = sequencer.issue();
        let b = sequencer.issue();
        assert!(b > a);
        assert_eq!(sequencer.latest_issued(), Some(b));
    }

    #[test]
    fn in_order_completions_all_apply() {
        let sequencer = RequestSequencer::new();
        let a = sequencer.issue();
        let b = sequencer.issue();
        assert!(sequencer.try_apply(a));
        assert!(sequencer.try_apply(b));
    }

    #[test]
    fn stale_completion_is_rejected() {
        let sequencer = RequestSequencer::new();
        let a = sequencer.issue();
        let b = sequencer.issue();
        let c = sequencer.issue();
        assert!(sequencer.try_apply(c));
        assert!(!sequencer.try_apply(a));
        assert!(!sequencer.try_apply(b));
    }

    #[test]
    fn ticket_applies_once() {
        let sequencer = RequestSequencer::new();
        let a = sequencer.issue();
        assert!(sequencer.try_apply(a));
        assert!(!sequencer.try_apply(a));
        assert_eq!(a.value(), 1);
    }
}
