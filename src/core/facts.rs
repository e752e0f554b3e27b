//! Append-only fact log
//!
//! The `FactLog` is the ordered, immutable record of every successful
//! mutation, kept separate from the mutable current-state store. Facts are
//! stamped from a single logical clock, so the log is always sorted by
//! timestamp; external observers poll it with `snapshot` or `since` and can
//! rebuild the whole ledger from it.

use crate::types::{Fact, Timestamp};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Ordered, append-only log of audit facts
pub struct FactLog {
    /// Logical clock; the last timestamp handed out
    clock: AtomicU64,
    /// Facts in timestamp order
    facts: RwLock<Vec<Fact>>,
}

impl FactLog {
    /// Create an empty log with the clock at zero
    pub fn new() -> Self {
        FactLog {
            clock: AtomicU64::new(0),
            facts: RwLock::new(Vec::new()),
        }
    }

    /// Stamp and append one fact
    ///
    /// The builder closure receives the freshly assigned timestamp. The clock
    /// ticks inside the write lock, which keeps the log's vector order equal
    /// to its timestamp order.
    pub fn record<F>(&self, build: F) -> Timestamp
    where
        F: FnOnce(Timestamp) -> Fact,
    {
        let mut facts = self.facts.write();
        let at = self.clock.fetch_add(1, Ordering::SeqCst) + 1;
        facts.push(build(at));
        at
    }

    /// Append a fact from a replayed stream, keeping its original timestamp
    pub fn append_replayed(&self, fact: Fact) {
        let mut facts = self.facts.write();
        self.clock.fetch_max(fact.at(), Ordering::SeqCst);
        facts.push(fact);
    }

    /// The last timestamp handed out (0 if nothing was recorded yet)
    pub fn now(&self) -> Timestamp {
        self.clock.load(Ordering::SeqCst)
    }

    /// Number of recorded facts
    pub fn len(&self) -> usize {
        self.facts.read().len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.facts.read().is_empty()
    }

    /// Copy of the full log, in timestamp order
    pub fn snapshot(&self) -> Vec<Fact> {
        self.facts.read().clone()
    }

    /// Copy of all facts recorded after the given timestamp
    ///
    /// `since(0)` returns the full log; pass the timestamp of the last fact
    /// already seen to poll incrementally.
    pub fn since(&self, after: Timestamp) -> Vec<Fact> {
        self.facts
            .read()
            .iter()
            .filter(|fact| fact.at() > after)
            .cloned()
            .collect()
    }
}

impl Default for FactLog {
    fn default() -> Self {
        Self::new()
    }
}
