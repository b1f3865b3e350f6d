use crate::{Action, Dealer, GameSnapshot, RuleError};
use std::collections::VecDeque;
use std::fmt;

pub const DEFAULT_HISTORY_LIMIT: usize = 64;

type Listener = Box<dyn FnMut(&GameSnapshot)>;

/// Holds the current game for a front end: one `Dealer`, the live snapshot and
/// the snapshots it replaced.
pub struct Table {
    dealer: Dealer,
    current: GameSnapshot,
    history: VecDeque<GameSnapshot>,
    history_limit: usize,
    listeners: Vec<Listener>,
}

impl Table {
    pub fn new(dealer: Dealer) -> Self {
        Self {
            dealer,
            current: GameSnapshot::new(),
            history: VecDeque::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            listeners: Vec::new(),
        }
    }

    /// Resumes from an existing snapshot instead of an empty table.
    pub fn with_snapshot(mut self, snapshot: GameSnapshot) -> Self {
        self.current = snapshot;
        self.history.clear();
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        &self.current
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Called with the new snapshot after every successful dispatch or undo.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn dispatch(&mut self, action: Action) -> Result<&GameSnapshot, RuleError> {
        let next = self.dealer.reduce(&self.current, &action)?;
        if next != self.current {
            let previous = std::mem::replace(&mut self.current, next);
            self.remember(previous);
            self.notify();
        }
        Ok(&self.current)
    }

    /// Restores the snapshot before the last change. Returns `false` with
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop_back() {
            Some(previous) => {
                self.current = previous;
                self.notify();
                true
            }
            None => false,
        }
    }

    fn remember(&mut self, snapshot: GameSnapshot) {
        if self.history_limit == 0 {
            return;
        }
        if self.history.len() >= self.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(snapshot);
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.current);
        }
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("dealer", &self.dealer)
            .field("current", &self.current)
            .field("history", &self.history.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
