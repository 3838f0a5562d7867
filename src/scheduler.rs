//! Deferred actions keyed by a logical due time.
//!
//! Every task carries the session generation it was scheduled under so the
//! engine can discard it if the match it targeted is gone when it comes due.

use alloc::vec::Vec;

/// Work the engine defers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The scripted opponent takes its shot.
    EnemyTurn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    pub due_ms: u64,
    pub generation: u64,
    pub action: Action,
    seq: u64,
}

/// Pending tasks, fired earliest-due first and in scheduling order on ties.
#[derive(Debug, Default, Clone)]
pub struct Scheduler {
    tasks: Vec<ScheduledTask>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: u64, generation: u64, action: Action) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.push(ScheduledTask {
            due_ms,
            generation,
            action,
            seq,
        });
    }

    /// Remove and return the next task due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<ScheduledTask> {
        let idx = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= now_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.seq))
            .map(|(i, _)| i)?;
        Some(self.tasks.remove(idx))
    }

    /// Due time of the earliest pending task.
    pub fn next_due(&self) -> Option<u64> {
        self.tasks.iter().map(|t| t.due_ms).min()
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
