//! One-shot deferred tasks for the frame loop.
//!
//! Tasks are plain values, not closures: the frame loop pops whatever is
//! due and applies it to the state it already owns. Nothing runs on another
//! thread and nothing can be cancelled.

use std::time::Duration;

/// Work deferred to a later frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Return the particles from explode mode to settling.
    EndExplosion,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    due: Duration,
    seq: u64,
    task: Task,
}

/// A small queue of tasks ordered by due time.
///
/// Tasks due at the same instant come out in scheduling order.
#[derive(Debug, Default)]
pub struct Scheduler {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to run once `now >= due`.
    pub fn schedule_at(&mut self, due: Duration, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { due, seq, task });
    }

    /// Queue `task` to run `delay` after `now`.
    pub fn schedule_after(&mut self, now: Duration, delay: Duration, task: Task) {
        self.schedule_at(now.saturating_add(delay), task);
    }

    /// Remove and return the earliest task that is due at `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<Task> {
        let (pos, _) = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= now)
            .min_by_key(|(_, e)| (e.due, e.seq))?;
        Some(self.entries.swap_remove(pos).task)
    }

    /// Earliest due time of any queued task.
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.due).min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
