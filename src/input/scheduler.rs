//! One-shot deferred tasks fired from the event loop

use crate::page::SlotId;
use std::time::{Duration, Instant};

/// Work that runs once its deadline passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Put a control's transform back to normal
    ResetTransform(SlotId),
}

#[derive(Debug, Clone)]
struct Entry {
    due: Instant,
    seq: u64,
    task: Task,
}

/// Deadline queue. Tasks cannot be cancelled; every scheduled task fires
/// exactly once.
#[derive(Debug, Default)]
pub struct Scheduler {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to run `delay` after `now`
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: Task) {
        self.entries.push(Entry {
            due: now + delay,
            seq: self.next_seq,
            task,
        });
        self.next_seq += 1;
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest deadline among queued tasks
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.due).min()
    }

    /// How long the event loop may wait before something is due, capped at `max`
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        match self.next_deadline() {
            Some(due) => due.saturating_duration_since(now).min(max),
            None => max,
        }
    }

    /// Remove and return every task due at `now`, earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<Task> {
        let (mut due, rest): (Vec<Entry>, Vec<Entry>) =
            self.entries.drain(..).partition(|e| e.due <= now);
        self.entries = rest;
        due.sort_by_key(|e| (e.due, e.seq));
        due.into_iter().map(|e| e.task).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REVERT: Task = Task::ResetTransform(SlotId::Next);

    #[test]
    fn test_tasks_fire_once_after_deadline() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, Duration::from_millis(100), REVERT);

        assert!(scheduler.take_due(start).is_empty());
        assert!(scheduler.take_due(start + Duration::from_millis(99)).is_empty());
        assert_eq!(
            scheduler.take_due(start + Duration::from_millis(100)),
            vec![REVERT]
        );
        assert!(scheduler.is_empty());
        assert!(scheduler.take_due(start + Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn test_overlapping_tasks_are_independent() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, Duration::from_millis(100), REVERT);
        let later = start + Duration::from_millis(30);
        scheduler.schedule(later, Duration::from_millis(100), REVERT);
        assert_eq!(scheduler.pending(), 2);

        assert_eq!(scheduler.take_due(start + Duration::from_millis(110)).len(), 1);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.take_due(start + Duration::from_millis(130)).len(), 1);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_poll_timeout_tracks_next_deadline() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let max = Duration::from_millis(250);
        assert_eq!(scheduler.poll_timeout(start, max), max);

        scheduler.schedule(start, Duration::from_millis(100), REVERT);
        assert_eq!(
            scheduler.poll_timeout(start + Duration::from_millis(40), max),
            Duration::from_millis(60)
        );
        assert_eq!(
            scheduler.poll_timeout(start + Duration::from_millis(400), max),
            Duration::ZERO
        );
    }
}
