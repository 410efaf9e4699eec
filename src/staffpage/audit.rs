//! The form editor's activity log. In-memory only; it is gone when the editor exits.

use chrono::{Local, NaiveTime, Timelike};
use std::collections::VecDeque;

/// Entries shown by the "activity log" view.
pub const RECENT_ENTRIES: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub at: NaiveTime,
    pub message: String,
}

impl std::fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.at.format("%H:%M:%S"), self.message)
    }
}

/// Bounded log; the oldest entry is dropped once `capacity` is reached.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(256)),
            capacity: capacity.max(1),
        }
    }

    pub fn record(&mut self, message: impl Into<String>) {
        let time = Local::now().time();
        self.record_at(time.with_nanosecond(0).unwrap_or(time), message);
    }

    pub fn record_at(&mut self, at: NaiveTime, message: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(ActivityEntry {
            at,
            message: message.into(),
        });
    }

    /// The last `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_entry_format() {
        let mut log = ActivityLog::new(10);
        log.record_at(at(9, 5, 7), "Saved Jane Doe");
        let line = log.recent(1).next().unwrap().to_string();
        assert_eq!(line, "[09:05:07] Saved Jane Doe");
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = ActivityLog::new(3);
        for i in 0..5 {
            log.record_at(at(10, 0, i), format!("event {i}"));
        }
        assert_eq!(log.len(), 3);
        let messages: Vec<&str> = log.recent(10).map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["event 2", "event 3", "event 4"]);
    }

    #[test]
    fn test_recent_returns_tail() {
        let mut log = ActivityLog::new(100);
        for i in 0..60 {
            log.record_at(at(0, i / 60, i % 60), format!("{i}"));
        }
        let recent: Vec<&ActivityEntry> = log.recent(RECENT_ENTRIES).collect();
        assert_eq!(recent.len(), 50);
        assert_eq!(recent[0].message, "10");
        assert_eq!(recent[49].message, "59");
    }
}
