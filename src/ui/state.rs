//! Activity log shown next to the plant

use std::collections::VecDeque;

use serde::Serialize;

use crate::core::types::Tick;

/// Bounded log, newest entry first
#[derive(Debug, Clone, Serialize)]
pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

/// An entry in the activity log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub tick: Tick,
    pub message: String,
    pub category: LogCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogCategory {
    /// Something the player did
    Action,
    /// Something that happened on its own
    Growth,
    /// Bad news
    Warning,
    System,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add an entry to the front, dropping the oldest if full
    pub fn log(&mut self, tick: Tick, message: String, category: LogCategory) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(LogEntry {
            tick,
            message,
            category,
        });
    }

    /// Entries, newest first
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_is_newest_first() {
        let mut log = ActivityLog::new(10);
        log.log(1, "first".into(), LogCategory::System);
        log.log(2, "second".into(), LogCategory::Action);

        let messages: Vec<&str> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "first"]);
        assert_eq!(log.latest().map(|e| e.tick), Some(2));
    }

    #[test]
    fn test_log_drops_oldest_when_full() {
        let mut log = ActivityLog::new(10);
        for i in 0..25 {
            log.log(i, format!("entry {}", i), LogCategory::Growth);
        }

        assert_eq!(log.len(), 10);
        assert_eq!(log.iter().next().map(|e| e.tick), Some(24));
        assert_eq!(log.iter().last().map(|e| e.tick), Some(15));
    }

    #[test]
    fn test_zero_capacity_still_keeps_one() {
        let mut log = ActivityLog::new(0);
        log.log(0, "a".into(), LogCategory::System);
        log.log(1, "b".into(), LogCategory::System);
        assert_eq!(log.len(), 1);
        assert_eq!(log.capacity(), 1);
    }
}
