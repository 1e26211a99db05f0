//! Message log - the user-facing activity feed
//!
//! Services report what they did ("HeroService: fetched heroes") through a
//! `MessageService`. The TUI shows the feed in the Messages panel. The
//! sender traces each message itself, at the level it deserves.

use std::sync::{Arc, Mutex};

/// Maximum number of messages kept before the oldest are dropped
const MAX_MESSAGES: usize = 200;

/// Sink for human-readable activity messages
pub trait MessageService: Send + Sync {
    /// Append a message
    fn add(&self, message: String);

    /// Drop all messages
    fn clear(&self);

    /// Snapshot of current messages, oldest first
    fn messages(&self) -> Vec<String>;
}

/// In-memory message log, shared between the service and the UI
#[derive(Clone, Default)]
pub struct MessageLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MessageService for MessageLog {
    fn add(&self, message: String) {
        let mut entries = self.entries.lock().unwrap();
        if entries.len() >= MAX_MESSAGES {
            entries.remove(0);
        }
        entries.push(message);
    }

    fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    fn messages(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_clear() {
        let log = MessageLog::new();
        log.add("HeroService: fetched heroes".to_string());
        log.add("HeroService: fetched hero id=4".to_string());

        assert_eq!(
            log.messages(),
            vec!["HeroService: fetched heroes", "HeroService: fetched hero id=4"]
        );

        log.clear();
        assert!(log.messages().is_empty());
    }

    #[test]
    fn test_bounded() {
        let log = MessageLog::new();
        for i in 0..(MAX_MESSAGES + 5) {
            log.add(format!("message {i}"));
        }
        assert_eq!(log.messages().len(), MAX_MESSAGES);
        assert_eq!(log.messages()[0], "message 5");
    }

    #[test]
    fn test_clones_share_entries() {
        let log = MessageLog::new();
        let handle = log.clone();
        handle.add("shared".to_string());
        assert_eq!(log.messages().len(), 1);
    }
}
