//! Append-only battle log.

use grimdark_core::enums::TurnPhase;
use grimdark_core::events::LogEntry;
use grimdark_core::types::LogEntryId;

/// Narrated outcomes in the order they happened. Entries are never edited
/// or reordered once written.
#[derive(Debug, Clone, Default)]
pub struct BattleLog {
    entries: Vec<LogEntry>,
    next_id: u64,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line stamped with the turn and phase it was written in.
    pub fn append(&mut self, message: impl Into<String>, turn: u32, phase: TurnPhase) -> LogEntryId {
        self.next_id += 1;
        let id = LogEntryId(self.next_id);
        self.entries.push(LogEntry {
            id,
            message: message.into(),
            turn,
            phase,
        });
        id
    }

    /// Oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Most recent first, for display.
    pub fn recent(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev()
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

    #[test]
    fn append_keeps_order_and_stamps() {
        let mut log = BattleLog::new();
        let a = log.append("first", 1, TurnPhase::Command);
        let b = log.append("second", 2, TurnPhase::Shooting);

        assert!(a < b);
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].message, "first");
        assert_eq!(log.entries()[1].turn, 2);
        assert_eq!(log.entries()[1].phase, TurnPhase::Shooting);

        let recent: Vec<&str> = log.recent().map(|e| e.message.as_str()).collect();
        assert_eq!(recent, vec!["second", "first"]);
    }
}
