use serde::{Deserialize, Serialize};

use crate::types::{PlayerId, Suggestion, WinKind};

/// Things everyone at the table can see. A refutation records who showed a
/// card to whom, never the card itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TableEvent {
    Moved { player: PlayerId, room: String },
    Suggested { player: PlayerId, suggestion: Suggestion },
    Refuted { suggester: PlayerId, refuter: PlayerId },
    Unrefuted { suggester: PlayerId },
    SuggestionDeclined { player: PlayerId },
    Accused { player: PlayerId, correct: bool },
    Eliminated { player: PlayerId },
    TurnPassed { from: PlayerId, to: PlayerId },
    Won { player: PlayerId, kind: WinKind },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    events: Vec<TableEvent>,
}

impl Journal {
    #[inline]
    pub fn push(&mut self, event: TableEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn events(&self) -> &[TableEvent] {
        &self.events
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[inline]
    pub fn last(&self) -> Option<&TableEvent> {
        self.events.last()
    }
}
