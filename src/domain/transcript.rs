use serde::Serialize;

use super::ConversationTurn;

/// Ordered, append-only history of one consultation.
///
/// A transcript starts from the assistant's initial diagnosis and grows by
/// alternating user and assistant turns. Nothing removes turns; a new
/// consultation replaces the whole transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    turns: Vec<ConversationTurn>,
}

impl Transcript {
    pub fn seeded(diagnosis: impl Into<String>) -> Self {
        Self {
            turns: vec![ConversationTurn::assistant(diagnosis)],
        }
    }

    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&ConversationTurn> {
        self.turns.last()
    }
}

impl From<Vec<ConversationTurn>> for Transcript {
    fn from(turns: Vec<ConversationTurn>) -> Self {
        Self { turns }
    }
}
