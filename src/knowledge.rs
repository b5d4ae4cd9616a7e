use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};
use crate::error::InputError;
use crate::types::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Unknown,
    /// Someone was seen holding the card, so it is not part of the solution.
    Cleared,
}

/// Per-item evidence, indexed by the deck's global card order.
/// Entries only ever move from `Unknown` to `Cleared`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    statuses: Vec<Status>,
}

impl KnowledgeBase {
    pub fn new(deck: &Deck) -> Self {
        Self {
            statuses: vec![Status::Unknown; deck.len()],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    #[inline]
    pub fn status(&self, deck: &Deck, name: &str) -> Option<Status> {
        deck.index_of(name).and_then(|i| self.statuses.get(i).copied())
    }

    /// Mark a card as cleared. Returns true if it was previously unknown.
    pub fn mark_cleared(&mut self, deck: &Deck, card: &Card) -> Result<bool, InputError> {
        let slot = deck
            .lookup(card.category, &card.name)
            .and_then(|_| deck.index_of(&card.name))
            .and_then(|i| self.statuses.get_mut(i))
            .ok_or_else(|| InputError::UnknownItem {
                category: card.category,
                name: card.name.clone(),
            })?;
        let newly = *slot == Status::Unknown;
        *slot = Status::Cleared;
        Ok(newly)
    }

    #[inline]
    pub fn cleared_count(&self) -> usize {
        self.statuses.iter().filter(|s| **s == Status::Cleared).count()
    }

    /// Items of a category not yet cleared: the remaining candidates for the solution.
    pub fn candidates<'d>(&self, deck: &'d Deck, category: Category) -> Vec<&'d str> {
        deck.cards()
            .zip(&self.statuses)
            .filter(|(c, s)| c.category == category && **s == Status::Unknown)
            .map(|(c, _)| c.name.as_str())
            .collect()
    }

    pub fn snapshot(&self, deck: &Deck) -> KnowledgeSnapshot {
        self.snapshot_with_checklist(deck, &BTreeSet::new())
    }

    pub fn snapshot_with_checklist(&self, deck: &Deck, checked: &BTreeSet<String>) -> KnowledgeSnapshot {
        let categories = Category::all()
            .into_iter()
            .map(|category| CategoryReport {
                category,
                entries: deck
                    .cards()
                    .zip(&self.statuses)
                    .filter(|(c, _)| c.category == category)
                    .map(|(c, s)| SnapshotEntry {
                        name: c.name.clone(),
                        status: *s,
                        checked: checked.contains(&c.name),
                    })
                    .collect(),
            })
            .collect();
        KnowledgeSnapshot { categories }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub name: String,
    pub status: Status,
    /// Manual checklist mark, independent of `status`.
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub category: Category,
    pub entries: Vec<SnapshotEntry>,
}

/// Display-ready view: suspects, weapons, rooms, each in deck order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeSnapshot {
    pub categories: Vec<CategoryReport>,
}

impl KnowledgeSnapshot {
    pub fn status_of(&self, name: &str) -> Option<Status> {
        self.categories
            .iter()
            .flat_map(|c| c.entries.iter())
            .find(|e| e.name == name)
            .map(|e| e.status)
    }

    pub fn category(&self, category: Category) -> Option<&CategoryReport> {
        self.categories.iter().find(|c| c.category == category)
    }
}
