//! Removal log for undo.
//!
//! A LIFO stack of removals. Undo pops the newest entry; the deck appends
//! the restored cards at its end (original positions are not restored).

use im::Vector;

use crate::cards::CardRef;

/// One undoable removal.
#[derive(Clone, Debug)]
pub enum Removal {
    /// A single card taken out of the deck.
    Single(CardRef),
    /// The whole deck, cleared at once, in deck order.
    Cleared(Vector<CardRef>),
}

impl Removal {
    /// Number of cards this entry restores.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Removal::Single(_) => 1,
            Removal::Cleared(cards) => cards.len(),
        }
    }

    /// Check if this entry restores nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cards of this entry, in the order they will be re-appended.
    pub fn into_cards(self) -> Vector<CardRef> {
        match self {
            Removal::Single(card) => Vector::unit(card),
            Removal::Cleared(cards) => cards,
        }
    }
}

/// Stack of removals, newest last.
#[derive(Clone, Debug, Default)]
pub struct RemovalLog {
    entries: Vec<Removal>,
}

impl RemovalLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a removal. Empty removals are not recorded.
    pub fn push(&mut self, removal: Removal) {
        if !removal.is_empty() {
            self.entries.push(removal);
        }
    }

    /// Take the newest removal.
    pub fn pop(&mut self) -> Option<Removal> {
        self.entries.pop()
    }

    /// Look at the newest removal.
    #[must_use]
    pub fn peek(&self) -> Option<&Removal> {
        self.entries.last()
    }

    /// Number of undo steps available.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget all history.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use std::sync::Arc;

    fn card(name: &str) -> CardRef {
        Arc::new(Card::new(name, name, "set", "1"))
    }

    #[test]
    fn test_lifo() {
        let mut log = RemovalLog::new();
        let a = card("A");
        let b = card("B");

        log.push(Removal::Single(a.clone()));
        log.push(Removal::Single(b.clone()));
        assert_eq!(log.len(), 2);

        let Some(Removal::Single(popped)) = log.pop() else {
            panic!("expected single removal");
        };
        assert!(Arc::ptr_eq(&popped, &b));

        let Some(Removal::Single(popped)) = log.pop() else {
            panic!("expected single removal");
        };
        assert!(Arc::ptr_eq(&popped, &a));
        assert!(log.pop().is_none());
    }

    #[test]
    fn test_empty_clear_not_recorded() {
        let mut log = RemovalLog::new();
        log.push(Removal::Cleared(Vector::new()));
        assert!(log.is_empty());
    }

    #[test]
    fn test_cleared_into_cards_keeps_order() {
        let cards: Vector<CardRef> = vec![card("A"), card("B"), card("C")].into_iter().collect();
        let removal = Removal::Cleared(cards);
        assert_eq!(removal.len(), 3);

        let names: Vec<_> = removal.into_cards().iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
