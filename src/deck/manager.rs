//! Deck state: the ordered card list plus its removal log.
//!
//! The deck is a flat sequence of shared card handles. Quantity is implicit:
//! three copies of a card are three entries. Invalid operations (bad index,
//! no match, nothing to undo) are silent no-ops.

use im::Vector;
use tracing::debug;

use crate::cards::{CardIdentity, CardRef};

use super::history::{Removal, RemovalLog};
use super::sort::compare_cards;
use super::view::{group_cards, DeckEntry, DeckStats};

/// Ordered multiset of cards with multi-step undo.
///
/// ## Usage
///
/// ```
/// use std::sync::Arc;
/// use tcg_deckbuilder::cards::Card;
/// use tcg_deckbuilder::deck::DeckState;
///
/// let mut deck = DeckState::new();
/// let pikachu = Arc::new(Card::new("base1-58", "Pikachu", "base1", "58"));
///
/// deck.add(pikachu.clone());
/// deck.add(pikachu.clone());
/// deck.remove_at(0);
/// assert_eq!(deck.len(), 1);
///
/// deck.undo();
/// assert_eq!(deck.len(), 2);
/// assert_eq!(deck.grouped_view()[0].count, 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DeckState {
    cards: Vector<CardRef>,
    removals: RemovalLog,
}

impl DeckState {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck from cards, with no undo history.
    pub fn from_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = CardRef>,
    {
        Self {
            cards: cards.into_iter().collect(),
            removals: RemovalLog::new(),
        }
    }

    /// Number of cards, copies included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CardRef> {
        self.cards.get(index)
    }

    /// Iterate cards in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &CardRef> {
        self.cards.iter()
    }

    /// O(1) copy of the current card list.
    #[must_use]
    pub fn snapshot(&self) -> Vector<CardRef> {
        self.cards.clone()
    }

    /// Append a card. Always succeeds.
    pub fn add(&mut self, card: CardRef) {
        debug!(card = %card.name, len = self.cards.len() + 1, "deck: add");
        self.cards.push_back(card);
    }

    /// Remove the card at `index` and record it for undo.
    ///
    /// Returns `None` (and changes nothing) if the index is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Option<CardRef> {
        if index >= self.cards.len() {
            debug!(index, len = self.cards.len(), "deck: remove index out of bounds ignored");
            return None;
        }
        let card = self.cards.remove(index);
        debug!(card = %card.name, index, "deck: remove");
        self.removals.push(Removal::Single(CardRef::clone(&card)));
        Some(card)
    }

    /// Remove the last copy of a card, by identity.
    pub fn remove_last(&mut self, identity: &CardIdentity) -> Option<CardRef> {
        let index = self
            .cards
            .iter()
            .rposition(|c| c.matches(identity));
        match index {
            Some(i) => self.remove_at(i),
            None => {
                debug!(card = %identity, "deck: remove_last found no match");
                None
            }
        }
    }

    /// Undo the newest removal, appending its cards to the end.
    ///
    /// Returns how many cards came back (0 when there is nothing to undo).
    pub fn undo(&mut self) -> usize {
        let Some(removal) = self.removals.pop() else {
            return 0;
        };
        let restored = removal.into_cards();
        let count = restored.len();
        self.cards.append(restored);
        debug!(restored = count, len = self.cards.len(), "deck: undo");
        count
    }

    /// Empty the deck.
    ///
    /// The cleared cards are recorded as one removal, so a single `undo`
    /// brings all of them back. Returns how many cards were cleared.
    pub fn clear(&mut self) -> usize {
        let cleared = std::mem::take(&mut self.cards);
        let count = cleared.len();
        self.removals.push(Removal::Cleared(cleared));
        debug!(cleared = count, "deck: clear");
        count
    }

    /// Replace the whole deck and drop the undo history.
    pub fn replace<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = CardRef>,
    {
        self.cards = cards.into_iter().collect();
        self.removals.clear();
        debug!(len = self.cards.len(), "deck: replaced");
    }

    /// Check if there is anything to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.removals.is_empty()
    }

    /// Number of undo steps available.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.removals.len()
    }

    /// Copies of a card in the deck.
    #[must_use]
    pub fn count_of(&self, identity: &CardIdentity) -> usize {
        self.cards.iter().filter(|c| c.matches(identity)).count()
    }

    /// Counts per supertype and total price.
    #[must_use]
    pub fn aggregate(&self) -> DeckStats {
        DeckStats::from_cards(&self.cards)
    }

    /// One entry per distinct card, in first occurrence order.
    #[must_use]
    pub fn grouped_view(&self) -> Vec<DeckEntry> {
        group_cards(&self.cards)
    }

    /// Reorder the deck by supertype, elemental type, then name.
    ///
    /// Stable, so equal cards keep their relative order and sorting twice
    /// changes nothing.
    pub fn sort_in_place(&mut self) {
        let mut cards: Vec<CardRef> = self.cards.iter().cloned().collect();
        cards.sort_by(|a, b| compare_cards(a, b));
        self.cards = cards.into_iter().collect();
        debug!(len = self.cards.len(), "deck: sorted");
    }

    /// Shuffle the deck order in place.
    pub fn shuffle(&mut self, rng: &mut crate::core::DeckRng) {
        let mut cards: Vec<CardRef> = self.cards.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::DeckRng;
    use std::sync::Arc;

    fn card(name: &str, set: &str, number: &str) -> CardRef {
        Arc::new(Card::new(format!("{set}-{number}"), name, set, number))
    }

    fn names(deck: &DeckState) -> Vec<String> {
        deck.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_add_and_len() {
        let mut deck = DeckState::new();
        assert!(deck.is_empty());

        deck.add(card("A", "s", "1"));
        deck.add(card("B", "s", "2"));

        assert_eq!(deck.len(), 2);
        assert_eq!(names(&deck), vec!["A", "B"]);
        assert!(!deck.can_undo());
    }

    #[test]
    fn test_remove_at() {
        let mut deck = DeckState::new();
        deck.add(card("A", "s", "1"));
        deck.add(card("B", "s", "2"));
        deck.add(card("C", "s", "3"));

        let removed = deck.remove_at(1).unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(names(&deck), vec!["A", "C"]);
        assert!(deck.can_undo());
    }

    #[test]
    fn test_remove_at_out_of_bounds() {
        let mut deck = DeckState::new();
        deck.add(card("A", "s", "1"));

        assert!(deck.remove_at(1).is_none());
        assert!(deck.remove_at(usize::MAX).is_none());
        assert_eq!(deck.len(), 1);
        assert!(!deck.can_undo());
    }

    #[test]
    fn test_remove_last_picks_highest_index() {
        let mut deck = DeckState::new();
        let first = card("Pikachu", "base1", "58");
        let last = card("Pikachu", "base1", "58");
        deck.add(first.clone());
        deck.add(card("Bulbasaur", "base1", "44"));
        deck.add(last.clone());

        let removed = deck.remove_last(&CardIdentity::new("Pikachu", "58", "base1")).unwrap();

        assert!(Arc::ptr_eq(&removed, &last));
        assert_eq!(names(&deck), vec!["Pikachu", "Bulbasaur"]);
        assert!(Arc::ptr_eq(deck.get(0).unwrap(), &first));
    }

    #[test]
    fn test_remove_last_no_match() {
        let mut deck = DeckState::new();
        deck.add(card("Pikachu", "base1", "58"));

        assert!(deck.remove_last(&CardIdentity::new("Pikachu", "58", "jungle")).is_none());
        assert_eq!(deck.len(), 1);
        assert!(!deck.can_undo());
    }

    #[test]
    fn test_undo_appends_exact_reference() {
        let mut deck = DeckState::new();
        let a = card("A", "s", "1");
        deck.add(a.clone());
        deck.add(card("B", "s", "2"));

        deck.remove_at(0);
        assert_eq!(deck.undo(), 1);

        assert_eq!(names(&deck), vec!["B", "A"]);
        assert!(Arc::ptr_eq(deck.get(1).unwrap(), &a));
        assert!(!deck.can_undo());
    }

    #[test]
    fn test_multi_step_undo() {
        let mut deck = DeckState::new();
        deck.add(card("A", "s", "1"));
        deck.add(card("B", "s", "2"));
        deck.add(card("C", "s", "3"));

        deck.remove_at(0); // A
        deck.remove_at(0); // B
        assert_eq!(deck.undo_depth(), 2);

        deck.undo();
        deck.undo();
        assert_eq!(names(&deck), vec!["C", "B", "A"]);
        assert_eq!(deck.undo(), 0);
    }

    #[test]
    fn test_clear_is_undoable() {
        let mut deck = DeckState::new();
        deck.add(card("A", "s", "1"));
        deck.add(card("B", "s", "2"));
        deck.remove_at(0);

        assert_eq!(deck.clear(), 1);
        assert!(deck.is_empty());
        assert_eq!(deck.undo_depth(), 2);

        assert_eq!(deck.undo(), 1);
        assert_eq!(names(&deck), vec!["B"]);
        deck.undo();
        assert_eq!(names(&deck), vec!["B", "A"]);
    }

    #[test]
    fn test_clear_empty_records_nothing() {
        let mut deck = DeckState::new();
        assert_eq!(deck.clear(), 0);
        assert!(!deck.can_undo());
    }

    #[test]
    fn test_replace_drops_history() {
        let mut deck = DeckState::new();
        deck.add(card("A", "s", "1"));
        deck.remove_at(0);

        deck.replace(vec![card("X", "s", "9"), card("Y", "s", "8")]);

        assert_eq!(names(&deck), vec!["X", "Y"]);
        assert!(!deck.can_undo());
    }

    #[test]
    fn test_sort_changes_grouping_order() {
        let mut deck = DeckState::new();
        deck.add(Arc::new(Card::new("e", "Fire Energy", "s", "1").with_supertype("Energy")));
        deck.add(Arc::new(Card::new("t", "Potion", "s", "2").with_supertype("Trainer")));
        deck.add(Arc::new(
            Card::new("c", "Charmander", "s", "3").with_supertype("Pokémon").with_type("Fire"),
        ));
        deck.add(Arc::new(
            Card::new("b", "Bulbasaur", "s", "4").with_supertype("Pokémon").with_type("Grass"),
        ));

        deck.sort_in_place();
        assert_eq!(names(&deck), vec!["Bulbasaur", "Charmander", "Potion", "Fire Energy"]);

        let grouped: Vec<_> = deck.grouped_view().iter().map(|e| e.card.name.clone()).collect();
        assert_eq!(grouped, names(&deck));
    }

    #[test]
    fn test_count_of_and_aggregate() {
        let mut deck = DeckState::new();
        let pika = card("Pikachu", "base1", "58");
        deck.add(pika.clone());
        deck.add(pika.clone());
        deck.add(card("Bulbasaur", "base1", "44"));

        assert_eq!(deck.count_of(&pika.identity()), 2);
        assert_eq!(deck.aggregate().total, 3);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut deck = DeckState::from_cards(vec![card("A", "s", "1")]);
        let snapshot = deck.snapshot();
        deck.add(card("B", "s", "2"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let mut deck = DeckState::from_cards((0..20).map(|i| card("C", "s", &i.to_string())));
        let before: Vec<_> = deck.iter().map(|c| c.number.clone()).collect();

        deck.shuffle(&mut DeckRng::new(42));

        let mut after: Vec<_> = deck.iter().map(|c| c.number.clone()).collect();
        assert_ne!(before, after);
        after.sort();
        let mut sorted_before = before;
        sorted_before.sort();
        assert_eq!(after, sorted_before);
    }
}
