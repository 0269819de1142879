//! Property tests for deck state invariants.
//!
//! Decks are built from a small pool of cards so duplicates are common,
//! then driven by random operation sequences.

use std::collections::BTreeMap;
use std::sync::Arc;

use proptest::prelude::*;

use tcg_deckbuilder::cards::{Card, CardRef};
use tcg_deckbuilder::deck::DeckState;
use tcg_deckbuilder::io::{export_json, parse_deck_json};
use tcg_deckbuilder::{ExportFormat, SearchPage, SearchSession};

const POOL: [(&str, &str, &str, &str); 6] = [
    ("Pikachu", "Pokémon", "Lightning", "58"),
    ("Charmander", "Pokémon", "Fire", "46"),
    ("Éevee", "Pokémon", "Colorless", "51"),
    ("Professor's Research", "Trainer", "", "147"),
    ("Rare Candy", "Trainer", "", "68"),
    ("Fire Energy", "Energy", "", "230"),
];

fn pool_card(i: usize) -> CardRef {
    let (name, supertype, ty, number) = POOL[i % POOL.len()];
    let mut card = Card::new(format!("sv1-{number}"), name, "sv1", number).with_supertype(supertype);
    if !ty.is_empty() {
        card = card.with_type(ty);
    }
    Arc::new(card)
}

#[derive(Clone, Debug)]
enum Op {
    Add(usize),
    RemoveAt(usize),
    RemoveLast(usize),
    Undo,
    Clear,
    Sort,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..POOL.len()).prop_map(Op::Add),
        2 => (0usize..40).prop_map(Op::RemoveAt),
        2 => (0..POOL.len()).prop_map(Op::RemoveLast),
        2 => Just(Op::Undo),
        1 => Just(Op::Clear),
        1 => Just(Op::Sort),
    ]
}

fn apply(deck: &mut DeckState, op: &Op) {
    match op {
        Op::Add(i) => deck.add(pool_card(*i)),
        Op::RemoveAt(i) => {
            deck.remove_at(*i);
        }
        Op::RemoveLast(i) => {
            deck.remove_last(&pool_card(*i).identity());
        }
        Op::Undo => {
            deck.undo();
        }
        Op::Clear => {
            deck.clear();
        }
        Op::Sort => deck.sort_in_place(),
    }
}

fn multiset(deck: &DeckState) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for card in deck.iter() {
        *counts.entry(card.identity().to_string()).or_insert(0) += 1;
    }
    counts
}

fn deck_from(ops: &[Op]) -> DeckState {
    let mut deck = DeckState::new();
    for op in ops {
        apply(&mut deck, op);
    }
    deck
}

proptest! {
    #[test]
    fn prop_aggregate_total_matches_len(ops in prop::collection::vec(op(), 0..60)) {
        let deck = deck_from(&ops);
        let stats = deck.aggregate();

        prop_assert_eq!(stats.total, deck.len());
        prop_assert_eq!(stats.pokemon + stats.trainer + stats.energy + stats.other, deck.len());
    }

    #[test]
    fn prop_grouped_counts_sum_to_len(ops in prop::collection::vec(op(), 0..60)) {
        let deck = deck_from(&ops);
        let view = deck.grouped_view();

        prop_assert_eq!(view.iter().map(|e| e.count).sum::<usize>(), deck.len());
        for entry in &view {
            prop_assert_eq!(entry.count, deck.count_of(&entry.card.identity()));
        }
    }

    #[test]
    fn prop_remove_then_undo_restores_multiset(
        ops in prop::collection::vec(op(), 0..40),
        index in 0usize..40,
    ) {
        let mut deck = deck_from(&ops);
        let before = multiset(&deck);

        if deck.remove_at(index).is_some() {
            prop_assert_eq!(deck.undo(), 1);
        }
        prop_assert_eq!(multiset(&deck), before);
    }

    #[test]
    fn prop_clear_then_undo_restores_deck(ops in prop::collection::vec(op(), 0..40)) {
        let mut deck = deck_from(&ops);
        let before: Vec<String> = deck.iter().map(|c| c.identity().to_string()).collect();

        let cleared = deck.clear();
        prop_assert!(deck.is_empty());
        prop_assert_eq!(cleared, before.len());
        if cleared == 0 {
            // Nothing recorded, so undo would restore an older removal.
            return Ok(());
        }
        prop_assert_eq!(deck.undo(), cleared);

        let after: Vec<String> = deck.iter().map(|c| c.identity().to_string()).collect();
        prop_assert_eq!(after, before);
    }

    #[test]
    fn prop_sort_idempotent(ops in prop::collection::vec(op(), 0..60)) {
        let mut deck = deck_from(&ops);
        deck.sort_in_place();
        let once: Vec<CardRef> = deck.iter().cloned().collect();
        deck.sort_in_place();

        prop_assert_eq!(deck.len(), once.len());
        for (a, b) in deck.iter().zip(&once) {
            prop_assert!(Arc::ptr_eq(a, b));
        }
    }

    #[test]
    fn prop_sort_keeps_multiset(ops in prop::collection::vec(op(), 0..60)) {
        let mut deck = deck_from(&ops);
        let before = multiset(&deck);
        deck.sort_in_place();
        prop_assert_eq!(multiset(&deck), before);
    }

    #[test]
    fn prop_export_import_preserves_deck(ops in prop::collection::vec(op(), 0..40)) {
        let deck = deck_from(&ops);
        let json = export_json(&deck, ExportFormat::Full, "back.png").unwrap();
        let imported = parse_deck_json(&json).unwrap();

        let original: Vec<Card> = deck.iter().map(|c| Card::clone(c)).collect();
        prop_assert_eq!(imported, original);
    }

    #[test]
    fn prop_has_more_iff_full_page(page_size in 1usize..30, received in 0usize..40) {
        let mut session = SearchSession::new(page_size);
        let request = session.begin_search("pikachu").unwrap();
        let cards: Vec<Card> = (0..received)
            .map(|i| Card::new(format!("c-{i}"), "Pikachu", "s", i.to_string()))
            .collect();

        session.complete(&request, Ok(SearchPage::from(cards))).unwrap();
        prop_assert_eq!(session.has_more(), received >= page_size);
        prop_assert!(!session.is_loading());
    }
}
