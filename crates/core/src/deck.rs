use crate::{Card, CardType, RngState};

pub const DECK_SIZE: usize = 52;
pub const CARDS_PER_TYPE: u8 = 13;
pub const DEFAULT_HAND_CAPACITY: usize = 5;

/// The 52-card deck in canonical order: every number of each type, types in
/// `CardType::ALL` order.
pub fn canonical_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for kind in CardType::ALL {
        for number in 1..=CARDS_PER_TYPE {
            deck.push(Card::new(kind, number));
        }
    }
    deck
}

pub fn shuffled_deck(rng: &mut RngState) -> Vec<Card> {
    rng.shuffled(&canonical_deck())
}

/// Tops `hand` up to `capacity` from the front of `deck`, returning
/// `(hand, deck)`. A hand already at capacity is returned as is. A deck shorter
/// than the deficit is drawn empty and the hand stays under capacity.
pub fn draw_to(deck: &[Card], hand: &[Card], capacity: usize) -> (Vec<Card>, Vec<Card>) {
    let wanted = capacity.saturating_sub(hand.len());
    let count = wanted.min(deck.len());
    let mut new_hand = Vec::with_capacity(hand.len() + count);
    new_hand.extend_from_slice(hand);
    new_hand.extend_from_slice(&deck[..count]);
    (new_hand, deck[count..].to_vec())
}
