use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::Error;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// The deck collaborator the round engine draws from.
///
/// Shuffling and card identity belong to the implementor. The engine
/// only ever takes the top card, strikes a card it has already moved,
/// and asks how many cards are left before committing to a move.
pub trait Dealer {
    /// Restores a full deck in a fresh order.
    fn initialize(&mut self);
    /// Takes the top card, or fails with [`Error::EmptyDeck`].
    fn draw_top(&mut self) -> Result<Card, Error>;
    /// Removes a specific card if still present.
    ///
    /// Absent cards are ignored; the return value reports whether
    /// anything was removed.
    fn remove(&mut self, card: Card) -> bool;
    /// Number of cards left to draw.
    fn remaining(&self) -> usize;
}

/// A shuffled 52-card deck, drawn from the top.
///
/// The random source lives with the deck so that a seeded deck
/// replays the same sequence of shuffles across rounds.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: SmallRng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub const SIZE: usize = 52;

    /// Creates a freshly shuffled deck from thread-local entropy.
    pub fn new() -> Self {
        Self::from(SmallRng::from_rng(&mut rand::rng()))
    }
    /// Creates a deck whose shuffles are fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::from(SmallRng::seed_from_u64(seed))
    }
    /// Tests whether a card is still in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
    /// The card that the next draw will return.
    pub fn peek(&self) -> Option<Card> {
        self.cards.last().copied()
    }
    fn sorted() -> Vec<Card> {
        Rank::all()
            .into_iter()
            .flat_map(|r| Suit::all().into_iter().map(move |s| Card::from((r, s))))
            .collect()
    }
}

impl From<SmallRng> for Deck {
    fn from(rng: SmallRng) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(Self::SIZE),
            rng,
        };
        deck.initialize();
        deck
    }
}

impl Dealer for Deck {
    fn initialize(&mut self) {
        self.cards = Self::sorted();
        self.cards.shuffle(&mut self.rng);
    }
    fn draw_top(&mut self) -> Result<Card, Error> {
        self.cards.pop().ok_or(Error::EmptyDeck {
            needed: 1,
            remaining: 0,
        })
    }
    fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|c| *c == card) {
            Some(i) => {
                self.cards.remove(i);
                true
            }
            None => false,
        }
    }
    fn remaining(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn full_deck_is_unique() {
        let deck = Deck::seeded(7);
        assert!(deck.remaining() == Deck::SIZE);
        let unique = deck.cards.iter().copied().collect::<HashSet<Card>>();
        assert!(unique.len() == Deck::SIZE);
    }

    #[test]
    fn seeded_decks_agree() {
        let mut a = Deck::seeded(42);
        let mut b = Deck::seeded(42);
        for _ in 0..Deck::SIZE {
            assert!(a.draw_top().unwrap() == b.draw_top().unwrap());
        }
    }

    #[test]
    fn draw_until_empty() {
        let mut deck = Deck::seeded(1);
        for _ in 0..Deck::SIZE {
            assert!(deck.draw_top().is_ok());
        }
        assert!(deck.remaining() == 0);
        assert!(matches!(deck.draw_top(), Err(Error::EmptyDeck { .. })));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut deck = Deck::seeded(3);
        let card = deck.peek().unwrap();
        assert!(deck.remove(card));
        assert!(!deck.remove(card));
        assert!(!deck.contains(&card));
        assert!(deck.remaining() == Deck::SIZE - 1);
    }

    #[test]
    fn initialize_restores() {
        let mut deck = Deck::seeded(5);
        deck.draw_top().unwrap();
        deck.draw_top().unwrap();
        deck.initialize();
        assert!(deck.remaining() == Deck::SIZE);
    }
}
