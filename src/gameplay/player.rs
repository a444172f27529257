use crate::cards::Card;
use crate::chips::Holding;

/// A seat at the table.
///
/// `hand` is whatever the host's hand evaluator attaches to the player.
/// The round engine carries it around but never looks inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player<H = ()> {
    name: String,
    holding: Holding,
    cards: Vec<Card>,
    folded: bool,
    hand: H,
}

impl Player<()> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holding: Holding::default(),
            cards: Vec::with_capacity(crate::HOLE_CARDS),
            folded: false,
            hand: (),
        }
    }
}

impl<H> Player<H> {
    pub fn with_holding(mut self, holding: Holding) -> Self {
        self.holding = holding;
        self
    }
    /// Attaches an evaluator value, replacing any previous one.
    pub fn with_hand<T>(self, hand: T) -> Player<T> {
        Player {
            name: self.name,
            holding: self.holding,
            cards: self.cards,
            folded: self.folded,
            hand,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn holding(&self) -> &Holding {
        &self.holding
    }
    /// Hole cards dealt this round.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn hand(&self) -> &H {
        &self.hand
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }

    pub(crate) fn fold(&mut self) {
        self.folded = true;
    }
    pub(crate) fn give(&mut self, card: Card) {
        self.cards.push(card);
    }
    pub(crate) fn reset(&mut self) {
        self.folded = false;
        self.cards.clear();
    }
}

impl<H> std::fmt::Display for Player<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self
            .cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        let state = if self.folded { "F" } else { "P" };
        write!(f, "{} {:<8} {:<5} ${:>5}", state, self.name, cards, self.holding.worth())
    }
}
