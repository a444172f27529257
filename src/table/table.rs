use super::moves::Move;
use super::moves::MoveKind;
use crate::Error;
use crate::cards::Card;
use crate::cards::Dealer;

/// Cards that have left the deck during a round.
///
/// `moves` is the full ordered history. `board` holds the played cards in
/// the order they were turned and `burned` holds the discards. A card
/// taken from the deck lands in exactly one of the two, and applying a
/// play strikes it from the deck, so no card is ever both on the table and
/// still drawable.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Table {
    moves: Vec<Move>,
    board: Vec<Card>,
    burned: Vec<Card>,
}

impl Table {
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn burned(&self) -> &[Card] {
        &self.burned
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.board.contains(card) || self.burned.contains(card)
    }
    pub fn clear(&mut self) {
        self.moves.clear();
        self.board.clear();
        self.burned.clear();
    }

    /// Burns one card and turns `n` onto the board.
    ///
    /// The deck is checked up front so that a short deck leaves both the
    /// deck and the table untouched. Returns the burned card.
    pub fn turn<D: Dealer>(&mut self, deck: &mut D, n: usize) -> Result<Card, Error> {
        let needed = n + 1;
        let remaining = deck.remaining();
        if remaining < needed {
            return Err(Error::EmptyDeck { needed, remaining });
        }
        let burned = self.burn(deck)?;
        for _ in 0..n {
            self.draw(deck)?;
        }
        Ok(burned)
    }
    /// Takes the top card and plays it onto the board.
    pub fn draw<D: Dealer>(&mut self, deck: &mut D) -> Result<Card, Error> {
        let card = deck.draw_top()?;
        let play = Move::play(card);
        self.record(play);
        self.apply(deck, play);
        Ok(card)
    }
    /// Takes the top card and burns it.
    pub fn burn<D: Dealer>(&mut self, deck: &mut D) -> Result<Card, Error> {
        let card = deck.draw_top()?;
        let burn = Move::discard(card);
        self.record(burn);
        self.apply(deck, burn);
        Ok(card)
    }

    fn record(&mut self, m: Move) {
        log::debug!("{}", m);
        self.moves.push(m);
    }
    fn apply<D: Dealer>(&mut self, deck: &mut D, m: Move) {
        debug_assert!(!self.contains(&m.card()), "card moved twice");
        deck.remove(m.card());
        match m.kind() {
            MoveKind::Play => self.board.push(m.card()),
            MoveKind::Discard => self.burned.push(m.card()),
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let board = self
            .board
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "[{}]", board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;

    #[test]
    fn draw_plays_to_board() {
        let mut deck = Deck::seeded(11);
        let mut table = Table::empty();
        let top = deck.peek().unwrap();
        let card = table.draw(&mut deck).unwrap();
        assert!(card == top);
        assert!(table.board() == &[top]);
        assert!(table.moves() == &[Move::play(top)]);
        assert!(!deck.contains(&top));
    }

    #[test]
    fn burn_stays_off_board() {
        let mut deck = Deck::seeded(12);
        let mut table = Table::empty();
        let card = table.burn(&mut deck).unwrap();
        assert!(table.board().is_empty());
        assert!(table.burned() == &[card]);
        assert!(table.moves()[0].kind() == MoveKind::Discard);
    }

    #[test]
    fn turn_burns_then_plays() {
        let mut deck = Deck::seeded(13);
        let mut table = Table::empty();
        let burned = table.turn(&mut deck, crate::FLOP_CARDS).unwrap();
        assert!(table.burned() == &[burned]);
        assert!(table.board().len() == crate::FLOP_CARDS);
        assert!(table.moves().len() == crate::FLOP_CARDS + 1);
        assert!(deck.remaining() == Deck::SIZE - crate::FLOP_CARDS - 1);
        assert!(table.board().iter().all(|c| !deck.contains(c)));
    }

    #[test]
    fn short_deck_moves_nothing() {
        let mut deck = Deck::seeded(14);
        while deck.remaining() > 3 {
            deck.draw_top().unwrap();
        }
        let mut table = Table::empty();
        let err = table.turn(&mut deck, crate::FLOP_CARDS).unwrap_err();
        assert!(err == Error::EmptyDeck { needed: 4, remaining: 3 });
        assert!(deck.remaining() == 3);
        assert!(table.moves().is_empty());
    }

    #[test]
    fn cards_move_once() {
        let mut deck = Deck::seeded(15);
        let mut table = Table::empty();
        table.turn(&mut deck, 3).unwrap();
        table.turn(&mut deck, 1).unwrap();
        table.turn(&mut deck, 1).unwrap();
        let mut seen = table.moves().iter().map(|m| m.card()).collect::<Vec<Card>>();
        seen.sort();
        seen.dedup();
        assert!(seen.len() == table.moves().len());
    }
}
