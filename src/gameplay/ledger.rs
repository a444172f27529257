use super::rules::SettlementRule;
use crate::Balance;
use crate::Chips;
use crate::Position;
use crate::chips::Bet;
use std::collections::BTreeMap;

/// Append-only history of the bets each seat has committed this round.
///
/// Totals are recomputed from the history on every query rather than
/// cached alongside it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ledger(BTreeMap<Position, Vec<Bet>>);

impl Ledger {
    pub fn empty() -> Self {
        Self::default()
    }
    /// Appends a bet to the seat's history. Holdings are not consulted.
    pub fn record(&mut self, seat: Position, bet: Bet) {
        log::debug!("{} BET {}", seat, bet);
        self.0.entry(seat).or_default().push(bet);
    }
    /// Bets committed by the seat, oldest first.
    pub fn bets(&self, seat: Position) -> &[Bet] {
        self.0.get(&seat).map(Vec::as_slice).unwrap_or(&[])
    }
    /// Sum of every bet the seat has committed, saturating at `Chips::MAX`.
    pub fn cumulative(&self, seat: Position) -> Chips {
        self.bets(seat)
            .iter()
            .map(Bet::total)
            .fold(0, Chips::saturating_add)
    }
    /// Cumulative totals folded from the right by subtraction.
    ///
    /// For seats `[a, b, c]` this is `a - (b - c)`. With two seats it is
    /// zero exactly when both have committed the same amount; with more it
    /// can be zero for unequal totals and nonzero for equal ones.
    /// `None` when no seats are given.
    pub fn balance(&self, seats: &[Position]) -> Option<Balance> {
        seats
            .iter()
            .rev()
            .map(|seat| self.cumulative(*seat) as Balance)
            .reduce(|acc, total| total - acc)
    }
    /// Whether betting among `seats` is complete under `rule`.
    pub fn is_settled(&self, seats: &[Position], rule: SettlementRule) -> bool {
        match rule {
            SettlementRule::Alternating => self.balance(seats) == Some(0),
            SettlementRule::AllEqual => {
                let mut totals = seats.iter().map(|seat| self.cumulative(*seat));
                match totals.next() {
                    Some(first) => totals.all(|total| total == first),
                    None => false,
                }
            }
        }
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
