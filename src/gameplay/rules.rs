use crate::Chips;

/// How the ledger decides that a betting stage is settled.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum SettlementRule {
    /// Right-associative difference of cumulative bets, `a - (b - c)`,
    /// settled at zero. Exact for two active players only.
    #[default]
    Alternating,
    /// Every active player has committed the same total.
    AllEqual,
}

/// Table rules a [`Game`](super::Game) is played under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    min_bet: Chips,
    strict: bool,
    settlement: SettlementRule,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_bet: crate::MIN_BET,
            strict: false,
            settlement: SettlementRule::default(),
        }
    }
}

impl Rules {
    /// Forced bet of the high seat.
    pub fn min_bet(&self) -> Chips {
        self.min_bet
    }
    /// When set, out-of-stage actions fail with
    /// [`Error::IllegalAction`](crate::Error::IllegalAction) instead of
    /// being ignored.
    pub fn strict(&self) -> bool {
        self.strict
    }
    pub fn settlement(&self) -> SettlementRule {
        self.settlement
    }
    pub fn with_min_bet(mut self, min_bet: Chips) -> Self {
        self.min_bet = min_bet;
        self
    }
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
    pub fn with_settlement(mut self, settlement: SettlementRule) -> Self {
        self.settlement = settlement;
        self
    }
}
