use super::bet::Bet;
use super::denomination::Denomination;
use super::distribution::Distribution;
use crate::Chips;
use crate::Error;

/// Chips a player owns, counted per denomination.
///
/// Holdings are fixed when the player sits down. Placing a bet does
/// not draw them down, so the same counts weight every selection for
/// the rest of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Holding([u32; Denomination::N]);

impl Default for Holding {
    fn default() -> Self {
        Self([crate::STARTING_CHIPS; Denomination::N])
    }
}

impl From<[u32; Denomination::N]> for Holding {
    fn from(counts: [u32; Denomination::N]) -> Self {
        Self(counts)
    }
}

impl Holding {
    /// Number of chips owned of one denomination.
    pub fn count(&self, denomination: Denomination) -> u32 {
        self.0[denomination.index()]
    }
    /// Total face value of everything owned.
    pub fn worth(&self) -> Chips {
        Denomination::all()
            .into_iter()
            .map(|d| self.count(d).saturating_mul(d.value()))
            .fold(0, Chips::saturating_add)
    }
    /// Chooses the chips to put forward for a wager of `target`.
    ///
    /// Fails with [`Error::WagerTooLarge`] above [`MAX_WAGER`](crate::MAX_WAGER).
    pub fn select(&self, target: Chips) -> Result<Bet, Error> {
        Distribution::from((target, self)).solve()
    }
}

impl std::fmt::Display for Holding {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for d in Denomination::all() {
            write!(f, "{:>3}x{:<4}", self.count(d), d.value())?;
        }
        Ok(())
    }
}
