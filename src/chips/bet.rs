use super::denomination::Denomination;
use crate::Chips;

/// An immutable wager expressed as chip counts per denomination.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Bet([u32; Denomination::N]);

impl From<[u32; Denomination::N]> for Bet {
    fn from(counts: [u32; Denomination::N]) -> Self {
        Self(counts)
    }
}

impl Bet {
    pub fn empty() -> Self {
        Self::default()
    }
    /// Chips used of one denomination.
    pub fn count(&self, denomination: Denomination) -> u32 {
        self.0[denomination.index()]
    }
    /// Face value of the wager.
    pub fn total(&self) -> Chips {
        Denomination::all()
            .into_iter()
            .map(|d| self.count(d).saturating_mul(d.value()))
            .fold(0, Chips::saturating_add)
    }
    /// Number of physical chips in the wager.
    pub fn chips(&self) -> u32 {
        self.0.iter().fold(0, |acc, n| acc.saturating_add(*n))
    }
    pub fn is_empty(&self) -> bool {
        self.chips() == 0
    }
}

impl std::fmt::Display for Bet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let parts = Denomination::all()
            .into_iter()
            .filter(|d| self.count(*d) > 0)
            .map(|d| format!("{}x{}", self.count(d), d))
            .collect::<Vec<String>>();
        match parts.is_empty() {
            true => write!(f, "-- = 0"),
            false => write!(f, "{} = {}", parts.join(" + "), self.total()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_face_weighted() {
        let bet = Bet::from([1, 2, 3, 4]);
        assert!(bet.total() == 100 + 2 * 50 + 3 * 25 + 4 * 10);
        assert!(bet.chips() == 10);
    }

    #[test]
    fn empty_bet() {
        let bet = Bet::empty();
        assert!(bet.is_empty());
        assert!(bet.total() == 0);
        assert!(bet.to_string() == "-- = 0");
    }

    #[test]
    fn display_skips_unused() {
        let bet = Bet::from([0, 0, 1, 2]);
        assert!(bet.to_string() == "1x25 + 2x10 = 45");
    }
}
