use super::rank::Rank;
use super::suit::Suit;

/// A single playing card.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// str isomorphism
/// rank then suit, e.g. "Ts" or "2c"
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars().map(String::from);
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => Ok(Self {
                rank: Rank::try_from(rank.as_str())?,
                suit: Suit::try_from(suit.as_str())?,
            }),
            _ => Err(anyhow::anyhow!("card str must be 2 chars: {}", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_rank_first() {
        let low = Card::from((Rank::Two, Suit::Spade));
        let high = Card::from((Rank::Three, Suit::Club));
        assert!(low < high);
    }

    #[test]
    fn parse_str() {
        let card = Card::try_from("Ts").unwrap();
        assert!(card.rank() == Rank::Ten);
        assert!(card.suit() == Suit::Spade);
        assert!(card.to_string() == "Ts");
        assert!(Card::try_from("T").is_err());
        assert!(Card::try_from("Xs").is_err());
    }
}
