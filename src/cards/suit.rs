#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade]
    }
}

impl TryFrom<&str> for Suit {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "c" => Ok(Suit::Club),
            "d" => Ok(Suit::Diamond),
            "h" => Ok(Suit::Heart),
            "s" => Ok(Suit::Spade),
            _ => Err(anyhow::anyhow!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Club => "c",
                Suit::Diamond => "d",
                Suit::Heart => "h",
                Suit::Spade => "s",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_display() {
        for suit in Suit::all() {
            let text = suit.to_string();
            assert!(Suit::try_from(text.as_str()).unwrap() == suit);
        }
        assert!(Suit::try_from("S").unwrap() == Suit::Spade);
        assert!(Suit::try_from("x").is_err());
    }
}
