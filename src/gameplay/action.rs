use crate::Chips;
use crate::Position;

/// Everything a host can ask a [`Game`](super::Game) to do.
///
/// Seated actions name the acting player explicitly. The engine does not
/// check that the named player holds the cursor.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Start,
    High,
    Low,
    Call(Position),
    Fold(Position),
    Raise(Position, Chips),
    Blinds,
    Deal,
}

impl Action {
    /// The seat taking the action, if any.
    pub fn seat(&self) -> Option<Position> {
        match self {
            Action::Call(p) | Action::Fold(p) | Action::Raise(p, _) => Some(*p),
            _ => None,
        }
    }
}

impl TryFrom<&str> for Action {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let words = s.split_whitespace().collect::<Vec<&str>>();
        let seat = |i: usize| -> anyhow::Result<Position> {
            Ok(words
                .get(i)
                .ok_or_else(|| anyhow::anyhow!("missing seat in {:?}", s))?
                .parse::<Position>()?)
        };
        match words.first().map(|w| w.to_lowercase()).as_deref() {
            Some("start") => Ok(Action::Start),
            Some("high") => Ok(Action::High),
            Some("low") => Ok(Action::Low),
            Some("blinds") => Ok(Action::Blinds),
            Some("deal") => Ok(Action::Deal),
            Some("call") => Ok(Action::Call(seat(1)?)),
            Some("fold") => Ok(Action::Fold(seat(1)?)),
            Some("raise") => Ok(Action::Raise(
                seat(1)?,
                words
                    .get(2)
                    .ok_or_else(|| anyhow::anyhow!("missing amount in {:?}", s))?
                    .parse::<Chips>()?,
            )),
            _ => Err(anyhow::anyhow!("invalid action string: {:?}", s)),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Start => write!(f, "START"),
            Action::High => write!(f, "HIGH"),
            Action::Low => write!(f, "LOW"),
            Action::Blinds => write!(f, "BLINDS"),
            Action::Deal => write!(f, "DEAL"),
            Action::Call(p) => write!(f, "{} CALL", p),
            Action::Fold(p) => write!(f, "{} FOLD", p),
            Action::Raise(p, extra) => write!(f, "{} RAISE {}", p, extra),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_seated() {
        assert!(Action::try_from("call 1").unwrap() == Action::Call(1));
        assert!(Action::try_from("FOLD 2").unwrap() == Action::Fold(2));
        assert!(Action::try_from("raise 0 30").unwrap() == Action::Raise(0, 30));
    }

    #[test]
    fn parse_unseated() {
        assert!(Action::try_from("blinds").unwrap() == Action::Blinds);
        assert!(Action::try_from(" deal ").unwrap() == Action::Deal);
        assert!(Action::try_from("start").unwrap() == Action::Start);
    }

    #[test]
    fn parse_rejects() {
        assert!(Action::try_from("call").is_err());
        assert!(Action::try_from("raise 1").is_err());
        assert!(Action::try_from("raise 1 x").is_err());
        assert!(Action::try_from("check 1").is_err());
        assert!(Action::try_from("").is_err());
    }

    #[test]
    fn seat_of_action() {
        assert!(Action::Raise(3, 10).seat() == Some(3));
        assert!(Action::Deal.seat() == None);
    }
}
