use crate::cards::Card;

/// Where a moved card ends up.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    /// Burned face down, never part of the board.
    Discard,
    /// Turned face up onto the board.
    Play,
}

/// A single card leaving the deck.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    kind: MoveKind,
    card: Card,
}

impl Move {
    pub fn play(card: Card) -> Self {
        Self {
            kind: MoveKind::Play,
            card,
        }
    }
    pub fn discard(card: Card) -> Self {
        Self {
            kind: MoveKind::Discard,
            card,
        }
    }
    pub fn kind(&self) -> MoveKind {
        self.kind
    }
    pub fn card(&self) -> Card {
        self.card
    }
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MoveKind::Discard => write!(f, "BURN"),
            MoveKind::Play => write!(f, "PLAY"),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.card)
    }
}
