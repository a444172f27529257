use super::action::Action;

/// Phase of a betting round.
///
/// Exactly one stage is active at a time. It decides which [`Action`]s
/// the [`Game`](super::Game) will act on; everything else is ignored.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Stage {
    StartBets,
    Highs,
    Lows,
    Blinds,
    WaitForBets,
    CallRaiseFold,
    Dealing,
}

impl Stage {
    pub const fn all() -> [Self; 7] {
        [
            Stage::StartBets,
            Stage::Highs,
            Stage::Lows,
            Stage::Blinds,
            Stage::WaitForBets,
            Stage::CallRaiseFold,
            Stage::Dealing,
        ]
    }
    /// Whether players may call, raise or fold.
    pub fn is_betting(&self) -> bool {
        matches!(self, Stage::WaitForBets | Stage::CallRaiseFold)
    }
    /// Whether `action` is acted on in this stage.
    pub fn permits(&self, action: &Action) -> bool {
        match action {
            Action::Start | Action::Blinds | Action::Deal => true,
            Action::High => *self == Stage::StartBets,
            Action::Low => *self == Stage::Highs,
            Action::Call(_) | Action::Fold(_) | Action::Raise(_, _) => self.is_betting(),
        }
    }
}

impl TryFrom<&str> for Stage {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|stage| stage.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("invalid stage string: {}", s))
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Stage::StartBets => write!(f, "StartBets"),
            Stage::Highs => write!(f, "Highs"),
            Stage::Lows => write!(f, "Lows"),
            Stage::Blinds => write!(f, "Blinds"),
            Stage::WaitForBets => write!(f, "WaitForBets"),
            Stage::CallRaiseFold => write!(f, "CallRaiseFold"),
            Stage::Dealing => write!(f, "Dealing"),
        }
    }
}
