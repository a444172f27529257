use crate::Chips;
use crate::Position;
use crate::gameplay::Action;
use crate::gameplay::Stage;

/// Failures of a single table action.
///
/// Every variant is raised before the action mutates the ledger, the
/// table or the stage. A failed `start` is the one exception: it has
/// already cleared the previous round and reshuffled the deck. None of
/// them are safe to retry blindly: repeating a call or raise commits
/// chips twice.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The deck cannot supply the cards a move needs.
    #[error("deck has {remaining} cards, move needs {needed}")]
    EmptyDeck { needed: usize, remaining: usize },

    /// A wager asked for more than [`MAX_WAGER`](crate::MAX_WAGER).
    #[error("wager {target} exceeds the {max} table limit")]
    WagerTooLarge { target: Chips, max: Chips },

    /// A call or raise was made before any bet was on the table.
    #[error("no bet to call or raise against")]
    NoActiveBet,

    /// An action was attempted outside the stages that allow it.
    #[error("{action} is not allowed during {stage}")]
    IllegalAction { action: Action, stage: Stage },

    /// Turn rotation found nobody left to act.
    #[error("every player has folded")]
    AllPlayersFolded,

    /// An action named a seat that is not at the table.
    #[error("no player sits at position {0}")]
    UnknownSeat(Position),

    /// A match needs distinct high and low seats.
    #[error("a match needs at least 2 players, got {0}")]
    TooFewPlayers(usize),
}
