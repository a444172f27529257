use super::action::Action;
use super::ledger::Ledger;
use super::player::Player;
use super::rules::Rules;
use super::stage::Stage;
use crate::Error;
use crate::Position;
use crate::cards::Card;
use crate::cards::Dealer;
use crate::cards::Deck;
use crate::chips::Bet;
use crate::table::Table;

/// The round state machine of a single table.
///
/// `Game` owns everything a round mutates: the deck, the cards that have
/// left it, the betting ledger, the active [`Stage`] and the cursor naming
/// whose turn it is. Hosts drive it one action at a time through the
/// methods below or through [`apply`](Self::apply).
///
/// # Legality
///
/// Each action is acted on only in the stages listed by
/// [`Stage::permits`]. Outside them the action is ignored and the game is
/// left as it was, unless [`Rules::strict`] asks for
/// [`Error::IllegalAction`] instead.
///
/// # Failure
///
/// Actions are all-or-nothing. Every precondition is checked before the
/// first mutation, so an `Err` leaves ledger, table, stage and cursor
/// untouched. [`start`](Self::start) is the exception: it clears the old
/// round and reshuffles before it can tell whether the deck covers every
/// seat, so a failed start leaves an empty round behind.
///
/// # Seats
///
/// Seat 0 posts the high forced bet and seat 1 the low one.
#[derive(Debug, Clone)]
pub struct Game<D = Deck, H = ()> {
    players: Vec<Player<H>>,
    deck: D,
    table: Table,
    ledger: Ledger,
    rules: Rules,
    stage: Stage,
    cursor: Position,
    last: Option<Bet>,
}

impl<D: Dealer, H> Game<D, H> {
    const HIGH: Position = 0;
    const LOW: Position = 1;

    pub fn new(players: Vec<Player<H>>, deck: D, rules: Rules) -> Result<Self, Error> {
        if players.len() < 2 {
            return Err(Error::TooFewPlayers(players.len()));
        }
        Ok(Self {
            players,
            deck,
            table: Table::empty(),
            ledger: Ledger::empty(),
            rules,
            stage: Stage::WaitForBets,
            cursor: 0,
            last: None,
        })
    }
}

/// Public state accessors.
impl<D: Dealer, H> Game<D, H> {
    pub fn n(&self) -> usize {
        self.players.len()
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    /// Seat whose action is currently expected.
    pub fn cursor(&self) -> Position {
        self.cursor
    }
    pub fn actor(&self) -> &Player<H> {
        &self.players[self.cursor]
    }
    pub fn players(&self) -> &[Player<H>] {
        &self.players
    }
    pub fn player(&self, seat: Position) -> Option<&Player<H>> {
        self.players.get(seat)
    }
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn deck(&self) -> &D {
        &self.deck
    }
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
    /// The bet a call repeats and a raise builds on.
    pub fn last_bet(&self) -> Option<&Bet> {
        self.last.as_ref()
    }
    /// Seats that have not folded, in table order.
    pub fn active(&self) -> Vec<Position> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_folded())
            .map(|(i, _)| i)
            .collect()
    }
    /// Whether the active seats have matched each other's bets.
    pub fn is_settled(&self) -> bool {
        self.ledger
            .is_settled(&self.active(), self.rules.settlement())
    }
}

/// Actions.
impl<D: Dealer, H> Game<D, H> {
    /// Dispatches an [`Action`] to the matching method.
    ///
    /// Returns the burned card for [`Action::Blinds`] and
    /// [`Action::Deal`], `None` for everything else.
    pub fn apply(&mut self, action: Action) -> Result<Option<Card>, Error> {
        match action {
            Action::Start => self.start().map(|_| None),
            Action::High => self.high().map(|_| None),
            Action::Low => self.low().map(|_| None),
            Action::Call(p) => self.call(p).map(|_| None),
            Action::Fold(p) => self.fold(p).map(|_| None),
            Action::Raise(p, extra) => self.raise(p, extra).map(|_| None),
            Action::Blinds => self.blinds().map(Some),
            Action::Deal => self.deal().map(Some),
        }
    }

    /// Begins a fresh round.
    ///
    /// Clears the previous round's bets, folds, hands and table, reshuffles
    /// the deck, and deals hole cards one at a time around the table until
    /// every player holds [`HOLE_CARDS`](crate::HOLE_CARDS).
    ///
    /// The reset happens before the deck is counted, so when the table has
    /// more players than the deck can serve the round is left empty with a
    /// full deck and the stage unchanged.
    pub fn start(&mut self) -> Result<(), Error> {
        self.ledger.clear();
        self.table.clear();
        self.last = None;
        self.cursor = 0;
        self.players.iter_mut().for_each(Player::reset);
        self.deck.initialize();
        let needed = crate::HOLE_CARDS * self.n();
        let remaining = self.deck.remaining();
        if remaining < needed {
            return Err(Error::EmptyDeck { needed, remaining });
        }
        for _ in 0..crate::HOLE_CARDS {
            for player in self.players.iter_mut() {
                player.give(self.deck.draw_top()?);
            }
        }
        self.transition(Stage::StartBets);
        Ok(())
    }
    /// The high seat posts the minimum bet.
    pub fn high(&mut self) -> Result<(), Error> {
        if !self.permits(Action::High)? {
            return Ok(());
        }
        let bet = self.players[Self::HIGH]
            .holding()
            .select(self.rules.min_bet())?;
        self.last = Some(bet);
        self.commit(Self::HIGH, bet);
        self.transition(Stage::Highs);
        self.cursor = 1 % self.n();
        Ok(())
    }
    /// The low seat posts half the minimum bet.
    pub fn low(&mut self) -> Result<(), Error> {
        if !self.permits(Action::Low)? {
            return Ok(());
        }
        let bet = self.players[Self::LOW]
            .holding()
            .select(self.rules.min_bet() / 2)?;
        self.commit(Self::LOW, bet);
        self.transition(Stage::Lows);
        self.cursor = 2 % self.n();
        Ok(())
    }
    /// `seat` commits the last bet again.
    pub fn call(&mut self, seat: Position) -> Result<(), Error> {
        if !self.permits(Action::Call(seat))? {
            return Ok(());
        }
        self.seated(seat)?;
        let bet = self.last.ok_or(Error::NoActiveBet)?;
        let next = self.rotation(None)?;
        self.transition(Stage::CallRaiseFold);
        self.commit(seat, bet);
        self.cursor = next;
        Ok(())
    }
    /// `seat` leaves the round.
    ///
    /// Fails with [`Error::AllPlayersFolded`] rather than fold the last
    /// active seat.
    pub fn fold(&mut self, seat: Position) -> Result<(), Error> {
        if !self.permits(Action::Fold(seat))? {
            return Ok(());
        }
        self.seated(seat)?;
        let next = self.rotation(Some(seat))?;
        log::debug!("{} FOLD", seat);
        self.players[seat].fold();
        self.cursor = next;
        Ok(())
    }
    /// `seat` commits `extra` on top of the last bet, which it replaces.
    pub fn raise(&mut self, seat: Position, extra: crate::Chips) -> Result<(), Error> {
        if !self.permits(Action::Raise(seat, extra))? {
            return Ok(());
        }
        self.seated(seat)?;
        let last = self.last.ok_or(Error::NoActiveBet)?;
        let next = self.rotation(None)?;
        let bet = self.players[seat]
            .holding()
            .select(extra.saturating_add(last.total()))?;
        self.last = Some(bet);
        self.commit(seat, bet);
        self.cursor = next;
        Ok(())
    }
    /// Burns a card and turns the flop. Returns the burned card.
    pub fn blinds(&mut self) -> Result<Card, Error> {
        let burned = self.table.turn(&mut self.deck, crate::FLOP_CARDS)?;
        self.transition(Stage::Blinds);
        Ok(burned)
    }
    /// Burns a card and turns one more, then reopens betting.
    /// Returns the burned card.
    pub fn deal(&mut self) -> Result<Card, Error> {
        let burned = self.table.turn(&mut self.deck, crate::STREET_CARDS)?;
        self.transition(Stage::Dealing);
        self.transition(Stage::WaitForBets);
        Ok(burned)
    }
}

/// Internal bookkeeping.
impl<D: Dealer, H> Game<D, H> {
    /// Ok(true) to proceed, Ok(false) to ignore, Err in strict mode.
    fn permits(&self, action: Action) -> Result<bool, Error> {
        if self.stage.permits(&action) {
            Ok(true)
        } else if self.rules.strict() {
            Err(Error::IllegalAction {
                action,
                stage: self.stage,
            })
        } else {
            log::warn!("ignoring {} during {}", action, self.stage);
            Ok(false)
        }
    }
    fn seated(&self, seat: Position) -> Result<(), Error> {
        match seat < self.n() {
            true => Ok(()),
            false => Err(Error::UnknownSeat(seat)),
        }
    }
    /// Records the bet, then moves to dealing once betting is settled.
    fn commit(&mut self, seat: Position, bet: Bet) {
        self.ledger.record(seat, bet);
        if self.is_settled() {
            self.transition(Stage::Dealing);
        }
    }
    /// Next seat after the cursor that has not folded, treating
    /// `folding` as folded too. Visits each seat at most once.
    fn rotation(&self, folding: Option<Position>) -> Result<Position, Error> {
        (1..=self.n())
            .map(|step| (self.cursor + step) % self.n())
            .find(|&i| !self.players[i].is_folded() && Some(i) != folding)
            .ok_or(Error::AllPlayersFolded)
    }
    fn transition(&mut self, stage: Stage) {
        log::debug!("{} -> {}", self.stage, stage);
        self.stage = stage;
    }
}

impl<D: Dealer, H> std::fmt::Display for Game<D, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, player) in self.players.iter().enumerate() {
            let marker = if i == self.cursor { ">" } else { " " };
            writeln!(
                f,
                "{}{} {} {:>6}",
                marker,
                i,
                player,
                self.ledger.cumulative(i)
            )?;
        }
        write!(f, "  {} {}", self.stage, self.table)
    }
}
