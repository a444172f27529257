//! Interactive Table Binary
//!
//! Seats a handful of players and drives one round at a time from the
//! terminal. Type `help` for the command list, `quit` to leave.

use chipstack::cards::Deck;
use chipstack::gameplay::Action;
use chipstack::gameplay::Game;
use chipstack::gameplay::Player;
use chipstack::gameplay::Rules;
use chipstack::gameplay::SettlementRule;
use clap::Parser;
use colored::Colorize;
use dialoguer::Input;

#[derive(Parser)]
#[command(author, version, about = "Play betting rounds at a single table", long_about = None)]
struct Args {
    /// Number of seats at the table.
    #[arg(short, long, default_value_t = 3)]
    players: usize,
    /// Forced bet posted by the high seat.
    #[arg(short, long, default_value_t = chipstack::MIN_BET)]
    min_bet: chipstack::Chips,
    /// Reject out-of-stage actions instead of ignoring them.
    #[arg(long)]
    strict: bool,
    /// Settle when every active seat has bet the same total.
    #[arg(long)]
    all_equal: bool,
    /// Seed the deck for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn rules(&self) -> Rules {
        Rules::default()
            .with_min_bet(self.min_bet)
            .with_strict(self.strict)
            .with_settlement(match self.all_equal {
                true => SettlementRule::AllEqual,
                false => SettlementRule::Alternating,
            })
    }
    fn deck(&self) -> Deck {
        self.seed.map(Deck::seeded).unwrap_or_default()
    }
}

const HELP: &str = "start | high | low | blinds | deal | call <seat> | fold <seat> | raise <seat> <extra> | quit";

fn main() -> anyhow::Result<()> {
    chipstack::log()?;
    let args = Args::parse();
    let players = (0..args.players)
        .map(|i| Player::new(format!("P{}", i)))
        .collect::<Vec<Player>>();
    let mut game = Game::new(players, args.deck(), args.rules())?;
    log::info!("seated {} players, {}", game.n(), HELP);
    loop {
        println!("{}", game);
        let line = Input::<String>::new()
            .with_prompt(format!("{}", format!("{} >", game.stage()).bright_green()))
            .interact_text()?;
        match line.trim() {
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            text => match Action::try_from(text) {
                Err(e) => eprintln!("{}", e.to_string().red()),
                Ok(action) => match game.apply(action) {
                    Err(e) => eprintln!("{} {}", action.to_string().yellow(), e.to_string().red()),
                    Ok(Some(burned)) => println!("{} burned {}", action.to_string().cyan(), burned),
                    Ok(None) => println!("{}", action.to_string().cyan()),
                },
            },
        }
    }
    Ok(())
}
