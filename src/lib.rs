//! Betting settlement and round state machine for a hold'em style table.
//!
//! The crate turns chip stock into concrete wagers, keeps a per-player
//! ledger of what was committed, and gates which actions are legal at each
//! stage of a round. Card evaluation, transport and persistence are left to
//! the host; the deck is consumed through the [`cards::Dealer`] trait.
pub mod cards;
pub mod chips;
pub mod error;
pub mod gameplay;
pub mod table;

pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Wager sizes, chip face values and cumulative commitments.
pub type Chips = u32;
/// Signed difference between cumulative commitments.
pub type Balance = i64;
/// Seat index around the table.
pub type Position = usize;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Forced bet posted by the high seat. The low seat posts half.
pub const MIN_BET: Chips = 20;
/// Chips of each denomination a player sits down with.
pub const STARTING_CHIPS: u32 = 10;
/// Private cards dealt to each player at round start.
pub const HOLE_CARDS: usize = 2;
/// Community cards turned by the blinds move.
pub const FLOP_CARDS: usize = 3;
/// Community cards turned by each later deal.
pub const STREET_CARDS: usize = 1;
/// Most community cards a board holds.
pub const BOARD_CARDS: usize = FLOP_CARDS + 2 * STREET_CARDS;
/// Largest single wager the table will size into chips.
pub const MAX_WAGER: Chips = 100_000;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
