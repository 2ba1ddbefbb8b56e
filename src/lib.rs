//! Deduction assistant for the board game Clue.
//!
//! Feed it what happens at the table (your opening hand, suggestions and who
//! disproved them, cards you were shown) and it keeps a notebook column per
//! player and one for the hidden envelope, propagating every consequence until
//! nothing more follows.
//!
//! - [`cards`]: card identities, card sets, the registry and suggestions
//! - [`deduction`]: per-holder knowledge and the notebook that propagates it
//! - [`ledger`]: the move log, with undo by replay
pub mod cards;
pub mod deal;
pub mod deduction;
pub mod error;
pub mod ledger;
pub mod setup;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::Error;
pub use error::Result;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Fewest players the game supports.
pub const MIN_PLAYERS: usize = 3;
/// Most players the game supports.
pub const MAX_PLAYERS: usize = 6;
/// Cards in the envelope: one per category.
pub const ENVELOPE: usize = 3;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, WARN to terminal
/// so prompts stay readable.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
