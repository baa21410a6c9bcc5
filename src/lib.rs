//! Hand-range notation and 13x13 combo grids for a postflop solver front end.
//!
//! Text such as `AKs+, 72o:0.5, JJ-88` is trimmed and validated locally,
//! handed to an [`engine::Engine`] for authoritative parsing, and the weights
//! it returns are mirrored into a per-seat [`range::Grid`] for display and
//! cell-by-cell editing.
pub mod app;
pub mod cards;
pub mod engine;
pub mod range;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Fraction of a bucket's combos included in a range, on the engine's 0..=1 scale.
pub type Weight = f32;
/// The same fraction on the 0..=100 display scale used by grids.
pub type Percent = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests and benchmarks.
pub trait Arbitrary {
    fn random() -> Self;
}

// ============================================================================
// GRID LAYOUT
// ============================================================================
/// Number of ranks in a standard deck.
pub const RANKS: usize = 13;
/// Number of starting-hand buckets: 13 pairs, 78 suited, 78 offsuit.
pub const BUCKETS: usize = RANKS * RANKS;
/// Number of two-card combos in a 52-card deck.
pub const COMBOS: usize = 52 * 51 / 2;
/// Conversion factor between [`Weight`] and [`Percent`].
pub const SCALE: f32 = 100.0;
/// Number of seats that own a range.
pub const SEATS: usize = 2;

// ============================================================================
// DEFAULT TREE CONFIGURATION
// ============================================================================
/// Starting pot, in chips.
pub const STARTING_POT: i32 = 20;
/// Effective stack, in chips.
pub const EFFECTIVE_STACK: i32 = 100;
/// Add an all-in action when the max bet is below this percent of the pot.
pub const ADD_ALLIN_THRESHOLD: f64 = 150.0;
/// Force an all-in when the remaining stack is below this percent of the pot.
pub const FORCE_ALLIN_THRESHOLD: f64 = 20.0;
/// Merge bet sizes closer than this percent of the pot.
pub const MERGING_THRESHOLD: f64 = 10.0;

pub fn weight(percent: Percent) -> Weight {
    percent / SCALE
}
pub fn percent(weight: Weight) -> Percent {
    weight * SCALE
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Writes DEBUG level to `$RANGES_LOG_DIR` (default `logs/`), INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    let dir = std::env::var("RANGES_LOG_DIR").unwrap_or_else(|_| "logs".to_string());
    std::fs::create_dir_all(&dir).expect("create logs directory");
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
        std::fs::File::create(format!("{}/{}.log", dir, time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
