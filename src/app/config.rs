use serde::Deserialize;
use serde::Serialize;

/// Tree configuration as the front end edits it.
///
/// Bet-size fields are kept as the user typed them; interpreting them is
/// the engine's job.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub board: Vec<u8>,
    pub starting_pot: i32,
    pub effective_stack: i32,
    pub rake_percent: f64,
    pub rake_cap: f64,
    pub donk_option: bool,
    pub oop_flop_bet: String,
    pub oop_flop_raise: String,
    pub oop_turn_bet: String,
    pub oop_turn_raise: String,
    pub oop_turn_donk: String,
    pub oop_river_bet: String,
    pub oop_river_raise: String,
    pub oop_river_donk: String,
    pub ip_flop_bet: String,
    pub ip_flop_raise: String,
    pub ip_turn_bet: String,
    pub ip_turn_raise: String,
    pub ip_river_bet: String,
    pub ip_river_raise: String,
    pub add_all_in_threshold: f64,
    pub force_all_in_threshold: f64,
    pub merging_threshold: f64,
    pub expected_board_length: usize,
    pub added_lines: String,
    pub removed_lines: String,
}

impl Config {
    /// the configuration a fresh session starts editing
    pub fn new() -> Self {
        Self {
            starting_pot: crate::STARTING_POT,
            effective_stack: crate::EFFECTIVE_STACK,
            add_all_in_threshold: crate::ADD_ALLIN_THRESHOLD,
            force_all_in_threshold: crate::FORCE_ALLIN_THRESHOLD,
            merging_threshold: crate::MERGING_THRESHOLD,
            ..Self::default()
        }
    }
}

/// The working configuration plus the two copies taken from it:
/// `temporary` when a tree is built, `saved` once that tree is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshots {
    pub working: Config,
    pub temporary: Config,
    pub saved: Config,
}

impl Default for Snapshots {
    fn default() -> Self {
        Self {
            working: Config::new(),
            temporary: Config::default(),
            saved: Config::default(),
        }
    }
}

impl Snapshots {
    /// working -> temporary
    pub fn promote_to_temporary(&mut self) {
        self.temporary = self.working.clone();
        log::debug!("configuration promoted to temporary");
    }
    /// temporary -> saved
    pub fn commit_saved(&mut self) {
        self.saved = self.temporary.clone();
        log::debug!("configuration committed");
    }
    /// whether the working copy has drifted from the last committed one
    pub fn is_dirty(&self) -> bool {
        self.working != self.saved
    }
}
