use crate::range::Validation;

/// Every way a range operation can fail, each with a message fit for the user.
#[derive(Debug)]
pub enum Failure {
    /// input was not text; never reaches the grammar
    TypeMismatch { field: String, found: &'static str },
    /// a segment failed the local grammar; never reaches the engine
    GrammarViolation { segment: String },
    /// the engine refused a locally valid string or cell weight
    EngineRejection(String),
    /// a direct edit named a cell outside the 13x13 layout
    Position { row: usize, col: usize },
    /// the engine call itself failed
    Transport(anyhow::Error),
}

impl Failure {
    /// Turns a validation outcome into a result, keeping its details.
    pub fn check(validation: Validation) -> Result<(), Failure> {
        match validation {
            Validation::Valid => Ok(()),
            Validation::GrammarViolation { segment } => Err(Failure::GrammarViolation { segment }),
            Validation::TypeMismatch { field, found } => Err(Failure::TypeMismatch { field, found }),
        }
    }
}

impl From<anyhow::Error> for Failure {
    fn from(e: anyhow::Error) -> Self {
        Failure::Transport(e)
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Failure::TypeMismatch { field, found } => write!(
                f,
                "{}",
                Validation::TypeMismatch {
                    field: field.clone(),
                    found: *found
                }
            ),
            Failure::GrammarViolation { segment } => write!(
                f,
                "{}",
                Validation::GrammarViolation {
                    segment: segment.clone()
                }
            ),
            Failure::EngineRejection(diagnostic) => write!(f, "{}", diagnostic),
            Failure::Position { row, col } => write!(f, "no cell at row {}, col {}", row, col),
            Failure::Transport(e) => write!(f, "engine unavailable: {:#}", e),
        }
    }
}

impl std::error::Error for Failure {}
