pub mod class;
pub use class::*;

pub mod rank;
pub use rank::*;
