pub mod bucket;
pub use bucket::*;

pub mod grammar;
pub use grammar::*;

pub mod grid;
pub use grid::*;

pub mod notation;

pub mod trim;
pub use trim::*;

pub mod validate;
pub use validate::*;
