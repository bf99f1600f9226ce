pub mod category;
pub use category::*;

pub mod evaluator;
pub use evaluator::*;

pub mod ranking;
pub use ranking::*;

pub mod showdown;
pub use showdown::*;

pub mod verdict;
pub use verdict::*;
